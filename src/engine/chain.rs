// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Ordered helper chains and concurrent processing of independent nodes.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Semaphore;

use crate::engine::{AnnotationProcessor, RenderContext};
use crate::errors::ProcessError;
use crate::node::Node;
use crate::observability::messages::chain::{BatchCompleted, BatchStarted, NodeFailed};
use crate::observability::messages::StructuredLog;
use crate::traits::{ContentResolver, StaticContent, TagHelper};

/// Number of nodes processed at once when nothing is configured.
pub fn default_concurrency() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

/// A node waiting to be processed together with its content callback.
pub struct PendingNode {
    pub node: Node,
    pub content: Arc<dyn ContentResolver>,
}

impl PendingNode {
    /// Use the node's current content as its resolved child content.
    pub fn new(node: Node) -> Self {
        let content = Arc::new(StaticContent::new(node.content.clone()));
        Self { node, content }
    }

    pub fn with_resolver(node: Node, content: Arc<dyn ContentResolver>) -> Self {
        Self { node, content }
    }
}

struct ChainEntry {
    id: String,
    helper: Arc<dyn TagHelper>,
}

/// Helpers in declared order.
///
/// For each node every helper whose descriptor matches the node *as left by
/// the previous helper* runs once, so a tag rename by an early helper is
/// visible to later predicates. Cloning is cheap; the helper list is shared.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use the_tagsmith::engine::{HelperChain, RenderContext};
/// use the_tagsmith::helpers::{ConditionalClassHelper, LazyImageHelper};
/// use the_tagsmith::node::{render, Node};
/// use the_tagsmith::traits::StaticContent;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let chain = HelperChain::new()
///     .with_helper("classes", Arc::new(ConditionalClassHelper::new()))
///     .with_helper("lazy", Arc::new(LazyImageHelper::new()));
///
/// let node = Node::new("img")
///     .with_attr("src", "a.png")
///     .with_attr("class-if", "true:hero")
///     .with_attr("lazy-load", "true");
///
/// let node = chain.run(node, &RenderContext::new(), &StaticContent::default()).await?;
/// assert_eq!(
///     render(&node),
///     r#"<img src="a.png" class="hero" loading="lazy" decoding="async">"#
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct HelperChain {
    entries: Arc<Vec<ChainEntry>>,
    max_concurrency: usize,
}

impl HelperChain {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Vec::new()),
            max_concurrency: default_concurrency(),
        }
    }

    /// Append a helper to the end of the chain.
    pub fn with_helper(mut self, id: impl Into<String>, helper: Arc<dyn TagHelper>) -> Self {
        let entry = ChainEntry {
            id: id.into(),
            helper,
        };
        match Arc::get_mut(&mut self.entries) {
            Some(entries) => entries.push(entry),
            None => {
                let mut entries: Vec<ChainEntry> = self
                    .entries
                    .iter()
                    .map(|e| ChainEntry {
                        id: e.id.clone(),
                        helper: Arc::clone(&e.helper),
                    })
                    .collect();
                entries.push(entry);
                self.entries = Arc::new(entries);
            }
        }
        self
    }

    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    pub fn max_concurrency(&self) -> usize {
        self.max_concurrency
    }

    pub fn ids(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run every matching helper over `node`, in order.
    pub async fn run(
        &self,
        mut node: Node,
        context: &RenderContext,
        content: &dyn ContentResolver,
    ) -> Result<Node, ProcessError> {
        for entry in self.entries.iter() {
            if !entry.helper.descriptor().matches(&node) {
                continue;
            }
            node = AnnotationProcessor::process(
                Some(node),
                Some(entry.helper.as_ref()),
                context,
                content,
            )
            .await?;
        }
        Ok(node)
    }

    /// Process independent nodes concurrently.
    ///
    /// Results come back in input order. A failing node never affects its
    /// siblings. At most `max_concurrency` nodes are in flight.
    pub async fn run_all(
        &self,
        nodes: Vec<PendingNode>,
        context: &RenderContext,
    ) -> Vec<Result<Node, ProcessError>> {
        let node_count = nodes.len();
        BatchStarted {
            node_count,
            max_concurrency: self.max_concurrency,
        }
        .log();
        let start_time = Instant::now();

        let semaphore = Arc::new(Semaphore::new(self.max_concurrency));
        let mut tasks = Vec::with_capacity(node_count);

        for pending in nodes {
            let chain = self.clone();
            let context = context.clone();
            let semaphore = Arc::clone(&semaphore);
            tasks.push(tokio::spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .map_err(|e| ProcessError::TaskFailed(e.to_string()))?;
                chain
                    .run(pending.node, &context, pending.content.as_ref())
                    .await
            }));
        }

        let mut results = Vec::with_capacity(node_count);
        for (index, task) in tasks.into_iter().enumerate() {
            let result = match task.await {
                Ok(result) => result,
                Err(join_error) => Err(ProcessError::TaskFailed(join_error.to_string())),
            };
            if let Err(error) = &result {
                NodeFailed { index, error }.log();
            }
            results.push(result);
        }

        BatchCompleted {
            node_count,
            failed: results.iter().filter(|r| r.is_err()).count(),
            duration: start_time.elapsed(),
        }
        .log();

        results
    }
}

impl Default for HelperChain {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HelperChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HelperChain")
            .field("helper_ids", &self.ids())
            .field("max_concurrency", &self.max_concurrency)
            .finish()
    }
}
