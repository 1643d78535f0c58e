// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Single-pass application of one helper to one node.
//!
//! # Execution Flow
//!
//! 1. **Guard**: a missing node or helper is an `InvalidArgument`
//! 2. **Suppression**: a suppressed node is returned untouched
//! 3. **Parse**: recognized attributes become `ParsedInputs`; rejected values
//!    are logged and otherwise ignored
//! 4. **Transform**: the helper produces a `NodeEdit`, racing render cancellation
//! 5. **Apply**: tag, attribute upserts, content, fragments
//! 6. **Strip**: every recognized attribute is removed, used or not

use std::time::Instant;

use tracing::Instrument;

use crate::descriptor::parse_inputs;
use crate::engine::RenderContext;
use crate::errors::ProcessError;
use crate::node::Node;
use crate::observability::messages::helper::{
    HelperCancelled, HelperCompleted, HelperSkippedSuppressed, HelperStarted,
};
use crate::observability::messages::input::InputRejected;
use crate::observability::messages::StructuredLog;
use crate::traits::{ContentResolver, HelperInput, TagHelper};

/// Applies one helper to one node.
///
/// Stateless: nothing is cached between calls and independent nodes can be
/// processed concurrently without coordination.
///
/// # Example
/// ```
/// use the_tagsmith::engine::{AnnotationProcessor, RenderContext};
/// use the_tagsmith::helpers::LazyImageHelper;
/// use the_tagsmith::node::Node;
/// use the_tagsmith::traits::StaticContent;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let helper = LazyImageHelper::new();
/// let node = Node::new("img").with_attr("src", "a.png").with_attr("lazy-load", "true");
///
/// let node = AnnotationProcessor::process(
///     Some(node),
///     Some(&helper),
///     &RenderContext::new(),
///     &StaticContent::default(),
/// )
/// .await?;
///
/// assert_eq!(node.attributes.get("loading"), Some("lazy"));
/// assert!(!node.attributes.contains("lazy-load"));
/// # Ok(())
/// # }
/// ```
pub struct AnnotationProcessor;

impl AnnotationProcessor {
    pub async fn process(
        node: Option<Node>,
        helper: Option<&dyn TagHelper>,
        context: &RenderContext,
        content: &dyn ContentResolver,
    ) -> Result<Node, ProcessError> {
        let mut node = node.ok_or(ProcessError::InvalidArgument("node"))?;
        let helper = helper.ok_or(ProcessError::InvalidArgument("helper"))?;
        let descriptor = helper.descriptor();
        let tag = node.display_tag().to_string();

        if node.suppressed {
            HelperSkippedSuppressed {
                helper: descriptor.name,
                tag: &tag,
            }
            .log();
            return Ok(node);
        }

        let inputs = parse_inputs(descriptor, &node);
        for error in inputs.rejected() {
            InputRejected {
                helper: descriptor.name,
                tag: &tag,
                error,
                strict: context.strict_inputs,
            }
            .log();
        }

        let start_msg = HelperStarted {
            helper: descriptor.name,
            tag: &tag,
            attribute_count: node.attributes.len(),
        };
        start_msg.log();
        let span = start_msg.span("transform");
        let start_time = Instant::now();

        let cancelled = || {
            HelperCancelled {
                helper: descriptor.name,
                tag: &tag,
            }
            .log();
            ProcessError::Cancelled {
                helper: descriptor.name.to_string(),
            }
        };

        let input = HelperInput {
            helper: descriptor.name,
            node: &node,
            inputs: &inputs,
            context,
            content,
        };

        let edit = tokio::select! {
            biased;
            _ = context.cancellation.cancelled() => return Err(cancelled()),
            edit = helper.transform(input).instrument(span) => edit?,
        };

        // A render cancelled while the edit was being produced gets nothing applied.
        if context.cancellation.is_cancelled() {
            return Err(cancelled());
        }

        let completed = HelperCompleted {
            helper: descriptor.name,
            tag: &tag,
            attribute_ops: edit.attribute_ops.len(),
            fragments: edit.fragments.len(),
            suppressed: edit.suppress,
            duration: start_time.elapsed(),
        };

        edit.apply_to(&mut node);
        for name in descriptor.recognized_names() {
            node.attributes.remove(name);
        }

        completed.log();
        Ok(node)
    }
}
