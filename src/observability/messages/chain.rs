// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for helper chains and node batches.

use std::fmt::{Display, Formatter};
use std::time::Duration;

use super::StructuredLog;

/// Helper chain built from configuration.
///
/// # Log Level
/// `info!` - Startup event
pub struct ChainBuilt<'a> {
    pub helper_ids: &'a [String],
    pub strict_inputs: bool,
}

impl Display for ChainBuilt<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Helper chain built with {} helpers: [{}] (strict_inputs={})",
            self.helper_ids.len(),
            self.helper_ids.join(", "),
            self.strict_inputs
        )
    }
}

impl StructuredLog for ChainBuilt<'_> {
    fn log(&self) {
        tracing::info!(
            helper_count = self.helper_ids.len(),
            strict_inputs = self.strict_inputs,
            "{}", self
        );
    }
}

/// A batch of independent nodes started processing.
///
/// # Log Level
/// `info!` - One per render pass
pub struct BatchStarted {
    pub node_count: usize,
    pub max_concurrency: usize,
}

impl Display for BatchStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processing {} nodes with max_concurrency={}",
            self.node_count, self.max_concurrency
        )
    }
}

impl StructuredLog for BatchStarted {
    fn log(&self) {
        tracing::info!(
            node_count = self.node_count,
            max_concurrency = self.max_concurrency,
            "{}", self
        );
    }
}

/// A batch of nodes finished.
///
/// # Log Level
/// `info!` - One per render pass
pub struct BatchCompleted {
    pub node_count: usize,
    pub failed: usize,
    pub duration: Duration,
}

impl Display for BatchCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processed {} nodes ({} failed) in {:?}",
            self.node_count, self.failed, self.duration
        )
    }
}

impl StructuredLog for BatchCompleted {
    fn log(&self) {
        tracing::info!(
            node_count = self.node_count,
            failed = self.failed,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }
}

/// One node of a batch failed; its siblings are unaffected.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct NodeFailed<'a> {
    pub index: usize,
    pub error: &'a dyn std::error::Error,
}

impl Display for NodeFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Node #{} failed: {}", self.index, self.error)
    }
}

impl StructuredLog for NodeFailed<'_> {
    fn log(&self) {
        tracing::error!(
            index = self.index,
            error = %self.error,
            "{}", self
        );
    }
}
