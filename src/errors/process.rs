// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors that end a single node's transformation.
//!
//! None of these reach the end user directly; the host decides whether a
//! failed node aborts the whole render or is isolated. Sibling nodes are never
//! affected.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessError {
    /// A required collaborator (node or helper) was not supplied.
    #[error("invalid argument: {0} is required")]
    InvalidArgument(&'static str),

    /// The render was cancelled before the helper's edit could be applied.
    #[error("render cancelled while helper '{helper}' was running")]
    Cancelled { helper: String },

    /// The host could not produce the element's child content.
    #[error("helper '{helper}' could not resolve child content: {reason}")]
    ContentResolution { helper: String, reason: String },

    /// The task processing a node panicked or was aborted.
    #[error("node task failed: {0}")]
    TaskFailed(String),
}
