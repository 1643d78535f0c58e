// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use chrono::{DateTime, Utc};
use tokio_util::sync::CancellationToken;

/// Per-render inputs shared read-only by every helper.
///
/// Cloned into each node's task; the cancellation token is the host's
/// overall render cancellation.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Reference instant for relative time labels.
    pub now: DateTime<Utc>,
    /// Roles of the principal the page is rendered for.
    pub roles: Vec<String>,
    pub cancellation: CancellationToken,
    /// Log rejected attribute values at warn instead of debug.
    pub strict_inputs: bool,
}

impl RenderContext {
    pub fn new() -> Self {
        Self {
            now: Utc::now(),
            roles: Vec::new(),
            cancellation: CancellationToken::new(),
            strict_inputs: false,
        }
    }

    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_cancellation(mut self, cancellation: CancellationToken) -> Self {
        self.cancellation = cancellation;
        self
    }

    pub fn with_strict_inputs(mut self, strict: bool) -> Self {
        self.strict_inputs = strict;
        self
    }

    /// Case-insensitive role membership.
    pub fn has_any_role(&self, wanted: &[String]) -> bool {
        wanted
            .iter()
            .any(|w| self.roles.iter().any(|r| r.eq_ignore_ascii_case(w)))
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}
