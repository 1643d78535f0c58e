// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for a helper running against one node.

use std::fmt::{Display, Formatter};
use std::time::Duration;

use tracing::Span;

use super::StructuredLog;

/// Helper transformation started.
///
/// # Log Level
/// `debug!` - One per helper per node
pub struct HelperStarted<'a> {
    pub helper: &'a str,
    pub tag: &'a str,
    pub attribute_count: usize,
}

impl Display for HelperStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Helper '{}' started on <{}> with {} attributes",
            self.helper, self.tag, self.attribute_count
        )
    }
}

impl HelperStarted<'_> {
    /// Span covering the transform, carrying helper and tag.
    pub fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::DEBUG,
            "helper",
            name = name,
            helper = self.helper,
            tag = self.tag,
        )
    }
}

impl StructuredLog for HelperStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            helper = self.helper,
            tag = self.tag,
            attribute_count = self.attribute_count,
            "{}", self
        );
    }
}

/// Helper transformation applied.
///
/// # Log Level
/// `debug!` - One per helper per node
pub struct HelperCompleted<'a> {
    pub helper: &'a str,
    pub tag: &'a str,
    pub attribute_ops: usize,
    pub fragments: usize,
    pub suppressed: bool,
    pub duration: Duration,
}

impl Display for HelperCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Helper '{}' completed on <{}>: attribute_ops={}, fragments={}, suppressed={}, duration={:?}",
            self.helper, self.tag, self.attribute_ops, self.fragments, self.suppressed, self.duration
        )
    }
}

impl StructuredLog for HelperCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            helper = self.helper,
            tag = self.tag,
            attribute_ops = self.attribute_ops,
            fragments = self.fragments,
            suppressed = self.suppressed,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }
}

/// Helper not run because an upstream step suppressed the node.
///
/// # Log Level
/// `trace!` - Expected and frequent
pub struct HelperSkippedSuppressed<'a> {
    pub helper: &'a str,
    pub tag: &'a str,
}

impl Display for HelperSkippedSuppressed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Helper '{}' skipped: <{}> is suppressed",
            self.helper, self.tag
        )
    }
}

impl StructuredLog for HelperSkippedSuppressed<'_> {
    fn log(&self) {
        tracing::trace!(helper = self.helper, tag = self.tag, "{}", self);
    }
}

/// Helper abandoned because the render was cancelled.
///
/// # Log Level
/// `warn!` - Partial render
pub struct HelperCancelled<'a> {
    pub helper: &'a str,
    pub tag: &'a str,
}

impl Display for HelperCancelled<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Helper '{}' cancelled on <{}>; no edit applied",
            self.helper, self.tag
        )
    }
}

impl StructuredLog for HelperCancelled<'_> {
    fn log(&self) {
        tracing::warn!(helper = self.helper, tag = self.tag, "{}", self);
    }
}

/// Helper produced no feature because a required attribute was missing or invalid.
///
/// # Log Level
/// `debug!` - Authoring problem, not user-visible
pub struct RequiredInputMissing<'a> {
    pub helper: &'a str,
    pub attribute: &'a str,
}

impl Display for RequiredInputMissing<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Helper '{}' gave up: required attribute '{}' missing or invalid",
            self.helper, self.attribute
        )
    }
}

impl StructuredLog for RequiredInputMissing<'_> {
    fn log(&self) {
        tracing::debug!(helper = self.helper, attribute = self.attribute, "{}", self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_display() {
        let msg = RequiredInputMissing {
            helper: "widget",
            attribute: "renderer",
        };
        assert_eq!(
            msg.to_string(),
            "Helper 'widget' gave up: required attribute 'renderer' missing or invalid"
        );

        let msg = HelperSkippedSuppressed {
            helper: "lazy_image",
            tag: "img",
        };
        assert_eq!(msg.to_string(), "Helper 'lazy_image' skipped: <img> is suppressed");
    }
    #[test]
    fn test_started_span_carries_helper() {
        let logs = crate::helpers::stub::LogCapture::default();
        let _guard = tracing::subscriber::set_default(logs.subscriber());

        let msg = HelperStarted {
            helper: "excerpt",
            tag: "p",
            attribute_count: 1,
        };
        let span = msg.span("transform");
        span.in_scope(|| RequiredInputMissing {
            helper: "excerpt",
            attribute: "excerpt-words",
        }
        .log());

        assert_eq!(span.metadata().map(|m| m.name()), Some("helper"));
        let out = logs.contents();
        assert!(out.contains("helper{"));
        assert!(out.contains("tag=\"p\""));
        assert!(out.contains("required attribute 'excerpt-words'"));
    }
}
