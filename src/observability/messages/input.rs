// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for recognized attribute values that failed to parse.

use std::fmt::{Display, Formatter};

use super::StructuredLog;
use crate::errors::InputError;

/// A recognized attribute value was ignored.
///
/// # Log Level
/// `debug!` by default, `warn!` when strict input diagnostics are enabled.
/// The value is never surfaced to the end user either way.
pub struct InputRejected<'a> {
    pub helper: &'a str,
    pub tag: &'a str,
    pub error: &'a InputError,
    pub strict: bool,
}

impl Display for InputRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Helper '{}' ignored input on <{}>: {}",
            self.helper, self.tag, self.error
        )
    }
}

impl StructuredLog for InputRejected<'_> {
    fn log(&self) {
        if self.strict {
            tracing::warn!(
                helper = self.helper,
                tag = self.tag,
                attribute = self.error.attribute(),
                "{}", self
            );
        } else {
            tracing::debug!(
                helper = self.helper,
                tag = self.tag,
                attribute = self.error.attribute(),
                "{}", self
            );
        }
    }
}
