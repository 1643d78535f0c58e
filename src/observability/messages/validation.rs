// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration validation.

use std::fmt::{Display, Formatter};

use super::StructuredLog;

/// Configuration validation failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ConfigValidationFailed<'a> {
    pub error_count: usize,
    pub summary: &'a str,
}

impl Display for ConfigValidationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Configuration invalid ({} problems): {}",
            self.error_count, self.summary
        )
    }
}

impl StructuredLog for ConfigValidationFailed<'_> {
    fn log(&self) {
        tracing::error!(error_count = self.error_count, "{}", self);
    }
}

/// A helper chain entry names an unknown implementation.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct UnknownHelper<'a> {
    pub helper_id: &'a str,
    pub helper: &'a str,
}

impl Display for UnknownHelper<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Helper '{}' references unknown implementation '{}'",
            self.helper_id, self.helper
        )
    }
}

impl StructuredLog for UnknownHelper<'_> {
    fn log(&self) {
        tracing::error!(helper_id = self.helper_id, helper = self.helper, "{}", self);
    }
}

/// Two chain entries share an id.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct DuplicateHelperId<'a> {
    pub helper_id: &'a str,
}

impl Display for DuplicateHelperId<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Duplicate helper ID: '{}'", self.helper_id)
    }
}

impl StructuredLog for DuplicateHelperId<'_> {
    fn log(&self) {
        tracing::error!(helper_id = self.helper_id, "{}", self);
    }
}
