// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// A recognized attribute whose value does not fit its grammar.
///
/// Never propagated: the value is treated as absent and the error is kept on
/// the parsed inputs for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("attribute '{attribute}' value {value:?} is not a valid {expected}")]
    Unparseable {
        attribute: String,
        value: String,
        expected: &'static str,
    },
}

impl InputError {
    pub fn attribute(&self) -> &str {
        match self {
            InputError::Unparseable { attribute, .. } => attribute,
        }
    }
}
