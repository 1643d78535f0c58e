// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Problems found while validating a helper chain configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Two chain entries share an id
    DuplicateHelperId {
        helper_id: String,
    },
    /// A chain entry names a helper the factory does not know
    UnknownHelper {
        helper_id: String,
        helper: String,
        available: Vec<&'static str>,
    },
    /// The chain has no helpers at all
    EmptyChain,
    /// `max_concurrency` was set to zero
    ZeroConcurrency,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateHelperId { helper_id } => {
                write!(f, "Duplicate helper ID: '{}'", helper_id)
            }
            ValidationError::UnknownHelper {
                helper_id,
                helper,
                available,
            } => {
                write!(
                    f,
                    "Helper '{}' uses unknown implementation '{}' (available: {})",
                    helper_id,
                    helper,
                    available.join(", ")
                )
            }
            ValidationError::EmptyChain => write!(f, "Configuration declares no helpers"),
            ValidationError::ZeroConcurrency => {
                write!(f, "max_concurrency must be greater than zero")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors from loading a configuration file and building a chain from it
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported config format '{0}' (expected .yaml, .yml or .toml)")]
    UnsupportedFormat(String),

    #[error("config validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    #[error("failed to create helper '{helper_id}': {reason}")]
    HelperCreation { helper_id: String, reason: String },
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
