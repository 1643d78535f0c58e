// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Configuration validation for helper chains.
//!
//! # Checks
//!
//! 1. **Non-empty**: at least one helper is declared
//! 2. **Concurrency**: `max_concurrency`, when given, is positive
//! 3. **Uniqueness**: every helper id appears once
//! 4. **Resolution**: every implementation name is known to the factory
//!
//! All checks run and every problem is returned together.
//!
//! # Example
//! ```rust
//! use the_tagsmith::config::{validate_config, Config, HelperConfig};
//! use the_tagsmith::errors::ValidationError;
//!
//! let config = Config {
//!     strict_inputs: false,
//!     max_concurrency: None,
//!     helpers: vec![
//!         HelperConfig::new("gate", "render_gate"),
//!         HelperConfig::new("gate", "lazy_image"),
//!     ],
//! };
//!
//! let errors = validate_config(&config).unwrap_err();
//! assert_eq!(
//!     errors,
//!     vec![ValidationError::DuplicateHelperId { helper_id: "gate".to_string() }]
//! );
//! ```

use std::collections::HashSet;

use crate::config::Config;
use crate::errors::ValidationError;
use crate::helpers::HelperFactory;
use crate::observability::messages::validation::{DuplicateHelperId, UnknownHelper};
use crate::observability::messages::StructuredLog;

/// Validates a configuration before any helper is created.
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.helpers.is_empty() {
        errors.push(ValidationError::EmptyChain);
    }

    if config.max_concurrency == Some(0) {
        errors.push(ValidationError::ZeroConcurrency);
    }

    errors.extend(validate_unique_ids(config));
    errors.extend(validate_implementations(config));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Each duplicated id is reported once, however often it repeats.
fn validate_unique_ids(config: &Config) -> Vec<ValidationError> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut errors = Vec::new();

    for helper in &config.helpers {
        if !seen.insert(helper.id.as_str()) && reported.insert(helper.id.as_str()) {
            DuplicateHelperId {
                helper_id: &helper.id,
            }
            .log();
            errors.push(ValidationError::DuplicateHelperId {
                helper_id: helper.id.clone(),
            });
        }
    }

    errors
}

fn validate_implementations(config: &Config) -> Vec<ValidationError> {
    config
        .helpers
        .iter()
        .filter(|h| !HelperFactory::is_implementation_available(&h.helper))
        .map(|h| {
            UnknownHelper {
                helper_id: &h.id,
                helper: &h.helper,
            }
            .log();
            ValidationError::UnknownHelper {
                helper_id: h.id.clone(),
                helper: h.helper.clone(),
                available: HelperFactory::list_available_implementations(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HelperConfig;

    fn config(helpers: Vec<HelperConfig>) -> Config {
        Config {
            strict_inputs: false,
            max_concurrency: None,
            helpers,
        }
    }

    #[test]
    fn test_validation_table_driven() {
        struct TestCase {
            name: &'static str,
            config: Config,
            expected: Result<(), Vec<ValidationError>>,
        }

        let test_cases = vec![
            TestCase {
                name: "valid chain",
                config: config(vec![
                    HelperConfig::new("gate", "render_gate"),
                    HelperConfig::new("classes", "conditional_class"),
                ]),
                expected: Ok(()),
            },
            TestCase {
                name: "empty chain",
                config: config(vec![]),
                expected: Err(vec![ValidationError::EmptyChain]),
            },
            TestCase {
                name: "zero concurrency",
                config: Config {
                    max_concurrency: Some(0),
                    ..config(vec![HelperConfig::new("w", "widget")])
                },
                expected: Err(vec![ValidationError::ZeroConcurrency]),
            },
            TestCase {
                name: "triplicate id reported once",
                config: config(vec![
                    HelperConfig::new("x", "widget"),
                    HelperConfig::new("x", "excerpt"),
                    HelperConfig::new("x", "json_ld"),
                ]),
                expected: Err(vec![ValidationError::DuplicateHelperId {
                    helper_id: "x".to_string(),
                }]),
            },
            TestCase {
                name: "unknown implementation",
                config: config(vec![HelperConfig::new("m", "marquee")]),
                expected: Err(vec![ValidationError::UnknownHelper {
                    helper_id: "m".to_string(),
                    helper: "marquee".to_string(),
                    available: HelperFactory::list_available_implementations(),
                }]),
            },
        ];

        for tc in test_cases {
            assert_eq!(validate_config(&tc.config), tc.expected, "Failed: {}", tc.name);
        }
    }
}
