// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::config::consts::{TOML_EXTENSION, YAML_EXTENSIONS};
use crate::config::validate_config;
use crate::errors::ConfigError;
use crate::observability::messages::validation::ConfigValidationFailed;
use crate::observability::messages::StructuredLog;

/// Main configuration structure for a helper chain.
///
/// # Fields
/// * `strict_inputs` - Log rejected attribute values at warn instead of debug
/// * `max_concurrency` - Upper bound on nodes processed at once (defaults to available parallelism)
/// * `helpers` - Helpers in the order they apply to each node
///
/// # Example
/// ```yaml
/// strict_inputs: false
/// max_concurrency: 8
/// helpers:
///   - id: gate
///     helper: render_gate
///   - id: lazy
///     helper: lazy_image
///     options:
///       placeholder: /img/blank.gif
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub strict_inputs: bool,
    #[serde(default)]
    pub max_concurrency: Option<usize>,
    #[serde(default)]
    pub helpers: Vec<HelperConfig>,
}

/// One entry in the helper chain.
///
/// # Fields
/// * `id` - Unique name of this entry, used in logs
/// * `helper` - Implementation name known to the helper factory
/// * `options` - Implementation-specific settings; unknown keys are ignored
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HelperConfig {
    pub id: String,
    pub helper: String,
    #[serde(default)]
    pub options: HashMap<String, serde_yaml::Value>,
}

impl HelperConfig {
    pub fn new(id: &str, helper: &str) -> Self {
        Self {
            id: id.to_string(),
            helper: helper.to_string(),
            options: HashMap::new(),
        }
    }

    pub fn with_option(mut self, key: &str, value: impl Into<serde_yaml::Value>) -> Self {
        self.options.insert(key.to_string(), value.into());
        self
    }
}

impl Config {
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

/// Load a config from a YAML or TOML file, chosen by extension
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let read = || {
        fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    };

    if YAML_EXTENSIONS.contains(&extension.as_str()) {
        Config::from_yaml_str(&read()?)
    } else if extension == TOML_EXTENSION {
        Config::from_toml_str(&read()?)
    } else {
        Err(ConfigError::UnsupportedFormat(path.display().to_string()))
    }
}

/// Load and validate a config file
///
/// Every validation problem is reported at once rather than only the first.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;

    if let Err(errors) = validate_config(&cfg) {
        let summary = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        ConfigValidationFailed {
            error_count: errors.len(),
            summary: &summary,
        }
        .log();
        return Err(ConfigError::Validation(errors));
    }

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;
    use std::io::Write;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parse_basic_yaml_config() {
        let yaml = r#"
strict_inputs: true
helpers:
  - id: gate
    helper: render_gate
  - id: lazy
    helper: lazy_image
    options:
      placeholder: /img/blank.gif
"#;

        let cfg = Config::from_yaml_str(yaml).unwrap();
        assert!(cfg.strict_inputs);
        assert_eq!(cfg.max_concurrency, None);
        assert_eq!(cfg.helpers.len(), 2);
        assert_eq!(cfg.helpers[1].helper, "lazy_image");
        assert_eq!(
            cfg.helpers[1].options.get("placeholder"),
            Some(&serde_yaml::Value::from("/img/blank.gif"))
        );
    }

    #[test]
    fn parse_basic_toml_config() {
        let toml = r#"
max_concurrency = 4

[[helpers]]
id = "time"
helper = "relative_time"

[helpers.options]
title_format = "%d %b %Y"
"#;

        let cfg = Config::from_toml_str(toml).unwrap();
        assert!(!cfg.strict_inputs);
        assert_eq!(cfg.max_concurrency, Some(4));
        assert_eq!(cfg.helpers[0].id, "time");
        assert_eq!(
            cfg.helpers[0].options.get("title_format"),
            Some(&serde_yaml::Value::from("%d %b %Y"))
        );
    }

    #[test]
    fn test_load_by_extension_table_driven() {
        struct TestCase {
            name: &'static str,
            suffix: &'static str,
            content: &'static str,
            ok: bool,
        }

        let test_cases = vec![
            TestCase {
                name: "yaml",
                suffix: ".yaml",
                content: "helpers:\n  - id: a\n    helper: widget\n",
                ok: true,
            },
            TestCase {
                name: "yml",
                suffix: ".YML",
                content: "helpers: []\n",
                ok: true,
            },
            TestCase {
                name: "toml",
                suffix: ".toml",
                content: "[[helpers]]\nid = \"a\"\nhelper = \"widget\"\n",
                ok: true,
            },
            TestCase {
                name: "json is unsupported",
                suffix: ".json",
                content: "{}",
                ok: false,
            },
            TestCase {
                name: "broken yaml",
                suffix: ".yaml",
                content: "helpers: [",
                ok: false,
            },
        ];

        for tc in test_cases {
            let file = write_temp(tc.suffix, tc.content);
            assert_eq!(load_config(file.path()).is_ok(), tc.ok, "Failed: {}", tc.name);
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_config("/definitely/not/here.yaml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_load_and_validate_reports_all_errors() {
        let file = write_temp(
            ".yaml",
            r#"
max_concurrency: 0
helpers:
  - id: a
    helper: widget
  - id: a
    helper: marquee
"#,
        );

        match load_and_validate_config(file.path()) {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 3);
                assert!(errors.contains(&ValidationError::ZeroConcurrency));
                assert!(errors.contains(&ValidationError::DuplicateHelperId {
                    helper_id: "a".to_string()
                }));
            }
            other => panic!("expected validation errors, got {:?}", other),
        }
    }
}
