// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::Config;
use crate::engine::{HelperChain, RenderContext};
use crate::errors::ConfigError;
use crate::helpers::HelperFactory;
use crate::observability::messages::chain::ChainBuilt;
use crate::observability::messages::StructuredLog;

/// Render-wide settings carried by a configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSettings {
    pub strict_inputs: bool,
}

impl RenderSettings {
    /// A fresh render context with these settings applied.
    pub fn context(&self) -> RenderContext {
        RenderContext::new().with_strict_inputs(self.strict_inputs)
    }
}

/// Helper chain builder - turns a configuration into a ready-to-run chain.
///
/// # Example
/// ```
/// use the_tagsmith::config::{ChainBuilder, Config, HelperConfig};
///
/// let config = Config {
///     strict_inputs: true,
///     max_concurrency: Some(2),
///     helpers: vec![
///         HelperConfig::new("gate", "render_gate"),
///         HelperConfig::new("lazy", "lazy_image").with_option("placeholder", "/blank.gif"),
///     ],
/// };
///
/// let (chain, settings) = ChainBuilder::from_config(&config).unwrap();
/// assert_eq!(chain.ids(), vec!["gate", "lazy"]);
/// assert_eq!(chain.max_concurrency(), 2);
/// assert!(settings.strict_inputs);
/// ```
pub struct ChainBuilder;

impl ChainBuilder {
    /// Build the chain in declared order.
    ///
    /// Does not validate; run [`validate_config`](crate::config::validate_config)
    /// first (or load with `load_and_validate_config`) to get every problem at once.
    pub fn from_config(cfg: &Config) -> Result<(HelperChain, RenderSettings), ConfigError> {
        let mut chain = HelperChain::new();
        if let Some(max_concurrency) = cfg.max_concurrency {
            chain = chain.with_max_concurrency(max_concurrency);
        }

        for entry in &cfg.helpers {
            let helper = HelperFactory::create_helper(entry).map_err(|reason| {
                ConfigError::HelperCreation {
                    helper_id: entry.id.clone(),
                    reason,
                }
            })?;
            chain = chain.with_helper(entry.id.as_str(), helper);
        }

        let settings = RenderSettings {
            strict_inputs: cfg.strict_inputs,
        };

        ChainBuilt {
            helper_ids: &chain.ids(),
            strict_inputs: settings.strict_inputs,
        }
        .log();

        Ok((chain, settings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HelperConfig;

    #[test]
    fn test_helper_creation_failure_names_entry() {
        let config = Config {
            helpers: vec![
                HelperConfig::new("ok", "widget"),
                HelperConfig::new("time", "relative_time").with_option("title_format", "%Q%"),
            ],
            ..Config::default()
        };

        match ChainBuilder::from_config(&config) {
            Err(ConfigError::HelperCreation { helper_id, .. }) => assert_eq!(helper_id, "time"),
            other => panic!("expected helper creation failure, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_settings_flow_into_context() {
        let settings = RenderSettings { strict_inputs: true };
        assert!(settings.context().strict_inputs);
        assert!(!RenderSettings::default().context().strict_inputs);
    }
}
