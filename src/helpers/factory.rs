// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::*;
use crate::config::HelperConfig;
use crate::traits::TagHelper;

/// Factory for the helpers that ship with this crate.
pub struct HelperFactory;

/// Decode a helper's `options` table. Unknown keys are ignored.
fn options<T: DeserializeOwned>(config: &HelperConfig) -> Result<T, String> {
    let mapping: serde_yaml::Mapping = config
        .options
        .iter()
        .map(|(k, v)| (serde_yaml::Value::String(k.clone()), v.clone()))
        .collect();
    serde_yaml::from_value(serde_yaml::Value::Mapping(mapping))
        .map_err(|e| format!("Invalid options for helper '{}': {}", config.id, e))
}

impl HelperFactory {
    /// Create a helper instance from configuration
    ///
    /// The `helper` field selects the implementation:
    /// - "render_gate" -> RenderGateHelper
    /// - "conditional_class" -> ConditionalClassHelper
    /// - "relative_time" -> RelativeTimeHelper (option `title_format`)
    /// - "lazy_image" -> LazyImageHelper (option `placeholder`)
    /// - "resource_hint" -> ResourceHintHelper
    /// - "seo_meta" -> SeoMetaHelper (option `site_name`)
    /// - "json_ld" -> JsonLdHelper (option `context`)
    /// - "widget" -> WidgetHelper
    /// - "virtual_scroll" -> VirtualScrollHelper
    /// - "scroll_reveal" -> ScrollRevealHelper
    /// - "excerpt" -> ExcerptHelper
    pub fn create_helper(config: &HelperConfig) -> Result<Arc<dyn TagHelper>, String> {
        match config.helper.as_str() {
            "render_gate" => Ok(Arc::new(RenderGateHelper::new())),
            "conditional_class" => Ok(Arc::new(ConditionalClassHelper::new())),
            "relative_time" => Ok(Arc::new(RelativeTimeHelper::from_options(options(config)?)?)),
            "lazy_image" => Ok(Arc::new(LazyImageHelper::from_options(options(config)?))),
            "resource_hint" => Ok(Arc::new(ResourceHintHelper::new())),
            "seo_meta" => Ok(Arc::new(SeoMetaHelper::from_options(options(config)?))),
            "json_ld" => Ok(Arc::new(JsonLdHelper::from_options(options(config)?))),
            "widget" => Ok(Arc::new(WidgetHelper::new())),
            "virtual_scroll" => Ok(Arc::new(VirtualScrollHelper::new())),
            "scroll_reveal" => Ok(Arc::new(ScrollRevealHelper::new())),
            "excerpt" => Ok(Arc::new(ExcerptHelper::new())),
            other => Err(format!("Unknown helper implementation: '{}'", other)),
        }
    }

    /// List all available helper implementations
    pub fn list_available_implementations() -> Vec<&'static str> {
        vec![
            "render_gate",
            "conditional_class",
            "relative_time",
            "lazy_image",
            "resource_hint",
            "seo_meta",
            "json_ld",
            "widget",
            "virtual_scroll",
            "scroll_reveal",
            "excerpt",
        ]
    }

    /// Check if an implementation is available
    pub fn is_implementation_available(helper: &str) -> bool {
        Self::list_available_implementations().contains(&helper)
    }
}
