// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde::Deserialize;

use crate::descriptor::{AttributeSpec, HelperDescriptor, InputKind, TargetPredicate};
use crate::errors::ProcessError;
use crate::node::NodeEdit;
use crate::traits::{HelperInput, TagHelper};

const LAZY_LOAD: &str = "lazy-load";
const LAZY_PLACEHOLDER: &str = "lazy-placeholder";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LazyImageOptions {
    pub placeholder: Option<String>,
}

/// `<img lazy-load="true">` - native lazy loading, optionally with a placeholder swap.
pub struct LazyImageHelper {
    descriptor: HelperDescriptor,
    placeholder: Option<String>,
}

impl LazyImageHelper {
    pub fn new() -> Self {
        Self {
            descriptor: HelperDescriptor::new(
                "lazy_image",
                vec![TargetPredicate::tag_with_attribute("img", LAZY_LOAD)],
                vec![
                    AttributeSpec::new(LAZY_LOAD, InputKind::Flag),
                    AttributeSpec::new(LAZY_PLACEHOLDER, InputKind::Text),
                ],
            ),
            placeholder: None,
        }
    }

    /// Placeholder used when the element does not name its own.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn from_options(options: LazyImageOptions) -> Self {
        match options.placeholder.filter(|p| !p.trim().is_empty()) {
            Some(placeholder) => Self::new().with_placeholder(placeholder),
            None => Self::new(),
        }
    }
}

impl Default for LazyImageHelper {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TagHelper for LazyImageHelper {
    fn descriptor(&self) -> &HelperDescriptor {
        &self.descriptor
    }

    async fn transform(&self, input: HelperInput<'_>) -> Result<NodeEdit, ProcessError> {
        if input.inputs.flag(LAZY_LOAD) != Some(true) {
            return Ok(NodeEdit::new());
        }

        let mut edit = NodeEdit::new()
            .set_attr("loading", "lazy")
            .set_attr("decoding", "async");

        let placeholder = input
            .inputs
            .text(LAZY_PLACEHOLDER)
            .or(self.placeholder.as_deref());

        // The swap needs a real source to defer
        if let (Some(placeholder), Some(src)) = (placeholder, input.node.attributes.get("src")) {
            edit = edit
                .set_attr("data-src", src)
                .set_attr("src", placeholder)
                .append_attr("class", "lazyload");
        }
        Ok(edit)
    }
}
