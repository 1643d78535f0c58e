// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde_json::Value;

use crate::descriptor::{AttributeSpec, HelperDescriptor, InputKind, TargetPredicate};
use crate::errors::{InputError, ProcessError};
use crate::helpers::assets::{element_id, script_json, WIDGET_MOUNT};
use crate::node::render::escape_attr;
use crate::node::{FragmentPosition, NodeEdit};
use crate::observability::messages::helper::RequiredInputMissing;
use crate::observability::messages::input::InputRejected;
use crate::observability::messages::StructuredLog;
use crate::traits::{HelperInput, TagHelper};

const RENDERER: &str = "renderer";
const WIDGET_ID: &str = "widget-id";
const WIDGET_CONFIG: &str = "widget-config";
const WIDGET_SRC: &str = "widget-src";
const WIDGET_DATA: &str = "widget-data";

/// `data-` attribute name for a `widget-data` key, if the key is a plain token.
fn data_attribute_name(key: &str) -> Option<String> {
    let key = key.to_ascii_lowercase();
    key.bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        .then(|| format!("data-{}", key))
}

/// `<widget renderer="...">` - mount point for a client-side renderer.
///
/// The element becomes a `div` carrying its id, renderer name and config. The
/// renderer's bundle (`widget-src`) loads before the element and a mount
/// script runs after it. `widget-data="k:v;..."` adds `data-k` attributes.
pub struct WidgetHelper {
    descriptor: HelperDescriptor,
}

impl WidgetHelper {
    pub fn new() -> Self {
        Self {
            descriptor: HelperDescriptor::new(
                "widget",
                vec![TargetPredicate::tag_with_attribute("widget", RENDERER)],
                vec![
                    AttributeSpec::new(RENDERER, InputKind::Text),
                    AttributeSpec::new(WIDGET_ID, InputKind::Text),
                    AttributeSpec::new(WIDGET_CONFIG, InputKind::Json),
                    AttributeSpec::new(WIDGET_SRC, InputKind::Text),
                    AttributeSpec::new(WIDGET_DATA, InputKind::Pairs),
                ],
            ),
        }
    }
}

impl Default for WidgetHelper {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TagHelper for WidgetHelper {
    fn descriptor(&self) -> &HelperDescriptor {
        &self.descriptor
    }

    async fn transform(&self, input: HelperInput<'_>) -> Result<NodeEdit, ProcessError> {
        let inputs = input.inputs;
        let Some(renderer) = inputs.text(RENDERER) else {
            RequiredInputMissing {
                helper: self.descriptor.name,
                attribute: RENDERER,
            }
            .log();
            return Ok(NodeEdit::suppressed());
        };

        let id = match inputs.text(WIDGET_ID) {
            Some(id) => id.to_string(),
            None => element_id(input.node, "widget"),
        };
        let config = inputs.json(WIDGET_CONFIG).cloned().unwrap_or(Value::Null);

        let mut edit = NodeEdit::new()
            .rename("div")
            .set_attr("id", id.as_str())
            .set_attr("data-widget", renderer);

        if !config.is_null() {
            edit = edit.set_attr("data-widget-config", config.to_string());
        }

        for (key, value) in inputs.pairs(WIDGET_DATA).unwrap_or_default() {
            match data_attribute_name(key) {
                Some(name) => edit = edit.set_attr(name, value.as_str()),
                None => InputRejected {
                    helper: self.descriptor.name,
                    tag: input.node.display_tag(),
                    error: &InputError::Unparseable {
                        attribute: WIDGET_DATA.to_string(),
                        value: key.clone(),
                        expected: "attribute name token",
                    },
                    strict: input.context.strict_inputs,
                }
                .log(),
            }
        }

        if let Some(src) = inputs.text(WIDGET_SRC) {
            edit = edit.fragment(
                FragmentPosition::PreElement,
                format!("<script src=\"{}\" defer></script>", escape_attr(src)),
            );
        }

        let mount = WIDGET_MOUNT.invoke(&[
            script_json(&Value::String(id)),
            script_json(&Value::String(renderer.to_string())),
            script_json(&config),
        ]);
        Ok(edit.fragment(FragmentPosition::PostElement, mount))
    }
}
