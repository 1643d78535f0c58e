// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::descriptor::{AttributeSpec, HelperDescriptor, InputKind, TargetPredicate};
use crate::errors::ProcessError;
use crate::helpers::assets::{element_id, script_json, VIRTUAL_SCROLL};
use crate::node::{FragmentPosition, NodeEdit};
use crate::observability::messages::helper::RequiredInputMissing;
use crate::observability::messages::StructuredLog;
use crate::traits::{HelperInput, TagHelper};

const VIRTUAL_SCROLL_ATTR: &str = "virtual-scroll";
const ITEM_HEIGHT: &str = "item-height";
const BUFFER_SIZE: &str = "buffer-size";
const ITEMS_SOURCE: &str = "items-source";

pub const DEFAULT_BUFFER_SIZE: i64 = 5;

/// `virtual-scroll="true"` on a list container - windowed rendering of long lists.
///
/// Requires a positive `item-height`; without one the element renders as a
/// plain container.
pub struct VirtualScrollHelper {
    descriptor: HelperDescriptor,
}

impl VirtualScrollHelper {
    pub fn new() -> Self {
        Self {
            descriptor: HelperDescriptor::new(
                "virtual_scroll",
                vec![TargetPredicate::attribute(VIRTUAL_SCROLL_ATTR)],
                vec![
                    AttributeSpec::new(VIRTUAL_SCROLL_ATTR, InputKind::Flag),
                    AttributeSpec::new(ITEM_HEIGHT, InputKind::Integer),
                    AttributeSpec::new(BUFFER_SIZE, InputKind::Integer),
                    AttributeSpec::new(ITEMS_SOURCE, InputKind::Text),
                ],
            ),
        }
    }
}

impl Default for VirtualScrollHelper {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TagHelper for VirtualScrollHelper {
    fn descriptor(&self) -> &HelperDescriptor {
        &self.descriptor
    }

    async fn transform(&self, input: HelperInput<'_>) -> Result<NodeEdit, ProcessError> {
        let inputs = input.inputs;
        if inputs.flag(VIRTUAL_SCROLL_ATTR) != Some(true) {
            return Ok(NodeEdit::new());
        }

        let Some(item_height) = inputs.integer(ITEM_HEIGHT).filter(|h| *h > 0) else {
            RequiredInputMissing {
                helper: self.descriptor.name,
                attribute: ITEM_HEIGHT,
            }
            .log();
            return Ok(NodeEdit::new());
        };
        let buffer_size = inputs
            .integer(BUFFER_SIZE)
            .filter(|b| *b >= 0)
            .unwrap_or(DEFAULT_BUFFER_SIZE);
        let items_source = inputs.text(ITEMS_SOURCE);
        let id = element_id(input.node, "vscroll");

        let mut edit = NodeEdit::new()
            .set_attr("id", id.as_str())
            .append_attr("class", "virtual-scroll")
            .set_attr("data-item-height", item_height.to_string())
            .set_attr("data-buffer-size", buffer_size.to_string());
        if let Some(source) = items_source {
            edit = edit.set_attr("data-items-source", source);
        }

        let options = json!({
            "itemHeight": item_height,
            "bufferSize": buffer_size,
            "itemsSource": items_source,
        });
        let script = VIRTUAL_SCROLL.invoke(&[script_json(&Value::String(id)), script_json(&options)]);
        Ok(edit.fragment(FragmentPosition::PostElement, script))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{AnnotationProcessor, RenderContext};
    use crate::node::{render, Node};
    use crate::traits::StaticContent;

    async fn apply(node: Node) -> Node {
        AnnotationProcessor::process(
            Some(node),
            Some(&VirtualScrollHelper::new()),
            &RenderContext::new(),
            &StaticContent::default(),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_enabled_list() {
        let node = Node::new("ul")
            .with_attr("id", "feed")
            .with_attr("virtual-scroll", "true")
            .with_attr("item-height", "48")
            .with_attr("items-source", "/api/items")
            .with_content("<li>a</li>");

        let result = apply(node).await;
        let script = VIRTUAL_SCROLL.invoke(&[
            "\"feed\"".to_string(),
            r#"{"itemHeight":48,"bufferSize":5,"itemsSource":"/api/items"}"#.to_string(),
        ]);
        assert_eq!(
            render(&result),
            format!(
                r#"<ul id="feed" class="virtual-scroll" data-item-height="48" data-buffer-size="5" data-items-source="/api/items"><li>a</li></ul>{}"#,
                script
            )
        );
    }

    #[tokio::test]
    async fn test_inactive_cases_table_driven() {
        struct TestCase {
            name: &'static str,
            attrs: Vec<(&'static str, &'static str)>,
        }

        let test_cases = vec![
            TestCase { name: "disabled", attrs: vec![("virtual-scroll", "false"), ("item-height", "40")] },
            TestCase { name: "no item height", attrs: vec![("virtual-scroll", "true")] },
            TestCase { name: "zero item height", attrs: vec![("virtual-scroll", "true"), ("item-height", "0")] },
            TestCase { name: "non-numeric item height", attrs: vec![("virtual-scroll", "true"), ("item-height", "tall")] },
        ];

        for tc in test_cases {
            let mut node = Node::new("div");
            for (k, v) in &tc.attrs {
                node = node.with_attr(*k, *v);
            }
            let result = apply(node).await;
            assert_eq!(render(&result), "<div></div>", "Failed: {}", tc.name);
        }
    }

    #[tokio::test]
    async fn test_negative_buffer_falls_back_to_default() {
        let node = Node::new("div")
            .with_attr("virtual-scroll", "true")
            .with_attr("item-height", "20")
            .with_attr("buffer-size", "-3");
        let result = apply(node).await;
        assert_eq!(result.attributes.get("data-buffer-size"), Some("5"));
        assert!(result.attributes.get("id").is_some_and(|id| id.starts_with("vscroll-")));
    }
}
