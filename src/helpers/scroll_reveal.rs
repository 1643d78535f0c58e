// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::descriptor::{AttributeSpec, HelperDescriptor, InputKind, TargetPredicate};
use crate::errors::ProcessError;
use crate::helpers::assets::{element_id, script_json, SCROLL_REVEAL};
use crate::node::{FragmentPosition, NodeEdit};
use crate::traits::{HelperInput, TagHelper};

const ANIMATE_ON_SCROLL: &str = "animate-on-scroll";
const ANIMATE_THRESHOLD: &str = "animate-threshold";
const ANIMATE_DELAY: &str = "animate-delay";
const ANIMATE_ONCE: &str = "animate-once";

pub const DEFAULT_THRESHOLD: f64 = 0.1;
pub const VISIBLE_CLASS: &str = "reveal-visible";

/// Class-safe form of an animation name.
fn class_suffix(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect()
}

/// `animate-on-scroll="fade-up"` - reveal animation when the element enters the viewport.
pub struct ScrollRevealHelper {
    descriptor: HelperDescriptor,
}

impl ScrollRevealHelper {
    pub fn new() -> Self {
        Self {
            descriptor: HelperDescriptor::new(
                "scroll_reveal",
                vec![TargetPredicate::attribute(ANIMATE_ON_SCROLL)],
                vec![
                    AttributeSpec::new(ANIMATE_ON_SCROLL, InputKind::Text),
                    AttributeSpec::new(ANIMATE_THRESHOLD, InputKind::Number),
                    AttributeSpec::new(ANIMATE_DELAY, InputKind::Integer),
                    AttributeSpec::new(ANIMATE_ONCE, InputKind::Flag),
                ],
            ),
        }
    }
}

impl Default for ScrollRevealHelper {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TagHelper for ScrollRevealHelper {
    fn descriptor(&self) -> &HelperDescriptor {
        &self.descriptor
    }

    async fn transform(&self, input: HelperInput<'_>) -> Result<NodeEdit, ProcessError> {
        let inputs = input.inputs;
        let Some(animation) = inputs.text(ANIMATE_ON_SCROLL) else {
            return Ok(NodeEdit::new());
        };

        let threshold = inputs
            .number(ANIMATE_THRESHOLD)
            .unwrap_or(DEFAULT_THRESHOLD)
            .clamp(0.0, 1.0);
        let delay = inputs.integer(ANIMATE_DELAY).unwrap_or(0).max(0);
        let once = inputs.flag(ANIMATE_ONCE).unwrap_or(true);
        let id = element_id(input.node, "reveal");

        let options = json!({
            "visibleClass": VISIBLE_CLASS,
            "delay": delay,
            "once": once,
            "threshold": threshold,
        });
        let script = SCROLL_REVEAL.invoke(&[script_json(&Value::String(id.clone())), script_json(&options)]);

        Ok(NodeEdit::new()
            .set_attr("id", id)
            .append_attr("class", format!("reveal reveal-{}", class_suffix(animation)))
            .set_attr("data-reveal-threshold", threshold.to_string())
            .set_attr("data-reveal-delay", delay.to_string())
            .set_attr("data-reveal-once", once.to_string())
            .fragment(FragmentPosition::PostElement, script))
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
            Some(&ScrollRevealHelper::new()),
            &RenderContext::new(),
            &StaticContent::default(),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_reveal_options_table_driven() {
        struct TestCase {
            name: &'static str,
            attrs: Vec<(&'static str, &'static str)>,
            class: &'static str,
            threshold: &'static str,
            delay: &'static str,
            once: &'static str,
        }

        let test_cases = vec![
            TestCase {
                name: "defaults",
                attrs: vec![("animate-on-scroll", "fade-up")],
                class: "reveal reveal-fade-up",
                threshold: "0.1",
                delay: "0",
                once: "true",
            },
            TestCase {
                name: "explicit values",
                attrs: vec![
                    ("animate-on-scroll", "Zoom In"),
                    ("animate-threshold", "0.5"),
                    ("animate-delay", "200"),
                    ("animate-once", "false"),
                ],
                class: "reveal reveal-zoom-in",
                threshold: "0.5",
                delay: "200",
                once: "false",
            },
            TestCase {
                name: "clamped threshold and delay",
                attrs: vec![
                    ("animate-on-scroll", "slide"),
                    ("animate-threshold", "4"),
                    ("animate-delay", "-50"),
                ],
                class: "reveal reveal-slide",
                threshold: "1",
                delay: "0",
                once: "true",
            },
        ];

        for tc in test_cases {
            let mut node = Node::new("section").with_attr("id", "hero");
            for (k, v) in &tc.attrs {
                node = node.with_attr(*k, *v);
            }
            let result = apply(node).await;

            assert_eq!(result.attributes.get("class"), Some(tc.class), "Failed: {}", tc.name);
            assert_eq!(result.attributes.get("data-reveal-threshold"), Some(tc.threshold), "Failed: {}", tc.name);
            assert_eq!(result.attributes.get("data-reveal-delay"), Some(tc.delay), "Failed: {}", tc.name);
            assert_eq!(result.attributes.get("data-reveal-once"), Some(tc.once), "Failed: {}", tc.name);
            assert_eq!(result.fragments.len(), 1, "Failed: {}", tc.name);
            assert!(result.fragments[0].markup.contains("(\"hero\", {"), "Failed: {}", tc.name);
        }
    }

    #[tokio::test]
    async fn test_blank_animation_is_ignored() {
        let result = apply(Node::new("div").with_attr("animate-on-scroll", " ")).await;
        assert_eq!(render(&result), "<div></div>");
    }
}
