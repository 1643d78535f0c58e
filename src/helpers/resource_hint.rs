// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::descriptor::{AttributeSpec, HelperDescriptor, InputKind, TargetPredicate};
use crate::errors::ProcessError;
use crate::node::NodeEdit;
use crate::observability::messages::helper::RequiredInputMissing;
use crate::observability::messages::StructuredLog;
use crate::traits::{HelperInput, TagHelper};

const RESOURCE_HINT: &str = "resource-hint";
const HINT_HREF: &str = "hint-href";
const HINT_AS: &str = "hint-as";
const HINT_TYPE: &str = "hint-type";
const HINT_CROSSORIGIN: &str = "hint-crossorigin";

pub const HINT_KINDS: &[&str] = &["preload", "prefetch", "preconnect", "dns-prefetch", "modulepreload"];

/// `<link resource-hint="...">` - preload, prefetch and connection hints.
///
/// The target comes from `hint-href`, falling back to the element's own
/// `href`. A hint without a target, or a preload without `hint-as`, would be
/// ignored by the browser and is suppressed instead.
pub struct ResourceHintHelper {
    descriptor: HelperDescriptor,
}

impl ResourceHintHelper {
    pub fn new() -> Self {
        Self {
            descriptor: HelperDescriptor::new(
                "resource_hint",
                vec![TargetPredicate::tag_with_attribute("link", RESOURCE_HINT)],
                vec![
                    AttributeSpec::new(RESOURCE_HINT, InputKind::Choice(HINT_KINDS)),
                    AttributeSpec::new(HINT_HREF, InputKind::Text),
                    AttributeSpec::new(HINT_AS, InputKind::Text),
                    AttributeSpec::new(HINT_TYPE, InputKind::Text),
                    AttributeSpec::new(HINT_CROSSORIGIN, InputKind::Flag),
                ],
            ),
        }
    }

    fn missing(&self, attribute: &'static str) -> NodeEdit {
        RequiredInputMissing {
            helper: self.descriptor.name,
            attribute,
        }
        .log();
        NodeEdit::suppressed()
    }
}

impl Default for ResourceHintHelper {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TagHelper for ResourceHintHelper {
    fn descriptor(&self) -> &HelperDescriptor {
        &self.descriptor
    }

    async fn transform(&self, input: HelperInput<'_>) -> Result<NodeEdit, ProcessError> {
        let inputs = input.inputs;
        let Some(kind) = inputs.choice(RESOURCE_HINT) else {
            return Ok(NodeEdit::new());
        };

        let href = inputs
            .text(HINT_HREF)
            .or_else(|| input.node.attributes.get("href").filter(|h| !h.trim().is_empty()));
        let Some(href) = href else {
            return Ok(self.missing(HINT_HREF));
        };

        let mut edit = NodeEdit::new().set_attr("rel", kind).set_attr("href", href);

        match (kind, inputs.text(HINT_AS)) {
            ("preload", None) => return Ok(self.missing(HINT_AS)),
            ("preload" | "prefetch", Some(as_)) => edit = edit.set_attr("as", as_),
            _ => {}
        }

        if let Some(mime) = inputs.text(HINT_TYPE) {
            edit = edit.set_attr("type", mime);
        }

        if matches!(kind, "preconnect" | "modulepreload") && inputs.flag(HINT_CROSSORIGIN) == Some(true) {
            edit = edit.set_attr("crossorigin", "anonymous");
        }

        Ok(edit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{AnnotationProcessor, RenderContext};
    use crate::node::{render, Node};
    use crate::traits::StaticContent;

    #[tokio::test]
    async fn test_hints_table_driven() {
        struct TestCase {
            name: &'static str,
            attrs: Vec<(&'static str, &'static str)>,
            expected: &'static str,
        }

        let test_cases = vec![
            TestCase {
                name: "preload with as and type",
                attrs: vec![
                    ("resource-hint", "Preload"),
                    ("hint-href", "/fonts/a.woff2"),
                    ("hint-as", "font"),
                    ("hint-type", "font/woff2"),
                ],
                expected: r#"<link rel="preload" href="/fonts/a.woff2" as="font" type="font/woff2">"#,
            },
            TestCase {
                name: "preload without as is suppressed",
                attrs: vec![("resource-hint", "preload"), ("hint-href", "/a.js")],
                expected: "",
            },
            TestCase {
                name: "preconnect with crossorigin",
                attrs: vec![
                    ("resource-hint", "preconnect"),
                    ("hint-href", "https://cdn.example.com"),
                    ("hint-crossorigin", "true"),
                ],
                expected: r#"<link rel="preconnect" href="https://cdn.example.com" crossorigin="anonymous">"#,
            },
            TestCase {
                name: "dns-prefetch ignores crossorigin",
                attrs: vec![
                    ("resource-hint", "dns-prefetch"),
                    ("hint-href", "//cdn.example.com"),
                    ("hint-crossorigin", "true"),
                ],
                expected: r#"<link rel="dns-prefetch" href="//cdn.example.com">"#,
            },
            TestCase {
                name: "existing href is the fallback target",
                attrs: vec![("href", "/next.html"), ("resource-hint", "prefetch")],
                expected: r#"<link href="/next.html" rel="prefetch">"#,
            },
            TestCase {
                name: "missing href is suppressed",
                attrs: vec![("resource-hint", "modulepreload")],
                expected: "",
            },
            TestCase {
                name: "unknown kind leaves the link alone",
                attrs: vec![("rel", "stylesheet"), ("resource-hint", "prerender"), ("hint-href", "/x")],
                expected: r#"<link rel="stylesheet">"#,
            },
        ];

        for tc in test_cases {
            let mut node = Node::new("link");
            for (k, v) in &tc.attrs {
                node = node.with_attr(*k, *v);
            }
            let result = AnnotationProcessor::process(
                Some(node),
                Some(&ResourceHintHelper::new()),
                &RenderContext::new(),
                &StaticContent::default(),
            )
            .await
            .unwrap();
            assert_eq!(render(&result), tc.expected, "Failed: {}", tc.name);
        }
    }
}
