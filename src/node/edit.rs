// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Edits a helper asks the processor to apply to a node.

use super::{Node, render};

/// What happens to the element's tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TagChange {
    #[default]
    Keep,
    Rename(String),
    /// Drop the element wrapper; only content and fragments render.
    Strip,
}

/// A single attribute upsert, applied in the order the helper declared it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeOp {
    Set(String, String),
    /// Space-joined onto an existing value (`class` and friends).
    Append(String, String),
    Remove(String),
}

/// Where a fragment is spliced relative to the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentPosition {
    PreElement,
    PreContent,
    PostContent,
    PostElement,
}

/// Opaque markup included byte-for-byte at its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub position: FragmentPosition,
    pub markup: String,
}

/// Result of one helper transformation.
///
/// Built fluently by helpers:
/// ```
/// use the_tagsmith::node::{FragmentPosition, NodeEdit};
///
/// let edit = NodeEdit::new()
///     .rename("div")
///     .set_attr("data-widget", "renderChart")
///     .fragment(FragmentPosition::PostElement, "<script>mount()</script>");
///
/// assert_eq!(edit.attribute_ops.len(), 1);
/// assert!(!edit.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeEdit {
    pub tag: TagChange,
    pub attribute_ops: Vec<AttributeOp>,
    pub content: Option<String>,
    pub fragments: Vec<Fragment>,
    pub suppress: bool,
}

impl NodeEdit {
    pub fn new() -> Self {
        Self::default()
    }

    /// An edit that suppresses the whole node.
    pub fn suppressed() -> Self {
        Self {
            suppress: true,
            ..Self::default()
        }
    }

    pub fn rename(mut self, tag: impl Into<String>) -> Self {
        self.tag = TagChange::Rename(tag.into());
        self
    }

    pub fn strip_tag(mut self) -> Self {
        self.tag = TagChange::Strip;
        self
    }

    pub fn set_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attribute_ops
            .push(AttributeOp::Set(name.into(), value.into()));
        self
    }

    pub fn append_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attribute_ops
            .push(AttributeOp::Append(name.into(), value.into()));
        self
    }

    pub fn remove_attr(mut self, name: impl Into<String>) -> Self {
        self.attribute_ops.push(AttributeOp::Remove(name.into()));
        self
    }

    /// Replace the content with text that is escaped on the way in.
    pub fn text_content(mut self, text: &str) -> Self {
        self.content = Some(render::escape_text(text).into_owned());
        self
    }

    /// Replace the content with markup emitted verbatim.
    pub fn html_content(mut self, markup: impl Into<String>) -> Self {
        self.content = Some(markup.into());
        self
    }

    pub fn fragment(mut self, position: FragmentPosition, markup: impl Into<String>) -> Self {
        self.fragments.push(Fragment {
            position,
            markup: markup.into(),
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.tag == TagChange::Keep
            && self.attribute_ops.is_empty()
            && self.content.is_none()
            && self.fragments.is_empty()
            && !self.suppress
    }

    /// Apply this edit to `node`: tag, attributes in order, content, fragments.
    pub(crate) fn apply_to(self, node: &mut Node) {
        match self.tag {
            TagChange::Keep => {}
            TagChange::Rename(tag) => node.tag_name = Some(tag),
            TagChange::Strip => node.tag_name = None,
        }

        for op in self.attribute_ops {
            match op {
                AttributeOp::Set(name, value) => node.attributes.set(name, value),
                AttributeOp::Append(name, value) => node.attributes.append(name, value),
                AttributeOp::Remove(name) => {
                    node.attributes.remove(&name);
                }
            }
        }

        if let Some(content) = self.content {
            node.content = content;
        }

        node.fragments.extend(self.fragments);

        if self.suppress {
            node.suppressed = true;
        }
    }
}
