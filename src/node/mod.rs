// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Element-like units handed to helpers by the host.
//!
//! A [`Node`] is built fresh by the host for every render call, edited in
//! place by zero or more helpers and discarded once serialized. Nothing here
//! outlives a single render.

mod attributes;
mod edit;
pub mod render;

pub use attributes::Attributes;
pub use edit::{AttributeOp, Fragment, FragmentPosition, NodeEdit, TagChange};
pub use render::render;

/// An element being rendered: tag, attributes, content and injected fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    /// `None` once a helper has stripped the wrapper element.
    pub tag_name: Option<String>,
    pub attributes: Attributes,
    /// Child content as currently known; opaque markup.
    pub content: String,
    pub fragments: Vec<Fragment>,
    /// Set by an upstream gating step; a suppressed node is never transformed.
    pub suppressed: bool,
}

impl Node {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag_name: Some(tag.into()),
            ..Self::default()
        }
    }

    /// A wrapper-less node carrying only content.
    pub fn stripped(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(name, value);
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn suppress(mut self) -> Self {
        self.suppressed = true;
        self
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag_name.as_deref()
    }

    /// Tag for log output; stripped nodes show as `#content`.
    pub fn display_tag(&self) -> &str {
        self.tag().unwrap_or("#content")
    }
}
