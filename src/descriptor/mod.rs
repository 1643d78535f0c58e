// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Declarative description of what a helper targets and which attributes it consumes.
//!
//! Predicates are plain data (tag name and attribute-presence sets), so the
//! host can decide matches without invoking helper code.

mod inputs;

pub use inputs::{parse_inputs, InputValue, ParsedInputs};

use crate::node::Node;

/// Matches a tag name, a set of present attributes, or both.
///
/// A predicate without a tag matches any element, including one whose wrapper
/// was stripped. All listed attributes must be present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPredicate {
    pub tag: Option<String>,
    pub attributes: Vec<String>,
}

impl TargetPredicate {
    pub fn tag(tag: &str) -> Self {
        Self {
            tag: Some(tag.to_string()),
            attributes: Vec::new(),
        }
    }

    pub fn attribute(name: &str) -> Self {
        Self {
            tag: None,
            attributes: vec![name.to_string()],
        }
    }

    pub fn tag_with_attribute(tag: &str, name: &str) -> Self {
        Self {
            tag: Some(tag.to_string()),
            attributes: vec![name.to_string()],
        }
    }

    pub fn matches(&self, node: &Node) -> bool {
        let tag_ok = match (&self.tag, node.tag()) {
            (None, _) => true,
            (Some(wanted), Some(actual)) => wanted.eq_ignore_ascii_case(actual),
            (Some(_), None) => false,
        };
        tag_ok && self.attributes.iter().all(|a| node.attributes.contains(a))
    }
}

/// Grammar a recognized attribute's value is parsed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Literal `true` / `false`.
    Flag,
    Integer,
    /// Finite floating point.
    Number,
    /// Any non-blank text, trimmed.
    Text,
    /// Delimited list; empty entries dropped.
    List(char),
    /// `key:value;key:value`.
    Pairs,
    /// One of a fixed set of keywords, case-insensitive, normalized to lowercase.
    Choice(&'static [&'static str]),
    /// `condition:token,token;...`
    Conditional,
    /// Opaque JSON blob.
    Json,
    /// Absolute point in time.
    Instant,
}

impl InputKind {
    pub fn expected(&self) -> &'static str {
        match self {
            InputKind::Flag => "boolean literal",
            InputKind::Integer => "integer",
            InputKind::Number => "number",
            InputKind::Text => "non-empty text",
            InputKind::List(_) => "delimited list",
            InputKind::Pairs => "key:value list",
            InputKind::Choice(_) => "known keyword",
            InputKind::Conditional => "condition:tokens list",
            InputKind::Json => "JSON value",
            InputKind::Instant => "date or RFC 3339 timestamp",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSpec {
    pub name: &'static str,
    pub kind: InputKind,
}

impl AttributeSpec {
    pub const fn new(name: &'static str, kind: InputKind) -> Self {
        Self { name, kind }
    }
}

/// Target predicates plus the ordered list of attributes a helper consumes.
///
/// # Example
/// ```
/// use the_tagsmith::descriptor::{AttributeSpec, HelperDescriptor, InputKind, TargetPredicate};
/// use the_tagsmith::node::Node;
///
/// let descriptor = HelperDescriptor::new(
///     "lazy_image",
///     vec![TargetPredicate::tag_with_attribute("img", "lazy-load")],
///     vec![AttributeSpec::new("lazy-load", InputKind::Flag)],
/// );
///
/// assert!(descriptor.matches(&Node::new("IMG").with_attr("lazy-load", "true")));
/// assert!(!descriptor.matches(&Node::new("img")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperDescriptor {
    pub name: &'static str,
    pub targets: Vec<TargetPredicate>,
    pub recognized: Vec<AttributeSpec>,
}

impl HelperDescriptor {
    pub fn new(
        name: &'static str,
        targets: Vec<TargetPredicate>,
        recognized: Vec<AttributeSpec>,
    ) -> Self {
        Self {
            name,
            targets,
            recognized,
        }
    }

    /// True when any target predicate matches.
    pub fn matches(&self, node: &Node) -> bool {
        self.targets.iter().any(|t| t.matches(node))
    }

    pub fn recognized_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.recognized.iter().map(|spec| spec.name)
    }
}
