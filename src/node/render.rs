// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Serialization of an edited node and the HTML escaping it needs.

use std::borrow::Cow;

use super::{FragmentPosition, Node};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape HTML special characters in text content. Borrows when nothing changes.
pub fn escape_text(s: &str) -> Cow<'_, str> {
    if !s.contains(ESCAPE_CHARS) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Escape an attribute value. Same character set as text.
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape_text(s)
}

pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(tag))
}

/// Reduce markup to its visible text: tags dropped, common entities decoded.
pub fn strip_markup(markup: &str) -> String {
    let mut text = String::with_capacity(markup.len());
    let mut in_tag = false;
    for c in markup.chars() {
        match c {
            '<' => {
                in_tag = true;
                // Tags separate words
                text.push(' ');
            }
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }

    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", "\u{00A0}")
        .replace("&amp;", "&")
}

fn push_fragments(out: &mut String, node: &Node, position: FragmentPosition) {
    for fragment in node.fragments.iter().filter(|f| f.position == position) {
        out.push_str(&fragment.markup);
    }
}

/// Serialize `node` the way the host would emit it.
///
/// Suppressed nodes render nothing. Attributes with an empty value render as a
/// bare name. Content and fragments are emitted verbatim.
///
/// # Example
/// ```
/// use the_tagsmith::node::{render, Node};
///
/// let node = Node::new("img").with_attr("src", "a.png").with_attr("loading", "lazy");
/// assert_eq!(render(&node), r#"<img src="a.png" loading="lazy">"#);
/// ```
pub fn render(node: &Node) -> String {
    if node.suppressed {
        return String::new();
    }

    let mut out = String::new();
    push_fragments(&mut out, node, FragmentPosition::PreElement);

    match node.tag() {
        Some(tag) => {
            out.push('<');
            out.push_str(tag);
            for (name, value) in node.attributes.iter() {
                out.push(' ');
                out.push_str(name);
                if !value.is_empty() {
                    out.push_str("=\"");
                    out.push_str(&escape_attr(value));
                    out.push('"');
                }
            }
            out.push('>');

            let void = is_void_element(tag);
            push_fragments(&mut out, node, FragmentPosition::PreContent);
            if !void {
                out.push_str(&node.content);
            }
            push_fragments(&mut out, node, FragmentPosition::PostContent);
            if !void {
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
        None => {
            push_fragments(&mut out, node, FragmentPosition::PreContent);
            out.push_str(&node.content);
            push_fragments(&mut out, node, FragmentPosition::PostContent);
        }
    }

    push_fragments(&mut out, node, FragmentPosition::PostElement);
    out
}
