// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Client-side scripts shipped with the helpers.
//!
//! Bodies live in `assets/` and are included verbatim; they run in the
//! browser and are opaque to this crate. Each body is a single function
//! expression that the emitted `<script>` invokes with JSON arguments.

use std::hash::Hasher;

use rustc_hash::FxHasher;

/// A versioned, embedded script body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptAsset {
    pub name: &'static str,
    pub version: &'static str,
    pub body: &'static str,
}

impl ScriptAsset {
    /// `<script>` invoking the asset's function with `args` (already JSON).
    pub fn invoke(&self, args: &[String]) -> String {
        format!(
            "<script data-asset=\"{}@{}\">({})({});</script>",
            self.name,
            self.version,
            self.body,
            args.join(", ")
        )
    }
}

pub const WIDGET_MOUNT: ScriptAsset = ScriptAsset {
    name: "widget-mount",
    version: "1",
    body: include_str!("../../assets/widget_mount.js"),
};

pub const VIRTUAL_SCROLL: ScriptAsset = ScriptAsset {
    name: "virtual-scroll",
    version: "1",
    body: include_str!("../../assets/virtual_scroll.js"),
};

pub const SCROLL_REVEAL: ScriptAsset = ScriptAsset {
    name: "scroll-reveal",
    version: "1",
    body: include_str!("../../assets/scroll_reveal.js"),
};

/// Serialize `value` for embedding inside a `<script>` element.
pub fn script_json(value: &serde_json::Value) -> String {
    value.to_string().replace("</", "<\\/")
}

/// The node's own `id`, or a stable one derived from its tag, attributes and content.
pub fn element_id(node: &crate::node::Node, prefix: &str) -> String {
    if let Some(id) = node.attributes.get("id").filter(|id| !id.trim().is_empty()) {
        return id.to_string();
    }

    let mut hasher = FxHasher::default();
    hasher.write(node.display_tag().as_bytes());
    for (name, value) in node.attributes.iter() {
        hasher.write_u8(0);
        hasher.write(name.to_ascii_lowercase().as_bytes());
        hasher.write_u8(b'=');
        hasher.write(value.as_bytes());
    }
    hasher.write_u8(0);
    hasher.write(node.content.as_bytes());
    format!("{}-{:08x}", prefix, hasher.finish() as u32)
}
