// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// File extensions read as YAML
pub const YAML_EXTENSIONS: &[&str] = &["yaml", "yml"];
/// File extension read as TOML
pub const TOML_EXTENSION: &str = "toml";
