// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod content;
pub mod helper;

pub use content::{ContentResolver, StaticContent};
pub use helper::{HelperInput, TagHelper};
