// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;      // chain config + loader
pub mod descriptor;  // what a helper targets and consumes
pub mod engine;      // processor + helper chains
pub mod errors;      // error handling
pub mod grammar;     // attribute value grammars
pub mod helpers;     // concrete tag helpers
pub mod node;        // nodes, edits, rendering
pub mod observability;
pub mod traits;      // unified abstractions
