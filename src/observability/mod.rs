// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Every diagnostic and operational log line in the crate is a message struct
//! with a `Display` implementation and a [`messages::StructuredLog`]
//! implementation that picks the level and the structured fields. Call sites
//! build the message and call `.log()`; no format strings are scattered
//! through the helpers.
//!
//! # Usage
//!
//! ```rust
//! use the_tagsmith::observability::messages::{helper::HelperSkippedSuppressed, StructuredLog};
//!
//! HelperSkippedSuppressed {
//!     helper: "lazy_image",
//!     tag: "img",
//! }
//! .log();
//! ```

pub mod messages;
