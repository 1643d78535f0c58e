// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Messages are organized by subsystem:
//!
//! * `helper` - helper transformation lifecycle on a single node
//! * `input` - recognized attribute values that failed their grammar
//! * `chain` - chain construction and batch processing
//! * `validation` - configuration validation problems

pub mod chain;
pub mod helper;
pub mod input;
pub mod validation;

/// A message that knows its own level and structured fields.
pub trait StructuredLog {
    /// Emit the message as a tracing event.
    fn log(&self);
}
