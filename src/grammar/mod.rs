// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Value grammars for recognized attributes.
//!
//! Every parser here is total: malformed input yields `None` (or skips the
//! malformed segment) and never panics or errors.

pub mod conditional_list;
pub mod relative_time;
pub mod scalar;

pub use conditional_list::{ConditionalList, ConditionalSegment};
pub use scalar::{parse_flag, parse_instant, parse_integer, parse_list, parse_number, parse_pairs};
