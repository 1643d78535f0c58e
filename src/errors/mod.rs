// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod input;
mod process;

pub use config::{ConfigError, ValidationError};
pub use input::InputError;
pub use process::ProcessError;
