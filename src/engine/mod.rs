// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod chain;
pub mod context;
pub mod processor;

pub use chain::{default_concurrency, HelperChain, PendingNode};
pub use context::RenderContext;
pub use processor::AnnotationProcessor;
