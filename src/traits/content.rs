// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Host callback producing an element's eventual child content.
///
/// Resolution happens at most once per transformation and only when a helper
/// asks for it. Implementations should stop work when `cancellation` fires.
#[async_trait]
pub trait ContentResolver: Send + Sync {
    async fn resolve(&self, cancellation: &CancellationToken) -> Result<String, String>;
}

/// Child content that is already known.
#[derive(Debug, Clone, Default)]
pub struct StaticContent(pub String);

impl StaticContent {
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }
}

#[async_trait]
impl ContentResolver for StaticContent {
    async fn resolve(&self, _cancellation: &CancellationToken) -> Result<String, String> {
        Ok(self.0.clone())
    }
}
