// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Test-only helpers and resolvers for exercising the processor and chain.

use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::fmt::MakeWriter;

use crate::descriptor::{AttributeSpec, HelperDescriptor, InputKind, TargetPredicate};
use crate::errors::ProcessError;
use crate::node::NodeEdit;
use crate::traits::{ContentResolver, HelperInput, TagHelper};

/// Collects formatted log output so tests can assert on emitted messages.
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// Debug-level subscriber writing into this capture; install with
    /// `tracing::subscriber::set_default`.
    pub fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(self.clone())
            .finish()
    }

    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().unwrap();
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Resolver whose child content never materializes.
pub struct FailingResolver;

#[async_trait]
impl ContentResolver for FailingResolver {
    async fn resolve(&self, _cancellation: &CancellationToken) -> Result<String, String> {
        Err("upstream partial failed".to_string())
    }
}

/// Replaces the content with the resolved child content wrapped in `[...]`.
pub struct ContentEchoHelper {
    descriptor: HelperDescriptor,
}

impl ContentEchoHelper {
    pub fn new() -> Self {
        Self {
            descriptor: HelperDescriptor::new(
                "content_echo",
                vec![TargetPredicate::attribute("echo-content")],
                vec![AttributeSpec::new("echo-content", InputKind::Text)],
            ),
        }
    }
}

#[async_trait]
impl TagHelper for ContentEchoHelper {
    fn descriptor(&self) -> &HelperDescriptor {
        &self.descriptor
    }

    async fn transform(&self, input: HelperInput<'_>) -> Result<NodeEdit, ProcessError> {
        let content = input.child_content().await?;
        Ok(NodeEdit::new().html_content(format!("[{}]", content)))
    }
}

/// Never finishes; only render cancellation gets a node past it.
pub struct PendingHelper {
    descriptor: HelperDescriptor,
}

impl PendingHelper {
    pub fn new() -> Self {
        Self {
            descriptor: HelperDescriptor::new(
                "pending",
                vec![TargetPredicate::attribute("pending")],
                vec![AttributeSpec::new("pending", InputKind::Text)],
            ),
        }
    }
}

#[async_trait]
impl TagHelper for PendingHelper {
    fn descriptor(&self) -> &HelperDescriptor {
        &self.descriptor
    }

    async fn transform(&self, _input: HelperInput<'_>) -> Result<NodeEdit, ProcessError> {
        std::future::pending().await
    }
}

/// Renames `from` elements to `to`.
pub struct RenamingHelper {
    descriptor: HelperDescriptor,
    to: String,
}

impl RenamingHelper {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            descriptor: HelperDescriptor::new("renaming", vec![TargetPredicate::tag(from)], vec![]),
            to: to.to_string(),
        }
    }
}

#[async_trait]
impl TagHelper for RenamingHelper {
    fn descriptor(&self) -> &HelperDescriptor {
        &self.descriptor
    }

    async fn transform(&self, _input: HelperInput<'_>) -> Result<NodeEdit, ProcessError> {
        Ok(NodeEdit::new().rename(self.to.as_str()))
    }
}

/// Fails every `fail` element; panics on `fail="panic"`.
pub struct FailingHelper {
    descriptor: HelperDescriptor,
}

impl FailingHelper {
    pub fn new() -> Self {
        Self {
            descriptor: HelperDescriptor::new(
                "failing",
                vec![TargetPredicate::attribute("fail")],
                vec![AttributeSpec::new("fail", InputKind::Text)],
            ),
        }
    }
}

#[async_trait]
impl TagHelper for FailingHelper {
    fn descriptor(&self) -> &HelperDescriptor {
        &self.descriptor
    }

    async fn transform(&self, input: HelperInput<'_>) -> Result<NodeEdit, ProcessError> {
        if input.inputs.text("fail") == Some("panic") {
            panic!("helper blew up");
        }
        Err(ProcessError::ContentResolution {
            helper: self.name().to_string(),
            reason: "boom".to_string(),
        })
    }
}

/// Appends a fixed marker to `class`, for observing application order.
pub struct MarkerHelper {
    descriptor: HelperDescriptor,
    marker: String,
}

impl MarkerHelper {
    pub fn new(marker: &str) -> Self {
        Self {
            descriptor: HelperDescriptor::new("marker", vec![TargetPredicate { tag: None, attributes: vec![] }], vec![]),
            marker: marker.to_string(),
        }
    }
}

#[async_trait]
impl TagHelper for MarkerHelper {
    fn descriptor(&self) -> &HelperDescriptor {
        &self.descriptor
    }

    async fn transform(&self, _input: HelperInput<'_>) -> Result<NodeEdit, ProcessError> {
        Ok(NodeEdit::new().append_attr("class", self.marker.as_str()))
    }
}
