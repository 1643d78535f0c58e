// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::descriptor::{HelperDescriptor, ParsedInputs};
use crate::engine::RenderContext;
use crate::errors::ProcessError;
use crate::node::{Node, NodeEdit};
use crate::traits::ContentResolver;

/// Everything a helper sees for one node.
pub struct HelperInput<'a> {
    pub helper: &'static str,
    pub node: &'a Node,
    pub inputs: &'a ParsedInputs,
    pub context: &'a RenderContext,
    pub content: &'a dyn ContentResolver,
}

impl HelperInput<'_> {
    /// Resolve the element's child content, honoring render cancellation.
    pub async fn child_content(&self) -> Result<String, ProcessError> {
        let cancellation = &self.context.cancellation;
        tokio::select! {
            resolved = self.content.resolve(cancellation) => {
                resolved.map_err(|reason| ProcessError::ContentResolution {
                    helper: self.helper.to_string(),
                    reason,
                })
            }
            _ = cancellation.cancelled() => Err(ProcessError::Cancelled {
                helper: self.helper.to_string(),
            }),
        }
    }
}

/// A stateless transformation bound to a descriptor.
///
/// `transform` is a pure function of the node, its parsed inputs and the
/// render context. It never mutates the node; the processor applies the
/// returned edit and strips the recognized attributes afterwards.
#[async_trait]
pub trait TagHelper: Send + Sync {
    fn descriptor(&self) -> &HelperDescriptor;

    async fn transform(&self, input: HelperInput<'_>) -> Result<NodeEdit, ProcessError>;

    fn name(&self) -> &'static str {
        self.descriptor().name
    }
}
