// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::descriptor::{AttributeSpec, HelperDescriptor, InputKind, TargetPredicate};
use crate::errors::ProcessError;
use crate::node::NodeEdit;
use crate::traits::{HelperInput, TagHelper};

const CLASS_IF: &str = "class-if";
const CLASS_UNLESS: &str = "class-unless";

/// Conditional class composition - `class-if` / `class-unless`.
///
/// Both take `condition:token,token;...`. Tokens from `class-if` segments whose
/// condition is `true`, then tokens from `class-unless` segments whose
/// condition is `false`, are appended to `class`.
pub struct ConditionalClassHelper {
    descriptor: HelperDescriptor,
}

impl ConditionalClassHelper {
    pub fn new() -> Self {
        Self {
            descriptor: HelperDescriptor::new(
                "conditional_class",
                vec![
                    TargetPredicate::attribute(CLASS_IF),
                    TargetPredicate::attribute(CLASS_UNLESS),
                ],
                vec![
                    AttributeSpec::new(CLASS_IF, InputKind::Conditional),
                    AttributeSpec::new(CLASS_UNLESS, InputKind::Conditional),
                ],
            ),
        }
    }
}

impl Default for ConditionalClassHelper {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TagHelper for ConditionalClassHelper {
    fn descriptor(&self) -> &HelperDescriptor {
        &self.descriptor
    }

    async fn transform(&self, input: HelperInput<'_>) -> Result<NodeEdit, ProcessError> {
        let mut tokens = Vec::new();
        if let Some(list) = input.inputs.conditional(CLASS_IF) {
            tokens.extend(list.tokens_for(true));
        }
        if let Some(list) = input.inputs.conditional(CLASS_UNLESS) {
            tokens.extend(list.tokens_for(false));
        }

        if tokens.is_empty() {
            return Ok(NodeEdit::new());
        }
        Ok(NodeEdit::new().append_attr("class", tokens.join(" ")))
    }
}
