// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::descriptor::{AttributeSpec, HelperDescriptor, InputKind, TargetPredicate};
use crate::errors::ProcessError;
use crate::node::NodeEdit;
use crate::traits::{HelperInput, TagHelper};

const RENDER_IF: &str = "render-if";
const RENDER_UNLESS: &str = "render-unless";
const REQUIRE_ROLES: &str = "require-roles";

/// Conditional rendering and role-based authorization.
///
/// Suppresses the node when `render-if` is `false`, `render-unless` is `true`,
/// or none of the render context's roles appear in `require-roles`. Values
/// that do not parse gate nothing. Place it first in a chain so later helpers
/// never run on a node that will not render.
pub struct RenderGateHelper {
    descriptor: HelperDescriptor,
}

impl RenderGateHelper {
    pub fn new() -> Self {
        Self {
            descriptor: HelperDescriptor::new(
                "render_gate",
                vec![
                    TargetPredicate::attribute(RENDER_IF),
                    TargetPredicate::attribute(RENDER_UNLESS),
                    TargetPredicate::attribute(REQUIRE_ROLES),
                ],
                vec![
                    AttributeSpec::new(RENDER_IF, InputKind::Flag),
                    AttributeSpec::new(RENDER_UNLESS, InputKind::Flag),
                    AttributeSpec::new(REQUIRE_ROLES, InputKind::List(',')),
                ],
            ),
        }
    }
}

impl Default for RenderGateHelper {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TagHelper for RenderGateHelper {
    fn descriptor(&self) -> &HelperDescriptor {
        &self.descriptor
    }

    async fn transform(&self, input: HelperInput<'_>) -> Result<NodeEdit, ProcessError> {
        let inputs = input.inputs;

        let hidden = inputs.flag(RENDER_IF) == Some(false)
            || inputs.flag(RENDER_UNLESS) == Some(true)
            || inputs
                .list(REQUIRE_ROLES)
                .is_some_and(|roles| !input.context.has_any_role(roles));

        if hidden {
            return Ok(NodeEdit::suppressed());
        }
        Ok(NodeEdit::new())
    }
}
