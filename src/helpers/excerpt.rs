// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::descriptor::{AttributeSpec, HelperDescriptor, InputKind, TargetPredicate};
use crate::errors::ProcessError;
use crate::node::render::strip_markup;
use crate::node::NodeEdit;
use crate::traits::{HelperInput, TagHelper};

const EXCERPT_WORDS: &str = "excerpt-words";
const EXCERPT_ELLIPSIS: &str = "excerpt-ellipsis";

pub const DEFAULT_ELLIPSIS: &str = "\u{2026}";

/// `excerpt-words="N"` - plain-text teaser of the element's resolved content.
///
/// Content that already fits is emitted as resolved, markup included. Longer
/// content is reduced to its first N words as escaped text plus the ellipsis.
pub struct ExcerptHelper {
    descriptor: HelperDescriptor,
}

impl ExcerptHelper {
    pub fn new() -> Self {
        Self {
            descriptor: HelperDescriptor::new(
                "excerpt",
                vec![TargetPredicate::attribute(EXCERPT_WORDS)],
                vec![
                    AttributeSpec::new(EXCERPT_WORDS, InputKind::Integer),
                    AttributeSpec::new(EXCERPT_ELLIPSIS, InputKind::Text),
                ],
            ),
        }
    }
}

impl Default for ExcerptHelper {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TagHelper for ExcerptHelper {
    fn descriptor(&self) -> &HelperDescriptor {
        &self.descriptor
    }

    async fn transform(&self, input: HelperInput<'_>) -> Result<NodeEdit, ProcessError> {
        let Some(limit) = input
            .inputs
            .integer(EXCERPT_WORDS)
            .filter(|n| *n > 0)
            .and_then(|n| usize::try_from(n).ok())
        else {
            return Ok(NodeEdit::new());
        };

        let markup = input.child_content().await?;
        let text = strip_markup(&markup);
        let words: Vec<&str> = text.split_whitespace().collect();

        if words.len() <= limit {
            return Ok(NodeEdit::new().html_content(markup));
        }

        let ellipsis = input.inputs.text(EXCERPT_ELLIPSIS).unwrap_or(DEFAULT_ELLIPSIS);
        let excerpt = format!("{}{}", words[..limit].join(" "), ellipsis);
        Ok(NodeEdit::new().text_content(&excerpt))
    }
}
