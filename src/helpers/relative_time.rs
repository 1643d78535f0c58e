// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use chrono::format::{Item, StrftimeItems};
use chrono::SecondsFormat;
use serde::Deserialize;

use crate::descriptor::{AttributeSpec, HelperDescriptor, InputKind, TargetPredicate};
use crate::errors::ProcessError;
use crate::grammar::relative_time;
use crate::node::NodeEdit;
use crate::traits::{HelperInput, TagHelper};

const RELATIVE_TIME: &str = "relative-time";
pub const DEFAULT_TITLE_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RelativeTimeOptions {
    pub title_format: Option<String>,
}

/// `<time relative-time="...">` - human label relative to the render instant.
///
/// The content becomes the label, `datetime` carries the machine-readable
/// instant unless the author already set one and `title` shows the absolute
/// UTC time.
pub struct RelativeTimeHelper {
    descriptor: HelperDescriptor,
    title_format: String,
}

impl RelativeTimeHelper {
    pub fn new() -> Self {
        Self {
            descriptor: HelperDescriptor::new(
                "relative_time",
                vec![TargetPredicate::tag_with_attribute("time", RELATIVE_TIME)],
                vec![AttributeSpec::new(RELATIVE_TIME, InputKind::Instant)],
            ),
            title_format: DEFAULT_TITLE_FORMAT.to_string(),
        }
    }

    /// Use a custom strftime pattern for `title`. Rejects patterns chrono cannot render.
    pub fn with_title_format(mut self, format: &str) -> Result<Self, String> {
        if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            return Err(format!("invalid title_format '{}'", format));
        }
        self.title_format = format.to_string();
        Ok(self)
    }

    pub fn from_options(options: RelativeTimeOptions) -> Result<Self, String> {
        match options.title_format {
            Some(format) => Self::new().with_title_format(&format),
            None => Ok(Self::new()),
        }
    }
}

impl Default for RelativeTimeHelper {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TagHelper for RelativeTimeHelper {
    fn descriptor(&self) -> &HelperDescriptor {
        &self.descriptor
    }

    async fn transform(&self, input: HelperInput<'_>) -> Result<NodeEdit, ProcessError> {
        let Some(instant) = input.inputs.instant(RELATIVE_TIME) else {
            return Ok(NodeEdit::new());
        };

        let label = relative_time::describe(instant, input.context.now);
        let mut edit = NodeEdit::new()
            .text_content(&label)
            .set_attr("title", instant.format(&self.title_format).to_string());

        if !input.node.attributes.contains("datetime") {
            edit = edit.set_attr(
                "datetime",
                instant.to_rfc3339_opts(SecondsFormat::Secs, true),
            );
        }
        Ok(edit)
    }
}
