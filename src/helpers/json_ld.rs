// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::descriptor::{AttributeSpec, HelperDescriptor, InputKind, TargetPredicate};
use crate::errors::ProcessError;
use crate::helpers::assets::script_json;
use crate::node::NodeEdit;
use crate::observability::messages::helper::RequiredInputMissing;
use crate::observability::messages::StructuredLog;
use crate::traits::{HelperInput, TagHelper};

const SCHEMA_TYPE: &str = "schema-type";
const SCHEMA_DATA: &str = "schema-data";
const SCHEMA_CONTEXT: &str = "schema-context";

pub const DEFAULT_CONTEXT: &str = "https://schema.org";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct JsonLdOptions {
    pub context: Option<String>,
}

/// `<json-ld schema-type="...">` - structured data block.
///
/// Becomes `<script type="application/ld+json">` holding `@context`, `@type`
/// and then the fields of `schema-data` in their authored order. Data that is
/// not a JSON object contributes nothing.
pub struct JsonLdHelper {
    descriptor: HelperDescriptor,
    context: String,
}

impl JsonLdHelper {
    pub fn new() -> Self {
        Self {
            descriptor: HelperDescriptor::new(
                "json_ld",
                vec![TargetPredicate::tag("json-ld")],
                vec![
                    AttributeSpec::new(SCHEMA_TYPE, InputKind::Text),
                    AttributeSpec::new(SCHEMA_DATA, InputKind::Json),
                    AttributeSpec::new(SCHEMA_CONTEXT, InputKind::Text),
                ],
            ),
            context: DEFAULT_CONTEXT.to_string(),
        }
    }

    /// Default `@context` for elements that do not set `schema-context`.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    pub fn from_options(options: JsonLdOptions) -> Self {
        match options.context.filter(|c| !c.trim().is_empty()) {
            Some(context) => Self::new().with_context(context),
            None => Self::new(),
        }
    }
}

impl Default for JsonLdHelper {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TagHelper for JsonLdHelper {
    fn descriptor(&self) -> &HelperDescriptor {
        &self.descriptor
    }

    async fn transform(&self, input: HelperInput<'_>) -> Result<NodeEdit, ProcessError> {
        let inputs = input.inputs;
        let Some(schema_type) = inputs.text(SCHEMA_TYPE) else {
            RequiredInputMissing {
                helper: self.descriptor.name,
                attribute: SCHEMA_TYPE,
            }
            .log();
            return Ok(NodeEdit::suppressed());
        };

        let mut document = Map::new();
        document.insert(
            "@context".to_string(),
            Value::String(inputs.text(SCHEMA_CONTEXT).unwrap_or(self.context.as_str()).to_string()),
        );
        document.insert("@type".to_string(), Value::String(schema_type.to_string()));

        if let Some(Value::Object(fields)) = inputs.json(SCHEMA_DATA) {
            for (key, value) in fields {
                if key != "@context" && key != "@type" {
                    document.insert(key.clone(), value.clone());
                }
            }
        }

        Ok(NodeEdit::new()
            .rename("script")
            .set_attr("type", "application/ld+json")
            .html_content(script_json(&Value::Object(document))))
    }
}
