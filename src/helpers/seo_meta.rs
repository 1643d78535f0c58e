// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde::Deserialize;

use crate::descriptor::{AttributeSpec, HelperDescriptor, InputKind, TargetPredicate};
use crate::errors::ProcessError;
use crate::node::render::{escape_attr, escape_text};
use crate::node::NodeEdit;
use crate::observability::messages::helper::RequiredInputMissing;
use crate::observability::messages::StructuredLog;
use crate::traits::{HelperInput, TagHelper};

const TITLE: &str = "title";
const DESCRIPTION: &str = "description";
const KEYWORDS: &str = "keywords";
const CANONICAL: &str = "canonical";
const OG_IMAGE: &str = "og-image";
const OG_TYPE: &str = "og-type";
const TWITTER_CARD: &str = "twitter-card";
const ROBOTS: &str = "robots";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeoMetaOptions {
    pub site_name: Option<String>,
}

/// `<seo-meta>` - expands into the document head tags for a page.
///
/// The wrapper is stripped and replaced by `<title>`, standard meta tags, a
/// canonical link and the Open Graph and Twitter card equivalents.
pub struct SeoMetaHelper {
    descriptor: HelperDescriptor,
    site_name: Option<String>,
}

fn meta(key_attr: &str, key: &str, value: &str) -> String {
    format!("<meta {}=\"{}\" content=\"{}\">", key_attr, key, escape_attr(value))
}

impl SeoMetaHelper {
    pub fn new() -> Self {
        Self {
            descriptor: HelperDescriptor::new(
                "seo_meta",
                vec![TargetPredicate::tag("seo-meta")],
                vec![
                    AttributeSpec::new(TITLE, InputKind::Text),
                    AttributeSpec::new(DESCRIPTION, InputKind::Text),
                    AttributeSpec::new(KEYWORDS, InputKind::List(',')),
                    AttributeSpec::new(CANONICAL, InputKind::Text),
                    AttributeSpec::new(OG_IMAGE, InputKind::Text),
                    AttributeSpec::new(OG_TYPE, InputKind::Text),
                    AttributeSpec::new(TWITTER_CARD, InputKind::Text),
                    AttributeSpec::new(ROBOTS, InputKind::Text),
                ],
            ),
            site_name: None,
        }
    }

    pub fn with_site_name(mut self, site_name: impl Into<String>) -> Self {
        self.site_name = Some(site_name.into());
        self
    }

    pub fn from_options(options: SeoMetaOptions) -> Self {
        match options.site_name.filter(|s| !s.trim().is_empty()) {
            Some(site_name) => Self::new().with_site_name(site_name),
            None => Self::new(),
        }
    }
}

impl Default for SeoMetaHelper {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TagHelper for SeoMetaHelper {
    fn descriptor(&self) -> &HelperDescriptor {
        &self.descriptor
    }

    async fn transform(&self, input: HelperInput<'_>) -> Result<NodeEdit, ProcessError> {
        let inputs = input.inputs;
        let title = inputs.text(TITLE);
        let description = inputs.text(DESCRIPTION);

        if title.is_none() && description.is_none() {
            RequiredInputMissing {
                helper: self.descriptor.name,
                attribute: TITLE,
            }
            .log();
            return Ok(NodeEdit::suppressed());
        }

        let canonical = inputs.text(CANONICAL);
        let image = inputs.text(OG_IMAGE);
        let mut tags = Vec::new();

        if let Some(title) = title {
            tags.push(format!("<title>{}</title>", escape_text(title)));
        }
        if let Some(description) = description {
            tags.push(meta("name", "description", description));
        }
        if let Some(keywords) = inputs.list(KEYWORDS) {
            tags.push(meta("name", "keywords", &keywords.join(", ")));
        }
        if let Some(robots) = inputs.text(ROBOTS) {
            tags.push(meta("name", "robots", robots));
        }
        if let Some(canonical) = canonical {
            tags.push(format!("<link rel=\"canonical\" href=\"{}\">", escape_attr(canonical)));
        }

        // Open Graph
        if let Some(title) = title {
            tags.push(meta("property", "og:title", title));
        }
        if let Some(description) = description {
            tags.push(meta("property", "og:description", description));
        }
        tags.push(meta("property", "og:type", inputs.text(OG_TYPE).unwrap_or("website")));
        if let Some(canonical) = canonical {
            tags.push(meta("property", "og:url", canonical));
        }
        if let Some(image) = image {
            tags.push(meta("property", "og:image", image));
        }
        if let Some(site_name) = &self.site_name {
            tags.push(meta("property", "og:site_name", site_name));
        }

        // Twitter
        let default_card = if image.is_some() { "summary_large_image" } else { "summary" };
        tags.push(meta("name", "twitter:card", inputs.text(TWITTER_CARD).unwrap_or(default_card)));
        if let Some(title) = title {
            tags.push(meta("name", "twitter:title", title));
        }
        if let Some(description) = description {
            tags.push(meta("name", "twitter:description", description));
        }
        if let Some(image) = image {
            tags.push(meta("name", "twitter:image", image));
        }

        Ok(NodeEdit::new().strip_tag().html_content(tags.join("\n")))
    }
}
