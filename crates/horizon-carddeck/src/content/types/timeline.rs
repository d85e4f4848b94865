//! Timeline content.
//!
//! A chronological feed of templated items. Resolution of this type
//! requires the timeline feature library.

use crate::config::{ContentConfiguration, ItemTemplate};
use crate::content::base::BaseContent;
use crate::content::{CardContent, ContentType};
use crate::error::ContentResult;
use crate::model::resolve_placeholders;

/// One resolved timeline entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineItemView {
    /// Resolved title text.
    pub title: String,
    /// Resolved timestamp text, if the template declares one.
    pub date_time: Option<String>,
    /// Resolved description, if the template declares one.
    pub description: Option<String>,
    /// Resolved icon source, if the template declares one.
    pub icon: Option<String>,
}

/// Timeline content implementation.
pub struct TimelineContent {
    base: BaseContent,
    template: Option<ItemTemplate>,
}

impl TimelineContent {
    /// Create an unconfigured timeline content.
    pub fn new() -> Self {
        Self {
            base: BaseContent::new(),
            template: None,
        }
    }

    /// The item template extracted from the configuration, if any.
    pub fn template(&self) -> Option<&ItemTemplate> {
        self.template.as_ref()
    }

    /// The entries of the bound collection, resolved through the template.
    pub fn current_items(&self) -> Vec<TimelineItemView> {
        let Some(template) = &self.template else {
            return Vec::new();
        };
        let Some(context) = self.base.binding_context() else {
            return Vec::new();
        };

        context
            .items()
            .iter()
            .map(|scope| TimelineItemView {
                title: template
                    .title
                    .as_deref()
                    .map(|t| resolve_placeholders(t, scope))
                    .unwrap_or_default(),
                date_time: template
                    .date_time
                    .as_deref()
                    .map(|t| resolve_placeholders(t, scope)),
                description: template
                    .description
                    .as_deref()
                    .map(|t| resolve_placeholders(t, scope)),
                icon: template
                    .icon
                    .as_ref()
                    .and_then(|icon| icon.src.as_deref())
                    .map(|t| resolve_placeholders(t, scope)),
            })
            .collect()
    }
}

impl Default for TimelineContent {
    fn default() -> Self {
        Self::new()
    }
}

impl CardContent for TimelineContent {
    fn content_type(&self) -> ContentType {
        ContentType::Timeline
    }

    fn base(&self) -> &BaseContent {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseContent {
        &mut self.base
    }

    fn apply_configuration(&mut self, configuration: &ContentConfiguration) -> ContentResult<()> {
        self.template = configuration.item.clone();
        Ok(())
    }

    fn release_content(&mut self) {
        self.template = None;
    }
}
