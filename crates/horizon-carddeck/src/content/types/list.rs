//! List content.
//!
//! A vertical list of items produced by applying the configuration's `item`
//! template to each entry of the bound collection.

use crate::config::{ContentConfiguration, ItemTemplate};
use crate::content::base::BaseContent;
use crate::content::{CardContent, ContentType};
use crate::error::ContentResult;
use crate::model::resolve_placeholders;

/// One resolved list item, ready for the host to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItemView {
    /// Resolved title text.
    pub title: String,
    /// Resolved description line, if the template declares one.
    pub description: Option<String>,
    /// Resolved icon source, if the template declares one.
    pub icon: Option<String>,
}

/// List content implementation.
pub struct ListContent {
    base: BaseContent,
    template: Option<ItemTemplate>,
}

impl ListContent {
    /// Create an unconfigured list content.
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

    /// The items of the bound collection, resolved through the template.
    ///
    /// Empty without a template, a model, or data; never longer than the
    /// model's size ceiling.
    pub fn current_items(&self) -> Vec<ListItemView> {
        let Some(template) = &self.template else {
            return Vec::new();
        };
        let Some(context) = self.base.binding_context() else {
            return Vec::new();
        };

        context
            .items()
            .iter()
            .map(|scope| ListItemView {
                title: template
                    .title
                    .as_deref()
                    .map(|t| resolve_placeholders(t, scope))
                    .unwrap_or_default(),
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

impl Default for ListContent {
    fn default() -> Self {
        Self::new()
    }
}

impl CardContent for ListContent {
    fn content_type(&self) -> ContentType {
        ContentType::List
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
