//! Object content.
//!
//! Labeled attribute groups describing a single object. Unlike list and
//! table content, the binding context addresses one object, not a
//! collection; every group attribute resolves against that object.

use serde_json::Value;

use crate::config::{ContentConfiguration, ObjectGroup};
use crate::content::base::BaseContent;
use crate::content::{CardContent, ContentType};
use crate::error::ContentResult;
use crate::model::resolve_placeholders;

/// One resolved label/value attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectAttributeView {
    /// Attribute label (not bound, taken verbatim from the template).
    pub label: String,
    /// Resolved attribute value.
    pub value: String,
}

/// One resolved attribute group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectGroupView {
    /// Group heading.
    pub title: String,
    /// Resolved attributes, in template order.
    pub attributes: Vec<ObjectAttributeView>,
}

/// Object content implementation.
pub struct ObjectContent {
    base: BaseContent,
    groups: Vec<ObjectGroup>,
}

impl ObjectContent {
    /// Create an unconfigured object content.
    pub fn new() -> Self {
        Self {
            base: BaseContent::new(),
            groups: Vec::new(),
        }
    }

    /// The group templates extracted from the configuration.
    pub fn groups(&self) -> &[ObjectGroup] {
        &self.groups
    }

    /// The attribute groups resolved against the bound object.
    pub fn current_groups(&self) -> Vec<ObjectGroupView> {
        let scope = self
            .base
            .binding_context()
            .and_then(|context| context.value())
            .unwrap_or(Value::Null);

        self.groups
            .iter()
            .map(|group| ObjectGroupView {
                title: group.title.clone().unwrap_or_default(),
                attributes: group
                    .items
                    .iter()
                    .map(|attribute| ObjectAttributeView {
                        label: attribute.label.clone().unwrap_or_default(),
                        value: attribute
                            .value
                            .as_deref()
                            .map(|template| resolve_placeholders(template, &scope))
                            .unwrap_or_default(),
                    })
                    .collect(),
            })
            .collect()
    }
}

impl Default for ObjectContent {
    fn default() -> Self {
        Self::new()
    }
}

impl CardContent for ObjectContent {
    fn content_type(&self) -> ContentType {
        ContentType::Object
    }

    fn base(&self) -> &BaseContent {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseContent {
        &mut self.base
    }

    fn apply_configuration(&mut self, configuration: &ContentConfiguration) -> ContentResult<()> {
        self.groups = configuration.groups.clone();
        Ok(())
    }

    fn release_content(&mut self) {
        self.groups.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::model::JsonModel;

    #[test]
    fn test_groups_resolve_against_bound_object() {
        let mut content = ObjectContent::new();
        let configuration = Arc::new(
            ContentConfiguration::from_json(json!({
                "data": { "path": "/employee" },
                "groups": [
                    {
                        "title": "Contact Details",
                        "items": [
                            { "label": "Name", "value": "{firstName} {lastName}" },
                            { "label": "Phone", "value": "{phone}" }
                        ]
                    }
                ]
            }))
            .unwrap(),
        );
        content.set_configuration(Some(configuration)).unwrap();
        content.base_mut().set_propagated_model(Arc::new(JsonModel::with_data(json!({
            "employee": {
                "firstName": "Donna",
                "lastName": "Moore",
                "phone": "+1 202 555 5555"
            }
        }))));

        let groups = content.current_groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].title, "Contact Details");
        assert_eq!(
            groups[0].attributes,
            vec![
                ObjectAttributeView {
                    label: "Name".to_string(),
                    value: "Donna Moore".to_string(),
                },
                ObjectAttributeView {
                    label: "Phone".to_string(),
                    value: "+1 202 555 5555".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_groups_without_model_resolve_empty_values() {
        let mut content = ObjectContent::new();
        let configuration = Arc::new(
            ContentConfiguration::from_json(json!({
                "groups": [
                    { "title": "G", "items": [{ "label": "L", "value": "{x}" }] }
                ]
            }))
            .unwrap(),
        );
        content.set_configuration(Some(configuration)).unwrap();

        let groups = content.current_groups();
        assert_eq!(groups[0].attributes[0].value, "");
    }
}
