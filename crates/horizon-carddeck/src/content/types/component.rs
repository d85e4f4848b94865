//! Component content.
//!
//! Embeds a host component inside the card. The aggregate is just the
//! component reference; instantiating and rendering the component is the
//! host's business.

use crate::config::ContentConfiguration;
use crate::content::base::BaseContent;
use crate::content::{CardContent, ContentType};
use crate::error::{ContentError, ContentResult};

/// Component content implementation.
pub struct ComponentContent {
    base: BaseContent,
    component: Option<String>,
}

impl ComponentContent {
    /// Create an unconfigured component content.
    pub fn new() -> Self {
        Self {
            base: BaseContent::new(),
            component: None,
        }
    }

    /// The referenced component name, if configured.
    pub fn component(&self) -> Option<&str> {
        self.component.as_deref()
    }
}

impl Default for ComponentContent {
    fn default() -> Self {
        Self::new()
    }
}

impl CardContent for ComponentContent {
    fn content_type(&self) -> ContentType {
        ContentType::Component
    }

    fn base(&self) -> &BaseContent {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseContent {
        &mut self.base
    }

    fn apply_configuration(&mut self, configuration: &ContentConfiguration) -> ContentResult<()> {
        let Some(component) = configuration.component.clone() else {
            return Err(ContentError::Configuration(
                "component content requires a component name".to_string(),
            ));
        };
        self.component = Some(component);
        Ok(())
    }

    fn release_content(&mut self) {
        self.component = None;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;

    #[test]
    fn test_component_reference_extraction() {
        let mut content = ComponentContent::new();
        let configuration = Arc::new(
            ContentConfiguration::from_json(json!({ "component": "acme.dashboard.widget" }))
                .unwrap(),
        );
        content.set_configuration(Some(configuration)).unwrap();
        assert_eq!(content.component(), Some("acme.dashboard.widget"));
    }

    #[test]
    fn test_missing_component_name_is_rejected() {
        let mut content = ComponentContent::new();
        let configuration =
            Arc::new(ContentConfiguration::from_json(json!({ "maxItems": 1 })).unwrap());
        let err = content.set_configuration(Some(configuration)).unwrap_err();
        assert!(matches!(err, ContentError::Configuration(_)));
    }
}
