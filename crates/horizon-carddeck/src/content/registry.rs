//! Content type registry.
//!
//! Maps each [`ContentType`] to the constructor that builds its
//! implementation. The built-in set covers every supported type; hosts may
//! override individual entries (for example to swap in a custom list
//! implementation) before handing the registry to
//! [`create_with_registry`](crate::content::create_with_registry).

use std::collections::HashMap;

use super::types::{
    AnalyticalContent, ComponentContent, ListContent, ObjectContent, TableContent, TimelineContent,
};
use super::{CardContent, ContentType};

/// A constructor producing a fresh, unconfigured content instance.
pub type ContentConstructor = Box<dyn Fn() -> Box<dyn CardContent> + Send + Sync>;

/// Registry of content constructors, keyed by the closed type enum.
pub struct ContentRegistry {
    constructors: HashMap<ContentType, ContentConstructor>,
}

impl ContentRegistry {
    /// An empty registry with no constructors.
    pub fn empty() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// A registry with the built-in constructor for every supported type.
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        registry.register(ContentType::List, || Box::new(ListContent::new()));
        registry.register(ContentType::Table, || Box::new(TableContent::new()));
        registry.register(ContentType::Object, || Box::new(ObjectContent::new()));
        registry.register(ContentType::Analytical, || {
            Box::new(AnalyticalContent::new())
        });
        registry.register(ContentType::Timeline, || Box::new(TimelineContent::new()));
        registry.register(ContentType::Component, || Box::new(ComponentContent::new()));
        registry
    }

    /// Register (or replace) the constructor for `content_type`.
    pub fn register<F>(&mut self, content_type: ContentType, constructor: F)
    where
        F: Fn() -> Box<dyn CardContent> + Send + Sync + 'static,
    {
        self.constructors
            .insert(content_type, Box::new(constructor));
    }

    /// Whether a constructor is registered for `content_type`.
    pub fn contains(&self, content_type: ContentType) -> bool {
        self.constructors.contains_key(&content_type)
    }

    /// Construct a fresh instance of `content_type`, if registered.
    pub fn construct(&self, content_type: ContentType) -> Option<Box<dyn CardContent>> {
        self.constructors
            .get(&content_type)
            .map(|constructor| constructor())
    }
}

impl Default for ContentRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_cover_every_type() {
        let registry = ContentRegistry::with_builtins();
        for content_type in ContentType::ALL {
            assert!(registry.contains(content_type), "missing {content_type}");
            let content = registry.construct(content_type).unwrap();
            assert_eq!(content.content_type(), content_type);
        }
    }

    #[test]
    fn test_empty_registry_constructs_nothing() {
        let registry = ContentRegistry::empty();
        assert!(registry.construct(ContentType::List).is_none());
    }

    #[test]
    fn test_register_overrides_builtin() {
        let mut registry = ContentRegistry::with_builtins();
        // Stand in a table where a list was asked for, to make the override
        // observable.
        registry.register(ContentType::List, || Box::new(TableContent::new()));
        let content = registry.construct(ContentType::List).unwrap();
        assert_eq!(content.content_type(), ContentType::Table);
    }
}
