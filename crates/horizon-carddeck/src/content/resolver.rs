//! Content resolution.
//!
//! [`create`] is the sole construction API for content instances: it parses
//! the type tag, awaits any required feature library, constructs the
//! implementation through the registry, and wires the service manager and
//! configuration into the fresh instance - in that order, because applying
//! the configuration is what creates the data provider.
//!
//! All failures travel through the returned `ContentResult`; resolution
//! never panics into the caller.

use std::sync::Arc;

use crate::config::ContentConfiguration;
use crate::error::{ContentError, ContentResult};
use crate::services::ServiceManager;

use super::registry::ContentRegistry;
use super::{CardContent, ContentType};

/// Resolve a type tag into a configured content instance.
///
/// Uses the built-in content registry; see [`create_with_registry`] to
/// resolve against a customized one.
///
/// # Errors
///
/// - [`ContentError::UnsupportedType`] for a tag outside the supported set
/// - [`ContentError::FeatureUnavailable`] when the type's feature library
///   cannot be loaded
/// - [`ContentError::Configuration`] when the instance rejects the
///   configuration
pub async fn create(
    type_tag: &str,
    configuration: Option<Arc<ContentConfiguration>>,
    services: Arc<ServiceManager>,
) -> ContentResult<Box<dyn CardContent>> {
    create_with_registry(&ContentRegistry::with_builtins(), type_tag, configuration, services)
        .await
}

/// Resolve a type tag against a specific registry.
pub async fn create_with_registry(
    registry: &ContentRegistry,
    type_tag: &str,
    configuration: Option<Arc<ContentConfiguration>>,
    services: Arc<ServiceManager>,
) -> ContentResult<Box<dyn CardContent>> {
    let Some(content_type) = ContentType::from_tag(type_tag) else {
        tracing::error!(
            target: "horizon_carddeck::content",
            tag = type_tag,
            "content type is not supported"
        );
        return Err(ContentError::UnsupportedType(type_tag.to_string()));
    };

    if let Some(library) = content_type.required_library() {
        let loaded = match services.feature_loader() {
            Some(loader) => loader.load(library).await,
            None => false,
        };
        if !loaded {
            return Err(ContentError::FeatureUnavailable { content_type });
        }
    }

    let mut content = registry.construct(content_type).ok_or_else(|| {
        ContentError::Configuration(format!(
            "no constructor registered for {content_type} content"
        ))
    })?;

    // Services before configuration: the configuration step asks the
    // manager's factory for the data provider.
    content.base_mut().set_service_manager(Arc::clone(&services));
    content.set_configuration(configuration)?;

    Ok(content)
}
