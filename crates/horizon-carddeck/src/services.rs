//! Service manager.
//!
//! The service manager is the shared, read-only environment a card hands to
//! every content instance it creates: the data-provider factory, the feature
//! loader, and the deferred queue that carries post-render notifications.
//! It must be installed on a content instance before its configuration,
//! because applying a configuration is what creates the data provider.
//!
//! # Example
//!
//! ```
//! use horizon_carddeck::features::StaticFeatureLoader;
//! use horizon_carddeck::services::ServiceManager;
//!
//! let services = ServiceManager::builder()
//!     .with_feature_loader(StaticFeatureLoader::all())
//!     .build();
//!
//! // After each render pass, the owning container flushes deferred work:
//! services.process_deferred();
//! ```

use std::sync::Arc;

use horizon_carddeck_core::SharedDeferredQueue;

use crate::data::DataProviderFactory;
use crate::features::FeatureLoader;

/// Shared services for the content instances of one card.
///
/// Cheap to share: hand it out as `Arc<ServiceManager>`. All parts are
/// read-only after construction.
pub struct ServiceManager {
    provider_factory: Option<Arc<dyn DataProviderFactory>>,
    feature_loader: Option<Arc<dyn FeatureLoader>>,
    deferred: Arc<SharedDeferredQueue>,
}

impl ServiceManager {
    /// Start building a service manager.
    pub fn builder() -> ServiceManagerBuilder {
        ServiceManagerBuilder::default()
    }

    /// The installed data-provider factory, if any.
    ///
    /// Without a factory, no content instance of this card owns a provider;
    /// they all bind against propagated models.
    pub fn provider_factory(&self) -> Option<&Arc<dyn DataProviderFactory>> {
        self.provider_factory.as_ref()
    }

    /// The installed feature loader, if any.
    ///
    /// Without a loader, content types that require a feature library fail
    /// to resolve.
    pub fn feature_loader(&self) -> Option<&Arc<dyn FeatureLoader>> {
        self.feature_loader.as_ref()
    }

    /// The deferred queue shared by all content instances of this card.
    pub fn deferred_queue(&self) -> &Arc<SharedDeferredQueue> {
        &self.deferred
    }

    /// Drain the deferred queue.
    ///
    /// The owning container calls this once per render pass, after the
    /// current batch of events has been processed; deferred `updated`
    /// signals fire here. Returns the number of closures that ran.
    pub fn process_deferred(&self) -> usize {
        self.deferred.drain()
    }
}

impl Default for ServiceManager {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for [`ServiceManager`].
#[derive(Default)]
pub struct ServiceManagerBuilder {
    provider_factory: Option<Arc<dyn DataProviderFactory>>,
    feature_loader: Option<Arc<dyn FeatureLoader>>,
    deferred: Option<Arc<SharedDeferredQueue>>,
}

impl ServiceManagerBuilder {
    /// Install a data-provider factory.
    pub fn with_provider_factory<F>(mut self, factory: F) -> Self
    where
        F: DataProviderFactory + 'static,
    {
        self.provider_factory = Some(Arc::new(factory));
        self
    }

    /// Install an already-shared data-provider factory.
    pub fn with_shared_provider_factory(mut self, factory: Arc<dyn DataProviderFactory>) -> Self {
        self.provider_factory = Some(factory);
        self
    }

    /// Install a feature loader.
    pub fn with_feature_loader<L>(mut self, loader: L) -> Self
    where
        L: FeatureLoader + 'static,
    {
        self.feature_loader = Some(Arc::new(loader));
        self
    }

    /// Install an already-shared feature loader.
    pub fn with_shared_feature_loader(mut self, loader: Arc<dyn FeatureLoader>) -> Self {
        self.feature_loader = Some(loader);
        self
    }

    /// Use an existing deferred queue instead of creating a fresh one.
    ///
    /// Lets several cards share one post-render flush.
    pub fn with_deferred_queue(mut self, queue: Arc<SharedDeferredQueue>) -> Self {
        self.deferred = Some(queue);
        self
    }

    /// Finish building.
    pub fn build(self) -> ServiceManager {
        ServiceManager {
            provider_factory: self.provider_factory,
            feature_loader: self.feature_loader,
            deferred: self.deferred.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::features::StaticFeatureLoader;

    #[test]
    fn test_default_manager_has_no_services() {
        let services = ServiceManager::default();
        assert!(services.provider_factory().is_none());
        assert!(services.feature_loader().is_none());
    }

    #[test]
    fn test_builder_installs_feature_loader() {
        let services = ServiceManager::builder()
            .with_feature_loader(StaticFeatureLoader::all())
            .build();
        assert!(services.feature_loader().is_some());
    }

    #[test]
    fn test_process_deferred_drains_queue() {
        let services = ServiceManager::default();
        let count = Arc::new(AtomicUsize::new(0));

        let count_clone = count.clone();
        services.deferred_queue().post(move || {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(services.process_deferred(), 1);
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(services.process_deferred(), 0);
    }

    #[test]
    fn test_shared_deferred_queue() {
        let queue = Arc::new(SharedDeferredQueue::new());
        let services = ServiceManager::builder()
            .with_deferred_queue(queue.clone())
            .build();

        queue.post(|| {});
        assert_eq!(services.process_deferred(), 1);
    }
}
