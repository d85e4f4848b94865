//! Optional feature libraries.
//!
//! Some content types depend on capabilities that are not part of every
//! distribution: analytical content needs the charting library, timeline
//! content the timeline library. Loading goes through the [`FeatureLoader`]
//! capability installed on the service manager, so hosts control how (and
//! whether) those libraries are provisioned, and tests can substitute their
//! own loader.

use std::collections::HashSet;
use std::fmt;

use futures_util::FutureExt;
use futures_util::future::BoxFuture;

/// The closed set of optional feature libraries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureLibrary {
    /// Charting support, required by analytical content.
    Charting,
    /// Timeline support, required by timeline content.
    Timeline,
}

impl FeatureLibrary {
    /// The library's canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Charting => "charting",
            Self::Timeline => "timeline",
        }
    }
}

impl fmt::Display for FeatureLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Loads optional feature libraries on demand.
///
/// `load` resolves to `true` once the library is available (loading is
/// idempotent - a second call for an already-loaded library resolves `true`
/// immediately) and `false` if the library cannot be provisioned in this
/// distribution. Loading must not panic; unavailability is a value, not a
/// fault.
pub trait FeatureLoader: Send + Sync {
    /// Load `library`, resolving to whether it is now available.
    fn load(&self, library: FeatureLibrary) -> BoxFuture<'_, bool>;
}

/// A feature loader backed by a fixed set of available libraries.
///
/// This is the default loader for distributions that bundle their feature
/// libraries statically, and doubles as the test substitute.
///
/// # Example
///
/// ```
/// use horizon_carddeck::features::{FeatureLibrary, StaticFeatureLoader};
///
/// // Only charting is bundled
/// let loader = StaticFeatureLoader::none().with_library(FeatureLibrary::Charting);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticFeatureLoader {
    available: HashSet<FeatureLibrary>,
}

impl StaticFeatureLoader {
    /// A loader with every feature library available.
    pub fn all() -> Self {
        Self {
            available: HashSet::from([FeatureLibrary::Charting, FeatureLibrary::Timeline]),
        }
    }

    /// A loader with no feature libraries available.
    pub fn none() -> Self {
        Self::default()
    }

    /// Add `library` to the available set.
    pub fn with_library(mut self, library: FeatureLibrary) -> Self {
        self.available.insert(library);
        self
    }

    /// Whether `library` is in the available set.
    pub fn is_available(&self, library: FeatureLibrary) -> bool {
        self.available.contains(&library)
    }
}

impl FeatureLoader for StaticFeatureLoader {
    fn load(&self, library: FeatureLibrary) -> BoxFuture<'_, bool> {
        let available = self.is_available(library);
        if !available {
            tracing::debug!(
                target: "horizon_carddeck::content",
                library = library.name(),
                "feature library is not part of this distribution"
            );
        }
        std::future::ready(available).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_loader_all() {
        let loader = StaticFeatureLoader::all();
        assert!(loader.load(FeatureLibrary::Charting).await);
        assert!(loader.load(FeatureLibrary::Timeline).await);
    }

    #[tokio::test]
    async fn test_static_loader_partial() {
        let loader = StaticFeatureLoader::none().with_library(FeatureLibrary::Timeline);
        assert!(!loader.load(FeatureLibrary::Charting).await);
        assert!(loader.load(FeatureLibrary::Timeline).await);
    }

    #[tokio::test]
    async fn test_load_is_idempotent() {
        let loader = StaticFeatureLoader::all();
        assert!(loader.load(FeatureLibrary::Charting).await);
        assert!(loader.load(FeatureLibrary::Charting).await);
    }

    #[test]
    fn test_library_names() {
        assert_eq!(FeatureLibrary::Charting.to_string(), "charting");
        assert_eq!(FeatureLibrary::Timeline.to_string(), "timeline");
    }
}
