//! Data provider factory contract.

use crate::config::DataSettings;
use crate::services::ServiceManager;

use super::provider::DataProvider;

/// Builds data providers from the `data` section of a content configuration.
///
/// The factory inspects the settings and decides which provider to build -
/// or that none is needed. Returning `None` is not an error: it means the
/// configuration does not request data this factory handles, and the content
/// instance keeps binding against whatever model its card propagates.
///
/// Installed on the [`ServiceManager`]; the content lifecycle calls it on
/// every (re-)configuration, after destroying the previous provider.
pub trait DataProviderFactory: Send + Sync {
    /// Build a provider for `settings`, or `None` if the settings do not
    /// request one.
    fn create(
        &self,
        settings: &DataSettings,
        services: &ServiceManager,
    ) -> Option<Box<dyn DataProvider>>;
}
