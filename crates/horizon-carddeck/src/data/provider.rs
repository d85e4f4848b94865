//! Data provider contract.
//!
//! A data provider is the externally owned handle a content instance
//! subscribes to for its data. The transport behind it (HTTP, service
//! protocol, static payload) is out of scope here; this module only fixes the
//! surface the content lifecycle consumes.

use horizon_carddeck_core::Signal;
use serde_json::Value;

/// The observable surface of a data provider.
///
/// A provider exposes two events and one action:
///
/// - `data_changed` carries the full data payload of a successful fetch
/// - `error` carries a human-readable failure message
/// - [`trigger_data_update`](Self::trigger_data_update) starts a fetch;
///   exactly one of the two events answers each trigger
///
/// At most one provider is alive per content instance at a time. A provider
/// that has been [`destroy`](Self::destroy)ed should stop delivering events;
/// the content lifecycle additionally ignores events from superseded
/// providers, so late deliveries are harmless.
pub trait DataProvider: Send + Sync {
    /// The signal fired with the payload of each successful fetch.
    fn data_changed(&self) -> &Signal<Value>;

    /// The signal fired with a message when a fetch fails.
    fn error(&self) -> &Signal<String>;

    /// Start a data fetch.
    fn trigger_data_update(&self);

    /// Release the provider's resources. Called when the provider is
    /// superseded by a re-configuration or its owner is destroyed.
    fn destroy(&self);
}

/// The signal pair every provider implementation carries.
///
/// Implementations embed this and return references from the trait's signal
/// accessors.
///
/// # Example
///
/// ```
/// use horizon_carddeck::data::{DataProvider, DataProviderSignals};
/// use horizon_carddeck_core::Signal;
/// use serde_json::Value;
///
/// struct InlineProvider {
///     signals: DataProviderSignals,
///     payload: Value,
/// }
///
/// impl DataProvider for InlineProvider {
///     fn data_changed(&self) -> &Signal<Value> {
///         &self.signals.data_changed
///     }
///     fn error(&self) -> &Signal<String> {
///         &self.signals.error
///     }
///     fn trigger_data_update(&self) {
///         self.signals.data_changed.emit(self.payload.clone());
///     }
///     fn destroy(&self) {}
/// }
/// ```
pub struct DataProviderSignals {
    /// Fired with the payload of each successful fetch.
    pub data_changed: Signal<Value>,
    /// Fired with a message when a fetch fails.
    pub error: Signal<String>,
}

impl DataProviderSignals {
    /// Create a fresh, unconnected signal pair.
    pub fn new() -> Self {
        Self {
            data_changed: Signal::new(),
            error: Signal::new(),
        }
    }
}

impl Default for DataProviderSignals {
    fn default() -> Self {
        Self::new()
    }
}
