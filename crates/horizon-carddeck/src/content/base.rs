//! Shared content lifecycle state.
//!
//! [`BaseContent`] owns everything the content types have in common:
//! configuration intake, data-provider attachment, the bound model, busy and
//! error signaling, and teardown. Concrete content types embed it and add
//! their own aggregate on top (see [`crate::content::CardContent`]).

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use horizon_carddeck_core::{SharedDeferredQueue, Signal};
use parking_lot::Mutex;
use serde_json::Value;

use crate::config::{ContentConfiguration, DataSettings};
use crate::data::DataProvider;
use crate::error::ContentResult;
use crate::model::{BindingContext, JsonModel, ROOT_PATH};
use crate::services::ServiceManager;

/// Payload of the `error` signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEvent {
    /// Human-readable message suitable for diagnostics/logging.
    pub log_message: String,
}

/// State shared between the content instance and its provider callbacks.
///
/// Provider events arrive through closures that outlive any one borrow of
/// the instance, so the pieces they touch live here behind an `Arc`.
struct ContentShared {
    /// Model owned by this instance (created when a provider is attached).
    own_model: Mutex<Option<Arc<JsonModel>>>,
    /// Model propagated from the owning card (used when no provider exists).
    propagated_model: Mutex<Option<Arc<JsonModel>>>,
    /// Whether a data update is in flight.
    busy: AtomicBool,
    /// Provider attachment generation. Callbacks carry the generation they
    /// were attached under; events from superseded generations are dropped.
    generation: AtomicU64,
    /// Fired (deferred) after each successful data refresh.
    updated: Signal<()>,
    /// Fired with a message when the provider reports a failure.
    error: Signal<ErrorEvent>,
    /// Fired when the busy state flips.
    busy_changed: Signal<bool>,
}

impl ContentShared {
    fn new() -> Self {
        Self {
            own_model: Mutex::new(None),
            propagated_model: Mutex::new(None),
            busy: AtomicBool::new(false),
            generation: AtomicU64::new(0),
            updated: Signal::new(),
            error: Signal::new(),
            busy_changed: Signal::new(),
        }
    }

    /// Advance to a new generation, invalidating all earlier callbacks.
    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    fn set_busy(&self, busy: bool) {
        if self.busy.swap(busy, Ordering::SeqCst) != busy {
            self.busy_changed.emit(busy);
        }
    }

    /// Handle a successful fetch: replace the model wholesale, clear busy,
    /// and post the `updated` emission past the current turn. Every call
    /// posts its own emission; overlapping refreshes are never coalesced.
    fn apply_data(shared: &Arc<Self>, payload: Value, queue: &SharedDeferredQueue) {
        let model = shared.own_model.lock().clone();
        if let Some(model) = model {
            model.set_data(payload);
        }
        shared.set_busy(false);

        let posted = Arc::clone(shared);
        queue.post(move || posted.updated.emit(()));
    }

    /// Handle a failed fetch: clear busy and raise the error signal. The
    /// model keeps its last-known (possibly stale) value.
    fn report_error(&self, message: &str) {
        self.set_busy(false);
        tracing::error!(
            target: "horizon_carddeck::content",
            %message,
            "data provider reported an error"
        );
        self.error.emit(ErrorEvent {
            log_message: message.to_string(),
        });
    }
}

/// The content lifecycle coordinator.
///
/// One `BaseContent` lives inside every content instance. It takes the
/// declarative configuration, wires a data provider through the service
/// manager's factory, maintains the bound model and busy/error state, and
/// tears everything down again.
///
/// # Signals
///
/// - [`updated`](Self::updated): after each successful data refresh,
///   deferred past the current turn (and any pending render flush)
/// - [`error`](Self::error): provider failure, with a log message
/// - [`busy_changed`](Self::busy_changed): busy state flips
pub struct BaseContent {
    shared: Arc<ContentShared>,
    services: Option<Arc<ServiceManager>>,
    configuration: Option<Arc<ContentConfiguration>>,
    provider: Option<Box<dyn DataProvider>>,
    binding_path: String,
}

impl BaseContent {
    /// Create an unconfigured instance.
    pub fn new() -> Self {
        Self {
            shared: Arc::new(ContentShared::new()),
            services: None,
            configuration: None,
            provider: None,
            binding_path: ROOT_PATH.to_string(),
        }
    }

    /// Store the service manager. Pure assignment, no side effects.
    ///
    /// Must happen before [`set_configuration`](Self::set_configuration):
    /// applying a configuration asks the manager's factory for a data
    /// provider.
    pub fn set_service_manager(&mut self, services: Arc<ServiceManager>) {
        self.services = Some(services);
    }

    /// The stored service manager, if any.
    pub fn service_manager(&self) -> Option<&Arc<ServiceManager>> {
        self.services.as_ref()
    }

    /// Replace the configuration.
    ///
    /// `None` stores the absence and returns without touching the data
    /// binding. Otherwise the previous provider (if any) is destroyed, a new
    /// one is requested from the factory, and the resolved data path becomes
    /// the root binding context. `maxItems` propagates to the active model's
    /// size ceiling.
    pub fn set_configuration(
        &mut self,
        configuration: Option<Arc<ContentConfiguration>>,
    ) -> ContentResult<()> {
        self.configuration = configuration.clone();

        let Some(configuration) = configuration else {
            return Ok(());
        };

        self.bind_data(configuration.data.as_ref())?;

        if let Some(max_items) = configuration.max_items {
            if let Some(model) = self.model() {
                model.set_size_limit(max_items);
            }
        }

        Ok(())
    }

    /// The last configuration set, or `None`.
    pub fn configuration(&self) -> Option<&Arc<ContentConfiguration>> {
        self.configuration.as_ref()
    }

    /// Request data per `settings` and bind the resolved path.
    fn bind_data(&mut self, settings: Option<&DataSettings>) -> ContentResult<()> {
        let path = settings
            .and_then(|s| s.path.as_deref())
            .unwrap_or(ROOT_PATH)
            .to_string();

        // Supersede first: events still in flight from the old provider
        // carry a stale generation and are dropped by the handlers below.
        let generation = self.shared.next_generation();
        if let Some(previous) = self.provider.take() {
            previous.destroy();
        }

        self.provider = match (settings, self.services.as_ref()) {
            (Some(settings), Some(services)) => services
                .provider_factory()
                .and_then(|factory| factory.create(settings, services)),
            _ => None,
        };

        if let (Some(provider), Some(services)) = (self.provider.as_deref(), &self.services) {
            self.shared.set_busy(true);

            // A provider-backed instance owns its model, detached from
            // anything the card propagates.
            *self.shared.own_model.lock() = Some(Arc::new(JsonModel::new()));

            let queue = Arc::clone(services.deferred_queue());
            let shared = Arc::clone(&self.shared);
            provider.data_changed().connect(move |payload| {
                if !shared.is_current(generation) {
                    return;
                }
                ContentShared::apply_data(&shared, payload.clone(), &queue);
            });

            let shared = Arc::clone(&self.shared);
            provider.error().connect(move |message| {
                if !shared.is_current(generation) {
                    return;
                }
                shared.report_error(message);
            });

            tracing::debug!(
                target: "horizon_carddeck::content",
                path = %path,
                "attached data provider"
            );
            provider.trigger_data_update();
        } else {
            // No provider: the in-flight window (if any) died with the old
            // provider, and the propagated model stays in place.
            self.shared.set_busy(false);
        }

        self.binding_path = path;
        Ok(())
    }

    /// Install the model propagated from the owning card.
    ///
    /// Used only while no provider is attached; a provider-backed instance
    /// binds against its own model.
    pub fn set_propagated_model(&mut self, model: Arc<JsonModel>) {
        *self.shared.propagated_model.lock() = Some(model);
    }

    /// The active model: this instance's own model if a provider is
    /// attached, otherwise the propagated one.
    pub fn model(&self) -> Option<Arc<JsonModel>> {
        self.shared
            .own_model
            .lock()
            .clone()
            .or_else(|| self.shared.propagated_model.lock().clone())
    }

    /// The current root binding path.
    pub fn binding_path(&self) -> &str {
        &self.binding_path
    }

    /// The root binding context (active model + binding path), if a model
    /// is available.
    pub fn binding_context(&self) -> Option<BindingContext> {
        self.model()
            .map(|model| BindingContext::new(model, self.binding_path.clone()))
    }

    /// Whether a data update is in flight.
    pub fn is_busy(&self) -> bool {
        self.shared.busy.load(Ordering::SeqCst)
    }

    /// Signal fired after each successful data refresh.
    ///
    /// Emission is posted to the service manager's deferred queue: it is
    /// never observable inside the call stack that delivered the data, only
    /// after the owning container's next deferred flush. One emission per
    /// refresh, never coalesced.
    pub fn updated(&self) -> &Signal<()> {
        &self.shared.updated
    }

    /// Signal fired when the provider reports a failure.
    pub fn error(&self) -> &Signal<ErrorEvent> {
        &self.shared.error
    }

    /// Signal fired when the busy state flips.
    pub fn busy_changed(&self) -> &Signal<bool> {
        &self.shared.busy_changed
    }

    /// Detach the models and destroy the provider.
    ///
    /// Safe to call with nothing attached, and more than once. Concrete
    /// content types release their aggregate first (see
    /// [`CardContent::destroy`](crate::content::CardContent::destroy)).
    pub fn teardown(&mut self) {
        // Invalidate callbacks in case the destroyed provider still flushes.
        self.shared.next_generation();

        *self.shared.own_model.lock() = None;
        *self.shared.propagated_model.lock() = None;

        if let Some(provider) = self.provider.take() {
            provider.destroy();
        }

        self.shared.set_busy(false);
    }
}

impl Default for BaseContent {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BaseContent {
    fn drop(&mut self) {
        if let Some(provider) = self.provider.take() {
            provider.destroy();
        }
    }
}
