//! Core systems for Horizon CardDeck.
//!
//! This crate provides the foundational components of the Horizon CardDeck
//! card content framework:
//!
//! - **Signal/Slot System**: Type-safe notification between content
//!   instances, data providers, and models
//! - **Deferred Queue**: Execution deferred past the current turn and any
//!   pending render flush
//! - **Logging**: `tracing` target constants for per-subsystem filtering
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_carddeck_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Deferred Queue Example
//!
//! ```
//! use horizon_carddeck_core::SharedDeferredQueue;
//! use std::sync::Arc;
//!
//! let queue = Arc::new(SharedDeferredQueue::new());
//!
//! // Post work to run after the current turn
//! queue.post(|| println!("deferred"));
//!
//! // The owning container drains once per render pass
//! queue.drain();
//! ```

mod deferred;
pub mod logging;
pub mod signal;

pub use deferred::{DeferredId, DeferredQueue, SharedDeferredQueue};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
