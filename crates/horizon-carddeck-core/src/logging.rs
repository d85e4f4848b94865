//! Logging facilities for Horizon CardDeck.
//!
//! Horizon CardDeck uses the `tracing` crate for instrumentation. To see
//! logs, install a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! The [`targets`] constants can be combined with `tracing` filter
//! directives to scope logs to a single subsystem, e.g.
//! `horizon_carddeck::content=trace`.

/// Target names for log filtering.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "horizon_carddeck_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_carddeck_core::signal";
    /// Deferred queue target.
    pub const DEFERRED: &str = "horizon_carddeck_core::deferred";
    /// Content lifecycle target (main crate).
    pub const CONTENT: &str = "horizon_carddeck::content";
    /// View model target (main crate).
    pub const MODEL: &str = "horizon_carddeck::model";
    /// Data provider plumbing target (main crate).
    pub const DATA: &str = "horizon_carddeck::data";
}
