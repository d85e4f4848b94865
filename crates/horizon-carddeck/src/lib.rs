//! Horizon CardDeck - a declarative card content framework.
//!
//! A card describes its content with a type tag and a JSON configuration;
//! CardDeck resolves the tag to a concrete content implementation, wires a
//! data provider through the card's service manager, binds fetched data into
//! a JSON view model, and reports busy/error state - everything a card host
//! needs between "here is a manifest" and "render this".
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use horizon_carddeck::config::ContentConfiguration;
//! use horizon_carddeck::content::{self, CardContent};
//! use horizon_carddeck::features::StaticFeatureLoader;
//! use horizon_carddeck::services::ServiceManager;
//!
//! # async fn example() -> horizon_carddeck::error::ContentResult<()> {
//! let services = Arc::new(
//!     ServiceManager::builder()
//!         .with_feature_loader(StaticFeatureLoader::all())
//!         .build(),
//! );
//!
//! let configuration = Arc::new(ContentConfiguration::from_json(serde_json::json!({
//!     "maxItems": 4,
//!     "item": { "title": "{Name}" }
//! }))?);
//!
//! let content = content::create("list", Some(configuration), services.clone()).await?;
//!
//! // Layout hint before any data is visible
//! let height = content::min_height(
//!     content.content_type(),
//!     content.base().configuration().map(|c| c.as_ref()),
//! );
//! assert_eq!(height.to_string(), "12rem");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod content;
pub mod data;
pub mod error;
pub mod features;
pub mod model;
pub mod services;

pub use horizon_carddeck_core::*;

pub use config::ContentConfiguration;
pub use content::{BaseContent, CardContent, ContentType, create, min_height};
pub use error::{ContentError, ContentResult};
pub use services::ServiceManager;
