//! View model layer.
//!
//! - [`JsonModel`]: the bound JSON model behind a content instance
//! - [`BindingContext`]: a model plus the root path the content binds to
//! - [`resolve_placeholders`]: `{path}` template substitution

pub mod binding;
pub mod json_model;

pub use binding::{BindingContext, ROOT_PATH, resolve_placeholders};
pub use json_model::{DEFAULT_SIZE_LIMIT, JsonModel};
