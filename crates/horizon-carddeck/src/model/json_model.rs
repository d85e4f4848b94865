//! JSON view model.
//!
//! `JsonModel` is the bound model behind a content instance: a JSON document
//! whose root is replaced wholesale on every successful data fetch, plus an
//! item-count ceiling that caps how many array entries the content exposes.
//!
//! Paths into the document are slash separated, matching the `data.path`
//! convention of card configurations: `/`, `/items`, `/orders/0/status`.

use std::sync::atomic::{AtomicUsize, Ordering};

use horizon_carddeck_core::Signal;
use parking_lot::RwLock;
use serde_json::Value;

/// Default ceiling for the number of items exposed from the model.
pub const DEFAULT_SIZE_LIMIT: usize = 100;

/// A mutable JSON data container with wholesale-replace semantics.
///
/// Exactly one `JsonModel` is owned by a content instance once a data
/// provider is attached; instances without a provider bind against a model
/// propagated from the owning card instead.
///
/// # Signals
///
/// - `data_changed`: emitted after every [`set_data`](Self::set_data) call
pub struct JsonModel {
    /// The document root. Replaced as a whole, never patched.
    data: RwLock<Value>,
    /// Ceiling applied by [`items_at`](Self::items_at).
    size_limit: AtomicUsize,
    /// Emitted after the root has been replaced.
    pub data_changed: Signal<()>,
}

impl JsonModel {
    /// Create an empty model (`null` root, default size limit).
    pub fn new() -> Self {
        Self::with_data(Value::Null)
    }

    /// Create a model with an initial root value.
    pub fn with_data(value: Value) -> Self {
        Self {
            data: RwLock::new(value),
            size_limit: AtomicUsize::new(DEFAULT_SIZE_LIMIT),
            data_changed: Signal::new(),
        }
    }

    /// Replace the whole document root and emit `data_changed`.
    pub fn set_data(&self, value: Value) {
        tracing::trace!(target: "horizon_carddeck::model", "replacing model root");
        *self.data.write() = value;
        self.data_changed.emit(());
    }

    /// Clone of the current document root.
    pub fn data(&self) -> Value {
        self.data.read().clone()
    }

    /// Set the item-count ceiling.
    pub fn set_size_limit(&self, limit: usize) {
        self.size_limit.store(limit, Ordering::SeqCst);
    }

    /// The current item-count ceiling.
    pub fn size_limit(&self) -> usize {
        self.size_limit.load(Ordering::SeqCst)
    }

    /// Resolve a slash-separated path to a clone of the value it addresses.
    ///
    /// `/` (or the empty string) addresses the root. Array entries are
    /// addressed by index: `/items/0/name`. Returns `None` if any segment
    /// does not exist.
    pub fn value_at(&self, path: &str) -> Option<Value> {
        let data = self.data.read();
        resolve_path(&data, path).cloned()
    }

    /// The array items addressed by `path`, capped at the size limit.
    ///
    /// Returns an empty vector if the path does not resolve or does not
    /// address an array.
    pub fn items_at(&self, path: &str) -> Vec<Value> {
        let limit = self.size_limit();
        let data = self.data.read();
        match resolve_path(&data, path) {
            Some(Value::Array(items)) => items.iter().take(limit).cloned().collect(),
            _ => Vec::new(),
        }
    }
}

impl Default for JsonModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Walk a slash-separated path through a JSON value.
fn resolve_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => {
                let index: usize = segment.parse().ok()?;
                items.get(index)?
            }
            _ => return None,
        };
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;

    use serde_json::json;

    use super::*;

    #[test]
    fn test_set_data_replaces_wholesale() {
        let model = JsonModel::new();
        model.set_data(json!({ "a": 1, "b": 2 }));
        model.set_data(json!({ "c": 3 }));

        // The previous root is gone entirely, not merged.
        assert_eq!(model.data(), json!({ "c": 3 }));
        assert_eq!(model.value_at("/a"), None);
    }

    #[test]
    fn test_data_changed_emitted_per_replace() {
        let model = JsonModel::new();
        let count = Arc::new(AtomicUsize::new(0));

        let count_clone = count.clone();
        model.data_changed.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        model.set_data(json!([1, 2]));
        model.set_data(json!([3]));
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_value_at_paths() {
        let model = JsonModel::with_data(json!({
            "orders": [
                { "status": "open" },
                { "status": "closed" }
            ]
        }));

        assert_eq!(model.value_at("/orders/1/status"), Some(json!("closed")));
        assert_eq!(model.value_at("/"), Some(model.data()));
        assert_eq!(model.value_at(""), Some(model.data()));
        assert_eq!(model.value_at("/orders/2"), None);
        assert_eq!(model.value_at("/missing"), None);
        // Indexing into a scalar fails.
        assert_eq!(model.value_at("/orders/0/status/deeper"), None);
    }

    #[test]
    fn test_items_at_honors_size_limit() {
        let model = JsonModel::with_data(json!({ "items": [1, 2, 3, 4, 5] }));

        assert_eq!(model.items_at("/items").len(), 5);

        model.set_size_limit(3);
        assert_eq!(model.items_at("/items"), vec![json!(1), json!(2), json!(3)]);
    }

    #[test]
    fn test_items_at_non_array() {
        let model = JsonModel::with_data(json!({ "value": 42 }));
        assert!(model.items_at("/value").is_empty());
        assert!(model.items_at("/missing").is_empty());
    }

    #[test]
    fn test_default_size_limit() {
        let model = JsonModel::new();
        assert_eq!(model.size_limit(), DEFAULT_SIZE_LIMIT);
    }
}
