//! Binding context and template expression resolution.
//!
//! A [`BindingContext`] pairs a model with a root path; content instances
//! resolve their templates against it. Template strings may contain `{path}`
//! placeholders which are substituted with values from the current scope:
//!
//! ```
//! use horizon_carddeck::model::binding::resolve_placeholders;
//!
//! let scope = serde_json::json!({ "name": "Notebook", "stock": 22 });
//! let text = resolve_placeholders("{name} ({stock} in stock)", &scope);
//! assert_eq!(text, "Notebook (22 in stock)");
//! ```

use std::sync::{Arc, OnceLock};

use regex::Regex;
use serde_json::Value;

use super::json_model::JsonModel;

/// The root binding path.
pub const ROOT_PATH: &str = "/";

/// A model plus the root path a content instance is bound to.
#[derive(Clone)]
pub struct BindingContext {
    model: Arc<JsonModel>,
    path: String,
}

impl BindingContext {
    /// Create a context for `model` rooted at `path`.
    pub fn new(model: Arc<JsonModel>, path: impl Into<String>) -> Self {
        Self {
            model,
            path: path.into(),
        }
    }

    /// The root path of this context.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The underlying model.
    pub fn model(&self) -> &Arc<JsonModel> {
        &self.model
    }

    /// The value the root path addresses, if any.
    pub fn value(&self) -> Option<Value> {
        self.model.value_at(&self.path)
    }

    /// The array items at the root path, capped at the model's size limit.
    pub fn items(&self) -> Vec<Value> {
        self.model.items_at(&self.path)
    }
}

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{([^{}]+)\}").expect("placeholder pattern is valid"))
}

/// Substitute `{path}` placeholders in a template with values from `scope`.
///
/// Placeholder paths are relative to the scope and slash separated
/// (`{name}`, `{address/city}`). Strings substitute verbatim; numbers and
/// booleans via their display form; `null`, missing paths, and non-scalar
/// values substitute as the empty string.
pub fn resolve_placeholders(template: &str, scope: &Value) -> String {
    placeholder_pattern()
        .replace_all(template, |captures: &regex::Captures<'_>| {
            scalar_at(scope, &captures[1])
        })
        .into_owned()
}

fn scalar_at(scope: &Value, path: &str) -> String {
    let mut current = scope;
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        current = match current {
            Value::Object(map) => match map.get(segment) {
                Some(value) => value,
                None => return String::new(),
            },
            Value::Array(items) => match segment.parse::<usize>().ok().and_then(|i| items.get(i)) {
                Some(value) => value,
                None => return String::new(),
            },
            _ => return String::new(),
        };
    }

    match current {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_resolve_simple_placeholder() {
        let scope = json!({ "Name": "Comfort Easy" });
        assert_eq!(resolve_placeholders("{Name}", &scope), "Comfort Easy");
    }

    #[test]
    fn test_resolve_mixed_text() {
        let scope = json!({ "count": 3, "open": true });
        assert_eq!(
            resolve_placeholders("{count} items, open: {open}", &scope),
            "3 items, open: true"
        );
    }

    #[test]
    fn test_resolve_nested_path() {
        let scope = json!({ "address": { "city": "Walldorf" } });
        assert_eq!(resolve_placeholders("{address/city}", &scope), "Walldorf");
    }

    #[test]
    fn test_missing_and_null_resolve_empty() {
        let scope = json!({ "a": null });
        assert_eq!(resolve_placeholders("[{a}][{missing}]", &scope), "[][]");
    }

    #[test]
    fn test_template_without_placeholders_is_verbatim() {
        let scope = json!({});
        assert_eq!(resolve_placeholders("plain text", &scope), "plain text");
    }

    #[test]
    fn test_binding_context_items() {
        let model = Arc::new(JsonModel::with_data(json!({
            "items": [{ "n": 1 }, { "n": 2 }]
        })));
        let context = BindingContext::new(model, "/items");

        assert_eq!(context.path(), "/items");
        assert_eq!(context.items().len(), 2);
        assert_eq!(context.value(), Some(json!([{ "n": 1 }, { "n": 2 }])));
    }

    #[test]
    fn test_binding_context_root() {
        let model = Arc::new(JsonModel::with_data(json!([1, 2, 3])));
        let context = BindingContext::new(model, ROOT_PATH);
        assert_eq!(context.items().len(), 3);
    }
}
