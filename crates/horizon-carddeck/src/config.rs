//! Declarative content configuration.
//!
//! A card describes its content with a JSON manifest section; this module is
//! the typed view of that section. Field names map camelCase manifest keys
//! (`maxItems`, `chartType`) onto snake_case Rust fields.
//!
//! The configuration is owned by the caller and handed to a content instance
//! behind an `Arc`; the instance holds the reference, never a copy, and
//! treats it as immutable for the lifetime of that assignment.
//!
//! # Example
//!
//! ```
//! use horizon_carddeck::config::ContentConfiguration;
//!
//! let configuration = ContentConfiguration::from_json(serde_json::json!({
//!     "data": {
//!         "request": { "url": "/api/activities" },
//!         "path": "/items"
//!     },
//!     "maxItems": 5,
//!     "item": {
//!         "title": "{title}",
//!         "icon": { "src": "{icon}" }
//!     }
//! })).unwrap();
//!
//! assert_eq!(configuration.max_items, Some(5));
//! ```

use serde::Deserialize;

use crate::error::ContentResult;

/// The configuration object for one card content instance.
///
/// All fields are optional; which ones are honored depends on the content
/// type. Unknown manifest keys are ignored so that configurations written for
/// richer hosts still deserialize.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentConfiguration {
    /// Data-source descriptor. Absent means the instance binds against an
    /// externally propagated model instead of owning a provider.
    pub data: Option<DataSettings>,

    /// Ceiling for the number of items the bound model exposes, and input to
    /// the minimum-height heuristics.
    pub max_items: Option<usize>,

    /// Item template for list and timeline content.
    pub item: Option<ItemTemplate>,

    /// Row template for table content.
    pub row: Option<RowTemplate>,

    /// Attribute groups for object content.
    pub groups: Vec<ObjectGroup>,

    /// Chart type for analytical content (e.g. `"Line"`, `"Donut"`).
    pub chart_type: Option<String>,

    /// Measure axes for analytical content.
    pub measures: Vec<ChartAxis>,

    /// Dimension axes for analytical content.
    pub dimensions: Vec<ChartAxis>,

    /// Component name for component content.
    pub component: Option<String>,
}

impl ContentConfiguration {
    /// Deserialize a configuration from its manifest JSON value.
    pub fn from_json(value: serde_json::Value) -> ContentResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Whether no recognized field is set.
    ///
    /// An empty configuration yields a zero minimum height and configures
    /// nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// The `data` section of a content configuration.
///
/// Beyond `path`, the fields are provider parameters: the data-provider
/// factory inspects them to decide whether (and which kind of) provider to
/// build. A settings object with neither `request` nor `json` typically
/// produces no provider.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DataSettings {
    /// Model path the content binds against. Defaults to the root path `/`.
    pub path: Option<String>,

    /// Remote request description, interpreted by the data-provider factory.
    pub request: Option<serde_json::Value>,

    /// Inline JSON payload for statically provided data.
    pub json: Option<serde_json::Value>,
}

/// Template for one list or timeline item.
///
/// String fields may contain `{path}` binding placeholders resolved against
/// each item of the bound model.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemTemplate {
    /// Item title.
    pub title: Option<String>,
    /// Secondary description line.
    pub description: Option<String>,
    /// Icon slot.
    pub icon: Option<IconTemplate>,
    /// Timestamp expression (timeline content).
    pub date_time: Option<String>,
}

/// Icon slot of an item template.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IconTemplate {
    /// Icon source expression.
    pub src: Option<String>,
}

/// Row template for table content.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RowTemplate {
    /// Column definitions, in display order.
    pub columns: Vec<ColumnTemplate>,
}

/// One column of a table row template.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColumnTemplate {
    /// Column header label.
    pub title: Option<String>,
    /// Cell value expression.
    pub value: Option<String>,
}

/// Attribute group for object content.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ObjectGroup {
    /// Group heading.
    pub title: Option<String>,
    /// Attributes shown in this group.
    pub items: Vec<ObjectAttribute>,
}

/// One label/value attribute of an object group.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ObjectAttribute {
    /// Attribute label.
    pub label: Option<String>,
    /// Attribute value expression.
    pub value: Option<String>,
}

/// Measure or dimension axis for analytical content.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartAxis {
    /// Axis label.
    pub label: Option<String>,
    /// Axis value expression.
    pub value: Option<String>,
}
