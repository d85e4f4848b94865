//! Table content.
//!
//! Rows produced by applying the configuration's `row` template (an ordered
//! set of columns) to each entry of the bound collection.

use crate::config::{ContentConfiguration, RowTemplate};
use crate::content::base::BaseContent;
use crate::content::{CardContent, ContentType};
use crate::error::ContentResult;
use crate::model::resolve_placeholders;

/// One resolved table row: cell texts in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRowView {
    /// Resolved cell values, one per column.
    pub cells: Vec<String>,
}

/// Table content implementation.
pub struct TableContent {
    base: BaseContent,
    row: Option<RowTemplate>,
}

impl TableContent {
    /// Create an unconfigured table content.
    pub fn new() -> Self {
        Self {
            base: BaseContent::new(),
            row: None,
        }
    }

    /// The row template extracted from the configuration, if any.
    pub fn row_template(&self) -> Option<&RowTemplate> {
        self.row.as_ref()
    }

    /// Column header labels, in column order.
    pub fn column_titles(&self) -> Vec<String> {
        self.row
            .as_ref()
            .map(|row| {
                row.columns
                    .iter()
                    .map(|column| column.title.clone().unwrap_or_default())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The rows of the bound collection, resolved through the row template.
    pub fn current_rows(&self) -> Vec<TableRowView> {
        let Some(row) = &self.row else {
            return Vec::new();
        };
        let Some(context) = self.base.binding_context() else {
            return Vec::new();
        };

        context
            .items()
            .iter()
            .map(|scope| TableRowView {
                cells: row
                    .columns
                    .iter()
                    .map(|column| {
                        column
                            .value
                            .as_deref()
                            .map(|template| resolve_placeholders(template, scope))
                            .unwrap_or_default()
                    })
                    .collect(),
            })
            .collect()
    }
}

impl Default for TableContent {
    fn default() -> Self {
        Self::new()
    }
}

impl CardContent for TableContent {
    fn content_type(&self) -> ContentType {
        ContentType::Table
    }

    fn base(&self) -> &BaseContent {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseContent {
        &mut self.base
    }

    fn apply_configuration(&mut self, configuration: &ContentConfiguration) -> ContentResult<()> {
        self.row = configuration.row.clone();
        Ok(())
    }

    fn release_content(&mut self) {
        self.row = None;
    }
}
