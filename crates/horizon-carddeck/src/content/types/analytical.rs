//! Analytical content.
//!
//! A chart over the bound data. Resolution of this type requires the
//! charting feature library; by the time an instance exists, that library
//! has been loaded. The aggregate here is the chart descriptor the host's
//! charting integration consumes.

use crate::config::{ChartAxis, ContentConfiguration};
use crate::content::base::BaseContent;
use crate::content::{CardContent, ContentType};
use crate::error::{ContentError, ContentResult};

/// Chart description extracted from the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDescriptor {
    /// Chart type, e.g. `"Line"` or `"Donut"`.
    pub chart_type: String,
    /// Measure axes.
    pub measures: Vec<ChartAxis>,
    /// Dimension axes.
    pub dimensions: Vec<ChartAxis>,
}

/// Analytical content implementation.
pub struct AnalyticalContent {
    base: BaseContent,
    chart: Option<ChartDescriptor>,
}

impl AnalyticalContent {
    /// Create an unconfigured analytical content.
    pub fn new() -> Self {
        Self {
            base: BaseContent::new(),
            chart: None,
        }
    }

    /// The chart descriptor extracted from the configuration, if any.
    pub fn chart(&self) -> Option<&ChartDescriptor> {
        self.chart.as_ref()
    }
}

impl Default for AnalyticalContent {
    fn default() -> Self {
        Self::new()
    }
}

impl CardContent for AnalyticalContent {
    fn content_type(&self) -> ContentType {
        ContentType::Analytical
    }

    fn base(&self) -> &BaseContent {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseContent {
        &mut self.base
    }

    fn apply_configuration(&mut self, configuration: &ContentConfiguration) -> ContentResult<()> {
        let Some(chart_type) = configuration.chart_type.clone() else {
            return Err(ContentError::Configuration(
                "analytical content requires a chartType".to_string(),
            ));
        };

        self.chart = Some(ChartDescriptor {
            chart_type,
            measures: configuration.measures.clone(),
            dimensions: configuration.dimensions.clone(),
        });
        Ok(())
    }

    fn release_content(&mut self) {
        self.chart = None;
    }
}
