//! Card content: types, lifecycle, resolution, and sizing.
//!
//! A card declares its content with a type tag and a configuration; this
//! module turns that declaration into a live content instance:
//!
//! 1. [`create`] resolves the tag to a [`ContentType`] and, for optional
//!    types, awaits the required feature library
//! 2. the [`ContentRegistry`] constructs the concrete implementation
//! 3. the instance receives the service manager, then the configuration,
//!    which attaches a data provider and bound model via [`BaseContent`]
//! 4. the owning card renders with [`min_height`]'s hint, observes the
//!    instance's `updated`/`error`/`busy_changed` signals, and eventually
//!    destroys it

pub mod base;
pub mod registry;
pub mod resolver;
pub mod size;
pub mod types;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::config::ContentConfiguration;
use crate::error::{ContentError, ContentResult};
use crate::features::FeatureLibrary;

pub use base::{BaseContent, ErrorEvent};
pub use registry::{ContentConstructor, ContentRegistry};
pub use resolver::{create, create_with_registry};
pub use size::{Rem, min_height};

/// The closed set of supported content types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// A vertical list of templated items.
    List,
    /// A table with a templated row.
    Table,
    /// Labeled attribute groups describing one object.
    Object,
    /// A chart. Requires the charting feature library.
    Analytical,
    /// A chronological feed. Requires the timeline feature library.
    Timeline,
    /// An embedded component.
    Component,
}

impl ContentType {
    /// Every supported content type, in declaration order.
    pub const ALL: [ContentType; 6] = [
        ContentType::List,
        ContentType::Table,
        ContentType::Object,
        ContentType::Analytical,
        ContentType::Timeline,
        ContentType::Component,
    ];

    /// Parse a type tag, case-insensitively.
    ///
    /// Returns `None` for tags outside the supported set.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|content_type| content_type.tag().eq_ignore_ascii_case(tag))
    }

    /// The canonical (lowercase) tag of this content type.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Table => "table",
            Self::Object => "object",
            Self::Analytical => "analytical",
            Self::Timeline => "timeline",
            Self::Component => "component",
        }
    }

    /// The optional feature library this content type needs, if any.
    pub fn required_library(&self) -> Option<FeatureLibrary> {
        match self {
            Self::Analytical => Some(FeatureLibrary::Charting),
            Self::Timeline => Some(FeatureLibrary::Timeline),
            _ => None,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::List => "List",
            Self::Table => "Table",
            Self::Object => "Object",
            Self::Analytical => "Analytical",
            Self::Timeline => "Timeline",
            Self::Component => "Component",
        };
        f.write_str(name)
    }
}

impl FromStr for ContentType {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| ContentError::UnsupportedType(s.to_string()))
    }
}

/// The contract every content implementation fulfills.
///
/// Instances are created exclusively through [`create`]; the trait describes
/// what the owning card can do with one afterwards. Common lifecycle state
/// (configuration, provider, model, busy/error signaling) lives in the
/// embedded [`BaseContent`]; implementations add their type-specific content
/// aggregate on top.
pub trait CardContent: Send {
    /// The type this instance implements.
    fn content_type(&self) -> ContentType;

    /// The shared lifecycle state.
    fn base(&self) -> &BaseContent;

    /// The shared lifecycle state, mutably.
    fn base_mut(&mut self) -> &mut BaseContent;

    /// Rebuild the type-specific content aggregate from `configuration`.
    ///
    /// Called after the base has taken the configuration (and with it, the
    /// data binding). Rejections surface as
    /// [`ContentError::Configuration`](crate::error::ContentError).
    fn apply_configuration(&mut self, configuration: &ContentConfiguration) -> ContentResult<()>;

    /// Drop the type-specific content aggregate.
    fn release_content(&mut self);

    /// Replace this instance's configuration.
    ///
    /// `None` stores the absence and changes nothing else. Otherwise the
    /// base rebinds data (destroying any previous provider first) and the
    /// implementation rebuilds its aggregate.
    fn set_configuration(
        &mut self,
        configuration: Option<Arc<ContentConfiguration>>,
    ) -> ContentResult<()> {
        self.base_mut().set_configuration(configuration.clone())?;
        if let Some(configuration) = configuration {
            self.apply_configuration(&configuration)?;
        }
        Ok(())
    }

    /// Tear the instance down: content aggregate first, then model and
    /// provider via the base. Safe to call more than once.
    fn destroy(&mut self) {
        self.release_content();
        self.base_mut().teardown();
    }
}

impl fmt::Debug for dyn CardContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardContent")
            .field("content_type", &self.content_type())
            .finish_non_exhaustive()
    }
}
