//! Concrete content implementations, one per [`ContentType`].
//!
//! Each type embeds [`BaseContent`] for the shared lifecycle and keeps its
//! own content aggregate: the template extracted from the configuration plus
//! whatever the type needs to project model items into view rows. Rendering
//! itself happens in the host; these types expose the resolved view data.
//!
//! [`ContentType`]: super::ContentType
//! [`BaseContent`]: super::BaseContent

mod analytical;
mod component;
mod list;
mod object;
mod table;
mod timeline;

pub use analytical::{AnalyticalContent, ChartDescriptor};
pub use component::ComponentContent;
pub use list::{ListContent, ListItemView};
pub use object::{ObjectAttributeView, ObjectContent, ObjectGroupView};
pub use table::{TableContent, TableRowView};
pub use timeline::{TimelineContent, TimelineItemView};
