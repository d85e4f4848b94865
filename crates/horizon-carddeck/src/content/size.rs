//! Minimum-height heuristics.
//!
//! Before any data arrives, a card needs a height for its content area so
//! the layout does not jump when items appear. [`min_height`] computes that
//! hint purely from the content type and configuration.

use std::fmt;

use crate::config::ContentConfiguration;

use super::ContentType;

/// Height floor substituted when a dispatch yields zero for a non-empty
/// configuration.
const MIN_HEIGHT: u32 = 5;

/// A length in root-relative units, displayed as `"{n}rem"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rem(pub u32);

impl fmt::Display for Rem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}rem", self.0)
    }
}

/// Compute the minimum content height for `content_type`.
///
/// An absent or empty configuration yields `0rem`. Otherwise:
///
/// - list: `maxItems` x 4 with an icon or description in the item template,
///   x 3 without; 0 with no item template
/// - table: `maxItems` x 3 plus 3 for the header row
/// - timeline: `maxItems` x 6
/// - analytical: fixed 14
/// - object and anything else: 0
///
/// A zero dispatch result is floored to 5; `maxItems` defaults to 0.
pub fn min_height(content_type: ContentType, configuration: Option<&ContentConfiguration>) -> Rem {
    let Some(configuration) = configuration.filter(|c| !c.is_empty()) else {
        return Rem(0);
    };

    let height = match content_type {
        ContentType::List => list_height(configuration),
        ContentType::Table => table_height(configuration),
        ContentType::Timeline => timeline_height(configuration),
        ContentType::Analytical => 14,
        ContentType::Object | ContentType::Component => 0,
    };

    if height != 0 { Rem(height) } else { Rem(MIN_HEIGHT) }
}

fn max_items(configuration: &ContentConfiguration) -> u32 {
    configuration.max_items.unwrap_or(0) as u32
}

fn list_height(configuration: &ContentConfiguration) -> u32 {
    let Some(item) = &configuration.item else {
        return 0;
    };

    let item_height = if item.icon.is_some() || item.description.is_some() {
        4
    } else {
        3
    };

    max_items(configuration) * item_height
}

fn table_height(configuration: &ContentConfiguration) -> u32 {
    let row_height = 3;
    let header_height = 3;
    max_items(configuration) * row_height + header_height
}

fn timeline_height(configuration: &ContentConfiguration) -> u32 {
    max_items(configuration) * 6
}
