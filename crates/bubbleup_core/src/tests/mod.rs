//! Tests for the reorder state machine
//!
//! Tests are organized by topic:
//! - `movement` - Cursor movement and wraparound while idle
//! - `grab` - Dragging, swaps at and across the list boundaries
//! - `submission` - Submit semantics and the post-submit freeze
//! - `render` - Render snapshots and string projection
//! - `properties` - Randomized checks of the permutation invariants
//! - `serialization` - Serde forms of intents and items

mod movement;
mod render;

use crate::{Item, ReorderList};

/// List of single-letter strings `a`, `b`, ... of the given length.
pub(crate) fn letters(len: usize) -> ReorderList<String> {
    let items = (0..len)
        .map(|i| Item::same(char::from(b'a' + i as u8).to_string()))
        .collect();
    ReorderList::new("Reorder the list", items)
}

pub(crate) fn values(list: &ReorderList<String>) -> Vec<&str> {
    list.items().iter().map(|item| item.value().as_str()).collect()
}
