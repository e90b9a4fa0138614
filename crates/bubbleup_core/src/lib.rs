//! Reorderable list state machine
//!
//! This crate holds the algorithmic core of the `bubbleup` list field:
//! - An ordered sequence of `(key, value)` items with a cursor
//! - Grab/release toggling to drag the item under the cursor
//! - Wraparound cursor movement where a grabbed item is carried along by swaps
//! - A terminal `Submitted` state that freezes the order
//!
//! Every transition is value-returning. The core never renders, never reads
//! input and never performs I/O; hosts decode their own input into [`Intent`]s
//! and draw from a [`RenderModel`].
//!
//! ```
//! use bubbleup_core::{Intent, Item, ReorderList};
//!
//! let list = ReorderList::new("Reorder", vec![Item::same("a"), Item::same("b"), Item::same("c")])
//!     .replay([
//!         Intent::ToggleGrab,
//!         Intent::MoveDown,
//!         Intent::MoveDown,
//!         Intent::ToggleGrab,
//!         Intent::Submit,
//!     ]);
//!
//! assert_eq!(list.current_values(), vec!["b", "c", "a"]);
//! assert!(list.is_submitted());
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod field;
pub mod list;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod intent;
pub mod item;
pub mod render;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use field::Field;
pub use intent::Intent;
pub use item::Item;
pub use list::{Formatter, ReorderList};
pub use render::{RenderModel, RenderRow};
