//! Terminal front end for the `bubbleup` reorderable list
//!
//! This crate wires [`bubbleup_core`] into a ratatui/crossterm terminal:
//! - Key decoding from crossterm events into core intents via configurable keybindings
//! - A ratatui widget that draws a list's render snapshot
//! - A form-field adapter that hosts can embed next to other fields
//! - The demo application behind the `bubbleup` binary

// ============================================================================
// Core modules
// ============================================================================

pub mod app;
pub mod components;
pub mod event;
pub mod field;
pub mod keybindings;
pub mod logging;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod data;
pub mod util;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use app::App;
pub use bubbleup_core::{Field, Intent, Item, RenderModel, ReorderList};
pub use data::keybindings_data::KeybindingsConfig;
pub use data::storage::{ConfigError, DataDirectory};
pub use event::AppKeyEvent;
pub use field::{FormField, KeyBind, ReorderField};
pub use keybindings::HostAction;
pub use logging::init_logging;
pub use util::styles::Theme;
