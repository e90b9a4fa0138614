//! Minimal capability set a host needs from an interactive field.

use crate::intent::Intent;
use crate::list::ReorderList;
use crate::render::RenderModel;

/// An interactive field driven by decoded intents.
///
/// Hosts keep the returned state and drop (or retain, for replay) the old one.
/// Anything toolkit-specific (raw keys, focus, styling) belongs in an adapter
/// that wraps a `Field`, never in the field itself.
pub trait Field: Sized {
    type Value;

    /// State after applying `intent`. Must not affect `self`.
    fn handle(&self, intent: Intent) -> Self;

    /// Values in their current order.
    fn current_values(&self) -> Vec<Self::Value>;

    fn is_submitted(&self) -> bool;

    fn render_model(&self) -> RenderModel;
}

impl<T: Clone> Field for ReorderList<T> {
    type Value = T;

    fn handle(&self, intent: Intent) -> Self {
        ReorderList::handle(self, intent)
    }

    fn current_values(&self) -> Vec<T> {
        ReorderList::current_values(self)
    }

    fn is_submitted(&self) -> bool {
        ReorderList::is_submitted(self)
    }

    fn render_model(&self) -> RenderModel {
        ReorderList::render_model(self)
    }
}
