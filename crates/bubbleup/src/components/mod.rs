pub mod lists;
pub mod reorder_widget;

use ratatui::{Frame, layout::Rect};

use crate::event::AppKeyEvent;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled, continue
    Handled,
    /// Event was not handled, pass to parent
    NotHandled,
}

/// Trait for components that can handle input and render
pub trait Component {
    /// Handle a key event
    fn handle_key(&mut self, key: &AppKeyEvent) -> EventResult;

    /// Render the component
    fn render(&self, frame: &mut Frame, area: Rect);
}
