//! The reorder state machine.
//!
//! States are `{Idle, Grabbed} x {NotSubmitted, Submitted}` plus a cursor.
//! Movement keeps the idle/grabbed mode; only [`Intent::ToggleGrab`] flips it.
//! `Submitted` is terminal and absorbs every further intent.

use std::fmt;

use crate::intent::Intent;
use crate::item::Item;
use crate::render::{RenderModel, RenderRow};

/// Display-string projection for the element type.
pub type Formatter<T> = fn(&T) -> String;

/// An ordered list of items that can be reordered by dragging with a cursor.
///
/// Transitions never mutate a shared snapshot: [`ReorderList::handle`] borrows
/// and returns a fresh state, [`ReorderList::apply`] consumes and returns one.
#[derive(Clone)]
pub struct ReorderList<T> {
    title: String,
    items: Vec<Item<T>>,
    cursor: usize,
    grabbed: bool,
    submitted: bool,
    help_visible: bool,
    field_key: Option<String>,
    formatter: Formatter<T>,
}

impl<T: fmt::Display> ReorderList<T> {
    /// Create a list whose rows are rendered with `T`'s `Display` impl.
    pub fn new(title: impl Into<String>, items: Vec<Item<T>>) -> Self {
        Self::with_formatter(title, items, <T as ToString>::to_string)
    }
}

impl<T> ReorderList<T> {
    /// Create a list for an element type without a natural string form.
    pub fn with_formatter(
        title: impl Into<String>,
        items: Vec<Item<T>>,
        formatter: Formatter<T>,
    ) -> Self {
        Self {
            title: title.into(),
            items,
            cursor: 0,
            grabbed: false,
            submitted: false,
            help_visible: false,
            field_key: None,
            formatter,
        }
    }

    /// Set whether the presentation layer should show the key help line.
    pub fn with_help(mut self, visible: bool) -> Self {
        self.help_visible = visible;
        self
    }

    /// Attach an opaque key the host uses to find this field's output.
    pub fn with_field_key(mut self, key: impl Into<String>) -> Self {
        self.field_key = Some(key.into());
        self
    }

    // ------------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------------

    /// Consume the state and return the state after `intent`.
    pub fn apply(self, intent: Intent) -> Self {
        if self.submitted {
            return self;
        }

        match intent {
            Intent::MoveUp => self.step(false),
            Intent::MoveDown => self.step(true),
            Intent::ToggleGrab => Self {
                grabbed: !self.grabbed,
                ..self
            },
            Intent::Submit => Self {
                submitted: true,
                ..self
            },
        }
    }

    /// Apply every intent in order.
    pub fn replay<I>(self, intents: I) -> Self
    where
        I: IntoIterator<Item = Intent>,
    {
        intents.into_iter().fold(self, Self::apply)
    }

    /// Move the cursor one row with wraparound. While grabbed, the item under
    /// the old cursor is swapped into the new cursor position, including
    /// across the wrap edge.
    fn step(mut self, forward: bool) -> Self {
        let len = self.items.len();
        if len == 0 {
            return self;
        }

        let prev = self.cursor;
        let next = if forward {
            (prev + 1) % len
        } else if prev == 0 {
            len - 1
        } else {
            prev - 1
        };

        if self.grabbed {
            self.items.swap(prev, next);
        }
        self.cursor = next;
        self
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[Item<T>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the row under the cursor. Always 0 for an empty list, where
    /// no row is actually selected.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The item under the cursor, if any.
    pub fn current_item(&self) -> Option<&Item<T>> {
        self.items.get(self.cursor)
    }

    pub fn is_grabbed(&self) -> bool {
        self.grabbed
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    pub fn field_key(&self) -> Option<&str> {
        self.field_key.as_deref()
    }

    /// Format a single element with the bound projection.
    pub fn format(&self, value: &T) -> String {
        (self.formatter)(value)
    }

    /// Snapshot of everything a presentation layer needs to draw the list.
    pub fn render_model(&self) -> RenderModel {
        let rows = self
            .items
            .iter()
            .enumerate()
            .map(|(idx, item)| RenderRow {
                key: self.format(item.key()),
                value: self.format(item.value()),
                selected: idx == self.cursor,
                grabbed: self.grabbed && idx == self.cursor,
            })
            .collect();

        RenderModel {
            title: self.title.clone(),
            rows,
            cursor: (!self.items.is_empty()).then_some(self.cursor),
            grabbed: self.grabbed,
            help_visible: self.help_visible,
            submitted: self.submitted,
        }
    }
}

impl<T: Clone> ReorderList<T> {
    /// Return the state after `intent`, leaving `self` untouched.
    #[must_use]
    pub fn handle(&self, intent: Intent) -> Self {
        self.clone().apply(intent)
    }

    /// Values in current display order.
    pub fn current_values(&self) -> Vec<T> {
        self.items.iter().map(|item| item.value().clone()).collect()
    }
}

impl<T: PartialEq> PartialEq for ReorderList<T> {
    // The formatter is not part of the logical state.
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.items == other.items
            && self.cursor == other.cursor
            && self.grabbed == other.grabbed
            && self.submitted == other.submitted
            && self.help_visible == other.help_visible
            && self.field_key == other.field_key
    }
}

impl<T: Eq> Eq for ReorderList<T> {}

impl<T: fmt::Debug> fmt::Debug for ReorderList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReorderList")
            .field("title", &self.title)
            .field("items", &self.items)
            .field("cursor", &self.cursor)
            .field("grabbed", &self.grabbed)
            .field("submitted", &self.submitted)
            .field("help_visible", &self.help_visible)
            .field("field_key", &self.field_key)
            .finish()
    }
}
