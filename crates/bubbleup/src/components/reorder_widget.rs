//! Ratatui rendering of a reorderable list snapshot.

use bubbleup_core::{RenderModel, RenderRow};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::lists::calculate_centered_scroll;
use crate::util::styles::{Theme, card_block};

/// Rows used by the title and the blank line under it
const TITLE_ROWS: u16 = 2;
/// Rows used by the blank line above the help text and the help text itself
const HELP_ROWS: u16 = 2;

/// Draws a [`RenderModel`] as a card: title, one line per item, help line.
///
/// A submitted list draws nothing; the host decides what replaces it.
pub struct ReorderWidget<'a> {
    model: &'a RenderModel,
    theme: &'a Theme,
    help_text: &'a str,
    focused: bool,
}

impl<'a> ReorderWidget<'a> {
    pub fn new(model: &'a RenderModel, theme: &'a Theme) -> Self {
        Self {
            model,
            theme,
            help_text: "",
            focused: true,
        }
    }

    /// Set the help line shown when the model asks for help.
    pub fn help_text(mut self, help_text: &'a str) -> Self {
        self.help_text = help_text;
        self
    }

    /// Set whether the card is drawn with the focus border.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Height that fits every row without scrolling.
    pub fn desired_height(&self) -> u16 {
        let rows = u16::try_from(self.model.rows.len()).unwrap_or(u16::MAX);
        let help = if self.model.help_visible { HELP_ROWS } else { 0 };
        rows.saturating_add(TITLE_ROWS + help + 2)
    }

    fn row_line(&self, row: &RenderRow) -> Line<'static> {
        let (prefix, style) = match (row.selected, row.grabbed) {
            (_, true) => (self.theme.selected_prefix, self.theme.grabbed),
            (true, false) => (self.theme.unselected_prefix, self.theme.cursor),
            (false, false) => (self.theme.unselected_prefix, self.theme.unselected),
        };
        Line::from(Span::styled(format!("{prefix}{}", row.key), style))
    }
}

impl Widget for ReorderWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.model.submitted {
            return;
        }

        let block = card_block(self.theme, self.focused);
        let inner = block.inner(area);
        block.render(area, buf);

        let help_rows = if self.model.help_visible { HELP_ROWS } else { 0 };
        let [title_area, rows_area, help_area] = Layout::vertical([
            Constraint::Length(TITLE_ROWS),
            Constraint::Min(0),
            Constraint::Length(help_rows),
        ])
        .areas(inner);

        Paragraph::new(Line::styled(self.model.title.clone(), self.theme.title))
            .render(title_area, buf);

        let visible = usize::from(rows_area.height);
        let offset = self
            .model
            .cursor
            .map(|cursor| calculate_centered_scroll(cursor, self.model.rows.len(), visible))
            .unwrap_or(0);
        let lines: Vec<Line> = self
            .model
            .rows
            .iter()
            .skip(offset)
            .take(visible)
            .map(|row| self.row_line(row))
            .collect();
        Paragraph::new(lines).render(rows_area, buf);

        if self.model.help_visible {
            Paragraph::new(vec![
                Line::default(),
                Line::styled(self.help_text.to_string(), self.theme.help),
            ])
            .render(help_area, buf);
        }
    }
}
