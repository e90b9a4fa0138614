use std::io;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    text::Line,
    widgets::Paragraph,
};

use crate::components::{Component, EventResult};
use crate::event::AppKeyEvent;
use crate::field::{FormField, ReorderField};
use crate::keybindings::HostAction;

/// Single-field host: shows one reorderable list until the user quits.
pub struct App {
    field: ReorderField<String>,
    exit_on_submit: bool,
    exit: bool,
}

impl App {
    pub fn new(field: ReorderField<String>) -> Self {
        Self {
            field,
            exit_on_submit: false,
            exit: false,
        }
    }

    /// Leave the loop as soon as the list is submitted instead of waiting
    /// for a quit key.
    pub fn exit_on_submit(mut self, exit_on_submit: bool) -> Self {
        self.exit_on_submit = exit_on_submit;
        self
    }

    pub fn field(&self) -> &ReorderField<String> {
        &self.field
    }

    pub fn should_exit(&self) -> bool {
        self.exit
    }

    /// `list submitted: a, b, c` once submitted, `None` before.
    pub fn submitted_line(&self) -> Option<String> {
        self.field
            .is_submitted()
            .then(|| format!("list submitted: {}", self.field.value_strings().join(", ")))
    }
}

impl App {
    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        tracing::info!(items = self.field.list().len(), "Starting session");

        while !self.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }

        Ok(())
    }

    pub fn draw(&self, frame: &mut Frame) {
        let [area] = Layout::vertical([Constraint::Fill(1)])
            .margin(1)
            .areas(frame.area());

        match self.submitted_line() {
            Some(line) => frame.render_widget(Paragraph::new(Line::from(line)), area),
            None => self.field.render(frame, area),
        }
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(&AppKeyEvent::from(key_event))
            }
            _ => {}
        };
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: &AppKeyEvent) {
        // Global key bindings
        if self.field.keybindings().decode(key) == Some(HostAction::Quit) {
            tracing::info!("Quit requested");
            self.exit = true;
            return;
        }

        if self.field.handle_key(key) == EventResult::NotHandled {
            tracing::trace!(?key, "Ignored key");
        }

        if self.exit_on_submit && self.field.is_submitted() {
            self.exit = true;
        }
    }
}
