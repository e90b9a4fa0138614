//! Host form-field adapter.
//!
//! [`FormField`] is the capability set a multi-field form expects from each
//! of its fields. [`ReorderField`] implements it on top of a
//! [`ReorderList`]: it decodes keys with the configured bindings, swaps in the
//! state returned by each transition, and draws with [`ReorderWidget`].

use bubbleup_core::{Intent, ReorderList};
use ratatui::{Frame, layout::Rect};

use crate::components::reorder_widget::ReorderWidget;
use crate::components::{Component, EventResult};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::keybindings::{HostAction, binding_label};
use crate::util::styles::Theme;

/// One help entry: the keys bound to an action and what the action does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBind {
    pub keys: Vec<String>,
    pub help: &'static str,
}

impl KeyBind {
    /// "↑ up", "[space] (de)select", using the first bound key.
    pub fn short_help(&self) -> Option<String> {
        let key = self.keys.first()?;
        Some(format!("{} {}", binding_label(key), self.help))
    }
}

/// Join key binds into a single help line.
pub fn help_line(binds: &[KeyBind]) -> String {
    binds
        .iter()
        .filter_map(KeyBind::short_help)
        .collect::<Vec<_>>()
        .join(" • ")
}

/// What a form host needs from each field besides input and rendering.
pub trait FormField: Component {
    /// Identifier the host uses to find this field's output.
    fn key(&self) -> Option<&str>;

    /// Current value as display strings, in order.
    fn value_strings(&self) -> Vec<String>;

    fn is_submitted(&self) -> bool;

    fn focus(&mut self);

    fn blur(&mut self);

    fn is_focused(&self) -> bool;

    /// Whether the host should skip this field when moving focus.
    fn skip(&self) -> bool {
        false
    }

    /// Whether this field wants the whole group height.
    fn zoom(&self) -> bool {
        false
    }

    fn key_binds(&self) -> Vec<KeyBind>;

    fn set_theme(&mut self, theme: Theme);

    /// Width hint; the field never draws wider than this.
    fn set_width(&mut self, width: u16);

    /// Height hint; the field never draws taller than this.
    fn set_height(&mut self, height: u16);

    /// Validation error to show next to the field.
    fn error(&self) -> Option<&str> {
        None
    }
}

/// A [`ReorderList`] embedded as a form field.
#[derive(Debug, Clone)]
pub struct ReorderField<T> {
    list: ReorderList<T>,
    keybindings: KeybindingsConfig,
    theme: Theme,
    focused: bool,
    width: Option<u16>,
    height: Option<u16>,
}

impl<T: Clone> ReorderField<T> {
    pub fn new(list: ReorderList<T>) -> Self {
        Self {
            list,
            keybindings: KeybindingsConfig::default(),
            theme: Theme::default(),
            focused: true,
            width: None,
            height: None,
        }
    }

    pub fn with_keybindings(mut self, keybindings: KeybindingsConfig) -> Self {
        self.keybindings = keybindings;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.set_theme(theme);
        self
    }

    pub fn with_width(mut self, width: u16) -> Self {
        self.set_width(width);
        self
    }

    pub fn with_height(mut self, height: u16) -> Self {
        self.set_height(height);
        self
    }

    pub fn list(&self) -> &ReorderList<T> {
        &self.list
    }

    pub fn values(&self) -> Vec<T> {
        self.list.current_values()
    }

    pub fn keybindings(&self) -> &KeybindingsConfig {
        &self.keybindings
    }

    /// Feed one intent through the list and keep the resulting state.
    pub fn apply(&mut self, intent: Intent) {
        let was_submitted = self.list.is_submitted();
        self.list = self.list.handle(intent);

        tracing::debug!(
            %intent,
            cursor = self.list.cursor(),
            grabbed = self.list.is_grabbed(),
            "Applied intent"
        );
        if !was_submitted && self.list.is_submitted() {
            tracing::info!(items = self.list.len(), "List submitted");
        }
    }

    /// Area the field draws into: `area` clipped to the size hints and to
    /// the height the list actually needs.
    pub fn layout_area(&self, area: Rect) -> Rect {
        let model = self.list.render_model();
        let desired = ReorderWidget::new(&model, &self.theme).desired_height();
        let height = self.height.map_or(desired, |h| h.min(desired));
        let width = self.width.unwrap_or(area.width);

        Rect {
            width: width.min(area.width),
            height: height.min(area.height),
            ..area
        }
    }
}

impl<T: Clone> Component for ReorderField<T> {
    fn handle_key(&mut self, key: &AppKeyEvent) -> EventResult {
        if !self.focused {
            return EventResult::NotHandled;
        }

        match self.keybindings.decode(key) {
            Some(HostAction::Intent(intent)) => {
                self.apply(intent);
                EventResult::Handled
            }
            Some(HostAction::Quit) | None => EventResult::NotHandled,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let model = self.list.render_model();
        let help = help_line(&self.key_binds());
        let widget = ReorderWidget::new(&model, &self.theme)
            .help_text(&help)
            .focused(self.focused);

        frame.render_widget(widget, self.layout_area(area));
    }
}

impl<T: Clone> FormField for ReorderField<T> {
    fn key(&self) -> Option<&str> {
        self.list.field_key()
    }

    fn value_strings(&self) -> Vec<String> {
        self.list
            .items()
            .iter()
            .map(|item| self.list.format(item.value()))
            .collect()
    }

    fn is_submitted(&self) -> bool {
        self.list.is_submitted()
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn key_binds(&self) -> Vec<KeyBind> {
        let reorder = &self.keybindings.reorder;
        vec![
            KeyBind {
                keys: reorder.up.clone(),
                help: "up",
            },
            KeyBind {
                keys: reorder.down.clone(),
                help: "down",
            },
            KeyBind {
                keys: reorder.grab.clone(),
                help: "(de)select",
            },
            KeyBind {
                keys: reorder.submit.clone(),
                help: "submit",
            },
        ]
    }

    fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    fn set_width(&mut self, width: u16) {
        self.width = Some(width);
    }

    fn set_height(&mut self, height: u16) {
        self.height = Some(height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::KeyCode;
    use bubbleup_core::Item;
    use ratatui::{Terminal, backend::TestBackend};

    fn field(values: &[&str]) -> ReorderField<String> {
        let items = values.iter().map(|v| Item::same(v.to_string())).collect();
        ReorderField::new(
            ReorderList::new("Reorder the list", items)
                .with_help(true)
                .with_field_key("order"),
        )
    }

    fn press(field: &mut ReorderField<String>, code: KeyCode) -> EventResult {
        field.handle_key(&AppKeyEvent::plain(code))
    }

    #[test]
    fn test_default_help_line() {
        let field = field(&["a"]);
        assert_eq!(
            help_line(&field.key_binds()),
            "↑ up • ↓ down • [space] (de)select • [enter] submit"
        );
    }

    #[test]
    fn test_help_line_skips_unbound_actions() {
        let mut keybindings = KeybindingsConfig::default();
        keybindings.reorder.grab.clear();
        let field = field(&["a"]).with_keybindings(keybindings);

        assert_eq!(
            help_line(&field.key_binds()),
            "↑ up • ↓ down • [enter] submit"
        );
    }

    #[test]
    fn test_keys_drive_the_list() {
        let mut field = field(&["a", "b", "c"]);

        assert_eq!(press(&mut field, KeyCode::Char(' ')), EventResult::Handled);
        assert_eq!(press(&mut field, KeyCode::Down), EventResult::Handled);
        assert_eq!(press(&mut field, KeyCode::Char('j')), EventResult::Handled);
        assert_eq!(press(&mut field, KeyCode::Tab), EventResult::Handled);
        assert_eq!(press(&mut field, KeyCode::Enter), EventResult::Handled);

        assert!(field.is_submitted());
        assert_eq!(field.values(), ["b", "c", "a"]);
        assert_eq!(field.value_strings(), ["b", "c", "a"]);
        assert_eq!(field.key(), Some("order"));
    }

    #[test]
    fn test_unbound_and_quit_keys_pass_through() {
        let mut field = field(&["a", "b"]);

        assert_eq!(press(&mut field, KeyCode::Char('x')), EventResult::NotHandled);
        assert_eq!(press(&mut field, KeyCode::F(9)), EventResult::NotHandled);
        assert_eq!(field.list().cursor(), 0);
    }

    #[test]
    fn test_blurred_field_ignores_keys() {
        let mut field = field(&["a", "b"]);
        field.blur();
        assert!(!field.is_focused());

        assert_eq!(press(&mut field, KeyCode::Down), EventResult::NotHandled);
        assert_eq!(field.list().cursor(), 0);

        field.focus();
        assert_eq!(press(&mut field, KeyCode::Down), EventResult::Handled);
        assert_eq!(field.list().cursor(), 1);
    }

    #[test]
    fn test_form_defaults() {
        let field = field(&["a"]);
        assert!(!field.skip());
        assert!(!field.zoom());
        assert!(field.error().is_none());
    }

    #[test]
    fn test_layout_area_respects_hints() {
        let area = Rect::new(0, 0, 80, 40);

        let natural = field(&["a", "b"]).layout_area(area);
        assert_eq!(natural.width, 80);
        assert_eq!(natural.height, 2 + 2 + 2 + 2);

        let hinted = field(&["a", "b"]).with_width(30).with_height(5).layout_area(area);
        assert_eq!((hinted.width, hinted.height), (30, 5));

        let small = Rect::new(0, 0, 10, 3);
        let clipped = field(&["a", "b"]).with_width(30).layout_area(small);
        assert_eq!((clipped.width, clipped.height), (10, 3));
    }

    #[test]
    fn test_hints_through_trait_object() {
        let area = Rect::new(0, 0, 80, 40);
        let mut boxed: Box<dyn FormField> = Box::new(field(&["a", "b"]));

        boxed.set_width(30);
        boxed.set_height(5);
        boxed.set_theme(Theme::plain());

        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|frame| boxed.render(frame, area)).unwrap();

        let buffer = terminal.backend().buffer();
        // Nothing drawn outside the 30x5 hint
        assert_eq!(buffer[(30, 0)].symbol(), " ");
        assert_eq!(buffer[(0, 5)].symbol(), " ");
        assert_ne!(buffer[(0, 0)].symbol(), " ");
    }

    #[test]
    fn test_render_through_terminal() {
        let mut field = field(&["first", "second"]).with_theme(Theme::plain());
        press(&mut field, KeyCode::Down);

        let mut terminal = Terminal::new(TestBackend::new(70, 10)).unwrap();
        terminal.draw(|frame| field.render(frame, frame.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Reorder the list"));
        assert!(text.contains("  second"));
        assert!(text.contains("[enter] submit"));
    }
}
