//! Keyboard event normalization.
//!
//! Raw crossterm events carry modifier bitflags and event kinds; everything
//! past this module only sees the key code and three modifier booleans.

pub use crossterm::event::KeyCode;

/// Key event stripped down to what keybinding matching needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppKeyEvent {
    pub code: KeyCode,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl AppKeyEvent {
    /// Key event with no modifiers held.
    pub fn plain(code: KeyCode) -> Self {
        Self {
            code,
            ctrl: false,
            alt: false,
            shift: false,
        }
    }

    /// Key event with only control held.
    pub fn ctrl(code: KeyCode) -> Self {
        Self {
            ctrl: true,
            ..Self::plain(code)
        }
    }

    /// Check if no modifiers are pressed.
    pub fn no_modifiers(&self) -> bool {
        !self.ctrl && !self.alt && !self.shift
    }
}

impl From<crossterm::event::KeyEvent> for AppKeyEvent {
    fn from(event: crossterm::event::KeyEvent) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            code: event.code,
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            alt: event.modifiers.contains(KeyModifiers::ALT),
            shift: event.modifiers.contains(KeyModifiers::SHIFT),
        }
    }
}
