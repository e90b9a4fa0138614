//! Keybindings matching utilities.
//!
//! Provides functions to convert an AppKeyEvent to its string representation,
//! to check it against configured bindings, and to decode it into a list
//! intent or a host-level action.

use bubbleup_core::Intent;

use crate::data::keybindings_data::KeybindingsConfig;
use crate::data::storage::{ConfigError, DataDirectory};
use crate::event::{AppKeyEvent, KeyCode};

/// What a decoded key asks the host to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    /// Forward to the list field
    Intent(Intent),
    /// Leave the whole application
    Quit,
}

impl KeybindingsConfig {
    /// Convert an AppKeyEvent to our string format.
    ///
    /// Examples:
    /// - KeyCode::Char('a') with no modifiers -> "a"
    /// - KeyCode::Char('c') with ctrl -> "ctrl+c"
    /// - KeyCode::Char(' ') -> "space"
    /// - KeyCode::Enter -> "enter"
    /// - KeyCode::F(9) -> "f9"
    pub fn app_key_to_string(key: &AppKeyEvent) -> String {
        let mut parts = Vec::new();

        if key.ctrl {
            parts.push("ctrl");
        }
        if key.alt {
            parts.push("alt");
        }

        let key_str = match &key.code {
            KeyCode::Char(' ') => "space".to_string(),
            KeyCode::Char(c) => {
                if key.shift && c.is_uppercase() {
                    parts.push("shift");
                    c.to_lowercase().to_string()
                } else if key.shift && !c.is_alphabetic() {
                    parts.push("shift");
                    c.to_string()
                } else {
                    c.to_lowercase().to_string()
                }
            }
            KeyCode::Enter => "enter".to_string(),
            KeyCode::Tab => {
                if key.shift {
                    parts.push("shift");
                }
                "tab".to_string()
            }
            KeyCode::BackTab => {
                // BackTab is Shift+Tab
                if !parts.contains(&"shift") {
                    parts.push("shift");
                }
                "tab".to_string()
            }
            KeyCode::Backspace => "backspace".to_string(),
            KeyCode::Delete => "delete".to_string(),
            KeyCode::Esc => "esc".to_string(),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                if key.shift {
                    parts.push("shift");
                }
                match key.code {
                    KeyCode::Up => "up",
                    KeyCode::Down => "down",
                    KeyCode::Left => "left",
                    _ => "right",
                }
                .to_string()
            }
            KeyCode::Home => "home".to_string(),
            KeyCode::End => "end".to_string(),
            KeyCode::PageUp => "pageup".to_string(),
            KeyCode::PageDown => "pagedown".to_string(),
            KeyCode::Insert => "insert".to_string(),
            KeyCode::F(n) => format!("f{}", n),
            _ => return String::new(), // Unsupported key
        };

        parts.push(&key_str);
        parts.join("+")
    }

    /// Check if an AppKeyEvent matches any of the configured bindings.
    pub fn matches(key: &AppKeyEvent, bindings: &[String]) -> bool {
        let key_str = Self::app_key_to_string(key);
        if key_str.is_empty() {
            return false;
        }
        bindings.iter().any(|b| b.eq_ignore_ascii_case(&key_str))
    }

    /// Decode a key into the action it is bound to.
    ///
    /// Global bindings win over list bindings. Unbound keys return `None`
    /// and should be ignored.
    pub fn decode(&self, key: &AppKeyEvent) -> Option<HostAction> {
        if Self::matches(key, &self.global.quit) {
            return Some(HostAction::Quit);
        }

        let reorder = &self.reorder;
        let intent = if Self::matches(key, &reorder.up) {
            Intent::MoveUp
        } else if Self::matches(key, &reorder.down) {
            Intent::MoveDown
        } else if Self::matches(key, &reorder.grab) {
            Intent::ToggleGrab
        } else if Self::matches(key, &reorder.submit) {
            Intent::Submit
        } else {
            return None;
        };

        Some(HostAction::Intent(intent))
    }

    /// Load keybindings from the data directory.
    ///
    /// A missing file yields the defaults; an unreadable or unparsable file is
    /// an error.
    pub fn load(data_dir: &DataDirectory) -> Result<Self, ConfigError> {
        let path = data_dir.keybindings_path();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        serde_saphyr::from_str(&content).map_err(|e| {
            ConfigError::Parse(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Load keybindings, returning defaults if the file doesn't exist or fails to parse.
    pub fn load_or_default(data_dir: &DataDirectory) -> Self {
        match Self::load(data_dir) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Using default keybindings: {e}");
                Self::default()
            }
        }
    }

    /// Save keybindings to file.
    pub fn save(&self, data_dir: &DataDirectory) -> Result<(), ConfigError> {
        data_dir.ensure_exists()?;
        let yaml = serde_saphyr::to_string(self).map_err(|e| {
            ConfigError::Serialize(format!("Failed to serialize keybindings: {}", e))
        })?;

        std::fs::write(data_dir.keybindings_path(), yaml)?;
        Ok(())
    }
}

/// Short label for a binding in help text: arrows become glyphs, anything
/// else is bracketed.
pub fn binding_label(binding: &str) -> String {
    match binding {
        "up" => "↑".to_string(),
        "down" => "↓".to_string(),
        "left" => "←".to_string(),
        "right" => "→".to_string(),
        other => format!("[{other}]"),
    }
}
