//! Keybindings configuration data structures.
//!
//! Defines the structure for customizable keyboard shortcuts that can be
//! serialized to/from `~/.bubbleup/keybindings.yaml`.

use serde::{Deserialize, Serialize};

/// Root keybindings configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindingsConfig {
    /// Host-level keybindings, handled outside the list field
    pub global: GlobalBindings,
    /// Keybindings decoded into list intents
    pub reorder: ReorderBindings,
}

/// Host-level keybindings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalBindings {
    pub quit: Vec<String>,
}

impl Default for GlobalBindings {
    fn default() -> Self {
        Self {
            quit: vec!["f9".into(), "ctrl+c".into()],
        }
    }
}

/// Keybindings for the reorderable list field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReorderBindings {
    pub up: Vec<String>,
    pub down: Vec<String>,
    pub grab: Vec<String>,
    pub submit: Vec<String>,
}

impl Default for ReorderBindings {
    fn default() -> Self {
        Self {
            up: vec!["up".into(), "k".into()],
            down: vec!["down".into(), "j".into()],
            grab: vec!["space".into(), "tab".into()],
            submit: vec!["enter".into()],
        }
    }
}
