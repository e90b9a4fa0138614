use std::fmt;

use serde::{Deserialize, Serialize};

/// An already-decoded user action consumed by [`crate::ReorderList`].
///
/// Raw key handling lives in the host; by the time input reaches the core it
/// has been reduced to one of these four intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Intent {
    /// Move the cursor one row up, wrapping to the last row.
    MoveUp,
    /// Move the cursor one row down, wrapping to the first row.
    MoveDown,
    /// Grab or release the item under the cursor.
    ToggleGrab,
    /// Finish the interaction. Terminal.
    Submit,
}

impl Intent {
    pub const ALL: [Intent; 4] = [
        Intent::MoveUp,
        Intent::MoveDown,
        Intent::ToggleGrab,
        Intent::Submit,
    ];
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Intent::MoveUp => "move-up",
            Intent::MoveDown => "move-down",
            Intent::ToggleGrab => "toggle-grab",
            Intent::Submit => "submit",
        };
        f.write_str(name)
    }
}
