//! Common styling utilities for TUI components

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders};

/// Standard color for focused cards
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Standard color for help text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Colors and prefixes used to draw a list field.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub title: Style,
    /// Row under the cursor while idle
    pub cursor: Style,
    /// Row under the cursor while grabbed
    pub grabbed: Style,
    pub unselected: Style,
    pub help: Style,
    pub border: Style,
    pub focused_border: Style,
    pub selected_prefix: &'static str,
    pub unselected_prefix: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::base16()
    }
}

impl Theme {
    /// Names accepted by [`Theme::by_name`].
    pub const NAMES: [&'static str; 3] = ["base16", "charm", "plain"];

    /// ANSI-palette theme that follows the terminal's own colors.
    pub fn base16() -> Self {
        Self {
            name: "base16",
            title: Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            cursor: Style::default().fg(Color::Yellow),
            grabbed: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            unselected: Style::default(),
            help: Style::default().fg(HELP_COLOR),
            border: Style::default().fg(Color::DarkGray),
            focused_border: Style::default().fg(FOCUS_COLOR),
            selected_prefix: "[•] ",
            unselected_prefix: "[ ] ",
        }
    }

    /// Pink and indigo accents.
    pub fn charm() -> Self {
        Self {
            name: "charm",
            title: Style::default()
                .fg(Color::Rgb(0x75, 0x71, 0xF9))
                .add_modifier(Modifier::BOLD),
            cursor: Style::default().fg(Color::Rgb(0xF7, 0x80, 0xE2)),
            grabbed: Style::default()
                .fg(Color::Rgb(0x02, 0xBF, 0x87))
                .add_modifier(Modifier::BOLD),
            unselected: Style::default().fg(Color::Gray),
            help: Style::default().fg(Color::Rgb(0x62, 0x62, 0x62)),
            border: Style::default().fg(Color::Rgb(0x3C, 0x3C, 0x3C)),
            focused_border: Style::default().fg(Color::Rgb(0x75, 0x71, 0xF9)),
            selected_prefix: "✓ ",
            unselected_prefix: "• ",
        }
    }

    /// No colors at all; the cursor row is only marked by modifiers.
    pub fn plain() -> Self {
        Self {
            name: "plain",
            title: Style::default().add_modifier(Modifier::BOLD),
            cursor: Style::default().add_modifier(Modifier::REVERSED),
            grabbed: Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED),
            unselected: Style::default(),
            help: Style::default().add_modifier(Modifier::DIM),
            border: Style::default(),
            focused_border: Style::default().add_modifier(Modifier::BOLD),
            selected_prefix: "> ",
            unselected_prefix: "  ",
        }
    }

    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "base16" => Some(Self::base16()),
            "charm" => Some(Self::charm()),
            "plain" => Some(Self::plain()),
            _ => None,
        }
    }
}

/// Create the rounded card a field is drawn in.
///
/// The border takes the theme's focus color when focused.
pub fn card_block(theme: &Theme, focused: bool) -> Block<'static> {
    let border_style = if focused {
        theme.focused_border
    } else {
        theme.border
    };

    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .padding(ratatui::widgets::Padding::horizontal(1))
}
