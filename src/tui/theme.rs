use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color palette for the TUI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    /// Background of the input line and the list card
    pub surface: Color,
    pub text: Color,
    pub title: Color,
    pub dim: Color,
    /// Text of completed todos (rendered struck through)
    pub completed: Color,
    pub accent: Color,
    /// The check mark of a completed todo
    pub check: Color,
    pub selection_bg: Color,
    pub border: Color,
    pub danger: Color,
}

impl Theme {
    pub fn light() -> Self {
        Theme {
            background: Color::Rgb(0xFA, 0xFA, 0xFA),
            surface: Color::Rgb(0xFF, 0xFF, 0xFF),
            text: Color::Rgb(0x48, 0x4B, 0x6A),
            title: Color::Rgb(0x3A, 0x7B, 0xFD),
            dim: Color::Rgb(0x93, 0x94, 0xA5),
            completed: Color::Rgb(0xD2, 0xD3, 0xDB),
            accent: Color::Rgb(0x3A, 0x7B, 0xFD),
            check: Color::Rgb(0x57, 0xDD, 0xFF),
            selection_bg: Color::Rgb(0xE4, 0xE5, 0xF1),
            border: Color::Rgb(0xE4, 0xE5, 0xF1),
            danger: Color::Rgb(0xE0, 0x4F, 0x5F),
        }
    }

    pub fn dark() -> Self {
        Theme {
            background: Color::Rgb(0x16, 0x17, 0x22),
            surface: Color::Rgb(0x25, 0x27, 0x3C),
            text: Color::Rgb(0xCA, 0xCD, 0xE8),
            title: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x77, 0x7A, 0x92),
            completed: Color::Rgb(0x4D, 0x50, 0x67),
            accent: Color::Rgb(0x3A, 0x7B, 0xFD),
            check: Color::Rgb(0x57, 0xDD, 0xFF),
            selection_bg: Color::Rgb(0x39, 0x3A, 0x4C),
            border: Color::Rgb(0x39, 0x3A, 0x4C),
            danger: Color::Rgb(0xFF, 0x6B, 0x7A),
        }
    }

    /// Build the light or dark palette, applying `[ui.light]` / `[ui.dark]`
    /// overrides from config.toml
    pub fn from_config(dark: bool, ui: &UiConfig) -> Self {
        let (mut theme, overrides) = if dark {
            (Theme::dark(), &ui.dark)
        } else {
            (Theme::light(), &ui.light)
        };
        theme.apply_overrides(overrides);
        theme
    }

    fn apply_overrides(&mut self, overrides: &HashMap<String, String>) {
        for (key, value) in overrides {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => self.background = color,
                    "surface" => self.surface = color,
                    "text" => self.text = color,
                    "title" => self.title = color,
                    "dim" => self.dim = color,
                    "completed" => self.completed = color,
                    "accent" => self.accent = color,
                    "check" => self.check = color,
                    "selection_bg" => self.selection_bg = color,
                    "border" => self.border = color,
                    "danger" => self.danger = color,
                    _ => {}
                }
            }
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
