use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    /// Header band and prompt borders
    pub accent: Color,
    /// Done marker and struck-through titles
    pub done: Color,
    /// Remove affordance
    pub danger: Color,
    pub selection_bg: Color,
    pub input_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x1B, 0x1B, 0x1F),
            text: Color::Rgb(0xB2, 0xB2, 0xB2),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x66, 0x66, 0x66),
            accent: Color::Rgb(0x82, 0x57, 0xE5),
            done: Color::Rgb(0x1D, 0xB8, 0x63),
            danger: Color::Rgb(0xE8, 0x3F, 0x5B),
            selection_bg: Color::Rgb(0x2E, 0x27, 0x40),
            input_bg: Color::Rgb(0x26, 0x26, 0x2B),
        }
    }
}

/// Parse a hex color string like "#1DB863" into an RGB Color
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

impl Theme {
    /// Create a theme from the UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                tracing::warn!(slot = %key, %value, "ignoring unparsable color");
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "dim" => theme.dim = color,
                "accent" => theme.accent = color,
                "done" => theme.done = color,
                "danger" => theme.danger = color,
                "selection_bg" => theme.selection_bg = color,
                "input_bg" => theme.input_bg = color,
                _ => tracing::warn!(slot = %key, "unknown color slot"),
            }
        }

        theme
    }

    /// Title color for a task
    pub fn title_color(&self, done: bool) -> Color {
        if done { self.done } else { self.text }
    }
}
