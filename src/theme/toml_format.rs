// TOML theme format parser
//
// Each theme explicitly defines every color the converter screen uses; there
// is no automatic mapping from palette slots.
//
// Format version: 1

use ratatui::style::Color;
use serde::Deserialize;

/// Root structure for TOML theme files
#[derive(Debug, Clone, Deserialize)]
pub struct TomlTheme {
    pub meta: ThemeMeta,
    pub ui: UiColors,
    pub form: FormColors,
}

/// Theme metadata
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeMeta {
    pub name: String,
    pub version: u32,
    #[serde(default)]
    pub author: Option<String>,
}

/// Base UI chrome colors
#[derive(Debug, Clone, Deserialize)]
pub struct UiColors {
    pub background: String,
    pub foreground: String,
    pub border: String,
    pub border_focused: String,
    pub title: String,
    pub status_bar: String,
    pub selection_bg: String,
    pub selection_fg: String,
    /// Optional muted/secondary text color (falls back to status_bar)
    pub muted: Option<String>,
    /// Optional border style: "plain", "rounded", "double", "thick" (default: plain)
    pub border_type: Option<String>,
}

/// Converter form colors
#[derive(Debug, Clone, Deserialize)]
pub struct FormColors {
    pub button: String,
    pub button_fg: String,
    pub result: String,
    pub error: String,
}

impl TomlTheme {
    /// Parse a TOML theme from string
    pub fn from_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Parse a color string to ratatui Color
    /// Supports:
    /// - Hex format: #RRGGBB
    /// - ANSI format: ansi:0-15, ansi:fg, ansi:bg (for terminal-native colors)
    pub fn parse_color(value: &str) -> Color {
        if let Some(ansi) = value.strip_prefix("ansi:") {
            return match ansi {
                "0" => Color::Black,
                "1" => Color::Red,
                "2" => Color::Green,
                "3" => Color::Yellow,
                "4" => Color::Blue,
                "5" => Color::Magenta,
                "6" => Color::Cyan,
                "7" => Color::White,
                "8" => Color::DarkGray,
                "9" => Color::LightRed,
                "10" => Color::LightGreen,
                "11" => Color::LightYellow,
                "12" => Color::LightBlue,
                "13" => Color::LightMagenta,
                "14" => Color::LightCyan,
                "15" => Color::Gray,
                "fg" | "bg" => Color::Reset,
                _ => Color::White,
            };
        }

        let hex = value.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Color::White;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        Color::Rgb(channel(0..2), channel(2..4), channel(4..6))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(TomlTheme::parse_color("#ff0000"), Color::Rgb(255, 0, 0));
        assert_eq!(TomlTheme::parse_color("00ff00"), Color::Rgb(0, 255, 0));
        assert_eq!(TomlTheme::parse_color("ansi:4"), Color::Blue);
        assert_eq!(TomlTheme::parse_color("ansi:bg"), Color::Reset);
        assert_eq!(TomlTheme::parse_color("#fff"), Color::White);
    }

    #[test]
    fn test_parse_theme() {
        let toml = r##"
[meta]
name = "Test Theme"
version = 1

[ui]
background = "#1e1e2e"
foreground = "#cdd6f4"
border = "#45475a"
border_focused = "#f5c2e7"
title = "#cdd6f4"
status_bar = "#cdd6f4"
selection_bg = "#45475a"
selection_fg = "#cdd6f4"

[form]
button = "#89b4fa"
button_fg = "#1e1e2e"
result = "#a6e3a1"
error = "#f38ba8"
"##;

        let theme = TomlTheme::from_str(toml).unwrap();
        assert_eq!(theme.meta.name, "Test Theme");
        assert_eq!(theme.meta.version, 1);
        assert!(theme.meta.author.is_none());
        assert!(theme.ui.muted.is_none());
        assert_eq!(theme.form.error, "#f38ba8");
    }
}
