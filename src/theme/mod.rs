// Theme system for the converter screen
//
// - TomlTheme: native file format with explicit color definitions
// - Theme: final resolved theme with all colors ready for use
//
// Theme loading priority:
// 1. External TOML themes from ~/.config/generic-converter/themes/*.toml
// 2. Bundled themes (compiled into the binary)
// 3. Fallback to hardcoded default

mod bundled;
mod toml_format;

pub use toml_format::TomlTheme;

use ratatui::style::Color;
use ratatui::widgets::BorderType;
use std::path::PathBuf;

/// Name of the theme used when none is configured
pub const DEFAULT_THEME: &str = "Converter Dark";

/// Theme configuration options
#[derive(Debug, Clone)]
pub struct ThemeConfig {
    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            use_theme_background: true,
        }
    }
}

/// Complete resolved theme ready for use in the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // ─── Chrome ──────────────────────────────────────────────
    pub background: Color,
    pub foreground: Color,
    pub title: Color,
    pub border: Color,
    pub highlight: Color, // Maps to border_focused
    pub status_bar: Color,
    pub muted: Color,

    // ─── Selection ───────────────────────────────────────────
    pub selection: Color,
    pub selection_fg: Color,

    // ─── Form ────────────────────────────────────────────────
    pub button: Color,
    pub button_fg: Color,
    pub result: Color,
    pub error: Color,

    pub border_type: BorderType,
}

impl Theme {
    /// Load theme by name with default configuration
    pub fn by_name(name: &str) -> Self {
        Self::by_name_with_config(name, &ThemeConfig::default())
    }

    /// Load theme by name with custom configuration
    pub fn by_name_with_config(name: &str, config: &ThemeConfig) -> Self {
        if let Some(theme) = Self::load_external(name, config) {
            return theme;
        }

        if let Some(theme) = Self::load_bundled(name, config) {
            return theme;
        }

        tracing::warn!("Theme '{}' not found, using fallback", name);
        Self::hardcoded_default(config)
    }

    fn load_external(name: &str, config: &ThemeConfig) -> Option<Self> {
        let themes_dir = Self::themes_dir()?;

        for candidate in [name.to_string(), name.replace(' ', "_")] {
            let path = themes_dir.join(format!("{}.toml", candidate));
            let Ok(contents) = std::fs::read_to_string(&path) else {
                continue;
            };
            match TomlTheme::from_str(&contents) {
                Ok(toml_theme) => return Some(Self::from_toml(toml_theme, config)),
                Err(e) => tracing::warn!("Ignoring theme file {}: {}", path.display(), e),
            }
        }

        None
    }

    fn load_bundled(name: &str, config: &ThemeConfig) -> Option<Self> {
        let filename = format!("{}.toml", name.replace(' ', "_"));
        let theme = bundled::BUNDLED_THEMES
            .iter()
            .find(|t| t.filename.eq_ignore_ascii_case(&filename))?;
        TomlTheme::from_str(theme.content)
            .ok()
            .map(|toml_theme| Self::from_toml(toml_theme, config))
    }

    /// Get themes directory path
    fn themes_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".config").join("generic-converter").join("themes"))
    }

    /// Parse border type string to BorderType enum
    fn parse_border_type(value: Option<&str>) -> BorderType {
        match value {
            Some("rounded") => BorderType::Rounded,
            Some("double") => BorderType::Double,
            Some("thick") => BorderType::Thick,
            _ => BorderType::Plain,
        }
    }

    /// Create theme from native TOML format
    fn from_toml(toml: TomlTheme, config: &ThemeConfig) -> Self {
        let parse = TomlTheme::parse_color;

        let background = if config.use_theme_background {
            parse(&toml.ui.background)
        } else {
            Color::Reset
        };
        let status_bar = parse(&toml.ui.status_bar);

        Self {
            name: toml.meta.name.clone(),
            background,
            foreground: parse(&toml.ui.foreground),
            title: parse(&toml.ui.title),
            border: parse(&toml.ui.border),
            highlight: parse(&toml.ui.border_focused),
            status_bar,
            muted: toml.ui.muted.as_deref().map(parse).unwrap_or(status_bar),
            selection: parse(&toml.ui.selection_bg),
            selection_fg: parse(&toml.ui.selection_fg),
            button: parse(&toml.form.button),
            button_fg: parse(&toml.form.button_fg),
            result: parse(&toml.form.result),
            error: parse(&toml.form.error),
            border_type: Self::parse_border_type(toml.ui.border_type.as_deref()),
        }
    }

    /// Hardcoded fallback when no themes can be loaded
    fn hardcoded_default(config: &ThemeConfig) -> Self {
        let background = if config.use_theme_background {
            Color::Rgb(40, 44, 52)
        } else {
            Color::Reset
        };

        Self {
            name: "Fallback".to_string(),
            background,
            foreground: Color::Rgb(220, 223, 228),
            title: Color::Rgb(86, 182, 194),
            border: Color::Rgb(92, 99, 112),
            highlight: Color::Rgb(229, 192, 123),
            status_bar: Color::Rgb(171, 178, 191),
            muted: Color::Rgb(171, 178, 191),
            selection: Color::Rgb(71, 78, 93),
            selection_fg: Color::Rgb(220, 223, 228),
            button: Color::Rgb(97, 175, 239),
            button_fg: Color::Rgb(40, 44, 52),
            result: Color::Rgb(152, 195, 121),
            error: Color::Rgb(224, 108, 117),
            border_type: BorderType::Plain,
        }
    }

    /// List all available themes (bundled + external)
    pub fn list_available() -> Vec<String> {
        let mut themes = bundled::list_bundled_themes();

        if let Some(themes_dir) = Self::themes_dir() {
            if let Ok(entries) = std::fs::read_dir(themes_dir) {
                for entry in entries.flatten() {
                    let path = entry.path();
                    if path.extension().is_some_and(|ext| ext == "toml") {
                        if let Some(stem) = path.file_stem() {
                            let display_name = stem.to_string_lossy().replace('_', " ");
                            if !themes.iter().any(|t| t.eq_ignore_ascii_case(&display_name)) {
                                themes.push(display_name);
                            }
                        }
                    }
                }
            }
        }

        themes
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::by_name(DEFAULT_THEME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_theme_resolves_by_display_name() {
        let theme = Theme::load_bundled("Nord", &ThemeConfig::default()).unwrap();
        assert_eq!(theme.name, "Nord");
        assert_eq!(theme.background, Color::Rgb(0x2e, 0x34, 0x40));
        // Nord has no muted entry, falls back to status bar color
        assert_eq!(theme.muted, theme.status_bar);
    }

    #[test]
    fn test_terminal_background_option() {
        let config = ThemeConfig {
            use_theme_background: false,
        };
        let theme = Theme::load_bundled("Converter Dark", &config).unwrap();
        assert_eq!(theme.background, Color::Reset);
        assert_eq!(theme.border_type, BorderType::Rounded);
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let theme = Theme::by_name("No Such Theme 9000");
        assert_eq!(theme.name, "Fallback");
    }

    #[test]
    fn test_list_available_includes_bundled() {
        let themes = Theme::list_available();
        assert!(themes.iter().any(|t| t == "Converter Dark"));
        assert!(themes.iter().any(|t| t == "Dracula"));
    }
}
