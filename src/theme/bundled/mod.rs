//! Bundled TOML themes (compiled into binary)
//!
//! Users can drop their own `*.toml` files into
//! `~/.config/generic-converter/themes/`; those take precedence over these.

mod converter_dark;
mod converter_light;
mod dracula;
mod nord;

pub use converter_dark::THEME as CONVERTER_DARK;
pub use converter_light::THEME as CONVERTER_LIGHT;
pub use dracula::THEME as DRACULA;
pub use nord::THEME as NORD;

/// Bundled theme: name and TOML content
pub struct BundledTheme {
    pub filename: &'static str,
    pub content: &'static str,
}

/// All bundled themes
pub const BUNDLED_THEMES: &[BundledTheme] = &[
    BundledTheme {
        filename: "Converter_Dark.toml",
        content: CONVERTER_DARK,
    },
    BundledTheme {
        filename: "Converter_Light.toml",
        content: CONVERTER_LIGHT,
    },
    BundledTheme {
        filename: "Nord.toml",
        content: NORD,
    },
    BundledTheme {
        filename: "Dracula.toml",
        content: DRACULA,
    },
];

/// Display names of the bundled themes
pub fn list_bundled_themes() -> Vec<String> {
    BUNDLED_THEMES
        .iter()
        .map(|t| t.filename.trim_end_matches(".toml").replace('_', " "))
        .collect()
}
