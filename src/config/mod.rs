//! Configuration for the converter host
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/generic-converter/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod demo;
mod logging;
mod serialization;


// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (maintain public API)
// ─────────────────────────────────────────────────────────────────────────────

pub use demo::{DemoConfig, FileDemo, RateEntry};
pub use logging::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Theme name: "Converter Dark", "Converter Light", "Nord", "Dracula", or a file in the themes dir
    pub theme: String,

    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Bundled demo presenter settings
    pub demo: DemoConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: crate::theme::DEFAULT_THEME.to_string(),
            use_theme_background: true,
            logging: LoggingConfig::default(),
            demo: DemoConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub use_theme_background: Option<bool>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,

    /// Optional [demo] section
    pub demo: Option<FileDemo>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/generic-converter/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| {
            p.join(".config")
                .join("generic-converter")
                .join("config.toml")
        })
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// # Panics
    /// Exits the process if the config file exists but cannot be parsed or
    /// read. A broken config should fail loudly instead of silently falling
    /// back to defaults.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                    eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  Tip: rates are written as [[demo.rates]] tables with code and rate.\n");
                    eprintln!("  To reset, run `generic-converter config --reset`.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Resolve a parsed file against the built-in defaults (no env lookup)
    pub(crate) fn from_file(file: FileConfig) -> Self {
        let defaults = Self::default();

        Self {
            theme: file.theme.unwrap_or(defaults.theme),
            use_theme_background: file
                .use_theme_background
                .unwrap_or(defaults.use_theme_background),
            logging: LoggingConfig::from_file(file.logging),
            demo: DemoConfig::from_file(file.demo),
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        let mut config = Self::from_file(Self::load_file_config());

        // Theme: env > file > default
        if let Ok(theme) = std::env::var("CONVERTER_THEME") {
            config.theme = theme;
        }

        // Simulated fetch latency: env > file > default
        if let Some(delay) = std::env::var("CONVERTER_LOADING_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.demo.loading_delay_ms = delay;
        }

        config
    }
}
