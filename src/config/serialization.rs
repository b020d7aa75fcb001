//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the effective configuration as a commented TOML document
    pub fn to_toml(&self) -> String {
        let mut output = String::from(
            "# generic-converter configuration\n\
             # Environment variables (CONVERTER_THEME, CONVERTER_LOADING_DELAY_MS, RUST_LOG)\n\
             # take precedence over values in this file.\n\n",
        );

        output.push_str("# Theme: Converter Dark, Converter Light, Nord, Dracula,\n");
        output.push_str("# or the name of a file in ~/.config/generic-converter/themes/\n");
        output.push_str(&format!("theme = {}\n", toml_str(&self.theme)));
        output.push_str("\n# Use theme's background color (true) or terminal's default (false)\n");
        output.push_str(&format!(
            "use_theme_background = {}\n",
            self.use_theme_background
        ));

        output.push_str(&self.logging_to_toml());
        output.push_str(&self.demo_to_toml());
        output
    }

    fn logging_to_toml(&self) -> String {
        let logging = &self.logging;
        let mut output = String::from("\n[logging]\n");
        output.push_str("# trace, debug, info, warn, error\n");
        output.push_str(&format!("level = {}\n", toml_str(&logging.level)));
        output.push_str(&format!("file_enabled = {}\n", logging.file_enabled));
        output.push_str(&format!(
            "file_dir = {}\n",
            toml_str(&logging.file_dir.display().to_string())
        ));
        output.push_str("# hourly, daily, never\n");
        output.push_str(&format!(
            "file_rotation = {}\n",
            toml_str(logging.file_rotation.as_str())
        ));
        output.push_str(&format!("file_prefix = {}\n", toml_str(&logging.file_prefix)));
        output
    }

    fn demo_to_toml(&self) -> String {
        let demo = &self.demo;
        let mut output = String::from("\n[demo]\n");
        output.push_str(&format!("screen_title = {}\n", toml_str(&demo.screen_title)));
        output.push_str(&format!("base_currency = {}\n", toml_str(&demo.base_currency)));
        output.push_str(&format!("loading_delay_ms = {}\n", demo.loading_delay_ms));
        output.push_str(&format!("fail_start = {}\n", demo.fail_start));

        // Array-of-tables keeps picker order stable
        for entry in &demo.rates {
            output.push_str("\n[[demo.rates]]\n");
            output.push_str(&format!("code = {}\n", toml_str(&entry.code)));
            output.push_str(&format!("rate = {}\n", toml::Value::Float(entry.rate)));
        }
        output
    }
}

/// Quote a string with TOML escaping (Rust's `{:?}` escapes are not TOML)
fn toml_str(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}
