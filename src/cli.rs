// CLI module - command-line argument parsing and handlers
//
// Provides a theme override for the TUI plus configuration management:
// - config --show: Display effective configuration
// - config --path: Show config file path
// - config --reset: Regenerate config file with defaults
// - config --themes: List available themes

use clap::{Parser, Subcommand};
use generic_converter::config::{Config, VERSION};
use generic_converter::theme::Theme;
use std::io::Write;

/// Generic converter - presenter-driven conversion screen for the terminal
#[derive(Parser)]
#[command(name = "generic-converter")]
#[command(version = VERSION)]
#[command(about = "Terminal converter screen driven by a pluggable presenter", long_about = None)]
pub struct Cli {
    /// Theme to use for this run (overrides config and CONVERTER_THEME)
    #[arg(long, global = true)]
    pub theme: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,

        /// List available themes
        #[arg(long)]
        themes: bool,
    },
}

/// Handle CLI subcommands. Returns true if a command was handled (exit after).
pub fn handle_command(cli: &Cli) -> bool {
    match cli.command {
        Some(Commands::Config {
            show,
            reset,
            path,
            themes,
        }) => {
            if path {
                handle_config_path();
            } else if show {
                handle_config_show();
            } else if reset {
                handle_config_reset();
            } else if themes {
                handle_config_themes();
            } else {
                // No flag provided, show help
                println!("Usage: generic-converter config [--show|--path|--reset|--themes]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --path    Show config file path");
                println!("  --reset   Reset config file to defaults");
                println!("  --themes  List available themes");
            }
            true
        }
        None => false, // No subcommand, run the TUI
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        let _ = std::io::stderr().flush();

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).is_err()
            || !input.trim().eq_ignore_ascii_case("y")
        {
            println!("Aborted.");
            return;
        }
    }

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            std::process::exit(1);
        }
    }

    // Write the default config (using Config's single source of truth)
    if let Err(e) = std::fs::write(&path, Config::default().to_toml()) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}

fn handle_config_themes() {
    for name in Theme::list_available() {
        println!("{}", name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_flag_parses_before_subcommand() {
        let cli = Cli::try_parse_from(["generic-converter", "--theme", "Nord"]).unwrap();
        assert_eq!(cli.theme.as_deref(), Some("Nord"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_config_subcommand_flags() {
        let cli = Cli::try_parse_from(["generic-converter", "config", "--path"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config { path: true, .. })
        ));
    }
}
