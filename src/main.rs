// generic-converter - terminal host for the converter screen
//
// Wires the converter view to the bundled offline currency presenter:
// - CLI (clap): theme override and config management subcommands
// - Config: env > ~/.config/generic-converter/config.toml > defaults
// - Logging: captured into the TUI status bar, optionally also to JSON files
// - TUI (ratatui): the converter screen itself

mod cli;

use anyhow::Result;
use clap::Parser;
use generic_converter::config::{Config, LogRotation};
use generic_converter::demo::CurrencyPresenter;
use generic_converter::logging::{LogBuffer, TuiLogLayer};
use generic_converter::theme::{Theme, ThemeConfig};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Handle CLI commands first (config --show, --path, --reset, --themes)
    if cli::handle_command(&cli) {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = Config::from_env();
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }

    // Create log buffer for the status bar
    let log_buffer = LogBuffer::new();

    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("generic_converter={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // Logs never go to stdout: the TUI owns the terminal.
    // The guard must be kept alive for the duration of the program to ensure logs flush
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> =
        if config.logging.file_enabled {
            match std::fs::create_dir_all(&config.logging.file_dir) {
                Err(e) => {
                    eprintln!(
                        "Warning: Could not create log directory {:?}: {}",
                        config.logging.file_dir, e
                    );
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(TuiLogLayer::new(log_buffer.clone()))
                        .init();
                    None
                }
                Ok(()) => {
                    let logging = &config.logging;
                    let file_appender = match logging.file_rotation {
                        LogRotation::Hourly => tracing_appender::rolling::hourly(
                            &logging.file_dir,
                            &logging.file_prefix,
                        ),
                        LogRotation::Daily => tracing_appender::rolling::daily(
                            &logging.file_dir,
                            &logging.file_prefix,
                        ),
                        LogRotation::Never => tracing_appender::rolling::never(
                            &logging.file_dir,
                            &logging.file_prefix,
                        ),
                    };

                    // Wrap in non-blocking writer (writes happen in background thread)
                    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

                    // File layer uses JSON format for structured log parsing
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(TuiLogLayer::new(log_buffer.clone()))
                        .with(
                            tracing_subscriber::fmt::layer()
                                .json()
                                .with_writer(non_blocking)
                                .with_ansi(false),
                        )
                        .init();
                    Some(guard)
                }
            }
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(TuiLogLayer::new(log_buffer.clone()))
                .init();
            None
        };

    tracing::info!("generic-converter {} starting", generic_converter::config::VERSION);

    let theme = Theme::by_name_with_config(
        &config.theme,
        &ThemeConfig {
            use_theme_background: config.use_theme_background,
        },
    );
    tracing::debug!("Theme: {}", theme.name);

    let presenter = Arc::new(CurrencyPresenter::new(config.demo.clone()));

    generic_converter::tui::run_tui(presenter, log_buffer, theme).await?;

    tracing::info!("generic-converter shutting down");
    Ok(())
}
