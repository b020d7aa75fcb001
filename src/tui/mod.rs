// TUI module - Terminal User Interface
//
// This module hosts the converter view in a terminal using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, presenter snapshots)
// - Mounting the view on a presenter and unmounting it on exit

pub mod app;
pub mod clipboard;
pub mod components;
pub mod layout;
pub mod traits;
pub mod views;

use crate::logging::LogBuffer;
use crate::presenter::{DataProvider, PresenterState};
use crate::theme::Theme;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Run the TUI
///
/// Sets up the terminal, mounts a converter view on `presenter`, runs the
/// event loop until the user quits, then unmounts and restores the terminal.
pub async fn run_tui<P>(presenter: Arc<P>, log_buffer: LogBuffer, theme: Theme) -> Result<()>
where
    P: DataProvider + ?Sized + 'static,
{
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Presenter publishes may come from any task; only the latest matters
    let (snapshot_tx, mut snapshot_rx) = watch::channel(presenter.snapshot());

    let mut app = App::new(presenter, theme, log_buffer);
    app.view.mount(Box::new(move |state: &PresenterState| {
        // Receiver gone means the loop already ended
        let _ = snapshot_tx.send(state.clone());
    }));
    tracing::info!("Converter screen ready");

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app, &mut snapshot_rx).await;

    app.view.unmount();

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// This loop handles three types of events:
/// 1. Keyboard input (routed through the App's layered dispatch)
/// 2. Timer ticks (spinner animation, toast expiry)
/// 3. Presenter snapshots (applied to the view)
async fn run_event_loop<P: DataProvider + ?Sized>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<P>,
    snapshot_rx: &mut watch::Receiver<PresenterState>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(120));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        app.handle_key(key_event);
                    }
                }
            } => {}

            // Periodic tick for redrawing
            _ = tick_interval.tick() => {
                app.tick();
            }

            // Presenter snapshots
            Ok(()) = snapshot_rx.changed() => {
                let state = snapshot_rx.borrow_and_update().clone();
                app.view.apply(state);
            }
        }

        if app.should_quit {
            tracing::info!("Quit requested");
            break;
        }
    }

    Ok(())
}
