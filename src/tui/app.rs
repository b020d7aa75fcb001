// TUI application state
//
// Owns the converter view plus the host-level extras around it: theme, the
// captured log buffer, the toast overlay and the quit flag.

use super::clipboard;
use super::components::toast::Toast;
use super::views::ConverterView;
use crate::logging::LogBuffer;
use crate::presenter::DataProvider;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::Arc;

/// Main application state for the TUI
pub struct App<P: DataProvider + ?Sized> {
    /// The converter screen
    pub view: ConverterView<P>,

    /// Current color theme
    pub theme: Theme,

    /// Log buffer for the status bar
    pub log_buffer: LogBuffer,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Transient notification
    pub toast: Option<Toast>,

    /// Animation frame counter for spinners
    animation_frame: usize,
}

impl<P: DataProvider + ?Sized> App<P> {
    pub fn new(presenter: Arc<P>, theme: Theme, log_buffer: LogBuffer) -> Self {
        Self {
            view: ConverterView::new(presenter),
            theme,
            log_buffer,
            should_quit: false,
            toast: None,
            animation_frame: 0,
        }
    }

    pub fn animation_frame(&self) -> usize {
        self.animation_frame
    }

    /// Advance spinners and drop an expired toast
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    pub fn show_toast(&mut self, toast: Toast) {
        self.toast = Some(toast);
    }

    /// Key hints for the status bar
    pub fn hints(&self) -> String {
        let quit = if self.view.is_editing_text() {
            "Ctrl+C:quit"
        } else {
            "q:quit"
        };
        format!("{}  Tab:next  y:copy  {}", self.view.focus_hint(), quit)
    }

    /// Copy the converted result to the system clipboard
    pub fn copy_result(&mut self) {
        let result = self.view.converted_result().to_string();
        if result.is_empty() {
            self.show_toast(Toast::failure("✗ Nothing to copy"));
            return;
        }

        match clipboard::copy_to_clipboard(&result) {
            Ok(()) => self.show_toast(Toast::success("✓ Copied to clipboard")),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {:#}", e);
                self.show_toast(Toast::failure("✗ Failed to copy"));
            }
        }
    }

    /// Handle keyboard input
    /// Layered dispatch: Ctrl+C → converter view (alert first) → global keys
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Layer 1: always-available quit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Layer 2: the view, which gives an open alert first refusal
        if self.view.handle_key(key).was_handled() {
            return;
        }

        // Layer 3: global keys the view did not want
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Char('y') => self.copy_result(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::testing::{localized, RecordingPresenter};

    fn app() -> App<RecordingPresenter> {
        App::new(
            Arc::new(RecordingPresenter::ready(&["EUR", "GBP"])),
            Theme::by_name("Nord"),
            LogBuffer::new(),
        )
    }

    fn press(app: &mut App<RecordingPresenter>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_q_quits_outside_text_entry() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_q_is_text_inside_amount_field() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert!(app.hints().contains("Ctrl+C:quit"));
    }

    #[test]
    fn test_ctrl_c_quits_even_with_alert() {
        let presenter = Arc::new(RecordingPresenter::ready(&["EUR"]));
        presenter.set_error(Some(localized("D", None)));
        let mut app = App::new(presenter, Theme::by_name("Nord"), LogBuffer::new());

        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_copy_without_result_warns() {
        let mut app = app();
        press(&mut app, KeyCode::Char('y'));
        let toast = app.toast.as_ref().unwrap();
        assert!(toast.failed);
        assert_eq!(toast.message, "✗ Nothing to copy");
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = app();
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        app.handle_key(key);
        assert!(!app.should_quit);
    }
}
