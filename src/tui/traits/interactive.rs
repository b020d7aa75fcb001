//! Interactive trait for components that handle keyboard input
//!
//! The converter view routes input to its focused control. Each control
//! reports what happened through its own `Output` type; the view reports
//! to the host with [`Handled`].

use super::Component;
use crossterm::event::KeyEvent;

/// Result of handling a key event at the view level
///
/// Tells the host whether the view consumed the event or if it should
/// bubble up for global handling (quit, copy).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed by the component
    Yes,
    /// Event was not handled, should bubble up
    No,
}

impl Handled {
    /// Check if the event was handled
    pub fn was_handled(self) -> bool {
        self == Self::Yes
    }
}

/// Trait for components that handle keyboard input
///
/// ```text
/// KeyEvent
///    │
///    ▼
/// Host (Ctrl+C)
///    │
///    ▼
/// ConverterView ── alert open? ──▶ ErrorAlert
///    │
///    ▼
/// Focused control (Picker / AmountField / ConvertButton)
///    │ returns its Output event
///    ▼
/// ConverterView applies the edit, returns Handled to the host
/// ```
pub trait Interactive: Component {
    /// What handling a key produced
    type Output;

    fn handle_key(&mut self, key: KeyEvent) -> Self::Output;

    /// Hint text for the status bar when this component is focused
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}
