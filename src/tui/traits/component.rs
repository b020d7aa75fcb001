//! Core component trait - the foundation of the UI system
//!
//! Every UI element that can be rendered implements `Component`.

use crate::theme::Theme;
use ratatui::{layout::Rect, Frame};

/// Unique identifier for a component
///
/// The converter view also uses it as its focus slot: only the three form
/// controls can hold focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentId {
    /// Whole converter screen
    Converter,
    /// Option picker
    Picker,
    /// Amount text entry
    AmountField,
    /// Convert button
    ConvertButton,
    /// Modal error alert (captures input, never focused)
    ErrorAlert,
    /// Host status bar (non-focusable)
    StatusBar,
}

impl ComponentId {
    /// Whether this component can receive focus
    pub fn is_focusable(&self) -> bool {
        matches!(
            self,
            ComponentId::Picker | ComponentId::AmountField | ComponentId::ConvertButton
        )
    }

    /// Cycle to next focusable component (Tab behavior)
    pub fn next_focus(self) -> Self {
        match self {
            Self::Picker => Self::AmountField,
            Self::AmountField => Self::ConvertButton,
            Self::ConvertButton => Self::Picker,
            other => other, // Non-focusable stays put
        }
    }

    /// Cycle to previous focusable component (Shift+Tab behavior)
    pub fn prev_focus(self) -> Self {
        match self {
            Self::Picker => Self::ConvertButton,
            Self::AmountField => Self::Picker,
            Self::ConvertButton => Self::AmountField,
            other => other,
        }
    }
}

/// Immutable context passed to components during rendering
///
/// Components only see what they need - no access to mutable host state.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// Color theme for styling
    pub theme: &'a Theme,

    /// Animation frame counter (for the loading spinner)
    pub animation_frame: usize,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a Theme, animation_frame: usize) -> Self {
        Self {
            theme,
            animation_frame,
        }
    }

    /// Get spinner character for current animation frame
    pub fn spinner_char(&self) -> char {
        const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
        SPINNER[self.animation_frame % SPINNER.len()]
    }
}

/// Base trait for all UI components
///
/// A component is anything that can render itself to the terminal.
pub trait Component {
    /// Unique identifier for this component
    fn id(&self) -> ComponentId;

    /// Render the component to the given area
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle_covers_form_controls() {
        let mut focus = ComponentId::Picker;
        let mut visited = Vec::new();
        for _ in 0..3 {
            visited.push(focus);
            focus = focus.next_focus();
        }
        assert_eq!(focus, ComponentId::Picker);
        assert_eq!(
            visited,
            vec![
                ComponentId::Picker,
                ComponentId::AmountField,
                ComponentId::ConvertButton
            ]
        );
        assert!(visited.iter().all(ComponentId::is_focusable));
    }

    #[test]
    fn test_prev_focus_inverts_next() {
        for id in [
            ComponentId::Picker,
            ComponentId::AmountField,
            ComponentId::ConvertButton,
        ] {
            assert_eq!(id.next_focus().prev_focus(), id);
        }
        assert_eq!(ComponentId::ErrorAlert.next_focus(), ComponentId::ErrorAlert);
        assert!(!ComponentId::StatusBar.is_focusable());
    }

    #[test]
    fn test_spinner_cycles() {
        let theme = Theme::by_name("Nord");
        assert_eq!(RenderContext::new(&theme, 0).spinner_char(), '◐');
        assert_eq!(RenderContext::new(&theme, 5).spinner_char(), '◓');
    }
}
