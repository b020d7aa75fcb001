// Convert button
//
// Right-aligned single-line button. Activation is reported to the owner;
// the button itself never talks to the presenter.

use crate::tui::traits::{Component, ComponentId, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub const CONVERT_LABEL: &str = "Convert";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    Activated,
    Unhandled,
}

pub struct ConvertButton {
    focused: bool,
}

impl ConvertButton {
    pub fn new(focused: bool) -> Self {
        Self { focused }
    }
}

impl Component for ConvertButton {
    fn id(&self) -> ComponentId {
        ComponentId::ConvertButton
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let style = if self.focused {
            Style::default()
                .bg(theme.button)
                .fg(theme.button_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.button)
        };

        let label = Line::from(Span::styled(format!("[ {} ]", CONVERT_LABEL), style));
        f.render_widget(Paragraph::new(label).alignment(Alignment::Right), area);
    }
}

impl Interactive for ConvertButton {
    type Output = ButtonEvent;

    fn handle_key(&mut self, key: KeyEvent) -> ButtonEvent {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => ButtonEvent::Activated,
            _ => ButtonEvent::Unhandled,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("Enter/Space:convert")
    }
}
