//! Amount text entry
//!
//! Accepts the characters of a decimal keypad (digits, `.` and `,`). Every
//! other printable key is swallowed so that typing never leaks into global
//! shortcuts. The text is not validated here; the presenter decides what a
//! malformed amount means.

use crate::tui::traits::{Component, ComponentId, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountEvent {
    /// The bound text should become this value
    Changed(String),
    /// Enter pressed; owner moves focus on
    Committed,
    /// Key consumed with no effect (rejected character)
    Consumed,
    /// Not an editing key
    Unhandled,
}

/// Characters a decimal keypad can produce
pub fn is_amount_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == ','
}

pub struct AmountField<'a> {
    label: &'a str,
    amount: &'a str,
    focused: bool,
}

impl<'a> AmountField<'a> {
    pub fn new(label: &'a str, amount: &'a str) -> Self {
        Self {
            label,
            amount,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Component for AmountField<'_> {
    fn id(&self) -> ComponentId {
        ComponentId::AmountField
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let border_color = if self.focused {
            theme.highlight
        } else {
            theme.border
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(
                format!(" {}: ", self.label),
                Style::default().fg(theme.title),
            ));

        let text = if self.amount.is_empty() && !self.focused {
            Line::from(Span::styled("0", Style::default().fg(theme.muted)))
        } else {
            Line::from(Span::styled(self.amount, Style::default().fg(theme.foreground)))
        };

        f.render_widget(Paragraph::new(text).block(block), area);

        if self.focused && area.width > 2 && area.height > 2 {
            let offset = (self.amount.width() as u16).min(area.width.saturating_sub(3));
            f.set_cursor_position((area.x + 1 + offset, area.y + 1));
        }
    }
}

impl Interactive for AmountField<'_> {
    type Output = AmountEvent;

    fn handle_key(&mut self, key: KeyEvent) -> AmountEvent {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return AmountEvent::Unhandled;
        }

        match key.code {
            KeyCode::Char(c) if is_amount_char(c) => {
                let mut next = self.amount.to_string();
                next.push(c);
                AmountEvent::Changed(next)
            }
            KeyCode::Char(_) => AmountEvent::Consumed,
            KeyCode::Backspace if self.amount.is_empty() => AmountEvent::Consumed,
            KeyCode::Backspace => {
                let mut next = self.amount.to_string();
                next.pop();
                AmountEvent::Changed(next)
            }
            KeyCode::Enter => AmountEvent::Committed,
            _ => AmountEvent::Unhandled,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("0-9 . , :type  Enter:done")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_decimal_characters_append() {
        let mut field = AmountField::new("Amount", "12");
        assert_eq!(
            field.handle_key(key(KeyCode::Char(','))),
            AmountEvent::Changed("12,".to_string())
        );
        assert_eq!(
            field.handle_key(key(KeyCode::Char('5'))),
            AmountEvent::Changed("125".to_string())
        );
    }

    #[test]
    fn test_other_printables_are_swallowed() {
        let mut field = AmountField::new("Amount", "1");
        assert_eq!(field.handle_key(key(KeyCode::Char('q'))), AmountEvent::Consumed);
        assert_eq!(field.handle_key(key(KeyCode::Char('-'))), AmountEvent::Consumed);
        assert_eq!(field.handle_key(key(KeyCode::Tab)), AmountEvent::Unhandled);
    }

    #[test]
    fn test_ctrl_chords_pass_through() {
        let mut field = AmountField::new("Amount", "1");
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(field.handle_key(ctrl_c), AmountEvent::Unhandled);
    }

    #[test]
    fn test_backspace_and_enter() {
        let mut field = AmountField::new("Amount", "4.5");
        assert_eq!(
            field.handle_key(key(KeyCode::Backspace)),
            AmountEvent::Changed("4.".to_string())
        );
        assert_eq!(field.handle_key(key(KeyCode::Enter)), AmountEvent::Committed);

        let mut empty = AmountField::new("Amount", "");
        assert_eq!(empty.handle_key(key(KeyCode::Backspace)), AmountEvent::Consumed);
    }
}
