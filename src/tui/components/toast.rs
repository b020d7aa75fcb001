//! Toast notification component
//!
//! A non-blocking overlay that auto-dismisses after a fixed duration.
//! Renders in the bottom-right corner on top of all other content.

use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// A toast notification that auto-dismisses
pub struct Toast {
    pub message: String,
    /// Failure toasts use the theme's error color
    pub failed: bool,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, false)
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, true)
    }

    fn new(message: impl Into<String>, failed: bool) -> Self {
        Self {
            message: message.into(),
            failed,
            created_at: Instant::now(),
            duration: Duration::from_secs(2),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Render the toast in the bottom-right corner
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        // 2 cells of padding plus the border on each side
        let width = (self.message.width() as u16 + 4).min(area.width.saturating_sub(4));
        let height = 3;

        let x = area.right().saturating_sub(width + 2);
        let y = area.bottom().saturating_sub(height + 2);
        let toast_area = Rect::new(x, y, width, height).intersection(area);

        let accent = if self.failed { theme.error } else { theme.highlight };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(theme.background));

        let text = Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.foreground))
            .block(block);

        f.render_widget(Clear, toast_area);
        f.render_widget(text, toast_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_toast_is_live() {
        let toast = Toast::failure("✗ Nothing to copy");
        assert!(toast.failed);
        assert!(!toast.is_expired());
    }
}
