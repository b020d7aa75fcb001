// Status bar component
//
// Bottom line of the host: key hints for the focused control on the left,
// the newest captured log line on the right when there is room for it.

use crate::logging::{LogBuffer, LogLevel};
use crate::theme::Theme;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const SEPARATOR: &str = " │ ";

/// Cut `text` to at most `max` display columns, marking the cut with `…`
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Render hints and the latest log line
pub fn render(f: &mut Frame, area: Rect, theme: &Theme, hints: &str, logs: &LogBuffer) {
    let bp = Breakpoint::from_width(area.width);
    let width = area.width as usize;

    let hints = format!(" {}", hints);
    let mut spans = vec![Span::styled(
        truncate_to_width(&hints, width),
        Style::default().fg(theme.status_bar),
    )];

    // Compact terminals only get hints
    if bp.at_least(Breakpoint::Normal) {
        if let Some(entry) = logs.latest_at_least(LogLevel::Info) {
            let room = width
                .saturating_sub(hints.width())
                .saturating_sub(SEPARATOR.width());
            if room > 8 {
                let color = match entry.level {
                    LogLevel::Error => theme.error,
                    LogLevel::Warn => theme.highlight,
                    _ => theme.muted,
                };
                let text = format!("{} {}", entry.timestamp.format("%H:%M:%S"), entry.message);
                spans.push(Span::styled(SEPARATOR, Style::default().fg(theme.border)));
                spans.push(Span::styled(
                    truncate_to_width(&text, room),
                    Style::default().fg(color),
                ));
            }
        }
    }

    let status = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::TOP).border_style(Style::default().fg(theme.border)));

    f.render_widget(status, area);
}
