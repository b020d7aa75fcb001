//! Modal error alert
//!
//! Adapts a presenter's error slot into an acknowledge-only dialog.
//!
//! ```text
//!   error = Some(Localized) ──▶ Shown(alert) ──OK──▶ Hidden (error = None)
//!   error = Some(Opaque)    ──▶ Hidden
//!   error = None            ──▶ Hidden
//! ```
//!
//! The alert is derived from the error on every render, so a presenter that
//! overwrites its error while the dialog is open replaces the dialog content.

use crate::error::PresenterError;
use crate::theme::Theme;
use crate::tui::traits::{Component, ComponentId, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};

/// Label of the only button
pub const DEFAULT_BUTTON_TITLE: &str = "OK";

/// Displayable content of one alert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedAlert {
    pub title: String,
    pub message: String,
    pub button_title: String,
}

impl LocalizedAlert {
    /// Build an alert when the error can describe itself, None otherwise
    pub fn from_error(error: Option<&PresenterError>) -> Option<Self> {
        let localized = error?.as_localized()?;
        Some(Self {
            title: localized.error_description(),
            message: localized.recovery_suggestion().unwrap_or_default(),
            button_title: DEFAULT_BUTTON_TITLE.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AlertState {
    #[default]
    Hidden,
    Shown(LocalizedAlert),
}

impl AlertState {
    pub fn from_error(error: Option<&PresenterError>) -> Self {
        match LocalizedAlert::from_error(error) {
            Some(alert) => Self::Shown(alert),
            None => Self::Hidden,
        }
    }

    pub fn is_shown(&self) -> bool {
        matches!(self, Self::Shown(_))
    }
}

/// What a key did while the alert was up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertAction {
    /// The single button was pressed; owner clears the error
    Acknowledge,
    /// Swallowed; the alert is modal
    None,
}

pub struct ErrorAlert<'a> {
    alert: &'a LocalizedAlert,
}

impl<'a> ErrorAlert<'a> {
    pub fn new(alert: &'a LocalizedAlert) -> Self {
        Self { alert }
    }

    /// Title and message, before wrapping
    fn text_lines(&self, theme: &Theme) -> Vec<Line<'_>> {
        let mut lines = vec![Line::from(Span::styled(
            self.alert.title.as_str(),
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        ))];
        if !self.alert.message.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                self.alert.message.as_str(),
                Style::default().fg(theme.foreground),
            )));
        }
        lines
    }

    /// Centered popup tall enough for the word-wrapped text plus the button row
    fn popup_area(area: Rect, text: &Paragraph) -> Rect {
        let width = area.width.saturating_sub(4).clamp(20, 56).min(area.width);
        // borders + horizontal padding
        let text_width = width.saturating_sub(4).max(1);
        let text_height = u16::try_from(text.line_count(text_width)).unwrap_or(u16::MAX);
        // borders + text + spacer + button
        let height = text_height.saturating_add(4);

        let [vertical] = Layout::vertical([Constraint::Length(height.min(area.height))])
            .flex(Flex::Center)
            .areas(area);
        let [popup] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(vertical);
        popup
    }
}

impl Component for ErrorAlert<'_> {
    fn id(&self) -> ComponentId {
        ComponentId::ErrorAlert
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;

        let text = Paragraph::new(self.text_lines(theme))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        let popup = Self::popup_area(area, &text);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.error))
            .style(Style::default().bg(theme.background))
            .padding(Padding::horizontal(1));
        let inner = block.inner(popup);

        // Button keeps the last row even when the text has to be cut
        let [text_area, _, button_area] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let button = Paragraph::new(Line::from(Span::styled(
            format!("[ {} ]", self.alert.button_title),
            Style::default()
                .bg(theme.button)
                .fg(theme.button_fg)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);

        f.render_widget(Clear, popup);
        f.render_widget(block, popup);
        f.render_widget(text, text_area);
        f.render_widget(button, button_area);
    }
}

impl Interactive for ErrorAlert<'_> {
    type Output = AlertAction;

    fn handle_key(&mut self, key: KeyEvent) -> AlertAction {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Esc => AlertAction::Acknowledge,
            _ => AlertAction::None,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("Enter:dismiss")
    }
}
