//! Labeled option picker
//!
//! The picker owns nothing: it borrows the bound selection and the option
//! list for one render or one key, and reports a new value through
//! [`PickerEvent`]. The converter view writes that value back before the
//! next render, which keeps the highlighted row and the bound value in step.

use crate::tui::traits::{Component, ComponentId, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// What a key did to the picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// The bound value should become this option
    Changed(String),
    /// Key was a navigation key but there was nothing to move to
    Ignored,
    /// Not a picker key
    Unhandled,
}

/// A labeled single-choice list bound to an external value
pub struct CustomPicker<'a> {
    title: &'a str,
    selection: &'a str,
    items: &'a [String],
    focused: bool,
}

impl<'a> CustomPicker<'a> {
    pub fn new(title: &'a str, selection: &'a str, items: &'a [String]) -> Self {
        Self {
            title,
            selection,
            items,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Row of the bound value; duplicates resolve to the first occurrence
    pub fn selected_index(&self) -> Option<usize> {
        if self.selection.is_empty() {
            return None;
        }
        self.items.iter().position(|item| item == self.selection)
    }

    fn step(&self, forward: bool) -> PickerEvent {
        let len = self.items.len();
        if len == 0 {
            return PickerEvent::Ignored;
        }

        let next = match (self.selected_index(), forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1).min(len - 1),
            (Some(i), false) => i.saturating_sub(1),
        };

        if Some(next) == self.selected_index() {
            PickerEvent::Ignored
        } else {
            PickerEvent::Changed(self.items[next].clone())
        }
    }

    fn jump(&self, index: usize) -> PickerEvent {
        match self.items.get(index) {
            Some(item) if Some(index) != self.selected_index() => {
                PickerEvent::Changed(item.clone())
            }
            _ => PickerEvent::Ignored,
        }
    }
}

impl Component for CustomPicker<'_> {
    fn id(&self) -> ComponentId {
        ComponentId::Picker
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let [label_area, list_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

        let label = Paragraph::new(Line::from(vec![
            Span::styled(self.title, Style::default().fg(theme.title)),
            Span::styled(" :", Style::default().fg(theme.muted)),
        ]));
        f.render_widget(label, label_area);

        let border_color = if self.focused {
            theme.highlight
        } else {
            theme.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(border_color));

        let rows: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| ListItem::new(item.as_str()))
            .collect();

        let list = List::new(rows)
            .block(block)
            .style(Style::default().fg(theme.foreground))
            .highlight_style(
                Style::default()
                    .bg(theme.selection)
                    .fg(theme.selection_fg)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("› ");

        let mut state = ListState::default().with_selected(self.selected_index());
        f.render_stateful_widget(list, list_area, &mut state);
    }
}

impl Interactive for CustomPicker<'_> {
    type Output = PickerEvent;

    fn handle_key(&mut self, key: KeyEvent) -> PickerEvent {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.step(true),
            KeyCode::Up | KeyCode::Char('k') => self.step(false),
            KeyCode::Home => self.jump(0),
            KeyCode::End => self.jump(self.items.len().saturating_sub(1)),
            _ => PickerEvent::Unhandled,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓/jk:choose")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn items(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_empty_selection_down_picks_first() {
        let options = items(&["EUR", "GBP", "JPY"]);
        let mut picker = CustomPicker::new("Currency", "", &options);
        assert_eq!(
            picker.handle_key(key(KeyCode::Down)),
            PickerEvent::Changed("EUR".to_string())
        );
        assert_eq!(
            picker.handle_key(key(KeyCode::Up)),
            PickerEvent::Changed("JPY".to_string())
        );
    }

    #[test]
    fn test_navigation_moves_from_bound_value() {
        let options = items(&["EUR", "GBP", "JPY"]);
        let mut picker = CustomPicker::new("Currency", "GBP", &options);
        assert_eq!(
            picker.handle_key(key(KeyCode::Char('j'))),
            PickerEvent::Changed("JPY".to_string())
        );
        assert_eq!(
            picker.handle_key(key(KeyCode::Char('k'))),
            PickerEvent::Changed("EUR".to_string())
        );
    }

    #[test]
    fn test_edges_do_not_wrap() {
        let options = items(&["EUR", "GBP"]);
        let mut picker = CustomPicker::new("Currency", "GBP", &options);
        assert_eq!(picker.handle_key(key(KeyCode::Down)), PickerEvent::Ignored);
        assert_eq!(picker.handle_key(key(KeyCode::End)), PickerEvent::Ignored);
        assert_eq!(
            picker.handle_key(key(KeyCode::Home)),
            PickerEvent::Changed("EUR".to_string())
        );
    }

    #[test]
    fn test_empty_items_ignore_navigation() {
        let options: Vec<String> = Vec::new();
        let mut picker = CustomPicker::new("Currency", "", &options);
        assert_eq!(picker.handle_key(key(KeyCode::Down)), PickerEvent::Ignored);
        assert_eq!(
            picker.handle_key(key(KeyCode::Char('x'))),
            PickerEvent::Unhandled
        );
    }

    #[test]
    fn test_duplicates_select_first_occurrence() {
        let options = items(&["EUR", "EUR", "GBP"]);
        let picker = CustomPicker::new("Currency", "EUR", &options);
        assert_eq!(picker.selected_index(), Some(0));
    }

    #[test]
    fn test_renders_label_and_options_in_order() {
        let theme = Theme::by_name("Nord");
        let options = items(&["EUR", "GBP", "JPY"]);
        let mut terminal = Terminal::new(TestBackend::new(30, 7)).unwrap();
        terminal
            .draw(|f| {
                let ctx = RenderContext::new(&theme, 0);
                CustomPicker::new("Currency", "GBP", &options).render(f, f.area(), &ctx);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row = |y: u16| -> String {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        };
        assert!(row(0).starts_with("Currency :"));
        assert!(row(2).contains("EUR"));
        assert!(row(3).contains("› GBP"));
        assert!(row(4).contains("JPY"));
    }
}
