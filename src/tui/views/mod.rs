// Views module - screen-level rendering logic
//
// The host has a single screen: the converter view in the content slot and
// the status bar underneath, with the toast floating over both.

mod converter;

pub use converter::{ConverterView, Phase, LOADING_LABEL};

use super::app::App;
use super::components::status_bar;
use super::traits::RenderContext;
use crate::presenter::DataProvider;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw<P: DataProvider + ?Sized>(f: &mut Frame, app: &mut App<P>) {
    // Apply theme background to entire frame (respects use_theme_background)
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let [content, footer] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(2)]).areas(f.area());

    let theme = app.theme.clone();
    let ctx = RenderContext::new(&theme, app.animation_frame());
    app.view.draw(f, content, &ctx);

    let hints = app.hints();
    status_bar::render(f, footer, &theme, &hints, &app.log_buffer);

    if let Some(toast) = &app.toast {
        toast.render(f, f.area(), &theme);
    }
}
