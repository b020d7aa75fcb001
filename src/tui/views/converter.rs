// Converter view - the whole converter screen
//
// Shows, depending on the presenter's loading flag:
// - Loading: a spinner labelled "fetching data", nothing else
// - Ready: banner, picker, amount entry, convert button, result line
//
// An error alert is layered over Ready content only; an error raised while
// loading waits until the form is back. The view keeps only
// transient input state (selection, amount, focus); everything it displays
// comes from the latest presenter snapshot.

use crate::presenter::{DataProvider, Listener, PresenterState, Subscription};
use crate::tui::components::{
    AlertAction, AlertState, AmountEvent, AmountField, ButtonEvent, ConvertButton,
    CustomPicker, ErrorAlert, PickerEvent,
};
use crate::tui::layout::Breakpoint;
use crate::tui::traits::{Component, ComponentId, Handled, Interactive, RenderContext};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph},
    Frame,
};
use std::sync::Arc;

/// Label under the spinner while the presenter is loading
pub const LOADING_LABEL: &str = "fetching data";

/// Which half of the state machine the latest snapshot puts us in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
}

/// Converter screen bound to one presenter for its whole lifetime
pub struct ConverterView<P: DataProvider + ?Sized> {
    presenter: Arc<P>,

    /// Latest applied snapshot
    state: PresenterState,

    /// Bound picker value; empty or one of `items_to_convert`
    selection: String,

    /// Bound amount text, never validated here
    amount: String,

    /// Focused form control
    focus: ComponentId,

    /// Set once `start` has been issued
    started: bool,

    /// Live while mounted
    subscription: Option<Subscription>,
}

impl<P: DataProvider + ?Sized> ConverterView<P> {
    pub fn new(presenter: Arc<P>) -> Self {
        let state = presenter.snapshot();
        Self {
            presenter,
            state,
            selection: String::new(),
            amount: String::new(),
            focus: ComponentId::Picker,
            started: false,
            subscription: None,
        }
    }

    /// Begin observing the presenter; `listener` receives every snapshot
    pub fn mount(&mut self, listener: Listener) {
        self.subscription = Some(self.presenter.subscribe(listener));
        tracing::debug!("converter view mounted");
    }

    /// Stop observing; later presenter publishes reach nobody
    pub fn unmount(&mut self) {
        if self.subscription.take().is_some() {
            tracing::debug!("converter view unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Take a published snapshot; older revisions than the current one are dropped
    pub fn apply(&mut self, state: PresenterState) {
        if state.revision < self.state.revision {
            tracing::trace!(
                stale = state.revision,
                current = self.state.revision,
                "dropping stale snapshot"
            );
            return;
        }

        let was_shown = self.alert_state().is_shown();

        if !self.selection.is_empty()
            && !state
                .convert_item_model
                .items_to_convert
                .contains(&self.selection)
        {
            tracing::debug!(selection = %self.selection, "selection no longer offered, clearing");
            self.selection.clear();
        }
        self.state = state;

        if let AlertState::Shown(alert) = self.alert_state() {
            if !was_shown {
                tracing::debug!(title = %alert.title, "error alert shown");
            }
        }
    }

    /// Pull the presenter's current state directly
    pub fn refresh(&mut self) {
        let state = self.presenter.snapshot();
        self.apply(state);
    }

    pub fn phase(&self) -> Phase {
        if self.state.is_loading {
            Phase::Loading
        } else {
            Phase::Ready
        }
    }

    /// Alert for the current error; always hidden while loading
    pub fn alert_state(&self) -> AlertState {
        match self.phase() {
            Phase::Loading => AlertState::Hidden,
            Phase::Ready => AlertState::from_error(self.state.error.as_ref()),
        }
    }

    pub fn state(&self) -> &PresenterState {
        &self.state
    }

    pub fn selection(&self) -> &str {
        &self.selection
    }

    /// Change the bound picker value from outside the picker
    pub fn set_selection(&mut self, value: impl Into<String>) {
        self.selection = value.into();
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn focus(&self) -> ComponentId {
        self.focus
    }

    pub fn amount_is_focused(&self) -> bool {
        self.focus == ComponentId::AmountField
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn converted_result(&self) -> &str {
        &self.state.convert_item_model.converted_result
    }

    /// Whether keystrokes are currently text entry
    pub fn is_editing_text(&self) -> bool {
        self.phase() == Phase::Ready && self.amount_is_focused() && !self.alert_state().is_shown()
    }

    /// Key hints for whatever currently owns input
    pub fn focus_hint(&self) -> &'static str {
        if let AlertState::Shown(alert) = self.alert_state() {
            return ErrorAlert::new(&alert).focus_hint().unwrap_or_default();
        }
        if self.phase() == Phase::Loading {
            return "q:quit";
        }
        let hint = match self.focus {
            ComponentId::Picker => CustomPicker::new("", "", &[]).focus_hint(),
            ComponentId::AmountField => AmountField::new("", "").focus_hint(),
            _ => ConvertButton::new(true).focus_hint(),
        };
        hint.unwrap_or_default()
    }

    /// Render, then run the first-appearance hook
    pub fn draw(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        self.render(f, area, ctx);
        if self.phase() == Phase::Ready {
            self.content_appeared();
        }
    }

    fn content_appeared(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        tracing::debug!("converter content visible, starting presenter");
        self.presenter.start(None);
    }

    /// Forward the current selection and amount to the presenter
    pub fn convert(&mut self) {
        self.focus = ComponentId::ConvertButton;
        tracing::debug!(value = %self.selection, amount = %self.amount, "convert requested");
        self.presenter.convert(&self.selection, &self.amount);
    }

    fn acknowledge_error(&mut self) {
        tracing::debug!("error alert acknowledged");
        self.presenter.set_error(None);
        self.state.error = None;
    }

    /// Route a key: alert first, then focus cycling, then the focused control
    pub fn handle_key(&mut self, key: KeyEvent) -> Handled {
        if let AlertState::Shown(alert) = self.alert_state() {
            if ErrorAlert::new(&alert).handle_key(key) == AlertAction::Acknowledge {
                self.acknowledge_error();
            }
            return Handled::Yes;
        }

        if self.phase() == Phase::Loading {
            return Handled::No;
        }

        match key.code {
            KeyCode::BackTab => {
                self.focus = self.focus.prev_focus();
                return Handled::Yes;
            }
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.focus = self.focus.prev_focus();
                return Handled::Yes;
            }
            KeyCode::Tab => {
                self.focus = self.focus.next_focus();
                return Handled::Yes;
            }
            _ => {}
        }

        match self.focus {
            ComponentId::Picker => self.handle_picker_key(key),
            ComponentId::AmountField => self.handle_amount_key(key),
            ComponentId::ConvertButton => self.handle_button_key(key),
            _ => Handled::No,
        }
    }

    fn handle_picker_key(&mut self, key: KeyEvent) -> Handled {
        let model = &self.state.convert_item_model;
        let event =
            CustomPicker::new(&model.title, &self.selection, &model.items_to_convert).handle_key(key);
        match event {
            PickerEvent::Changed(value) => {
                self.selection = value;
                Handled::Yes
            }
            PickerEvent::Ignored => Handled::Yes,
            PickerEvent::Unhandled => Handled::No,
        }
    }

    fn handle_amount_key(&mut self, key: KeyEvent) -> Handled {
        let event = AmountField::new(&self.state.convert_item_model.sub_title, &self.amount)
            .handle_key(key);
        match event {
            AmountEvent::Changed(value) => {
                self.amount = value;
                Handled::Yes
            }
            AmountEvent::Committed => {
                self.focus = ComponentId::ConvertButton;
                Handled::Yes
            }
            AmountEvent::Consumed => Handled::Yes,
            AmountEvent::Unhandled => Handled::No,
        }
    }

    fn handle_button_key(&mut self, key: KeyEvent) -> Handled {
        match ConvertButton::new(true).handle_key(key) {
            ButtonEvent::Activated => {
                self.convert();
                Handled::Yes
            }
            ButtonEvent::Unhandled => Handled::No,
        }
    }

    fn render_loading(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let [row] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(area);
        let line = Line::from(vec![
            Span::styled(
                format!("{} ", ctx.spinner_char()),
                Style::default().fg(ctx.theme.highlight),
            ),
            Span::styled(LOADING_LABEL, Style::default().fg(ctx.theme.muted)),
        ]);
        f.render_widget(Paragraph::new(line).alignment(Alignment::Center), row);
    }

    fn render_ready(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let model = &self.state.convert_item_model;

        // Picker shows every option when it can; compact terminals get fewer rows
        let max_rows = Breakpoint::from_width(area.width).max_picker_rows();
        let picker_rows = model.items_to_convert.len().clamp(1, max_rows) as u16;

        let [banner_area, form_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

        let banner = Paragraph::new(Line::from(Span::styled(
            self.state.screen_title.as_str(),
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        f.render_widget(banner, banner_area);

        // Presenter paints the form; Reset means "no preference"
        let background = match self.state.background_colour {
            Color::Reset => theme.background,
            colour => colour,
        };
        let form_block = Block::default()
            .style(Style::default().bg(background))
            .padding(Padding::horizontal(1));
        let inner = form_block.inner(form_area);
        f.render_widget(form_block, form_area);

        let [picker_area, amount_area, button_area, _, result_area] = Layout::vertical([
            Constraint::Length(picker_rows + 3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        CustomPicker::new(&model.title, &self.selection, &model.items_to_convert)
            .focused(self.focus == ComponentId::Picker)
            .render(f, picker_area, ctx);

        AmountField::new(&model.sub_title, &self.amount)
            .focused(self.amount_is_focused())
            .render(f, amount_area, ctx);

        ConvertButton::new(self.focus == ComponentId::ConvertButton).render(f, button_area, ctx);

        let result = Line::from(vec![
            Span::styled("value: ", Style::default().fg(theme.muted)),
            Span::styled(
                model.converted_result.as_str(),
                Style::default()
                    .fg(theme.result)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        f.render_widget(Paragraph::new(result), result_area);
    }
}

impl<P: DataProvider + ?Sized> Component for ConverterView<P> {
    fn id(&self) -> ComponentId {
        ComponentId::Converter
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        match self.phase() {
            Phase::Loading => self.render_loading(f, area, ctx),
            Phase::Ready => self.render_ready(f, area, ctx),
        }

        if let AlertState::Shown(alert) = self.alert_state() {
            ErrorAlert::new(&alert).render(f, area, ctx);
        }
    }
}

impl<P: DataProvider + ?Sized> Drop for ConverterView<P> {
    fn drop(&mut self) {
        self.unmount();
    }
}
