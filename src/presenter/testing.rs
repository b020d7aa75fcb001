// Test double for the presenter contract
//
// Records every start/convert call and lets tests drive the published state
// directly through the embedded StateStore.

use super::{Completion, ConvertItemModel, DataProvider, Listener, PresenterState, StateStore, Subscription};
use crate::error::{LocalizedError, PresenterError};
use ratatui::style::Color;
use std::sync::Mutex;

#[derive(Debug)]
pub(crate) struct TestError {
    pub description: String,
    pub suggestion: Option<String>,
}

impl LocalizedError for TestError {
    fn error_description(&self) -> String {
        self.description.clone()
    }

    fn recovery_suggestion(&self) -> Option<String> {
        self.suggestion.clone()
    }
}

pub(crate) fn localized(description: &str, suggestion: Option<&str>) -> PresenterError {
    PresenterError::localized(TestError {
        description: description.to_string(),
        suggestion: suggestion.map(str::to_string),
    })
}

pub(crate) struct RecordingPresenter {
    pub store: StateStore,
    starts: Mutex<usize>,
    conversions: Mutex<Vec<(String, String)>>,
}

impl RecordingPresenter {
    pub fn new(state: PresenterState) -> Self {
        Self {
            store: StateStore::new(state),
            starts: Mutex::new(0),
            conversions: Mutex::new(Vec::new()),
        }
    }

    /// A ready presenter offering the given options
    pub fn ready(items: &[&str]) -> Self {
        Self::new(PresenterState {
            convert_item_model: ConvertItemModel::new(
                "Currency",
                "Amount",
                items.iter().map(|s| s.to_string()).collect(),
                "",
            ),
            screen_title: "Converter".to_string(),
            ..Default::default()
        })
    }

    pub fn start_calls(&self) -> usize {
        *self.starts.lock().unwrap()
    }

    pub fn convert_calls(&self) -> Vec<(String, String)> {
        self.conversions.lock().unwrap().clone()
    }
}

impl DataProvider for RecordingPresenter {
    fn snapshot(&self) -> PresenterState {
        self.store.snapshot()
    }

    fn subscribe(&self, listener: Listener) -> Subscription {
        self.store.subscribe(listener)
    }

    fn convert_item_model(&self) -> ConvertItemModel {
        self.store.snapshot().convert_item_model
    }

    fn is_loading(&self) -> bool {
        self.store.snapshot().is_loading
    }

    fn error(&self) -> Option<PresenterError> {
        self.store.snapshot().error
    }

    fn set_error(&self, error: Option<PresenterError>) {
        self.store.set_error(error);
    }

    fn screen_title(&self) -> String {
        self.store.snapshot().screen_title
    }

    fn set_screen_title(&self, title: String) {
        self.store.update(|s| s.screen_title = title);
    }

    fn background_colour(&self) -> Color {
        self.store.snapshot().background_colour
    }

    fn set_background_colour(&self, colour: Color) {
        self.store.update(|s| s.background_colour = colour);
    }

    fn start(&self, completion: Option<Completion>) {
        *self.starts.lock().unwrap() += 1;
        if let Some(done) = completion {
            done(true);
        }
    }

    fn convert(&self, value: &str, amount: &str) {
        self.conversions
            .lock()
            .unwrap()
            .push((value.to_string(), amount.to_string()));
    }
}
