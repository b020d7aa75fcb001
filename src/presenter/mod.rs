//! Presenter contract for the converter screen
//!
//! The converter view computes nothing on its own. Everything it displays is
//! read from a [`DataProvider`] snapshot, and everything the user does is
//! forwarded back through the same trait.
//!
//! # Observation
//!
//! ```text
//!   presenter ──publish──▶ StateStore ──listener──▶ host channel ──▶ view.apply()
//!       ▲                                                                │
//!       └─────────── start() / convert() / set_error(None) ◀─────────────┘
//! ```
//!
//! The view subscribes when it is mounted and drops its [`Subscription`] when
//! it is unmounted. Snapshots are immutable values; a presenter replaces its
//! [`ConvertItemModel`] wholesale rather than mutating it in place.

mod store;
#[cfg(test)]
pub(crate) mod testing;

pub use store::{Listener, StateStore, Subscription};

use crate::error::PresenterError;
use ratatui::style::Color;

/// Display data for one converter snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertItemModel {
    /// Label shown next to the picker
    pub title: String,
    /// Label shown next to the amount field
    pub sub_title: String,
    /// Picker options, in display order
    pub items_to_convert: Vec<String>,
    /// Last conversion result (display only)
    pub converted_result: String,
}

impl ConvertItemModel {
    pub fn new(
        title: impl Into<String>,
        sub_title: impl Into<String>,
        items_to_convert: Vec<String>,
        converted_result: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            sub_title: sub_title.into(),
            items_to_convert,
            converted_result: converted_result.into(),
        }
    }
}

/// Everything the view observes on a presenter, captured at one instant
#[derive(Debug, Clone)]
pub struct PresenterState {
    pub convert_item_model: ConvertItemModel,
    pub is_loading: bool,
    pub error: Option<PresenterError>,
    pub screen_title: String,
    pub background_colour: Color,
    /// Monotonic publish counter; the view ignores snapshots older than the
    /// one it already holds
    pub revision: u64,
}

impl Default for PresenterState {
    fn default() -> Self {
        Self {
            convert_item_model: ConvertItemModel::default(),
            is_loading: false,
            error: None,
            screen_title: String::new(),
            background_colour: Color::Reset,
            revision: 0,
        }
    }
}

/// Callback handed to [`DataProvider::start`], invoked with `true` on success
pub type Completion = Box<dyn FnOnce(bool) + Send + 'static>;

/// The capability a presenter implements to drive a converter view
///
/// Every member is required. Presenters are shared between the view and
/// their own background tasks, so all methods take `&self` and implementors
/// use interior mutability ([`StateStore`] covers the common case).
///
/// Contract:
/// - `start` may run asynchronous work but must eventually publish a state
///   with `is_loading == false`, then call `completion` (if any).
/// - `convert` must accept empty or malformed input and report failures by
///   setting `error`, never by panicking.
/// - `error` is a single slot. Overwriting it while an alert is visible loses
///   the earlier message; there is no queue.
pub trait DataProvider: Send + Sync {
    /// Current state, all fields at once
    fn snapshot(&self) -> PresenterState;

    /// Register a listener that receives every published snapshot
    fn subscribe(&self, listener: Listener) -> Subscription;

    fn convert_item_model(&self) -> ConvertItemModel;

    fn is_loading(&self) -> bool;

    fn error(&self) -> Option<PresenterError>;

    fn set_error(&self, error: Option<PresenterError>);

    fn screen_title(&self) -> String;

    fn set_screen_title(&self, title: String);

    fn background_colour(&self) -> Color;

    fn set_background_colour(&self, colour: Color);

    /// Begin initialization
    fn start(&self, completion: Option<Completion>);

    /// Convert `amount` using the picked `value`
    fn convert(&self, value: &str, amount: &str);
}
