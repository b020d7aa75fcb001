// Converter screen building blocks
//
// Form controls borrow the view's state for a single render or key and
// report edits back as events. The status bar and toast belong to the host.

pub mod amount_field;
pub mod convert_button;
pub mod error_alert;
pub mod picker;
pub mod status_bar;
pub mod toast;

pub use amount_field::{AmountEvent, AmountField};
pub use convert_button::{ButtonEvent, ConvertButton};
pub use error_alert::{AlertAction, AlertState, ErrorAlert, LocalizedAlert};
pub use picker::{CustomPicker, PickerEvent};
