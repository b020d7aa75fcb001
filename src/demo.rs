// Demo presenter - offline currency conversion
//
// Drives the converter screen without any network access. Exchange rates
// come from the [demo] config section; `start` simulates a fetch with a
// configurable delay so the loading phase is visible.
//
// Useful for:
// - Trying the converter without wiring a real presenter
// - Exercising the loading, error and result paths by hand
//
// Usage: generic-converter   (or CONVERTER_LOADING_DELAY_MS=3000 generic-converter)

use crate::config::DemoConfig;
use crate::error::{LocalizedError, PresenterError};
use crate::presenter::{
    Completion, ConvertItemModel, DataProvider, Listener, PresenterState, StateStore, Subscription,
};
use ratatui::style::Color;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

const PICKER_TITLE: &str = "Currency";
const AMOUNT_TITLE: &str = "Amount";

/// Why a conversion could not produce a result
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    NoSelection,
    InvalidAmount(String),
    UnknownCurrency(String),
}

impl LocalizedError for ConversionError {
    fn error_description(&self) -> String {
        match self {
            Self::NoSelection => "No currency selected".to_string(),
            Self::InvalidAmount(raw) if raw.trim().is_empty() => "Amount is empty".to_string(),
            Self::InvalidAmount(raw) => format!("\"{}\" is not a valid amount", raw),
            Self::UnknownCurrency(code) => format!("Unknown currency {}", code),
        }
    }

    fn recovery_suggestion(&self) -> Option<String> {
        let hint = match self {
            Self::NoSelection => "Pick a currency from the list, then convert again.",
            Self::InvalidAmount(_) => "Enter a positive number; use . or , as the decimal separator.",
            Self::UnknownCurrency(_) => "Choose one of the listed currencies.",
        };
        Some(hint.to_string())
    }
}

/// Parse a decimal-keypad amount; `,` is accepted as the decimal separator
pub fn parse_amount(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

/// Offline presenter converting from a base currency with a fixed rate table
pub struct CurrencyPresenter {
    store: Arc<StateStore>,
    config: Arc<DemoConfig>,
    /// Set while a simulated fetch is running
    in_flight: Arc<AtomicBool>,
}

impl CurrencyPresenter {
    pub fn new(config: DemoConfig) -> Self {
        let initial = PresenterState {
            convert_item_model: ConvertItemModel::new(PICKER_TITLE, AMOUNT_TITLE, Vec::new(), ""),
            screen_title: config.screen_title.clone(),
            ..Default::default()
        };

        Self {
            store: Arc::new(StateStore::new(initial)),
            config: Arc::new(config),
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Publish the fetched (or failed) option list and end the loading phase
    fn finish_start(store: &StateStore, config: &DemoConfig) -> bool {
        if config.fail_start {
            tracing::warn!("Demo rate fetch failed (fail_start is set)");
            store.update(|s| {
                s.convert_item_model =
                    ConvertItemModel::new(PICKER_TITLE, AMOUNT_TITLE, Vec::new(), "");
                s.is_loading = false;
            });
            return false;
        }

        let codes: Vec<String> = config.rates.iter().map(|r| r.code.clone()).collect();
        tracing::info!(
            "Loaded {} rates against {}",
            codes.len(),
            config.base_currency
        );
        store.update(|s| {
            s.convert_item_model = ConvertItemModel::new(PICKER_TITLE, AMOUNT_TITLE, codes, "");
            s.is_loading = false;
        });
        true
    }

    fn compute(&self, value: &str, amount: &str) -> Result<String, PresenterError> {
        if value.is_empty() {
            return Err(PresenterError::localized(ConversionError::NoSelection));
        }

        let parsed = parse_amount(amount).ok_or_else(|| {
            PresenterError::localized(ConversionError::InvalidAmount(amount.to_string()))
        })?;

        let rate = self
            .config
            .rates
            .iter()
            .find(|entry| entry.code == value)
            .map(|entry| entry.rate)
            .ok_or_else(|| {
                PresenterError::localized(ConversionError::UnknownCurrency(value.to_string()))
            })?;

        if !rate.is_finite() || rate < 0.0 {
            tracing::warn!("Unusable rate for {}: {}", value, rate);
            return Err(PresenterError::opaque(anyhow::anyhow!(
                "rate table entry for {} is {}",
                value,
                rate
            )));
        }

        Ok(format!("{:.2} {}", parsed * rate, value))
    }
}

impl DataProvider for CurrencyPresenter {
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
        if self.in_flight.swap(true, Ordering::SeqCst) {
            tracing::debug!("Start ignored, fetch already running");
            if let Some(done) = completion {
                done(false);
            }
            return;
        }

        self.store.update(|s| s.is_loading = true);

        let store = Arc::clone(&self.store);
        let config = Arc::clone(&self.config);
        let in_flight = Arc::clone(&self.in_flight);
        let delay = Duration::from_millis(config.loading_delay_ms);

        let finish = move || {
            let ok = Self::finish_start(&store, &config);
            in_flight.store(false, Ordering::SeqCst);
            if let Some(done) = completion {
                done(ok);
            }
        };

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                tracing::debug!(delay_ms = delay.as_millis() as u64, "Fetching demo rates");
                handle.spawn(async move {
                    tokio::time::sleep(delay).await;
                    finish();
                });
            }
            Err(_) => {
                // No runtime to sleep on; resolve immediately
                finish();
            }
        }
    }

    fn convert(&self, value: &str, amount: &str) {
        match self.compute(value, amount) {
            Ok(result) => {
                tracing::debug!(value, amount, result = %result, "Converted");
                self.store
                    .update(|s| s.convert_item_model.converted_result = result);
            }
            Err(error) => {
                tracing::debug!(value, amount, "Conversion failed: {}", error);
                self.store.set_error(Some(error));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RateEntry;
    use tokio::sync::oneshot;

    fn config(rates: Vec<RateEntry>) -> DemoConfig {
        DemoConfig {
            rates,
            ..DemoConfig::default()
        }
    }

    fn ready_presenter() -> CurrencyPresenter {
        let presenter = CurrencyPresenter::new(config(vec![
            RateEntry::new("EUR", 2.0),
            RateEntry::new("GBP", 0.5),
        ]));
        CurrencyPresenter::finish_start(&presenter.store, &presenter.config);
        presenter
    }

    fn completion() -> (Completion, oneshot::Receiver<bool>) {
        let (tx, rx) = oneshot::channel();
        let done: Completion = Box::new(move |ok| {
            let _ = tx.send(ok);
        });
        (done, rx)
    }

    fn description(error: Option<PresenterError>) -> String {
        error
            .and_then(|e| e.as_localized().map(|l| l.error_description()))
            .unwrap_or_default()
    }

    // ─────────────────────────────────────────────────────────────────────
    // start
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test(start_paused = true)]
    async fn test_start_loads_then_publishes_codes_in_order() {
        let presenter = CurrencyPresenter::new(DemoConfig::default());
        assert!(!presenter.is_loading());

        let (done, rx) = completion();
        presenter.start(Some(done));
        assert!(presenter.is_loading());

        assert!(rx.await.unwrap());
        let model = presenter.convert_item_model();
        assert!(!presenter.is_loading());
        assert_eq!(model.title, "Currency");
        assert_eq!(model.sub_title, "Amount");
        assert_eq!(model.items_to_convert, vec!["EUR", "GBP", "JPY", "CHF", "CAD"]);
        assert_eq!(presenter.screen_title(), "Currency Converter");
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_start_reports_false_without_items() {
        let presenter = CurrencyPresenter::new(DemoConfig {
            fail_start: true,
            ..DemoConfig::default()
        });

        let (done, rx) = completion();
        presenter.start(Some(done));
        assert!(!rx.await.unwrap());
        assert!(!presenter.is_loading());
        assert!(presenter.convert_item_model().items_to_convert.is_empty());
        // Initialization failure is not turned into an alert
        assert!(presenter.error().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_start_while_loading_is_rejected() {
        let presenter = CurrencyPresenter::new(DemoConfig::default());
        let (first, first_rx) = completion();
        let (second, second_rx) = completion();

        presenter.start(Some(first));
        presenter.start(Some(second));

        assert!(!second_rx.await.unwrap());
        assert!(first_rx.await.unwrap());
    }

    #[test]
    fn test_start_without_runtime_completes_inline() {
        let presenter = CurrencyPresenter::new(DemoConfig::default());
        presenter.start(None);
        assert!(!presenter.is_loading());
        assert_eq!(presenter.convert_item_model().items_to_convert.len(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_publishes_to_subscribers() {
        let presenter = CurrencyPresenter::new(DemoConfig::default());
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let _sub = presenter.subscribe(Box::new(move |state: &PresenterState| {
            let _ = tx.send(state.is_loading);
        }));

        let (done, done_rx) = completion();
        presenter.start(Some(done));
        done_rx.await.unwrap();

        assert_eq!(rx.recv().await, Some(true));
        assert_eq!(rx.recv().await, Some(false));
    }

    // ─────────────────────────────────────────────────────────────────────
    // convert
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn test_convert_publishes_formatted_result() {
        let presenter = ready_presenter();
        presenter.convert("EUR", "21");
        assert_eq!(presenter.convert_item_model().converted_result, "42.00 EUR");

        presenter.convert("GBP", "3,5");
        assert_eq!(presenter.convert_item_model().converted_result, "1.75 GBP");
        assert!(presenter.error().is_none());
    }

    #[test]
    fn test_convert_without_selection() {
        let presenter = ready_presenter();
        presenter.convert("", "");
        assert_eq!(description(presenter.error()), "No currency selected");
        assert_eq!(presenter.convert_item_model().converted_result, "");
    }

    #[test]
    fn test_convert_rejects_bad_amounts() {
        let presenter = ready_presenter();
        for (raw, expected) in [
            ("", "Amount is empty"),
            ("1.2.3", "\"1.2.3\" is not a valid amount"),
            ("-4", "\"-4\" is not a valid amount"),
        ] {
            presenter.convert("EUR", raw);
            assert_eq!(description(presenter.error()), expected);
            presenter.set_error(None);
        }
    }

    #[test]
    fn test_convert_unknown_currency() {
        let presenter = ready_presenter();
        presenter.convert("XAU", "1");
        let error = presenter.error().unwrap();
        let localized = error.as_localized().unwrap();
        assert_eq!(localized.error_description(), "Unknown currency XAU");
        assert_eq!(
            localized.recovery_suggestion().as_deref(),
            Some("Choose one of the listed currencies.")
        );
    }

    #[test]
    fn test_corrupt_rate_is_opaque() {
        let presenter = CurrencyPresenter::new(config(vec![RateEntry::new("EUR", f64::NAN)]));
        presenter.convert("EUR", "1");
        let error = presenter.error().unwrap();
        assert!(error.as_localized().is_none());
    }

    #[test]
    fn test_error_after_corrupt_rate_is_not_reported_as_overwrite() {
        use crate::logging::{LogBuffer, LogLevel, TuiLogLayer};
        use tracing_subscriber::layer::SubscriberExt;

        let presenter = CurrencyPresenter::new(config(vec![RateEntry::new("EUR", -1.0)]));
        let logs = LogBuffer::new();
        let subscriber = tracing_subscriber::registry().with(TuiLogLayer::new(logs.clone()));
        tracing::subscriber::with_default(subscriber, || {
            presenter.convert("EUR", "1");
            presenter.convert("XAU", "1");
        });

        assert!(presenter.error().unwrap().as_localized().is_some());
        let warning = logs.latest_at_least(LogLevel::Warn).unwrap();
        assert!(warning.message.starts_with("Unusable rate for EUR"));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 12,5 "), Some(12.5));
        assert_eq!(parse_amount("0"), Some(0.0));
        assert_eq!(parse_amount("."), None);
        assert_eq!(parse_amount("inf"), None);
    }
}
