//! Demo presenter configuration
//!
//! Drives the bundled offline currency presenter: which currencies it offers,
//! how long its simulated fetch takes, and whether that fetch should fail.

use serde::Deserialize;

/// One exchange rate: units of `code` per unit of the base currency
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RateEntry {
    pub code: String,
    pub rate: f64,
}

impl RateEntry {
    pub fn new(code: &str, rate: f64) -> Self {
        Self {
            code: code.to_string(),
            rate,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Banner text at the top of the converter screen
    pub screen_title: String,
    /// Currency the typed amount is expressed in
    pub base_currency: String,
    /// Simulated fetch latency for start()
    pub loading_delay_ms: u64,
    /// Make start() report failure and publish no currencies
    pub fail_start: bool,
    /// Offered currencies, in picker order
    pub rates: Vec<RateEntry>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            screen_title: "Currency Converter".to_string(),
            base_currency: "USD".to_string(),
            loading_delay_ms: 800,
            fail_start: false,
            rates: vec![
                RateEntry::new("EUR", 0.92),
                RateEntry::new("GBP", 0.79),
                RateEntry::new("JPY", 151.4),
                RateEntry::new("CHF", 0.88),
                RateEntry::new("CAD", 1.36),
            ],
        }
    }
}

/// Demo settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileDemo {
    pub screen_title: Option<String>,
    pub base_currency: Option<String>,
    pub loading_delay_ms: Option<u64>,
    pub fail_start: Option<bool>,
    pub rates: Option<Vec<RateEntry>>,
}

impl DemoConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileDemo>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            screen_title: file.screen_title.unwrap_or(defaults.screen_title),
            base_currency: file.base_currency.unwrap_or(defaults.base_currency),
            loading_delay_ms: file.loading_delay_ms.unwrap_or(defaults.loading_delay_ms),
            fail_start: file.fail_start.unwrap_or(defaults.fail_start),
            rates: file.rates.unwrap_or(defaults.rates),
        }
    }
}
