//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default exchange-rate provider. Requests go to `{base}/latest/{CODE}`.
pub const DEFAULT_API_BASE_URL: &str = "https://api.exchangerate-api.com/v4";

/// Base currency used to enumerate the supported currency codes
pub const CURRENCY_LIST_BASE: &str = "USD";

/// Decimal places used when showing a converted amount
pub const DEFAULT_DISPLAY_PRECISION: usize = 2;

/// Upper bound for a configured display precision
pub const MAX_DISPLAY_PRECISION: usize = 10;

/// Default HTTP request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "currency-converter.log";

/// Shown when the currency list cannot be loaded
pub const ERR_CURRENCY_LIST: &str = "Error fetching currency list. Please try again later.";

/// Shown when the fetched rates have no entry for the target currency
pub const ERR_INVALID_CURRENCY: &str = "Invalid currency code or network issue.";

/// Shown when the rates for a conversion cannot be fetched
pub const ERR_CONVERSION_FETCH: &str =
    "Error fetching data from the server. Please try again later.";

/// Application name
pub const APP_NAME: &str = "Currency Converter";
