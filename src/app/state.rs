//! App state - pure data structure with no I/O logic

use std::collections::HashMap;

use crate::constants::DEFAULT_DISPLAY_PRECISION;
use crate::messages::ui_events::{Field, InputMode};
use crate::messages::RenderState;

/// The converter's data: form fields, last result and loaded codes
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConversionState {
    /// Raw user text, parsed only when a conversion completes
    pub amount: String,
    pub source_currency: String,
    pub target_currency: String,
    pub converted_amount: Option<f64>,
    pub error: Option<String>,
    pub currency_list: Vec<String>,
}

/// Inputs captured when the user asked for a conversion
#[derive(Clone, Debug, PartialEq)]
pub struct ConversionRequest {
    pub amount: String,
    pub source: String,
    pub target: String,
}

/// Main application state - pure data, no I/O
pub struct AppState {
    pub conversion: ConversionState,
    /// Provider date of the rates behind the current result
    pub rates_date: Option<String>,

    // UI state
    pub active_field: Field,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub display_precision: usize,

    // Requests
    pub next_request_id: u64,
    pub pending_conversions: HashMap<u64, ConversionRequest>,
    pub currency_loads_in_flight: usize,

    // Popups
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            conversion: ConversionState::default(),
            rates_date: None,
            active_field: Field::Amount,
            input_mode: InputMode::Normal,
            cursor_position: 0,
            display_precision: DEFAULT_DISPLAY_PRECISION,
            next_request_id: 1,
            pending_conversions: HashMap::new(),
            currency_loads_in_flight: 0,
            show_help: false,
        }
    }

    pub fn with_precision(mut self, display_precision: usize) -> Self {
        self.display_precision = display_precision;
        self
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Options offered by a currency select: an empty choice, then every code
    pub fn currency_options(&self) -> impl Iterator<Item = &str> {
        std::iter::once("").chain(self.conversion.currency_list.iter().map(String::as_str))
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            amount: self.conversion.amount.clone(),
            source_currency: self.conversion.source_currency.clone(),
            target_currency: self.conversion.target_currency.clone(),
            converted_amount: self.conversion.converted_amount,
            error: self.conversion.error.clone(),
            currency_list: self.conversion.currency_list.clone(),
            rates_date: self.rates_date.clone(),
            active_field: self.active_field,
            input_mode: self.input_mode,
            cursor_position: self.cursor_position,
            display_precision: self.display_precision,
            loading_currencies: self.currency_loads_in_flight > 0,
            converting: !self.pending_conversions.is_empty(),
            show_help: self.show_help,
        }
    }
}
