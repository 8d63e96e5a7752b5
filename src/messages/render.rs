//! Render state - data structure sent from App layer to UI for rendering

use crate::constants::DEFAULT_DISPLAY_PRECISION;
use crate::messages::ui_events::{Field, InputMode};
use crate::models::format_result;

/// Complete state needed by the UI to render
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    // Conversion state
    pub amount: String,
    pub source_currency: String,
    pub target_currency: String,
    pub converted_amount: Option<f64>,
    pub error: Option<String>,
    pub currency_list: Vec<String>,
    /// Provider date of the rates behind `converted_amount`
    pub rates_date: Option<String>,

    // UI state
    pub active_field: Field,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub display_precision: usize,

    // Requests in flight
    pub loading_currencies: bool,
    pub converting: bool,

    // Popups
    pub show_help: bool,
}

impl RenderState {
    /// Result line, if a conversion result should be displayed
    pub fn result_line(&self) -> Option<String> {
        format_result(
            &self.amount,
            &self.source_currency,
            self.converted_amount,
            &self.target_currency,
            self.display_precision,
        )
    }
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            amount: String::new(),
            source_currency: String::new(),
            target_currency: String::new(),
            converted_amount: None,
            error: None,
            currency_list: Vec::new(),
            rates_date: None,
            active_field: Field::Amount,
            input_mode: InputMode::Normal,
            cursor_position: 0,
            display_precision: DEFAULT_DISPLAY_PRECISION,
            loading_currencies: false,
            converting: false,
            show_help: false,
        }
    }
}
