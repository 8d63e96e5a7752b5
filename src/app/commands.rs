//! Command handlers - business logic for processing UI events

use crate::app::state::{ConversionRequest, ConversionState};
use crate::app::AppState;
use crate::constants::{
    CURRENCY_LIST_BASE, ERR_CONVERSION_FETCH, ERR_CURRENCY_LIST, ERR_INVALID_CURRENCY,
};
use crate::messages::ui_events::{Field, InputMode};
use crate::messages::{NetworkCommand, NetworkResponse, RatePurpose};
use crate::models::{parse_amount, Rates};

impl ConversionState {
    // ========================
    // Set-field commands
    // ========================

    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.amount = amount.into();
    }

    pub fn set_source_currency(&mut self, code: impl Into<String>) {
        self.source_currency = code.into();
    }

    pub fn set_target_currency(&mut self, code: impl Into<String>) {
        self.target_currency = code.into();
    }

    /// Exchange source and target. The last result is left as-is.
    pub fn swap_currencies(&mut self) {
        std::mem::swap(&mut self.source_currency, &mut self.target_currency);
    }

    /// Reset the form and result; the loaded codes stay
    pub fn clear(&mut self) {
        self.amount.clear();
        self.source_currency.clear();
        self.target_currency.clear();
        self.converted_amount = None;
        self.error = None;
    }

    /// Snapshot of the inputs a conversion will use
    pub fn conversion_request(&self) -> ConversionRequest {
        ConversionRequest {
            amount: self.amount.clone(),
            source: self.source_currency.clone(),
            target: self.target_currency.clone(),
        }
    }

    // ========================
    // Network results
    // ========================

    pub fn apply_currency_list(&mut self, rates: &Rates) {
        self.currency_list = rates.codes();
    }

    pub fn currency_list_failed(&mut self) {
        self.error = Some(ERR_CURRENCY_LIST.to_string());
    }

    /// Apply fetched rates to a conversion. Returns the new amount, or None
    /// when the target has no rate.
    pub fn apply_rates(&mut self, request: &ConversionRequest, rates: &Rates) -> Option<f64> {
        let Some(rate) = rates.get(&request.target) else {
            self.error = Some(ERR_INVALID_CURRENCY.to_string());
            return None;
        };
        let converted = parse_amount(&request.amount) * rate;
        self.converted_amount = Some(converted);
        self.error = None;
        Some(converted)
    }

    pub fn conversion_failed(&mut self) {
        self.error = Some(ERR_CONVERSION_FETCH.to_string());
    }
}

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn next_field(&mut self) {
        self.stop_editing();
        self.active_field = self.active_field.next();
    }

    pub fn prev_field(&mut self) {
        self.stop_editing();
        self.active_field = self.active_field.prev();
    }

    // ========================
    // Amount editing
    // ========================

    pub fn start_editing(&mut self) {
        if self.active_field == Field::Amount {
            self.input_mode = InputMode::Editing;
            self.cursor_position = self.conversion.amount.len();
        }
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn move_cursor_left(&mut self) {
        let input = &self.conversion.amount;
        if self.cursor_position > 0 {
            self.cursor_position = input[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_cursor_right(&mut self) {
        let input = &self.conversion.amount;
        if self.cursor_position < input.len() {
            self.cursor_position = input[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(input.len());
        }
    }

    pub fn enter_char(&mut self, c: char) {
        let cursor_pos = self.cursor_position;
        let input = &mut self.conversion.amount;
        if cursor_pos <= input.len() {
            input.insert(cursor_pos, c);
            self.cursor_position = cursor_pos + c.len_utf8();
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let cursor_pos = self.cursor_position;
            let input = &mut self.conversion.amount;
            let prev_pos = input[..cursor_pos]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            input.remove(prev_pos);
            self.cursor_position = prev_pos;
        }
    }

    // ========================
    // Currency selects
    // ========================

    pub fn select_next(&mut self) {
        self.step_selection(1);
    }

    pub fn select_prev(&mut self) {
        self.step_selection(-1);
    }

    fn step_selection(&mut self, delta: isize) {
        let current = match self.active_field {
            Field::Source => &self.conversion.source_currency,
            Field::Target => &self.conversion.target_currency,
            Field::Amount => return,
        };
        let options: Vec<&str> = self.currency_options().collect();
        // A code outside the list behaves like the empty choice
        let index = options.iter().position(|o| *o == current.as_str()).unwrap_or(0) as isize;
        let len = options.len() as isize;
        let next = options[(index + delta).rem_euclid(len) as usize].to_string();

        match self.active_field {
            Field::Source => self.conversion.set_source_currency(next),
            Field::Target => self.conversion.set_target_currency(next),
            Field::Amount => {}
        }
    }

    // ========================
    // Commands
    // ========================

    /// Build the mount-time (or reload) request for the currency list
    pub fn prepare_currency_list(&mut self) -> NetworkCommand {
        let id = self.next_id();
        self.currency_loads_in_flight += 1;
        NetworkCommand::FetchRates {
            id,
            base: CURRENCY_LIST_BASE.to_string(),
            purpose: RatePurpose::CurrencyList,
        }
    }

    /// Capture the current inputs and build the rate request for them
    pub fn prepare_conversion(&mut self) -> NetworkCommand {
        self.stop_editing();
        let id = self.next_id();
        let request = self.conversion.conversion_request();
        let base = request.source.clone();
        tracing::debug!(id, base = %base, target = %request.target, "Conversion requested");
        self.pending_conversions.insert(id, request);
        NetworkCommand::FetchRates {
            id,
            base,
            purpose: RatePurpose::Conversion,
        }
    }

    pub fn swap(&mut self) {
        self.conversion.swap_currencies();
    }

    pub fn clear(&mut self) {
        self.conversion.clear();
        self.rates_date = None;
        self.cursor_position = 0;
        self.stop_editing();
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Network responses
    // ========================

    /// Apply a completed request. Responses land in arrival order, so the
    /// last one to arrive wins.
    pub fn handle_response(&mut self, response: NetworkResponse) {
        match response {
            NetworkResponse::Rates {
                id,
                purpose: RatePurpose::CurrencyList,
                snapshot,
                time_ms,
            } => {
                self.currency_loads_in_flight = self.currency_loads_in_flight.saturating_sub(1);
                tracing::info!(id, time_ms, count = snapshot.rates.len(), "Currency list loaded");
                self.conversion.apply_currency_list(&snapshot.rates);
            }
            NetworkResponse::Error {
                id,
                purpose: RatePurpose::CurrencyList,
                message,
                time_ms,
            } => {
                self.currency_loads_in_flight = self.currency_loads_in_flight.saturating_sub(1);
                tracing::warn!(id, time_ms, error = %message, "Currency list failed");
                self.conversion.currency_list_failed();
            }
            NetworkResponse::Rates {
                id,
                purpose: RatePurpose::Conversion,
                snapshot,
                time_ms,
            } => {
                let Some(request) = self.pending_conversions.remove(&id) else {
                    tracing::warn!(id, time_ms, "Rates for unknown conversion dropped");
                    return;
                };
                match self.conversion.apply_rates(&request, &snapshot.rates) {
                    Some(value) => {
                        tracing::info!(id, time_ms, target = %request.target, value, "Conversion complete");
                        self.rates_date = snapshot.date;
                    }
                    None => {
                        tracing::info!(id, time_ms, target = %request.target, "No rate for target currency");
                    }
                }
            }
            NetworkResponse::Error {
                id,
                purpose: RatePurpose::Conversion,
                message,
                time_ms,
            } => {
                if self.pending_conversions.remove(&id).is_none() {
                    tracing::warn!(id, time_ms, "Error for unknown conversion dropped");
                    return;
                }
                tracing::warn!(id, time_ms, error = %message, "Conversion fetch failed");
                self.conversion.conversion_failed();
            }
        }
    }
}
