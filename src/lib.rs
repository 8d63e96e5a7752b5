//! # Currency Converter TUI
//!
//! A terminal currency converter backed by a live exchange-rate API.
//!
//! ## Features
//! - Currency list loaded once at startup (base USD)
//! - Convert an amount between any two listed currencies
//! - Swap source and target, clear the form
//! - Configurable display precision and provider URL
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod messages;
pub mod models;
pub mod network;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState, ConversionState};
pub use config::Settings;
pub use error::FetchError;
pub use messages::{NetworkCommand, NetworkResponse, RatePurpose, RenderState, UiEvent};
pub use models::{parse_amount, RateSnapshot, Rates};
pub use network::{NetworkActor, RatesClient};
