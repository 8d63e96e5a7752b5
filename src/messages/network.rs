//! Network messages - communication between App and Network layers

use crate::models::RateSnapshot;

/// Which operation a rate request serves
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RatePurpose {
    /// Enumerate supported codes (fixed base)
    CurrencyList,
    /// Look up the target rate for a conversion
    Conversion,
}

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Fetch `latest/{base}` for the given purpose
    FetchRates {
        id: u64,
        base: String,
        purpose: RatePurpose,
    },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// Rates fetched and decoded
    Rates {
        id: u64,
        purpose: RatePurpose,
        snapshot: RateSnapshot,
        time_ms: u64,
    },
    /// Transport, status or decode failure
    Error {
        id: u64,
        purpose: RatePurpose,
        message: String,
        time_ms: u64,
    },
}
