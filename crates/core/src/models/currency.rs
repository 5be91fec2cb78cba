use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::normalize::{keys, pick_f64};

/// The closed set of currencies the dashboard can render in.
///
/// `Try` (Turkish lira) is the base currency: every monetary total the backend
/// returns is expressed in it. The three foreign codes mirror the rate payload
/// of `GET /currency/latest` — adding a currency means extending this enum and
/// [`RateTable`] in lockstep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    Try,
    Usd,
    Eur,
    Gbp,
}

impl Currency {
    /// The currency backend totals are expressed in before any display conversion.
    pub const BASE: Currency = Currency::Try;

    /// All selectable display currencies, in selector order.
    pub const ALL: [Currency; 4] = [Currency::Try, Currency::Usd, Currency::Eur, Currency::Gbp];

    /// Parse an ISO code, case-insensitively. Returns `None` for codes
    /// outside the supported set.
    pub fn from_code(code: &str) -> Option<Currency> {
        match code.trim().to_uppercase().as_str() {
            "TRY" => Some(Currency::Try),
            "USD" => Some(Currency::Usd),
            "EUR" => Some(Currency::Eur),
            "GBP" => Some(Currency::Gbp),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Try => "TRY",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }

    pub fn is_base(&self) -> bool {
        *self == Currency::BASE
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Exchange rates for the foreign currencies, expressed as units of base
/// currency per one foreign unit (e.g., `usd = 30.0` means 30 TRY buys 1 USD).
///
/// The base currency's own rate is implicitly 1 and never stored. A rate of
/// `0.0` means "unknown" — the converter treats it as missing and falls back
/// to identity instead of dividing by zero. `Default` is the all-zero table,
/// the safe state when the rate fetch fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    pub usd: f64,
    pub eur: f64,
    pub gbp: f64,
}

impl RateTable {
    /// Build a table from the raw `/currency/latest` payload, tolerating both
    /// lower- and upper-case field names. Absent or non-numeric rates stay 0.
    pub fn from_json(raw: &Value) -> RateTable {
        RateTable {
            usd: pick_f64(raw, keys::RATE_USD, 0.0),
            eur: pick_f64(raw, keys::RATE_EUR, 0.0),
            gbp: pick_f64(raw, keys::RATE_GBP, 0.0),
        }
    }

    /// The stored rate for a foreign currency; `None` for the base currency.
    /// Callers must still validate the value (0 means unknown).
    pub fn rate(&self, currency: Currency) -> Option<f64> {
        match currency {
            Currency::Try => None,
            Currency::Usd => Some(self.usd),
            Currency::Eur => Some(self.eur),
            Currency::Gbp => Some(self.gbp),
        }
    }
}

/// Result of the ad-hoc converter widget. Transient: computed on explicit
/// user action, never persisted, never folded into dashboard state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WidgetConversion {
    pub amount: f64,
    pub from: Currency,
    pub to: Currency,
    pub result: f64,
}
