use thiserror::Error;

/// Unified error type for the entire finance-tracker-core library.
/// Every public fallible function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── API / Network ───────────────────────────────────────────────
    #[error("API error ({endpoint}): {message}")]
    Api {
        endpoint: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    // ── Payload handling ────────────────────────────────────────────
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Session ─────────────────────────────────────────────────────
    #[error("Invalid session credential: {0}")]
    Session(String),

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Sanitize error message: strip query parameters from URLs so a
        // credential passed in a query string can never leak into logs.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}

impl From<base64::DecodeError> for CoreError {
    fn from(e: base64::DecodeError) -> Self {
        CoreError::Session(format!("payload is not valid base64: {e}"))
    }
}
