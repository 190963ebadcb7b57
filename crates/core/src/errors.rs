use thiserror::Error;

/// Unified error type for the entire xp-dashboard-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// The chart renderers themselves never fail on data: empty or degenerate
/// input becomes a placeholder. Errors come from configuration, decoding,
/// and the data-fetch layer.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Configuration ───────────────────────────────────────────────
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Records / Decoding ──────────────────────────────────────────
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Missing field in response: {0}")]
    MissingField(String),

    // ── Authentication / Session ────────────────────────────────────
    #[error("Login and password are both required")]
    MissingCredentials,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Session expired, sign in again")]
    SessionExpired,

    #[error("Not authenticated")]
    NotAuthenticated,

    // ── API / Network ───────────────────────────────────────────────
    #[error("API error ({provider}): {message}")]
    Api {
        provider: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("GraphQL error: {0}")]
    GraphQl(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest errors embed the full URL; variables may travel in the query string.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
