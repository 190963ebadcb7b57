use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::CoreError;
use crate::models::chart::merge_overrides;

/// Connection settings for the data-fetch layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Endpoint exchanging Basic credentials for a bearer token.
    pub signin_url: String,

    /// GraphQL endpoint queried with the bearer token.
    pub graphql_url: String,

    /// Platform event (curriculum) whose transactions are shown.
    pub event_id: i64,

    /// Per-request timeout (ignored on wasm32).
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            signin_url: "https://01.gritlab.ax/api/auth/signin".to_string(),
            graphql_url: "https://01.gritlab.ax/api/graphql-engine/v1/graphql".to_string(),
            event_id: 104,
            request_timeout_secs: 30,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document, falling back to defaults for
    /// every key it does not mention.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let overrides: Value = serde_json::from_str(json)
            .map_err(|e| CoreError::InvalidConfig(format!("settings are not valid JSON: {e}")))?;
        let settings: Settings = merge_overrides(&Settings::default(), &overrides)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings that cannot possibly work.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.signin_url.trim().is_empty() {
            return Err(CoreError::InvalidConfig("signinUrl must not be empty".into()));
        }
        if self.graphql_url.trim().is_empty() {
            return Err(CoreError::InvalidConfig("graphqlUrl must not be empty".into()));
        }
        if self.request_timeout_secs == 0 {
            return Err(CoreError::InvalidConfig(
                "requestTimeoutSecs must be positive".into(),
            ));
        }
        Ok(())
    }
}
