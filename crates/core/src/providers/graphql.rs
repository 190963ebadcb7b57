use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use super::traits::DashboardProvider;
use crate::errors::CoreError;
use crate::models::settings::Settings;

const PROVIDER: &str = "GraphQL";

/// Platform API client: Basic-auth sign-in plus bearer-token GraphQL queries.
///
/// - **Sign-in**: `POST {signin_url}` with HTTP Basic credentials, answers with
///   a JWT either as a bare JSON string or as `{"token": "..."}`.
/// - **Queries**: `POST {graphql_url}` with `{query, variables}` and
///   `Authorization: Bearer <token>`.
pub struct GraphQlProvider {
    client: Client,
    signin_url: String,
    graphql_url: String,
}

impl GraphQlProvider {
    pub fn new(settings: &Settings) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(settings.request_timeout_secs));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            signin_url: settings.signin_url.clone(),
            graphql_url: settings.graphql_url.clone(),
        }
    }
}

impl Default for GraphQlProvider {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

/// Map a failed sign-in status to an error.
pub fn sign_in_status_error(status: u16) -> CoreError {
    match status {
        401 => CoreError::InvalidCredentials,
        s if s >= 500 => CoreError::Api {
            provider: PROVIDER.into(),
            message: format!("Server error ({s}), try again later"),
        },
        s => CoreError::Api {
            provider: PROVIDER.into(),
            message: format!("Login failed (Error {s})"),
        },
    }
}

/// Pull the token out of a sign-in response body.
///
/// Accepts a bare JSON string (`"eyJ..."`) or an object with a `token`
/// field. An empty token is an error.
pub fn extract_token(body: &str) -> Result<String, CoreError> {
    let value: Value = serde_json::from_str(body).map_err(|e| CoreError::Api {
        provider: PROVIDER.into(),
        message: format!("Unreadable sign-in response: {e}"),
    })?;

    let token = match &value {
        Value::String(s) => s.trim(),
        Value::Object(map) => map.get("token").and_then(Value::as_str).unwrap_or("").trim(),
        _ => "",
    };
    if token.is_empty() {
        return Err(CoreError::Api {
            provider: PROVIDER.into(),
            message: "No token received from server".into(),
        });
    }
    Ok(token.to_string())
}

/// Return the `data` object of a GraphQL response envelope.
///
/// A non-empty `errors` array wins over any partial `data`.
pub fn unwrap_graphql_envelope(mut envelope: Value) -> Result<Value, CoreError> {
    if let Some(first) = envelope
        .get("errors")
        .and_then(Value::as_array)
        .and_then(|errors| errors.first())
    {
        let message = first
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("unknown error");
        return Err(CoreError::GraphQl(message.to_string()));
    }

    match envelope.get_mut("data").map(Value::take) {
        Some(data) if !data.is_null() => Ok(data),
        _ => Err(CoreError::MissingField("data".into())),
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl DashboardProvider for GraphQlProvider {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn sign_in(&self, login: &str, password: &str) -> Result<String, CoreError> {
        let resp = self
            .client
            .post(&self.signin_url)
            .basic_auth(login, Some(password))
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "sign-in rejected");
            return Err(sign_in_status_error(status.as_u16()));
        }

        let body = resp.text().await?;
        extract_token(&body)
    }

    async fn query(&self, token: &str, query: &str, variables: Value) -> Result<Value, CoreError> {
        let resp = self
            .client
            .post(&self.graphql_url)
            .bearer_auth(token)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?;

        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(CoreError::SessionExpired);
        }
        if !status.is_success() {
            return Err(CoreError::Api {
                provider: PROVIDER.into(),
                message: format!("HTTP error {}", status.as_u16()),
            });
        }

        let envelope: Value = resp.json().await.map_err(|e| CoreError::Api {
            provider: PROVIDER.into(),
            message: format!("Failed to parse response: {e}"),
        })?;
        unwrap_graphql_envelope(envelope)
    }
}
