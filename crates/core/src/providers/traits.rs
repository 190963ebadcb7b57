use async_trait::async_trait;
use serde_json::Value;

use crate::errors::CoreError;

/// Data-fetch collaborator behind the dashboard.
///
/// The HTTP implementation is [`GraphQlProvider`](super::graphql::GraphQlProvider);
/// tests and alternative backends plug in their own. Implementations hold no
/// session state: the caller passes the token to every query.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait DashboardProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Exchange a login and password for a bearer token.
    ///
    /// Credentials arrive non-blank; `Dashboard::sign_in` rejects empty ones.
    async fn sign_in(&self, login: &str, password: &str) -> Result<String, CoreError>;

    /// Run one GraphQL query and return its `data` object.
    async fn query(&self, token: &str, query: &str, variables: Value) -> Result<Value, CoreError>;
}
