use serde_json::{json, Value};

use crate::errors::CoreError;
use crate::models::dashboard::DashboardData;
use crate::models::profile::{number_from_value, LastAudit, UserProfile};
use crate::models::settings::Settings;
use crate::models::transaction::DecodedRecords;
use crate::providers::queries;
use crate::providers::traits::DashboardProvider;

/// Runs one complete fetch cycle against a [`DashboardProvider`].
///
/// Queries run one after another. The user query comes first because its
/// login feeds the last-audit query. Any failed query aborts the cycle, so
/// callers either get a complete [`DashboardData`] or an error.
pub struct FetchService;

impl FetchService {
    pub fn new() -> Self {
        Self
    }

    pub async fn fetch_all(
        &self,
        provider: &dyn DashboardProvider,
        token: &str,
        settings: &Settings,
    ) -> Result<DashboardData, CoreError> {
        let event = json!({ "eventId": settings.event_id });

        tracing::debug!(provider = provider.name(), "querying user");
        let user_data = provider.query(token, queries::USER, json!({})).await?;
        let user = decode_user(&user_data)?;

        tracing::debug!(provider = provider.name(), "querying XP sum");
        let sum_data = provider.query(token, queries::XP_SUM, event.clone()).await?;
        let xp_sum = decode_xp_sum(&sum_data);

        tracing::debug!(provider = provider.name(), "querying XP transactions");
        let xp_data = provider.query(token, queries::XP_TRANSACTIONS, event.clone()).await?;
        let xp = decode_transactions(&xp_data)?;

        tracing::debug!(provider = provider.name(), "querying typed transactions");
        let typed_data = provider.query(token, queries::TYPED_TRANSACTIONS, event).await?;
        let typed = decode_transactions(&typed_data)?;

        tracing::debug!(provider = provider.name(), "querying last audit");
        let audit_data = provider
            .query(token, queries::LAST_AUDIT, json!({ "login": user.login }))
            .await?;
        let last_audit = decode_last_audit(&audit_data);

        let skipped_records = xp.skipped + typed.skipped;
        if skipped_records > 0 {
            tracing::warn!(skipped = skipped_records, "dropped malformed transactions");
        }
        tracing::info!(
            xp = xp.records.len(),
            typed = typed.records.len(),
            "fetch cycle complete"
        );

        Ok(DashboardData {
            user,
            xp_sum,
            xp_transactions: xp.records,
            typed_transactions: typed.records,
            last_audit,
            skipped_records,
        })
    }
}

impl Default for FetchService {
    fn default() -> Self {
        Self::new()
    }
}

// ── Response decoding ───────────────────────────────────────────────

/// `data.user[0]`; a missing user is an error, missing fields are not.
pub fn decode_user(data: &Value) -> Result<UserProfile, CoreError> {
    let first = data
        .get("user")
        .and_then(Value::as_array)
        .and_then(|users| users.first())
        .ok_or_else(|| CoreError::MissingField("user".into()))?;
    Ok(serde_json::from_value(first.clone())?)
}

/// `data.transaction_aggregate.aggregate.sum.amount`, `None` when absent.
pub fn decode_xp_sum(data: &Value) -> Option<i64> {
    data.pointer("/transaction_aggregate/aggregate/sum/amount")
        .and_then(number_from_value)
        .map(|amount| amount.round() as i64)
}

/// `data.transaction[]`, dropping malformed entries.
pub fn decode_transactions(data: &Value) -> Result<DecodedRecords, CoreError> {
    let entries = data
        .get("transaction")
        .and_then(Value::as_array)
        .ok_or_else(|| CoreError::MissingField("transaction".into()))?;
    Ok(DecodedRecords::from_json_values(entries))
}

/// `data.audit[0]`, `None` when there is no audit or it cannot be read.
pub fn decode_last_audit(data: &Value) -> Option<LastAudit> {
    let first = data.get("audit")?.as_array()?.first()?;
    match serde_json::from_value(first.clone()) {
        Ok(audit) => Some(audit),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unreadable last audit");
            None
        }
    }
}
