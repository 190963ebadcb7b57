use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::CoreError;

/// A single transaction as returned by the platform.
///
/// Immutable input to the aggregation layer. `created_at` keeps the offset it
/// was written with, so the calendar date of a record is the date portion of
/// the timestamp string as written, not a timezone-converted one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    /// Slash-delimited object path, e.g. `/gritlab/school-curriculum/go-reloaded`
    pub path: String,

    /// Transaction type (`"xp"`, `"up"`, `"down"`, `"level"`, …)
    #[serde(rename = "type")]
    pub kind: String,

    /// When the transaction was created
    pub created_at: DateTime<FixedOffset>,

    /// Transaction amount
    pub amount: i64,
}

impl TransactionRecord {
    pub fn new(
        path: impl Into<String>,
        kind: impl Into<String>,
        created_at: DateTime<FixedOffset>,
        amount: i64,
    ) -> Self {
        Self {
            path: path.into(),
            kind: kind.into(),
            created_at,
            amount,
        }
    }

    /// Build a record from an RFC 3339 timestamp string.
    pub fn parse(
        path: impl Into<String>,
        kind: impl Into<String>,
        created_at: &str,
        amount: i64,
    ) -> Result<Self, CoreError> {
        let created_at = DateTime::parse_from_rfc3339(created_at).map_err(|e| {
            CoreError::InvalidRecord(format!("unparseable createdAt '{created_at}': {e}"))
        })?;
        Ok(Self::new(path, kind, created_at, amount))
    }

    /// Calendar date of the record, as written in `createdAt`.
    pub fn calendar_date(&self) -> NaiveDate {
        self.created_at.date_naive()
    }

    /// Decode one record from a loosely-typed JSON object.
    ///
    /// Missing `path`/`type` default to empty strings. A missing or
    /// unparseable `createdAt` and a non-integral `amount` are errors.
    pub fn from_json_value(value: &Value) -> Result<Self, CoreError> {
        let obj = value
            .as_object()
            .ok_or_else(|| CoreError::InvalidRecord("record is not a JSON object".into()))?;

        let path = obj.get("path").and_then(Value::as_str).unwrap_or_default();
        let kind = obj.get("type").and_then(Value::as_str).unwrap_or_default();

        let created_at = obj
            .get("createdAt")
            .and_then(Value::as_str)
            .ok_or_else(|| CoreError::InvalidRecord("missing createdAt".into()))?;

        let amount = match obj.get("amount") {
            None | Some(Value::Null) => 0,
            Some(v) => amount_from_json(v)?,
        };

        Self::parse(path, kind, created_at, amount)
    }
}

fn amount_from_json(value: &Value) -> Result<i64, CoreError> {
    if let Some(n) = value.as_i64() {
        return Ok(n);
    }
    if let Some(f) = value.as_f64() {
        if f.is_finite() && f.fract() == 0.0 {
            return Ok(f as i64);
        }
    }
    if let Some(s) = value.as_str() {
        if let Ok(n) = s.trim().parse::<i64>() {
            return Ok(n);
        }
    }
    Err(CoreError::InvalidRecord(format!("non-integer amount: {value}")))
}

/// Result of leniently decoding a JSON array of transactions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedRecords {
    /// Records that decoded successfully, in input order
    pub records: Vec<TransactionRecord>,

    /// How many entries were dropped as malformed
    pub skipped: usize,
}

impl DecodedRecords {
    /// Decode every element of `values`, skipping malformed ones with a warning.
    pub fn from_json_values(values: &[Value]) -> Self {
        let mut decoded = Self::default();
        for (idx, value) in values.iter().enumerate() {
            match TransactionRecord::from_json_value(value) {
                Ok(record) => decoded.records.push(record),
                Err(e) => {
                    tracing::warn!(index = idx, error = %e, "skipping malformed transaction");
                    decoded.skipped += 1;
                }
            }
        }
        decoded
    }
}
