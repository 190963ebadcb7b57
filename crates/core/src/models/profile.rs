use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The signed-in user as returned by the `user` query.
///
/// Numeric fields are decoded leniently: a missing, `null`, empty or
/// non-numeric value becomes `None` so the dashboard can show a placeholder
/// instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    pub login: String,
    #[serde(deserialize_with = "lenient_string")]
    pub first_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub last_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub campus: String,

    /// Audit XP given divided by audit XP received
    #[serde(deserialize_with = "lenient_f64")]
    pub audit_ratio: Option<f64>,

    /// Audit XP given ("Done XP")
    #[serde(deserialize_with = "lenient_f64")]
    pub total_up: Option<f64>,

    /// Audit XP received ("Received XP")
    #[serde(deserialize_with = "lenient_f64")]
    pub total_down: Option<f64>,
}

impl UserProfile {
    /// "First Last", trimmed; empty when both names are missing.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// The group an audit was performed on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuditGroup {
    #[serde(deserialize_with = "lenient_string")]
    pub captain_login: String,
    #[serde(deserialize_with = "lenient_string")]
    pub path: String,
}

/// The most recent audit performed by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LastAudit {
    #[serde(deserialize_with = "lenient_group")]
    pub group: AuditGroup,
    #[serde(deserialize_with = "lenient_string")]
    pub auditor_login: String,
    /// Raw ISO-8601 timestamp; formatted for display only
    #[serde(deserialize_with = "lenient_string")]
    pub updated_at: String,
}

/// Interpret a JSON value as a finite number.
///
/// Numbers pass through; strings are trimmed and parsed; everything else
/// (null, booleans, empty strings, garbage) is `None`.
pub fn number_from_value(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from_value))
}

fn lenient_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(|v| match v {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

fn lenient_group<'de, D: Deserializer<'de>>(deserializer: D) -> Result<AuditGroup, D::Error> {
    Ok(Option::<AuditGroup>::deserialize(deserializer)?.unwrap_or_default())
}
