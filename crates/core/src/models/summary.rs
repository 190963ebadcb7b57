use serde::{Deserialize, Serialize};

/// Text shown on the dashboard cards next to the charts.
///
/// Every field is display-ready; missing upstream values have already been
/// replaced by placeholders such as `"N/A"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub user: UserCard,
    pub audit: AuditCard,
    pub audit_types: AuditTypeCard,
    /// Total XP, thousands-separated
    pub total_xp: String,
    pub last_audit: Option<LastAuditCard>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCard {
    pub name: String,
    pub login: String,
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditCard {
    /// One decimal place, or `"N/A"`
    pub ratio: String,
    pub done_xp: String,
    pub received_xp: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditTypeCard {
    pub total: usize,
    pub given: usize,
    pub received: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastAuditCard {
    /// `DD-MM-YYYY`
    pub date: String,
    pub captain: String,
    /// Last path segment of the audited project
    pub project: String,
}
