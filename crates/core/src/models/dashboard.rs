use serde::{Deserialize, Serialize};

use super::profile::{LastAudit, UserProfile};
use super::summary::DashboardSummary;
use super::transaction::TransactionRecord;

/// Everything one fetch cycle retrieves. Only ever built from a fully
/// successful cycle; rendering never sees partial data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub user: UserProfile,

    /// Platform-side sum of XP for the configured event (`None` when the
    /// aggregate came back empty or non-numeric)
    pub xp_sum: Option<i64>,

    /// XP transactions, in whatever order the API returned them
    pub xp_transactions: Vec<TransactionRecord>,

    /// All typed transactions of the event (used for up/down counting)
    pub typed_transactions: Vec<TransactionRecord>,

    pub last_audit: Option<LastAudit>,

    /// Transactions dropped as malformed while decoding
    pub skipped_records: usize,
}

/// Rendered markup for every chart on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedCharts {
    pub progress_line: String,
    pub audit_pie: String,
    pub audit_bars: String,
    pub project_bars: String,
}

/// Result of one full refresh: the data plus everything rendered from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub data: DashboardData,
    pub charts: RenderedCharts,
    pub summary: DashboardSummary,
}
