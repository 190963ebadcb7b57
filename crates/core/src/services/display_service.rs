use crate::models::dashboard::DashboardData;
use crate::models::profile::LastAudit;
use crate::models::summary::{AuditCard, AuditTypeCard, DashboardSummary, LastAuditCard, UserCard};
use crate::render::format::{
    format_display_date, format_ratio, format_thousands, last_path_segment, NOT_AVAILABLE,
};
use crate::render::pie::{DOWN, UP};
use crate::services::aggregation_service::AggregationService;

/// Builds the display-ready text of the dashboard cards.
///
/// Missing or malformed profile fields degrade to `"N/A"` rather than
/// failing the whole summary.
pub struct DisplayService {
    aggregation: AggregationService,
}

impl DisplayService {
    pub fn new() -> Self {
        Self {
            aggregation: AggregationService::new(),
        }
    }

    pub fn summarize(&self, data: &DashboardData) -> DashboardSummary {
        let user = &data.user;
        let counts = self
            .aggregation
            .count_by_category(&data.typed_transactions, &[UP, DOWN]);

        DashboardSummary {
            user: UserCard {
                name: user.full_name(),
                login: user.login.clone(),
                id: user
                    .id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            },
            audit: AuditCard {
                ratio: format_ratio(user.audit_ratio),
                done_xp: format_amount(user.total_up),
                received_xp: format_amount(user.total_down),
            },
            audit_types: AuditTypeCard {
                total: counts.total(),
                given: counts.get(UP),
                received: counts.get(DOWN),
            },
            total_xp: data
                .xp_sum
                .map(format_thousands)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            last_audit: data.last_audit.as_ref().map(last_audit_card),
        }
    }
}

/// Whole-unit amount with thousands separators, `"N/A"` when absent.
fn format_amount(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format_thousands(v.round() as i64),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn last_audit_card(audit: &LastAudit) -> LastAuditCard {
    let or_na = |s: &str| {
        if s.trim().is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            s.to_string()
        }
    };
    LastAuditCard {
        date: or_na(&format_display_date(&audit.updated_at)),
        captain: or_na(&audit.group.captain_login),
        project: or_na(last_path_segment(&audit.group.path)),
    }
}

impl Default for DisplayService {
    fn default() -> Self {
        Self::new()
    }
}
