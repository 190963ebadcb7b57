use crate::models::chart::{
    BarChartConfig, ChartOptions, LineChartConfig, PieChartConfig, ProjectBarConfig,
};
use crate::models::dashboard::{DashboardData, RenderedCharts};
use crate::models::profile::UserProfile;
use crate::models::transaction::TransactionRecord;
use crate::render::bar::{render_comparative_bars, BarDatum};
use crate::render::line::render_progress_line;
use crate::render::pie::{render_audit_pie, DOWN, UP};
use crate::render::project_bar::render_project_bars;
use crate::services::aggregation_service::AggregationService;

/// Turns fetched records into chart markup.
///
/// The core computes all the numbers and layout; the caller only inserts the
/// returned SVG (or placeholder paragraph) into the page. Every method is
/// synchronous and stateless, so the same data always renders identically.
pub struct ChartService {
    aggregation: AggregationService,
}

impl ChartService {
    pub fn new() -> Self {
        Self {
            aggregation: AggregationService::new(),
        }
    }

    /// Cumulative XP over time, one marker per calendar day.
    pub fn progress_line(
        &self,
        xp_records: &[TransactionRecord],
        config: &LineChartConfig,
    ) -> String {
        let buckets = self.aggregation.group_by_calendar_date(xp_records);
        let series = self.aggregation.cumulative_of(&buckets);
        render_progress_line(&buckets, &series, config)
    }

    /// Share of audits given (`up`) versus received (`down`).
    pub fn audit_pie(
        &self,
        typed_records: &[TransactionRecord],
        config: &PieChartConfig,
    ) -> String {
        let counts = self.aggregation.count_by_category(typed_records, &[UP, DOWN]);
        render_audit_pie(&counts, config)
    }

    /// Audit XP done versus received, from the profile totals.
    pub fn audit_bars(&self, user: &UserProfile, config: &BarChartConfig) -> String {
        let bars = BarDatum::audit_pair(
            user.total_up.unwrap_or(0.0),
            user.total_down.unwrap_or(0.0),
        );
        render_comparative_bars(&bars, config)
    }

    /// XP per project, piscine and checkpoint work excluded.
    pub fn project_bars(
        &self,
        xp_records: &[TransactionRecord],
        config: &ProjectBarConfig,
    ) -> String {
        let totals = self.aggregation.project_totals(xp_records);
        render_project_bars(&totals, config)
    }

    /// Render every dashboard chart from one completed fetch cycle.
    pub fn render_all(&self, data: &DashboardData, options: &ChartOptions) -> RenderedCharts {
        let charts = RenderedCharts {
            progress_line: self.progress_line(&data.xp_transactions, &options.line),
            audit_pie: self.audit_pie(&data.typed_transactions, &options.pie),
            audit_bars: self.audit_bars(&data.user, &options.bar),
            project_bars: self.project_bars(&data.xp_transactions, &options.project),
        };
        tracing::debug!(
            xp_records = data.xp_transactions.len(),
            typed_records = data.typed_transactions.len(),
            "rendered dashboard charts"
        );
        charts
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
