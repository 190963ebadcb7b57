use chrono::NaiveDate;
use std::collections::HashMap;

use crate::models::aggregate::{
    CategoryCount, CumulativeSeries, DayBucket, ProjectTotal, ProjectTotals,
};
use crate::models::transaction::TransactionRecord;
use crate::render::format::last_path_segment;

/// Path sentinels excluded from per-project totals (matched case-insensitively).
pub const PROJECT_EXCLUDED_SENTINELS: [&str; 2] = ["piscine", "checkpoint"];

/// Groups and sums transaction records for the charts.
///
/// Pure business logic: never mutates the caller's records, never fails.
/// Sums saturate at the `i64` bounds.
/// Empty input always gives an empty or zero result.
pub struct AggregationService;

impl AggregationService {
    pub fn new() -> Self {
        Self
    }

    /// One [`DayBucket`] per calendar date, ascending by first-record timestamp.
    ///
    /// The grouping key is the date portion of `createdAt` as written (its own
    /// UTC offset, not the local clock). Records are sorted on a private copy
    /// first, so the representative path and timestamp come from the earliest
    /// record of each day regardless of input order.
    pub fn group_by_calendar_date(&self, records: &[TransactionRecord]) -> Vec<DayBucket> {
        let mut sorted: Vec<&TransactionRecord> = records.iter().collect();
        sorted.sort_by_key(|r| r.created_at);

        let mut buckets: Vec<DayBucket> = Vec::new();
        let mut index: HashMap<NaiveDate, usize> = HashMap::new();
        for record in sorted {
            let date = record.calendar_date();
            match index.get(&date) {
                Some(&i) => {
                    let bucket = &mut buckets[i];
                    bucket.total_amount = bucket.total_amount.saturating_add(record.amount);
                }
                None => {
                    index.insert(date, buckets.len());
                    buckets.push(DayBucket {
                        date,
                        total_amount: record.amount,
                        representative_path: record.path.clone(),
                        timestamp: record.created_at,
                    });
                }
            }
        }

        // Mixed UTC offsets can put a later date's first record before an
        // earlier one; order by timestamp so the x axis stays monotonic.
        buckets.sort_by_key(|b| b.timestamp);
        tracing::debug!(records = records.len(), buckets = buckets.len(), "grouped records by day");
        buckets
    }

    /// Running totals aligned with `buckets`.
    pub fn cumulative_of(&self, buckets: &[DayBucket]) -> CumulativeSeries {
        let values = buckets
            .iter()
            .scan(0i64, |running, bucket| {
                *running = running.saturating_add(bucket.total_amount);
                Some(*running)
            })
            .collect();
        CumulativeSeries(values)
    }

    /// Exact-match count of `record.kind` for each label in `categories`.
    ///
    /// Records of any other kind are ignored. Labels keep the order given.
    pub fn count_by_category(
        &self,
        records: &[TransactionRecord],
        categories: &[&str],
    ) -> CategoryCount {
        let counts = categories
            .iter()
            .map(|label| {
                let n = records.iter().filter(|r| r.kind == *label).count();
                (label.to_string(), n)
            })
            .collect();
        CategoryCount { counts }
    }

    /// XP summed per project, most recently first-seen project first.
    ///
    /// Piscine and checkpoint paths are excluded. The key is the last path
    /// segment, so the same project under two parents is merged.
    pub fn project_totals(&self, records: &[TransactionRecord]) -> ProjectTotals {
        let mut entries: Vec<ProjectTotal> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for record in records.iter().filter(|r| !is_excluded_from_projects(&r.path)) {
            let key = last_path_segment(&record.path);
            match index.get(key) {
                Some(&i) => {
                    let entry = &mut entries[i];
                    entry.amount = entry.amount.saturating_add(record.amount);
                }
                None => {
                    index.insert(key.to_string(), entries.len());
                    entries.push(ProjectTotal {
                        project: key.to_string(),
                        amount: record.amount,
                    });
                }
            }
        }

        entries.reverse();
        ProjectTotals { entries }
    }
}

/// `true` for paths containing a piscine or checkpoint sentinel in any case.
pub fn is_excluded_from_projects(path: &str) -> bool {
    let lower = path.to_lowercase();
    PROJECT_EXCLUDED_SENTINELS.iter().any(|s| lower.contains(s))
}

impl Default for AggregationService {
    fn default() -> Self {
        Self::new()
    }
}
