use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// All records of one calendar date, summed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayBucket {
    /// The calendar date shared by every record in the bucket
    pub date: NaiveDate,

    /// Sum of `amount` over the day's records
    pub total_amount: i64,

    /// Path of the chronologically first record of the day.
    /// Only used for marker color and tooltip category.
    pub representative_path: String,

    /// Timestamp of the chronologically first record of the day
    pub timestamp: DateTime<FixedOffset>,
}

/// Running totals aligned 1:1 with an ascending sequence of [`DayBucket`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CumulativeSeries(pub Vec<i64>);

impl CumulativeSeries {
    pub fn values(&self) -> &[i64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Largest running total, `None` for an empty series.
    pub fn max(&self) -> Option<i64> {
        self.0.iter().copied().max()
    }

    /// Final running total (0 when empty).
    pub fn total(&self) -> i64 {
        self.0.last().copied().unwrap_or(0)
    }
}

/// Occurrence counts for a fixed, ordered set of category labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub counts: Vec<(String, usize)>,
}

impl CategoryCount {
    /// Count for `label`; 0 for labels that were not requested.
    pub fn get(&self, label: &str) -> usize {
        self.counts
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }

    /// Share of `label` among all counted records, in `[0, 1]`. 0 when nothing was counted.
    pub fn ratio(&self, label: &str) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.get(label) as f64 / total as f64
    }
}

/// Summed amount for one project key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectTotal {
    pub project: String,
    pub amount: i64,
}

/// Per-project sums, most-recently-inserted key first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectTotals {
    pub entries: Vec<ProjectTotal>,
}

impl ProjectTotals {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, project: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|e| e.project == project)
            .map(|e| e.amount)
    }

    pub fn max_amount(&self) -> Option<i64> {
        self.entries.iter().map(|e| e.amount).max()
    }
}
