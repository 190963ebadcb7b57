//! Scale mapper: axis ranges and domain → pixel transforms.

use chrono::{DateTime, FixedOffset};

use crate::models::aggregate::CumulativeSeries;

/// Vertical grid increment for the XP progress chart.
pub const GRID_STEP: i64 = 50_000;

/// Upper bound on horizontal grid lines drawn for one axis.
pub const MAX_GRID_LINES: i64 = 1_000;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Fractional days from `from` to `to` (negative when `to` is earlier).
pub fn elapsed_days(from: DateTime<FixedOffset>, to: DateTime<FixedOffset>) -> f64 {
    (to - from).num_milliseconds() as f64 / MILLIS_PER_DAY
}

/// Vertical axis derived from a cumulative series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueAxis {
    /// Top of the axis: the smallest multiple of `step` ≥ the series maximum.
    /// 0 for an empty, all-zero or all-negative series.
    pub y_max: i64,
    pub step: i64,
}

impl ValueAxis {
    pub fn from_series(series: &CumulativeSeries, step: i64) -> Self {
        let step = step.max(1);
        let y_max = match series.max() {
            Some(max) if max > 0 => {
                let steps = max / step + i64::from(max % step != 0);
                steps.saturating_mul(step)
            }
            _ => 0,
        };
        Self { y_max, step }
    }

    /// `true` when nothing can be plotted against this axis.
    pub fn is_degenerate(&self) -> bool {
        self.y_max <= 0
    }

    /// `0, step, 2·step, …, y_max`.
    ///
    /// Axes taller than [`MAX_GRID_LINES`] steps skip intermediate lines so
    /// the count stays bounded.
    pub fn grid_values(&self) -> Vec<i64> {
        let step = self.step.max(1);
        let steps = self.y_max / step;
        let stride = (steps / MAX_GRID_LINES + i64::from(steps % MAX_GRID_LINES != 0)).max(1);
        (0..=steps / stride).map(|i| i * stride * step).collect()
    }
}

/// Date-proportional horizontal scale.
///
/// Equal pixel distances represent equal elapsed time, not equal numbers of
/// data points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    pub origin: DateTime<FixedOffset>,
    /// Days between the first and last timestamp, floored to 1
    pub span_days: f64,
    pub left_px: f64,
    pub width_px: f64,
}

impl TimeScale {
    pub fn new(
        first: DateTime<FixedOffset>,
        last: DateTime<FixedOffset>,
        left_px: f64,
        width_px: f64,
    ) -> Self {
        let span = elapsed_days(first, last);
        let span_days = if span > 0.0 { span } else { 1.0 };
        Self {
            origin: first,
            span_days,
            left_px,
            width_px,
        }
    }

    #[inline]
    pub fn to_px(&self, at: DateTime<FixedOffset>) -> f64 {
        self.left_px + (elapsed_days(self.origin, at) / self.span_days) * self.width_px
    }
}

/// Linear vertical scale from `[0, max]` to `[bottom, top]` pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    pub top_px: f64,
    pub height_px: f64,
    pub max: f64,
}

impl ValueScale {
    pub fn new(top_px: f64, height_px: f64, max: f64) -> Self {
        Self {
            top_px,
            height_px,
            max: if max > 0.0 { max } else { 1.0 },
        }
    }

    #[inline]
    pub fn to_px(&self, value: f64) -> f64 {
        self.top_px + self.height_px - (value / self.max) * self.height_px
    }

    /// Pixel length of a bar of `value` standing on the baseline.
    #[inline]
    pub fn length(&self, value: f64) -> f64 {
        (value / self.max) * self.height_px
    }
}
