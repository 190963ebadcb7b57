//! "Done XP" / "Received XP" comparison bars.

use super::format::format_value;
use super::scale::ValueScale;
use super::scene::{Anchor, Rect, Scene, Text};
use super::{BAR_HEADROOM, NO_AUDIT_DATA};
use crate::models::chart::BarChartConfig;

/// Space kept under the bars for the category labels
const LABEL_MARGIN: f64 = 20.0;
/// Space kept above the tallest bar plus the label margin
const RESERVED_HEIGHT: f64 = 40.0;

/// One labeled bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
}

impl BarDatum {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// The two audit bars, done first.
    pub fn audit_pair(done: f64, received: f64) -> [BarDatum; 2] {
        [
            BarDatum::new("Done XP", done),
            BarDatum::new("Received XP", received),
        ]
    }
}

/// Geometry of one bar: `(x, y, width, height)`.
pub fn bar_rects(bars: &[BarDatum], config: &BarChartConfig) -> Option<Vec<(f64, f64, f64, f64)>> {
    let max = bars
        .iter()
        .map(|b| b.value)
        .filter(|v| v.is_finite())
        .fold(f64::NEG_INFINITY, f64::max);
    if bars.is_empty() || max <= 0.0 {
        return None;
    }

    let plot_height = (config.height - RESERVED_HEIGHT).max(1.0);
    let scale = ValueScale::new(0.0, plot_height, max * BAR_HEADROOM);
    let bar_width = config.width / (bars.len() * 2) as f64;
    let gap = bar_width / 3.0;

    Some(
        bars.iter()
            .enumerate()
            .map(|(i, bar)| {
                let value = if bar.value.is_finite() { bar.value.max(0.0) } else { 0.0 };
                let height = scale.length(value);
                let x = gap + i as f64 * (bar_width + gap);
                let y = config.height - height - LABEL_MARGIN;
                (x, y, bar_width, height)
            })
            .collect(),
    )
}

pub fn build_bar_scene(bars: &[BarDatum], config: &BarChartConfig) -> Option<Scene> {
    let rects = bar_rects(bars, config)?;
    let mut scene = Scene::new(config.width, config.height).aria_label("Audit Bar Graph");

    for (i, (bar, (x, y, width, height))) in bars.iter().zip(rects).enumerate() {
        let color = config
            .bar_colors
            .get(i % config.bar_colors.len().max(1))
            .cloned()
            .unwrap_or_else(|| config.text_color.clone());
        let center = x + width / 2.0;

        scene.push(Rect::new(x, y, width, height).rx(6.0).fill(color));
        scene.push(
            Text::new(center, config.height - 5.0, bar.label.clone())
                .anchor(Anchor::Middle)
                .font_size(12.0)
                .fill(config.text_color.clone()),
        );
        scene.push(
            Text::new(center, y - 5.0, format_value(bar.value))
                .anchor(Anchor::Middle)
                .font_size(12.0)
                .fill(config.text_color.clone()),
        );
    }
    Some(scene)
}

/// Render the comparison bars, or the audit placeholder when every value is zero.
pub fn render_comparative_bars(bars: &[BarDatum], config: &BarChartConfig) -> String {
    match build_bar_scene(bars, config) {
        Some(scene) => scene.to_svg(),
        None => NO_AUDIT_DATA.to_string(),
    }
}
