//! XP per project, one bar per [`ProjectTotals`] entry.

use super::format::{format_thousands, truncate_label};
use super::scale::ValueScale;
use super::scene::{Anchor, Line, Rect, Scene, Text};
use super::{BAR_HEADROOM, NO_PROJECT_DATA};
use crate::models::aggregate::ProjectTotals;
use crate::models::chart::ProjectBarConfig;

/// Share of a slot taken by its bar
const BAR_FILL: f64 = 0.7;
const VALUE_GAP: f64 = 5.0;
/// Distance from the bar top to the start of the rotated label
const LABEL_GAP: f64 = 20.0;

/// Layout of one project bar.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectBar {
    pub label: String,
    pub amount: i64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ProjectBar {
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// Height available to bars once padding and the label band are taken out.
pub fn bar_area_height(config: &ProjectBarConfig) -> f64 {
    (config.height - 2.0 * config.padding - config.label_band).max(1.0)
}

/// Lay out every entry in equal-width slots across the chart.
///
/// `None` when there are no entries or no positive amount to scale against.
pub fn layout_project_bars(
    totals: &ProjectTotals,
    config: &ProjectBarConfig,
) -> Option<Vec<ProjectBar>> {
    let max = totals.max_amount().filter(|m| *m > 0)?;
    let slot = (config.width - 2.0 * config.padding).max(1.0) / totals.len() as f64;
    let width = slot * BAR_FILL;
    let baseline = config.height - config.padding;
    let scale = ValueScale::new(0.0, bar_area_height(config), max as f64 * BAR_HEADROOM);

    let bars = totals
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let height = scale.length(entry.amount.max(0) as f64);
            ProjectBar {
                label: truncate_label(&entry.project, config.max_label_chars),
                amount: entry.amount,
                x: config.padding + i as f64 * slot + (slot - width) / 2.0,
                y: baseline - height,
                width,
                height,
            }
        })
        .collect();
    Some(bars)
}

pub fn build_project_scene(totals: &ProjectTotals, config: &ProjectBarConfig) -> Option<Scene> {
    let bars = layout_project_bars(totals, config)?;
    let baseline = config.height - config.padding;

    let mut scene = Scene::new(config.width, config.height).aria_label("XP earned per project");
    scene.push(
        Line::new(config.padding, baseline, config.width - config.padding, baseline)
            .stroke(config.text_color.clone()),
    );

    for bar in &bars {
        let cx = bar.center_x();
        scene.push(
            Rect::new(bar.x, bar.y, bar.width, bar.height)
                .rx(4.0)
                .fill(config.bar_color.clone()),
        );
        scene.push(
            Text::new(cx, bar.y - VALUE_GAP, format_thousands(bar.amount))
                .anchor(Anchor::Middle)
                .font_size(11.0)
                .fill(config.text_color.clone()),
        );
        scene.push(
            Text::new(cx, bar.y - LABEL_GAP, bar.label.clone())
                .anchor(Anchor::Start)
                .font_size(11.0)
                .fill(config.text_color.clone())
                .rotate(-90.0),
        );
    }
    Some(scene)
}

/// Render the project bars, or the placeholder when there is nothing to show.
pub fn render_project_bars(totals: &ProjectTotals, config: &ProjectBarConfig) -> String {
    match build_project_scene(totals, config) {
        Some(scene) => scene.to_svg(),
        None => NO_PROJECT_DATA.to_string(),
    }
}
