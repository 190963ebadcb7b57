//! Audit up/down pie chart.

use super::geometry::{describe_arc_path, ArcSlice};
use super::scene::{Anchor, Circle, Node, Path, Scene, Text};
use super::NO_AUDIT_DATA;
use crate::models::aggregate::CategoryCount;
use crate::models::chart::PieChartConfig;

pub const UP: &str = "up";
pub const DOWN: &str = "down";

/// Start of the up slice: 12 o'clock in geometry-kernel degrees.
const START_ANGLE: f64 = -90.0;

/// Rounded percentages `(up, down)` of `up + down`.
///
/// Each side is rounded on its own, so the pair may add up to 99 or 101.
/// `None` when both counts are zero.
pub fn pie_percentages(up: usize, down: usize) -> Option<(u32, u32)> {
    if up == 0 && down == 0 {
        return None;
    }
    let total = up as f64 + down as f64;
    let pct = |n: usize| ((n as f64 / total) * 100.0).round() as u32;
    Some((pct(up), pct(down)))
}

/// The up and down slices, in that order.
///
/// The up slice spans `[-90°, -90° + upAngle]` and the down slice the rest
/// of the turn up to 270°.
pub fn pie_slices(up: usize, down: usize, config: &PieChartConfig) -> Option<[ArcSlice; 2]> {
    if up == 0 && down == 0 {
        return None;
    }
    let up_angle = (up as f64 / (up as f64 + down as f64)) * 360.0;
    Some([
        ArcSlice::new(START_ANGLE, START_ANGLE + up_angle, config.colors.up.clone()),
        ArcSlice::new(START_ANGLE + up_angle, START_ANGLE + 360.0, config.colors.down.clone()),
    ])
}

pub fn build_pie_scene(counts: &CategoryCount, config: &PieChartConfig) -> Option<Scene> {
    let (up, down) = (counts.get(UP), counts.get(DOWN));
    let slices = pie_slices(up, down, config)?;
    let (up_pct, down_pct) = pie_percentages(up, down)?;
    let (c, r) = (config.center, config.radius);

    let mut scene = Scene::with_view_box(config.size, config.size, [0.0, 0.0, 100.0, 100.0])
        .aria_label("Pie chart showing audit distribution");

    for slice in &slices {
        let sweep = slice.sweep();
        if sweep <= 0.0 {
            continue;
        }
        // An SVG arc whose endpoints coincide draws nothing.
        if sweep >= 360.0 {
            scene.push(Circle::new(c, c, r).fill(slice.color.clone()));
        } else {
            scene.push(
                Path::new(describe_arc_path(c, c, r, slice.start_angle, slice.end_angle))
                    .fill(slice.color.clone()),
            );
        }
    }

    scene.push(
        Circle::new(c, c, r)
            .fill("transparent")
            .stroke(config.colors.stroke.clone(), 2.0),
    );

    let label_y = c - 5.0;
    scene.push(label(c, label_y - 2.0, format!("Up: {up} ({up_pct}%)"), config));
    scene.push(label(c, label_y + 14.0, format!("Down: {down} ({down_pct}%)"), config));
    Some(scene)
}

/// Render the audit pie to SVG, or the placeholder when no up/down records exist.
pub fn render_audit_pie(counts: &CategoryCount, config: &PieChartConfig) -> String {
    build_pie_scene(counts, config)
        .map(|scene| scene.to_svg())
        .unwrap_or_else(|| NO_AUDIT_DATA.to_string())
}

fn label(x: f64, y: f64, content: String, config: &PieChartConfig) -> Node {
    Text::new(x, y, content)
        .anchor(Anchor::Middle)
        .font_size(6.0)
        .fill(config.colors.text.clone())
        .into()
}
