//! Cumulative XP progress chart.

use chrono::Datelike;

use super::classify::{Category, CategoryPalette};
use super::format::{format_date, format_month_year, format_thousands, last_path_segment};
use super::geometry::{describe_line_path, Point};
use super::scale::{TimeScale, ValueAxis, ValueScale, GRID_STEP};
use super::scene::{Anchor, Circle, Group, Line, Node, Path, Rect, Scene, Text};
use super::NO_XP_DATA;
use crate::models::aggregate::{CumulativeSeries, DayBucket};
use crate::models::chart::LineChartConfig;

pub const TOOLTIP_WIDTH: f64 = 170.0;
pub const TOOLTIP_HEIGHT: f64 = 58.0;
/// Gap between a marker and the nearest tooltip corner
pub const TOOLTIP_OFFSET: f64 = 12.0;

const MARKER_RADIUS: f64 = 5.0;
const HIT_RADIUS: f64 = 12.0;
const LEGEND_ENTRY_WIDTH: f64 = 120.0;

const HOVER_CSS: &str = ".xp-point .xp-tooltip { visibility: hidden; } \
.xp-point:hover .xp-tooltip { visibility: visible; }";

/// Minimum distance between a tooltip box and the line or marker it avoids
const TOOLTIP_CLEARANCE: f64 = 4.0;

#[derive(Clone, Copy)]
enum Side {
    Right,
    Left,
}

#[derive(Clone, Copy)]
enum Level {
    Below,
    Above,
}

/// Placement order: below-right first, then the diagonally opposite corner.
const TOOLTIP_PLACEMENTS: [(Side, Level); 4] = [
    (Side::Right, Level::Below),
    (Side::Left, Level::Above),
    (Side::Left, Level::Below),
    (Side::Right, Level::Above),
];

/// Top-left corner of a marker's tooltip.
///
/// `neighbours` are the adjacent plotted points; the box keeps clear of the
/// segments joining them to the marker and of the marker itself. Below-right
/// is tried first, then above-left, below-left and above-right. Within each
/// corner the box is kept on the canvas and pushed vertically past the line.
/// When no corner has room the box falls back to the below-right corner
/// clamped onto the canvas.
pub fn tooltip_origin(
    marker: Point,
    neighbours: &[Point],
    canvas_width: f64,
    canvas_height: f64,
) -> Point {
    let max_x = (canvas_width - TOOLTIP_WIDTH).max(0.0);
    let max_y = (canvas_height - TOOLTIP_HEIGHT).max(0.0);

    for (side, level) in TOOLTIP_PLACEMENTS {
        let x = match side {
            Side::Right => marker.x + TOOLTIP_OFFSET,
            Side::Left => marker.x - TOOLTIP_OFFSET - TOOLTIP_WIDTH,
        }
        .clamp(0.0, max_x);
        let span = obstacle_span(marker, neighbours, x, x + TOOLTIP_WIDTH);
        let y = match level {
            Level::Below => {
                let preferred = (marker.y + TOOLTIP_OFFSET).min(max_y);
                match span {
                    Some((_, lowest)) => preferred.max(lowest + TOOLTIP_CLEARANCE),
                    None => preferred,
                }
            }
            Level::Above => {
                let preferred = (marker.y - TOOLTIP_OFFSET - TOOLTIP_HEIGHT).max(0.0);
                match span {
                    Some((highest, _)) => {
                        preferred.min(highest - TOOLTIP_CLEARANCE - TOOLTIP_HEIGHT)
                    }
                    None => preferred,
                }
            }
        };
        if (0.0..=max_y).contains(&y) {
            return Point::new(x, y);
        }
    }

    let x = (marker.x + TOOLTIP_OFFSET).clamp(0.0, max_x);
    let y = (marker.y + TOOLTIP_OFFSET).clamp(0.0, max_y);
    Point::new(x, y)
}

/// Vertical extent `(top, bottom)` of the marker and its adjacent segments
/// within the column `x0..=x1`, or `None` when nothing crosses it.
fn obstacle_span(marker: Point, neighbours: &[Point], x0: f64, x1: f64) -> Option<(f64, f64)> {
    let mut span: Option<(f64, f64)> = None;
    let mut include = |y: f64| {
        span = Some(match span {
            Some((top, bottom)) => (top.min(y), bottom.max(y)),
            None => (y, y),
        });
    };

    if marker.x + MARKER_RADIUS >= x0 && marker.x - MARKER_RADIUS <= x1 {
        include(marker.y - MARKER_RADIUS);
        include(marker.y + MARKER_RADIUS);
    }
    for &other in neighbours {
        let (left, right) = if marker.x <= other.x {
            (marker, other)
        } else {
            (other, marker)
        };
        let lo = left.x.max(x0);
        let hi = right.x.min(x1);
        if lo > hi {
            continue;
        }
        if right.x == left.x {
            include(left.y);
            include(right.y);
            continue;
        }
        let slope = (right.y - left.y) / (right.x - left.x);
        include(left.y + slope * (lo - left.x));
        include(left.y + slope * (hi - left.x));
    }
    span
}

/// Pixel position of every bucket, in bucket order.
///
/// Returns `None` when there is nothing to plot (no buckets, or a series
/// whose maximum is not positive).
pub fn plot_points(
    buckets: &[DayBucket],
    series: &CumulativeSeries,
    config: &LineChartConfig,
) -> Option<(Vec<Point>, ValueAxis)> {
    let (first, last) = (buckets.first()?, buckets.last()?);
    let axis = ValueAxis::from_series(series, GRID_STEP);
    if axis.is_degenerate() {
        return None;
    }
    if series.len() != buckets.len() {
        tracing::warn!(
            buckets = buckets.len(),
            series = series.len(),
            "cumulative series not aligned with buckets; plotting the common prefix"
        );
    }

    let time = TimeScale::new(
        first.timestamp,
        last.timestamp,
        config.padding,
        config.plot_width(),
    );
    let values = ValueScale::new(config.padding, config.plot_height(), axis.y_max as f64);

    let points = buckets
        .iter()
        .zip(series.values())
        .map(|(bucket, total)| {
            Point::new(time.to_px(bucket.timestamp), values.to_px(*total as f64))
        })
        .collect();
    Some((points, axis))
}

/// Build the progress chart scene, or `None` when a placeholder is due.
pub fn build_progress_scene(
    buckets: &[DayBucket],
    series: &CumulativeSeries,
    config: &LineChartConfig,
) -> Option<Scene> {
    let (points, axis) = plot_points(buckets, series, config)?;
    let palette = CategoryPalette::from(config);
    let values = ValueScale::new(config.padding, config.plot_height(), axis.y_max as f64);
    let (w, h, p) = (config.width, config.height, config.padding);
    let baseline = h - p;

    let mut scene = Scene::new(w, h).aria_label("Cumulative XP progress over time");
    scene.push(Node::Style(HOVER_CSS.to_string()));

    // Horizontal grid lines with value labels
    let mut grid = Group::new().class("grid");
    for value in axis.grid_values() {
        let y = values.to_px(value as f64);
        grid.push(Line::new(p, y, w - p, y).stroke(config.grid_color.clone()));
        grid.push(
            Text::new(p - 10.0, y + 5.0, format_thousands(value))
                .anchor(Anchor::End)
                .font_size(12.0)
                .fill(config.text_color.clone()),
        );
    }
    scene.push(grid);

    scene.push(Line::new(p, baseline, w - p, baseline).stroke(config.text_color.clone()));

    // Month ticks: one label at the first bucket of every new month
    let mut ticks = Group::new().class("month-ticks");
    let mut previous_month = None;
    for (bucket, point) in buckets.iter().zip(&points) {
        let month = (bucket.date.year(), bucket.date.month());
        if previous_month == Some(month) {
            continue;
        }
        previous_month = Some(month);
        ticks.push(
            Line::new(point.x, baseline, point.x, baseline + 5.0).stroke(config.text_color.clone()),
        );
        ticks.push(
            Text::new(point.x, baseline + 18.0, format_month_year(bucket.date))
                .anchor(Anchor::Middle)
                .font_size(11.0)
                .fill(config.text_color.clone()),
        );
    }
    scene.push(ticks);

    scene.push(
        Path::new(describe_line_path(&points))
            .fill("none")
            .stroke(config.line_color.clone(), 3.0),
    );

    for (i, (bucket, point)) in buckets.iter().zip(&points).enumerate() {
        let neighbours: Vec<Point> = [i.checked_sub(1), Some(i + 1)]
            .into_iter()
            .flatten()
            .filter_map(|j| points.get(j).copied())
            .collect();
        scene.push(marker_group(bucket, *point, &neighbours, config, &palette));
    }

    scene.push(legend(config, &palette));
    Some(scene)
}

/// Render the progress chart to SVG, or the placeholder paragraph.
pub fn render_progress_line(
    buckets: &[DayBucket],
    series: &CumulativeSeries,
    config: &LineChartConfig,
) -> String {
    match build_progress_scene(buckets, series, config) {
        Some(scene) => scene.to_svg(),
        None => {
            tracing::debug!("no plottable XP data; emitting placeholder");
            NO_XP_DATA.to_string()
        }
    }
}

fn marker_group(
    bucket: &DayBucket,
    point: Point,
    neighbours: &[Point],
    config: &LineChartConfig,
    palette: &CategoryPalette,
) -> Group {
    let category = Category::of_path(&bucket.representative_path);
    let color = palette.color(category).to_string();
    let date = format_date(bucket.date);

    let mut group = Group::new().class("xp-point");
    group.push(
        Circle::new(point.x, point.y, HIT_RADIUS)
            .fill("transparent")
            .pointer_events("all"),
    );
    group.push(
        Circle::new(point.x, point.y, MARKER_RADIUS)
            .fill(color.clone())
            .stroke(config.point_color.clone(), 2.0),
    );
    group.push(Node::Title(date.clone()));

    let origin = tooltip_origin(point, neighbours, config.width, config.height);
    let amount = if bucket.total_amount >= 0 {
        format!("+{} XP", format_thousands(bucket.total_amount))
    } else {
        format!("{} XP", format_thousands(bucket.total_amount))
    };
    let lines = [
        date,
        format!("{category}: {}", last_path_segment(&bucket.representative_path)),
        amount,
    ];

    let mut tooltip = Group::new().class("xp-tooltip");
    tooltip.push(
        Rect::new(origin.x, origin.y, TOOLTIP_WIDTH, TOOLTIP_HEIGHT)
            .rx(6.0)
            .fill(config.tooltip_background.clone())
            .stroke(color, 1.0),
    );
    for (i, content) in lines.into_iter().enumerate() {
        let mut text = Text::new(origin.x + 10.0, origin.y + 17.0 + 16.0 * i as f64, content)
            .font_size(12.0)
            .fill(config.text_color.clone());
        if i == 0 {
            text = text.bold();
        }
        tooltip.push(text);
    }
    group.push(tooltip);
    group
}

/// Static checkpoint / piscine / project legend centered below the plot.
fn legend(config: &LineChartConfig, palette: &CategoryPalette) -> Group {
    let total_width = LEGEND_ENTRY_WIDTH * Category::ALL.len() as f64;
    let start_x = (config.width - total_width) / 2.0;
    let y = config.height - config.padding / 4.0;

    let mut legend = Group::new().class("legend");
    for (i, category) in Category::ALL.into_iter().enumerate() {
        let x = start_x + LEGEND_ENTRY_WIDTH * i as f64;
        legend.push(
            Circle::new(x + MARKER_RADIUS, y - 4.0, MARKER_RADIUS)
                .fill(palette.color(category).to_string()),
        );
        legend.push(
            Text::new(x + 2.0 * MARKER_RADIUS + 6.0, y, category.label())
                .font_size(12.0)
                .fill(config.text_color.clone()),
        );
    }
    legend
}
