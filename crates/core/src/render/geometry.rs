//! Geometry kernel: coordinate conversion and SVG path descriptions.
//!
//! Knows nothing about transactions or charts.

use super::format::fmt_num;

/// A point in SVG user space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One pie slice, angles in degrees clockwise from 12 o'clock.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcSlice {
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: String,
}

impl ArcSlice {
    pub fn new(start_angle: f64, end_angle: f64, color: impl Into<String>) -> Self {
        Self {
            start_angle,
            end_angle,
            color: color.into(),
        }
    }

    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// Point on a circle, with 0° pointing up and angles growing clockwise.
pub fn polar_to_cartesian(center_x: f64, center_y: f64, radius: f64, angle_degrees: f64) -> Point {
    let angle = (angle_degrees - 90.0).to_radians();
    Point::new(
        center_x + radius * angle.cos(),
        center_y + radius * angle.sin(),
    )
}

/// Closed pie-slice path: center → arc start → arc end → center.
///
/// Angles must be non-decreasing; the large-arc flag is set when the slice
/// spans more than 180°.
pub fn describe_arc_path(
    center_x: f64,
    center_y: f64,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
) -> String {
    let start = polar_to_cartesian(center_x, center_y, radius, start_angle);
    let end = polar_to_cartesian(center_x, center_y, radius, end_angle);
    let large_arc = if end_angle - start_angle > 180.0 { 1 } else { 0 };

    format!(
        "M {cx} {cy} L {sx} {sy} A {r} {r} 0 {large_arc} 1 {ex} {ey} L {cx} {cy} Z",
        cx = fmt_num(center_x),
        cy = fmt_num(center_y),
        sx = fmt_num(start.x),
        sy = fmt_num(start.y),
        r = fmt_num(radius),
        ex = fmt_num(end.x),
        ey = fmt_num(end.y),
    )
}

/// Open polyline path through `points` in order; empty for no points.
pub fn describe_line_path(points: &[Point]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let cmd = if i == 0 { "M" } else { "L" };
            format!("{cmd}{},{}", fmt_num(p.x), fmt_num(p.y))
        })
        .collect::<Vec<_>>()
        .join(" ")
}
