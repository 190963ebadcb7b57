//! Chart rendering engine.
//!
//! Every renderer is a pure function from aggregated data and a config to a
//! self-contained SVG string. Empty or all-zero input yields one of the
//! placeholder paragraphs below instead of a chart.

pub mod bar;
pub mod classify;
pub mod format;
pub mod geometry;
pub mod line;
pub mod pie;
pub mod project_bar;
pub mod scale;
pub mod scene;

pub const NO_XP_DATA: &str = r#"<p class="no-data">No XP data available</p>"#;
pub const NO_AUDIT_DATA: &str = r#"<p class="no-data">No audit data available</p>"#;
pub const NO_PROJECT_DATA: &str = r#"<p class="no-data">No project data available</p>"#;

/// `true` when `markup` is one of the placeholder paragraphs.
pub fn is_placeholder(markup: &str) -> bool {
    matches!(markup, NO_XP_DATA | NO_AUDIT_DATA | NO_PROJECT_DATA)
}

/// Headroom factor applied to the tallest bar so it never reaches the top edge.
pub const BAR_HEADROOM: f64 = 1.1;

pub use bar::{render_comparative_bars, BarDatum};
pub use classify::{Category, CategoryPalette};
pub use line::render_progress_line;
pub use pie::{pie_percentages, render_audit_pie};
pub use project_bar::render_project_bars;
pub use scene::Scene;
