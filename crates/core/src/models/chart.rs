use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::CoreError;

/// Options for the cumulative XP progress chart.
///
/// Keys are camelCase so a caller-supplied JSON object such as
/// `{"width": 700, "lineColor": "#6216d4"}` can be merged over the defaults
/// with [`merge_overrides`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineChartConfig {
    pub width: f64,
    pub height: f64,
    /// Margin on every side of the plot area
    pub padding: f64,
    pub line_color: String,
    /// Outline ring drawn around each marker
    pub point_color: String,
    pub grid_color: String,
    pub text_color: String,
    pub checkpoint_color: String,
    pub piscine_color: String,
    pub project_color: String,
    pub tooltip_background: String,
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 400.0,
            padding: 50.0,
            line_color: "#B79AE3".into(),
            point_color: "#fff".into(),
            grid_color: "#eee".into(),
            text_color: "#4B3B53".into(),
            checkpoint_color: "#AEEBFF".into(),
            piscine_color: "#A9D566".into(),
            project_color: "#FFD9A0".into(),
            tooltip_background: "#fff".into(),
        }
    }
}

impl LineChartConfig {
    /// Horizontal extent available to plotted points.
    pub fn plot_width(&self) -> f64 {
        (self.width - 2.0 * self.padding).max(1.0)
    }

    /// Vertical extent available to plotted points.
    pub fn plot_height(&self) -> f64 {
        (self.height - 2.0 * self.padding).max(1.0)
    }
}

/// Slice and label colors for the audit pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieColors {
    pub up: String,
    pub down: String,
    pub stroke: String,
    pub text: String,
}

impl Default for PieColors {
    fn default() -> Self {
        Self {
            up: "#D4EAB2".into(),
            down: "#B79AE3".into(),
            stroke: "#00FF9B".into(),
            text: "#4B3B53".into(),
        }
    }
}

/// Options for the audit up/down pie chart.
///
/// The chart is drawn in a fixed 100×100 view box and displayed at `size`
/// pixels square.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PieChartConfig {
    pub size: f64,
    pub radius: f64,
    pub center: f64,
    pub colors: PieColors,
}

impl Default for PieChartConfig {
    fn default() -> Self {
        Self {
            size: 300.0,
            radius: 40.0,
            center: 50.0,
            colors: PieColors::default(),
        }
    }
}

/// Options for the "Done XP" / "Received XP" comparison bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BarChartConfig {
    pub width: f64,
    pub height: f64,
    /// Cycled per bar
    pub bar_colors: Vec<String>,
    pub text_color: String,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 180.0,
            bar_colors: vec!["#FFD9A0".into(), "#AEEBFF".into()],
            text_color: "#4B3B53".into(),
        }
    }
}

/// Options for the per-project XP bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectBarConfig {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    /// Band above the tallest bar reserved for the rotated project labels
    pub label_band: f64,
    pub bar_color: String,
    pub text_color: String,
    /// Longer project names are truncated with an ellipsis
    pub max_label_chars: usize,
}

impl Default for ProjectBarConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
            padding: 20.0,
            label_band: 140.0,
            bar_color: "#B79AE3".into(),
            text_color: "#4B3B53".into(),
            max_label_chars: 20,
        }
    }
}

/// Options for every chart on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    pub line: LineChartConfig,
    pub pie: PieChartConfig,
    pub bar: BarChartConfig,
    pub project: ProjectBarConfig,
}

impl ChartOptions {
    /// Build options from a JSON object of per-chart overrides, e.g.
    /// `{"line": {"width": 700}, "pie": {"size": 200}}`.
    pub fn from_overrides(overrides: &Value) -> Result<Self, CoreError> {
        let defaults = Self::default();
        let section = |key: &str| overrides.get(key).unwrap_or(&Value::Null);
        Ok(Self {
            line: merge_overrides(&defaults.line, section("line"))?,
            pie: merge_overrides(&defaults.pie, section("pie"))?,
            bar: merge_overrides(&defaults.bar, section("bar"))?,
            project: merge_overrides(&defaults.project, section("project"))?,
        })
    }
}

/// Shallow override-merge of a JSON object onto `defaults`.
///
/// Only top-level keys that `defaults` serializes are applied; unrecognized
/// keys are ignored. A recognized key holding a value of the wrong type is an
/// [`CoreError::InvalidConfig`]. `null` overrides nothing.
pub fn merge_overrides<T>(defaults: &T, overrides: &Value) -> Result<T, CoreError>
where
    T: Serialize + DeserializeOwned,
{
    let mut merged =
        serde_json::to_value(defaults).map_err(|e| CoreError::InvalidConfig(e.to_string()))?;

    match (merged.as_object_mut(), overrides) {
        (_, Value::Null) => {}
        (Some(base), Value::Object(over)) => {
            for (key, value) in over {
                match base.get_mut(key) {
                    Some(slot) => *slot = value.clone(),
                    None => tracing::debug!(key = %key, "ignoring unrecognized option"),
                }
            }
        }
        _ => {
            return Err(CoreError::InvalidConfig(
                "options must be a JSON object".into(),
            ))
        }
    }

    serde_json::from_value(merged).map_err(|e| CoreError::InvalidConfig(e.to_string()))
}
