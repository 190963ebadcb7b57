// ═══════════════════════════════════════════════════════════════════
// Render Tests: geometry kernel, scales, formatting, scene
// serialization and the four chart renderers
// ═══════════════════════════════════════════════════════════════════

use chrono::{DateTime, FixedOffset, NaiveDate};

use xp_dashboard_core::models::aggregate::{
    CategoryCount, CumulativeSeries, DayBucket, ProjectTotal, ProjectTotals,
};
use xp_dashboard_core::models::chart::{
    BarChartConfig, LineChartConfig, PieChartConfig, ProjectBarConfig,
};
use xp_dashboard_core::models::transaction::TransactionRecord;
use xp_dashboard_core::render::bar::{bar_rects, build_bar_scene, render_comparative_bars, BarDatum};
use xp_dashboard_core::render::classify::{Category, CategoryPalette};
use xp_dashboard_core::render::format::{
    fmt_num, format_display_date, format_month_year, format_ratio, format_thousands,
    last_path_segment, truncate_label,
};
use xp_dashboard_core::render::geometry::{
    describe_arc_path, describe_line_path, polar_to_cartesian, Point,
};
use xp_dashboard_core::render::line::{
    build_progress_scene, plot_points, render_progress_line, tooltip_origin, TOOLTIP_HEIGHT,
    TOOLTIP_WIDTH,
};
use xp_dashboard_core::render::pie::{build_pie_scene, pie_percentages, pie_slices, render_audit_pie};
use xp_dashboard_core::render::project_bar::{bar_area_height, layout_project_bars, render_project_bars};
use xp_dashboard_core::render::scale::{
    elapsed_days, TimeScale, ValueAxis, ValueScale, GRID_STEP, MAX_GRID_LINES,
};
use xp_dashboard_core::render::scene::{Circle, Group, Node, Scene, Text};
use xp_dashboard_core::render::{
    is_placeholder, NO_AUDIT_DATA, NO_PROJECT_DATA, NO_XP_DATA,
};
use xp_dashboard_core::services::aggregation_service::AggregationService;

fn ts(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).unwrap()
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn rec(path: &str, at: &str, amount: i64) -> TransactionRecord {
    TransactionRecord::parse(path, "xp", at, amount).unwrap()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Every number in every attribute must be finite.
fn assert_no_non_finite(markup: &str) {
    for bad in ["NaN", "inf", "Infinity"] {
        assert!(!markup.contains(bad), "found {bad} in:\n{markup}");
    }
}

fn buckets_and_series(records: &[TransactionRecord]) -> (Vec<DayBucket>, CumulativeSeries) {
    let svc = AggregationService::new();
    let buckets = svc.group_by_calendar_date(records);
    let series = svc.cumulative_of(&buckets);
    (buckets, series)
}

fn scenario() -> Vec<TransactionRecord> {
    vec![
        rec("/a/proj1", "2024-01-01T00:00:00Z", 100),
        rec("/a/proj2", "2024-01-01T00:00:00Z", 50),
        rec("/a/proj3", "2024-01-03T00:00:00Z", 200),
    ]
}

fn count(up: usize, down: usize) -> CategoryCount {
    CategoryCount {
        counts: vec![("up".into(), up), ("down".into(), down)],
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Geometry kernel
// ═══════════════════════════════════════════════════════════════════

mod geometry {
    use super::*;

    #[test]
    fn zero_degrees_points_up() {
        let p = polar_to_cartesian(50.0, 50.0, 40.0, 0.0);
        assert!(close(p.x, 50.0));
        assert!(close(p.y, 10.0));
    }

    #[test]
    fn ninety_degrees_points_right() {
        let p = polar_to_cartesian(50.0, 50.0, 40.0, 90.0);
        assert!(close(p.x, 90.0));
        assert!(close(p.y, 50.0));
    }

    #[test]
    fn one_eighty_points_down() {
        let p = polar_to_cartesian(0.0, 0.0, 10.0, 180.0);
        assert!(close(p.x, 0.0));
        assert!(close(p.y, 10.0));
    }

    #[test]
    fn arc_path_is_closed_slice() {
        let path = describe_arc_path(50.0, 50.0, 40.0, 0.0, 90.0);
        assert_eq!(path, "M 50 50 L 50 10 A 40 40 0 0 1 90 50 L 50 50 Z");
    }

    #[test]
    fn large_arc_flag_only_above_180() {
        assert!(describe_arc_path(0.0, 0.0, 1.0, 0.0, 180.0).contains(" 0 0 1 "));
        assert!(describe_arc_path(0.0, 0.0, 1.0, 0.0, 180.5).contains(" 0 1 1 "));
        assert!(describe_arc_path(0.0, 0.0, 1.0, -90.0, 200.0).contains(" 0 1 1 "));
    }

    #[test]
    fn line_path_through_points() {
        let path = describe_line_path(&[Point::new(0.0, 10.0), Point::new(5.5, 2.25), Point::new(10.0, 0.0)]);
        assert_eq!(path, "M0,10 L5.5,2.25 L10,0");
    }

    #[test]
    fn line_path_empty() {
        assert_eq!(describe_line_path(&[]), "");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Scale mapper
// ═══════════════════════════════════════════════════════════════════

mod scale {
    use super::*;

    #[test]
    fn y_max_rounds_up_to_grid_step() {
        let axis = ValueAxis::from_series(&CumulativeSeries(vec![150, 350]), GRID_STEP);
        assert_eq!(axis.y_max, 50_000);
        assert_eq!(axis.grid_values(), vec![0, 50_000]);

        let axis = ValueAxis::from_series(&CumulativeSeries(vec![10, 120_001]), GRID_STEP);
        assert_eq!(axis.y_max, 150_000);
        assert_eq!(axis.grid_values(), vec![0, 50_000, 100_000, 150_000]);
    }

    #[test]
    fn huge_maximum_saturates_and_bounds_grid_lines() {
        let axis = ValueAxis::from_series(&CumulativeSeries(vec![i64::MAX - 10]), GRID_STEP);
        assert_eq!(axis.y_max, i64::MAX);
        let grid = axis.grid_values();
        assert!(grid.len() as i64 <= MAX_GRID_LINES + 1);
        assert_eq!(grid[0], 0);
        assert!(grid.windows(2).all(|w| w[0] < w[1]));
        assert!(grid.iter().all(|v| *v <= axis.y_max));
    }

    #[test]
    fn exact_multiple_is_kept() {
        let axis = ValueAxis::from_series(&CumulativeSeries(vec![100_000]), GRID_STEP);
        assert_eq!(axis.y_max, 100_000);
    }

    #[test]
    fn y_max_is_non_negative_multiple_covering_max() {
        for max in [1_i64, 49_999, 50_000, 50_001, 333_333, 1_000_000, 7] {
            let series = CumulativeSeries(vec![0, max / 2, max]);
            let axis = ValueAxis::from_series(&series, GRID_STEP);
            assert!(axis.y_max >= 0);
            assert_eq!(axis.y_max % GRID_STEP, 0);
            assert!(axis.y_max >= max);
            assert!(axis.y_max - max < GRID_STEP);
        }
    }

    #[test]
    fn degenerate_series() {
        assert!(ValueAxis::from_series(&CumulativeSeries::default(), GRID_STEP).is_degenerate());
        assert!(ValueAxis::from_series(&CumulativeSeries(vec![0, 0]), GRID_STEP).is_degenerate());
        assert!(ValueAxis::from_series(&CumulativeSeries(vec![-5, -10]), GRID_STEP).is_degenerate());
    }

    #[test]
    fn elapsed_days_is_fractional() {
        assert!(close(elapsed_days(ts("2024-01-01T00:00:00Z"), ts("2024-01-03T12:00:00Z")), 2.5));
        assert!(close(elapsed_days(ts("2024-01-03T00:00:00Z"), ts("2024-01-01T00:00:00Z")), -2.0));
    }

    #[test]
    fn time_scale_is_date_proportional() {
        let first = ts("2024-01-01T00:00:00Z");
        let last = ts("2024-01-11T00:00:00Z");
        let scale = TimeScale::new(first, last, 50.0, 900.0);
        assert!(close(scale.to_px(first), 50.0));
        assert!(close(scale.to_px(ts("2024-01-02T00:00:00Z")), 140.0));
        assert!(close(scale.to_px(last), 950.0));
    }

    #[test]
    fn zero_span_is_floored_to_one_day() {
        let t = ts("2024-01-01T00:00:00Z");
        let scale = TimeScale::new(t, t, 50.0, 900.0);
        assert_eq!(scale.span_days, 1.0);
        assert!(close(scale.to_px(t), 50.0));
    }

    #[test]
    fn value_scale_origin_at_bottom() {
        let scale = ValueScale::new(50.0, 300.0, 50_000.0);
        assert!(close(scale.to_px(0.0), 350.0));
        assert!(close(scale.to_px(50_000.0), 50.0));
        assert!(close(scale.to_px(25_000.0), 200.0));
        assert!(close(scale.length(25_000.0), 150.0));
    }

    #[test]
    fn value_scale_never_divides_by_zero() {
        let scale = ValueScale::new(0.0, 100.0, 0.0);
        assert!(scale.to_px(0.0).is_finite());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Formatting
// ═══════════════════════════════════════════════════════════════════

mod format {
    use super::*;

    #[test]
    fn fmt_num_trims() {
        assert_eq!(fmt_num(10.0), "10");
        assert_eq!(fmt_num(10.5), "10.5");
        assert_eq!(fmt_num(1.0 / 3.0), "0.33");
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(-0.001), "0");
    }

    #[test]
    fn fmt_num_replaces_non_finite() {
        assert_eq!(fmt_num(f64::NAN), "0");
        assert_eq!(fmt_num(f64::INFINITY), "0");
    }

    #[test]
    fn thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
        assert_eq!(format_thousands(-50_000), "-50,000");
    }

    #[test]
    fn ratio_rule() {
        assert_eq!(format_ratio(None), "N/A");
        assert_eq!(format_ratio(Some(0.0)), "N/A");
        assert_eq!(format_ratio(Some(f64::NAN)), "N/A");
        assert_eq!(format_ratio(Some(0.96)), "1.0");
        assert_eq!(format_ratio(Some(2.0)), "2.0");
    }

    #[test]
    fn display_date() {
        assert_eq!(format_display_date("2024-05-06T07:08:09Z"), "06-05-2024");
        assert_eq!(format_display_date("2024-12-31"), "31-12-2024");
        assert_eq!(format_display_date("garbage"), "garbage");
    }

    #[test]
    fn month_year() {
        assert_eq!(format_month_year(d(2024, 3, 15)), "03/24");
        assert_eq!(format_month_year(d(2009, 11, 1)), "11/09");
    }

    #[test]
    fn path_segments() {
        assert_eq!(last_path_segment("/gritlab/school-curriculum/go-reloaded"), "go-reloaded");
        assert_eq!(last_path_segment("single"), "single");
        assert_eq!(last_path_segment("/trailing/"), "/trailing/");
    }

    #[test]
    fn truncation() {
        assert_eq!(truncate_label("short", 20), "short");
        assert_eq!(truncate_label("abcdefghij", 5), "abcd…");
        assert_eq!(truncate_label("abc", 0), "");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Classification & scene
// ═══════════════════════════════════════════════════════════════════

mod classify {
    use super::*;

    #[test]
    fn priority_order() {
        assert_eq!(Category::of_path("/a/piscine-go/checkpoint-01"), Category::Checkpoint);
        assert_eq!(Category::of_path("/a/piscine-js/quest"), Category::Piscine);
        assert_eq!(Category::of_path("/a/piscine/quest"), Category::Project);
        assert_eq!(Category::of_path("/a/school-curriculum/forum"), Category::Project);
    }

    #[test]
    fn palette_follows_line_config() {
        let palette = CategoryPalette::from(&LineChartConfig::default());
        assert_eq!(palette.color_for_path("/x/checkpoint"), "#AEEBFF");
        assert_eq!(palette.color_for_path("/x/piscine-go"), "#A9D566");
        assert_eq!(palette.color_for_path("/x/forum"), "#FFD9A0");
    }
}

mod scene {
    use super::*;

    #[test]
    fn root_declares_size_and_view_box() {
        let svg = Scene::new(300.0, 180.0).to_svg();
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="300" height="180" viewBox="0 0 300 180">"#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn text_and_attributes_are_escaped() {
        let mut scene = Scene::new(10.0, 10.0);
        let mut group = Group::new().class("a\"b");
        group.push(Text::new(1.0, 2.0, "<script>&"));
        scene.push(group);
        let svg = scene.to_svg();
        assert!(svg.contains(r#"class="a&quot;b""#));
        assert!(svg.contains("&lt;script&gt;&amp;"));
        assert!(!svg.contains("<script>"));
    }

    #[test]
    fn groups_carry_only_their_class() {
        let mut scene = Scene::new(10.0, 10.0);
        let mut group = Group::new().class("grid");
        group.push(Circle::new(1.0, 1.0, 1.0));
        scene.push(group);
        scene.push(Group::new());
        let svg = scene.to_svg();
        assert!(svg.contains("<g class=\"grid\">\n"));
        assert!(svg.contains("<g/>\n"));
    }

    #[test]
    fn nodes_walks_depth_first() {
        let mut scene = Scene::new(10.0, 10.0);
        let mut group = Group::new();
        group.push(Circle::new(1.0, 1.0, 1.0));
        scene.push(group);
        scene.push(Node::Title("t".into()));
        let nodes = scene.nodes();
        assert_eq!(nodes.len(), 3);
        assert!(matches!(nodes[1], Node::Circle(_)));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Progress line renderer
// ═══════════════════════════════════════════════════════════════════

mod progress_line {
    use super::*;

    #[test]
    fn concrete_scenario_two_points() {
        let (buckets, series) = buckets_and_series(&scenario());
        let config = LineChartConfig::default();
        let (points, axis) = plot_points(&buckets, &series, &config).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(axis.y_max, 50_000);
        assert!(points[1].x > points[0].x);
        assert!(close(points[0].x, 50.0));
        assert!(close(points[1].x, 950.0));
        // Higher cumulative value sits higher on screen.
        assert!(points[1].y < points[0].y);
    }

    #[test]
    fn one_marker_per_bucket_and_single_polyline() {
        let (buckets, series) = buckets_and_series(&scenario());
        let scene = build_progress_scene(&buckets, &series, &LineChartConfig::default()).unwrap();
        let nodes = scene.nodes();
        let markers = nodes
            .iter()
            .filter(|n| matches!(n, Node::Group(g) if g.class.as_deref() == Some("xp-point")))
            .count();
        let paths = nodes.iter().filter(|n| matches!(n, Node::Path(_))).count();
        assert_eq!(markers, 2);
        assert_eq!(paths, 1);
    }

    #[test]
    fn grid_labels_and_tooltip_text() {
        let (buckets, series) = buckets_and_series(&scenario());
        let svg = render_progress_line(&buckets, &series, &LineChartConfig::default());
        assert!(svg.contains(">50,000</text>"));
        assert!(svg.contains(">0</text>"));
        assert!(svg.contains(">01-01-2024</text>"));
        assert!(svg.contains(">Project: proj1</text>"));
        assert!(svg.contains(">+150 XP</text>"));
        assert!(svg.contains(">+200 XP</text>"));
        assert_no_non_finite(&svg);
    }

    #[test]
    fn month_tick_once_per_transition() {
        let records = vec![
            rec("/a/x", "2024-01-05T00:00:00Z", 10),
            rec("/a/y", "2024-01-20T00:00:00Z", 10),
            rec("/a/z", "2024-02-02T00:00:00Z", 10),
            rec("/a/w", "2024-02-25T00:00:00Z", 10),
            rec("/a/v", "2024-04-01T00:00:00Z", 10),
        ];
        let (buckets, series) = buckets_and_series(&records);
        let svg = render_progress_line(&buckets, &series, &LineChartConfig::default());
        assert_eq!(svg.matches(">01/24</text>").count(), 1);
        assert_eq!(svg.matches(">02/24</text>").count(), 1);
        assert_eq!(svg.matches(">04/24</text>").count(), 1);
        assert!(!svg.contains(">03/24</text>"));
    }

    #[test]
    fn legend_has_three_entries() {
        let (buckets, series) = buckets_and_series(&scenario());
        let svg = render_progress_line(&buckets, &series, &LineChartConfig::default());
        assert!(svg.contains(">Checkpoint</text>"));
        assert!(svg.contains(">Piscine</text>"));
        assert!(svg.contains(">Project</text>"));
    }

    #[test]
    fn marker_color_comes_from_first_record_of_day() {
        let records = vec![
            rec("/a/forum", "2024-01-01T12:00:00Z", 10),
            rec("/a/checkpoint/ex", "2024-01-01T09:00:00Z", 10),
        ];
        let (buckets, series) = buckets_and_series(&records);
        let svg = render_progress_line(&buckets, &series, &LineChartConfig::default());
        assert!(svg.contains(">Checkpoint: ex</text>"));
    }

    #[test]
    fn single_record_is_a_valid_single_point_chart() {
        let records = vec![rec("/a/solo", "2024-06-01T10:00:00Z", 700)];
        let (buckets, series) = buckets_and_series(&records);
        let svg = render_progress_line(&buckets, &series, &LineChartConfig::default());
        assert!(svg.starts_with("<svg"));
        assert_no_non_finite(&svg);
    }

    #[test]
    fn empty_input_is_placeholder() {
        let svg = render_progress_line(&[], &CumulativeSeries::default(), &LineChartConfig::default());
        assert_eq!(svg, NO_XP_DATA);
    }

    #[test]
    fn all_zero_is_placeholder() {
        let records = vec![rec("/a/x", "2024-01-01T00:00:00Z", 0)];
        let (buckets, series) = buckets_and_series(&records);
        assert_eq!(
            render_progress_line(&buckets, &series, &LineChartConfig::default()),
            NO_XP_DATA
        );
    }

    #[test]
    fn extreme_amounts_render_without_overflow() {
        let records = vec![rec("/a/x", "2024-01-01T00:00:00Z", i64::MAX - 10)];
        let (buckets, series) = buckets_and_series(&records);
        let svg = render_progress_line(&buckets, &series, &LineChartConfig::default());
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(">+9,223,372,036,854,775,797 XP</text>"));
        assert_no_non_finite(&svg);
    }

    #[test]
    fn negative_amounts_stay_finite() {
        let records = vec![
            rec("/a/x", "2024-01-01T00:00:00Z", 1_000),
            rec("/a/y", "2024-01-02T00:00:00Z", -400),
        ];
        let (buckets, series) = buckets_and_series(&records);
        let svg = render_progress_line(&buckets, &series, &LineChartConfig::default());
        assert!(svg.contains(">-400 XP</text>"));
        assert_no_non_finite(&svg);
    }

    /// `true` when any sampled point of segment `a`-`b` lies inside the box.
    fn box_hits_segment(origin: Point, a: Point, b: Point) -> bool {
        (0..=1000).any(|i| {
            let t = i as f64 / 1000.0;
            let (x, y) = (a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t);
            x > origin.x
                && x < origin.x + TOOLTIP_WIDTH
                && y > origin.y
                && y < origin.y + TOOLTIP_HEIGHT
        })
    }

    fn assert_tooltips_clear_of_line(points: &[Point], config: &LineChartConfig) {
        for (i, &marker) in points.iter().enumerate() {
            let neighbours: Vec<Point> = [i.checked_sub(1), Some(i + 1)]
                .into_iter()
                .flatten()
                .filter_map(|j| points.get(j).copied())
                .collect();
            let origin = tooltip_origin(marker, &neighbours, config.width, config.height);
            assert!(origin.x >= 0.0 && origin.y >= 0.0);
            assert!(origin.x + TOOLTIP_WIDTH <= config.width);
            assert!(origin.y + TOOLTIP_HEIGHT <= config.height);
            for &other in &neighbours {
                assert!(
                    !box_hits_segment(origin, marker, other),
                    "tooltip at {origin:?} for {marker:?} overlaps segment to {other:?}"
                );
            }
        }
    }

    #[test]
    fn tooltip_prefers_below_right() {
        let p = tooltip_origin(Point::new(100.0, 100.0), &[], 1000.0, 400.0);
        assert!(p.x > 100.0);
        assert!(p.y > 100.0);
    }

    #[test]
    fn tooltip_flips_at_canvas_edges() {
        let p = tooltip_origin(Point::new(950.0, 350.0), &[], 1000.0, 400.0);
        assert!(p.x + TOOLTIP_WIDTH <= 950.0);
        assert!(p.y + TOOLTIP_HEIGHT <= 350.0);
    }

    #[test]
    fn tooltip_stays_on_canvas() {
        for (x, y) in [(0.0, 0.0), (999.0, 399.0), (50.0, 390.0), (990.0, 10.0)] {
            let p = tooltip_origin(Point::new(x, y), &[], 1000.0, 400.0);
            assert!(p.x >= 0.0 && p.y >= 0.0);
            assert!(p.x + TOOLTIP_WIDTH <= 1000.0);
            assert!(p.y + TOOLTIP_HEIGHT <= 400.0);
        }
    }

    #[test]
    fn steep_two_point_line_keeps_tooltips_off_the_segment() {
        let records = vec![
            rec("/a/x", "2024-01-01T00:00:00Z", 5_000),
            rec("/a/y", "2024-01-10T00:00:00Z", 95_000),
        ];
        let (buckets, series) = buckets_and_series(&records);
        let config = LineChartConfig::default();
        let (points, _) = plot_points(&buckets, &series, &config).unwrap();
        assert!(close(points[0].x, 50.0) && close(points[0].y, 335.0));
        assert!(close(points[1].x, 950.0) && close(points[1].y, 50.0));
        assert_tooltips_clear_of_line(&points, &config);
    }

    #[test]
    fn rising_and_falling_line_keeps_tooltips_off_neighbouring_segments() {
        let records = vec![
            rec("/a/a", "2024-01-01T00:00:00Z", 40_000),
            rec("/a/b", "2024-01-03T00:00:00Z", 60_000),
            rec("/a/c", "2024-01-04T00:00:00Z", -30_000),
            rec("/a/d", "2024-01-20T00:00:00Z", 5_000),
            rec("/a/e", "2024-02-02T00:00:00Z", 120_000),
            rec("/a/f", "2024-02-03T00:00:00Z", 1_000),
        ];
        let (buckets, series) = buckets_and_series(&records);
        let config = LineChartConfig::default();
        let (points, _) = plot_points(&buckets, &series, &config).unwrap();
        assert_tooltips_clear_of_line(&points, &config);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Pie renderer
// ═══════════════════════════════════════════════════════════════════

mod pie {
    use super::*;

    #[test]
    fn three_up_one_down_is_75_25() {
        assert_eq!(pie_percentages(3, 1), Some((75, 25)));
    }

    #[test]
    fn percentages_bounded_and_near_100() {
        for up in 0..25usize {
            for down in 0..25usize {
                if up + down == 0 {
                    assert_eq!(pie_percentages(up, down), None);
                    continue;
                }
                let (u, dn) = pie_percentages(up, down).unwrap();
                assert!(u <= 100 && dn <= 100);
                assert!((u + dn).abs_diff(100) <= 1, "{up}/{down} -> {u}+{dn}");
            }
        }
    }

    #[test]
    fn rounding_is_not_forced_complementary() {
        // 1/8 = 12.5% and 7/8 = 87.5% both round up.
        assert_eq!(pie_percentages(1, 7), Some((13, 88)));
    }

    #[test]
    fn slices_cover_the_full_turn() {
        let [up, down] = pie_slices(1, 3, &PieChartConfig::default()).unwrap();
        assert!(close(up.start_angle, -90.0));
        assert!(close(up.end_angle, 0.0));
        assert!(close(down.start_angle, 0.0));
        assert!(close(down.end_angle, 270.0));
        assert!(close(up.sweep() + down.sweep(), 360.0));
    }

    #[test]
    fn labels_show_counts_and_percentages() {
        let svg = render_audit_pie(&count(3, 1), &PieChartConfig::default());
        assert!(svg.contains(r#"viewBox="0 0 100 100""#));
        assert!(svg.contains(r#"width="300""#));
        assert!(svg.contains(">Up: 3 (75%)</text>"));
        assert!(svg.contains(">Down: 1 (25%)</text>"));
        assert_no_non_finite(&svg);
    }

    #[test]
    fn single_category_draws_full_circle() {
        let scene = build_pie_scene(&count(4, 0), &PieChartConfig::default()).unwrap();
        let nodes = scene.nodes();
        assert_eq!(nodes.iter().filter(|n| matches!(n, Node::Path(_))).count(), 0);
        let filled = nodes
            .iter()
            .filter(|n| matches!(n, Node::Circle(c) if c.fill.as_deref() == Some("#D4EAB2")))
            .count();
        assert_eq!(filled, 1);
    }

    #[test]
    fn zero_total_is_placeholder() {
        assert_eq!(render_audit_pie(&count(0, 0), &PieChartConfig::default()), NO_AUDIT_DATA);
        assert_eq!(
            render_audit_pie(&CategoryCount::default(), &PieChartConfig::default()),
            NO_AUDIT_DATA
        );
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Comparative bar renderer
// ═══════════════════════════════════════════════════════════════════

mod comparative_bars {
    use super::*;

    #[test]
    fn geometry_matches_layout_rules() {
        let config = BarChartConfig::default();
        let rects = bar_rects(&BarDatum::audit_pair(110.0, 55.0), &config).unwrap();
        // width / (2 * 2) = 75, gap = 25
        let (x0, _, w0, h0) = rects[0];
        let (x1, _, _, h1) = rects[1];
        assert!(close(w0, 75.0));
        assert!(close(x0, 25.0));
        assert!(close(x1, 125.0));
        // 110 / 121 * 140
        assert!(close(h0, 110.0 / 121.0 * 140.0));
        assert!(close(h1, h0 / 2.0));
    }

    #[test]
    fn tallest_bar_has_headroom() {
        let config = BarChartConfig::default();
        for (a, b) in [(1.0, 1.0), (1e9, 3.0), (0.5, 200.0)] {
            let rects = bar_rects(&BarDatum::audit_pair(a, b), &config).unwrap();
            let tallest = rects.iter().map(|r| r.3).fold(0.0, f64::max);
            assert!(tallest < config.height - 40.0);
            assert!(rects.iter().all(|r| r.1 > 0.0));
        }
    }

    #[test]
    fn labels_and_values() {
        let svg = render_comparative_bars(&BarDatum::audit_pair(1500.0, 1200.5), &BarChartConfig::default());
        assert!(svg.contains(">Done XP</text>"));
        assert!(svg.contains(">Received XP</text>"));
        assert!(svg.contains(">1500</text>"));
        assert!(svg.contains(">1200.5</text>"));
        assert!(svg.contains(r##"fill="#FFD9A0""##));
        assert!(svg.contains(r##"fill="#AEEBFF""##));
    }

    #[test]
    fn all_zero_is_placeholder() {
        assert_eq!(
            render_comparative_bars(&BarDatum::audit_pair(0.0, 0.0), &BarChartConfig::default()),
            NO_AUDIT_DATA
        );
        assert!(build_bar_scene(&[], &BarChartConfig::default()).is_none());
    }

    #[test]
    fn non_finite_values_never_leak() {
        let svg = render_comparative_bars(
            &[BarDatum::new("a", f64::NAN), BarDatum::new("b", 10.0)],
            &BarChartConfig::default(),
        );
        assert_no_non_finite(&svg);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Project bar renderer
// ═══════════════════════════════════════════════════════════════════

mod project_bars {
    use super::*;

    fn totals(entries: &[(&str, i64)]) -> ProjectTotals {
        ProjectTotals {
            entries: entries
                .iter()
                .map(|(p, a)| ProjectTotal {
                    project: p.to_string(),
                    amount: *a,
                })
                .collect(),
        }
    }

    #[test]
    fn equal_slots_across_width() {
        let config = ProjectBarConfig::default();
        let bars = layout_project_bars(&totals(&[("a", 10), ("b", 20), ("c", 5), ("d", 1)]), &config).unwrap();
        assert_eq!(bars.len(), 4);
        let widths: Vec<f64> = bars.iter().map(|b| b.width).collect();
        assert!(widths.iter().all(|w| close(*w, widths[0])));
        let step = bars[1].x - bars[0].x;
        assert!(close(bars[2].x - bars[1].x, step));
        assert!(close(step, (600.0 - 40.0) / 4.0));
    }

    #[test]
    fn tallest_bar_has_headroom() {
        let config = ProjectBarConfig::default();
        let bars = layout_project_bars(&totals(&[("a", 12_000), ("b", 9_000)]), &config).unwrap();
        let tallest = bars.iter().map(|b| b.height).fold(0.0, f64::max);
        assert!(tallest < bar_area_height(&config));
    }

    #[test]
    fn labels_rotated_and_values_above() {
        let svg = render_project_bars(
            &totals(&[("ascii-art", 12_000), ("go-reloaded", 9_000)]),
            &ProjectBarConfig::default(),
        );
        assert!(svg.contains(">12,000</text>"));
        assert!(svg.contains(">ascii-art</text>"));
        assert!(svg.contains("rotate(-90 "));
        assert_no_non_finite(&svg);
    }

    #[test]
    fn long_labels_are_truncated() {
        let svg = render_project_bars(
            &totals(&[("an-extremely-long-project-name-indeed", 100)]),
            &ProjectBarConfig::default(),
        );
        assert!(svg.contains(">an-extremely-long-p…</text>"));
    }

    #[test]
    fn empty_or_non_positive_is_placeholder() {
        let config = ProjectBarConfig::default();
        assert_eq!(render_project_bars(&ProjectTotals::default(), &config), NO_PROJECT_DATA);
        assert_eq!(render_project_bars(&totals(&[("a", 0), ("b", -5)]), &config), NO_PROJECT_DATA);
    }

    #[test]
    fn placeholders_are_recognized() {
        assert!(is_placeholder(NO_XP_DATA));
        assert!(is_placeholder(NO_AUDIT_DATA));
        assert!(is_placeholder(NO_PROJECT_DATA));
        assert!(!is_placeholder("<svg/>"));
    }
}
