//! Chart coordinates for the fit-rate vs switch-rate scatter plot.
//!
//! Switch rate runs along x, fit rate along y (higher fit is drawn higher).

use std::collections::HashMap;
use std::fmt::Write;

use serde::Serialize;

use crate::config::ChartConfig;
use crate::models::CollegeStats;

/// Visible value range on each axis, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisBounds {
    pub switch_min: f64,
    pub switch_max: f64,
    pub fit_min: f64,
    pub fit_max: f64,
}

impl Default for AxisBounds {
    fn default() -> Self {
        Self {
            switch_min: 0.0,
            switch_max: 100.0,
            fit_min: 0.0,
            fit_max: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedCollege {
    pub college: String,
    pub fit_rate: f64,
    pub switch_rate: f64,
    pub x: f64,
    pub y: f64,
    /// Vertical nudge for the text label only; the marker stays at `(x, y)`.
    pub label_offset: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterLayout {
    pub points: Vec<PositionedCollege>,
    pub bounds: AxisBounds,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub position: f64,
    pub value: f64,
}

pub fn layout(colleges: &[CollegeStats], chart: &ChartConfig) -> ScatterLayout {
    if colleges.is_empty() {
        return ScatterLayout {
            points: Vec::new(),
            bounds: AxisBounds::default(),
        };
    }

    let bounds = compute_bounds(colleges);
    let mut points: Vec<PositionedCollege> = colleges
        .iter()
        .map(|stats| PositionedCollege {
            college: stats.college.clone(),
            fit_rate: stats.fit_rate,
            switch_rate: stats.switch_rate,
            x: scale_x(stats.switch_rate, &bounds, chart),
            y: scale_y(stats.fit_rate, &bounds, chart),
            label_offset: 0.0,
        })
        .collect();

    spread_labels(&mut points, chart.label_spacing);

    ScatterLayout { points, bounds }
}

fn compute_bounds(colleges: &[CollegeStats]) -> AxisBounds {
    let switch_values = colleges.iter().map(|c| c.switch_rate);
    let fit_values = colleges.iter().map(|c| c.fit_rate);

    let (switch_min, switch_max) = padded_range(min_of(switch_values.clone(), 0.0), max_of(switch_values, 30.0));
    let (fit_min, fit_max) = padded_range(min_of(fit_values.clone(), 50.0), max_of(fit_values, 50.0));

    AxisBounds {
        switch_min,
        switch_max,
        fit_min,
        fit_max,
    }
}

fn min_of(values: impl Iterator<Item = f64>, baseline: f64) -> f64 {
    values.fold(baseline, f64::min)
}

fn max_of(values: impl Iterator<Item = f64>, baseline: f64) -> f64 {
    values.fold(baseline, f64::max)
}

fn padded_range(min: f64, max: f64) -> (f64, f64) {
    let padding = ((max - min) * 0.15).max(5.0);
    ((min - padding).max(0.0), (max + padding).min(100.0))
}

fn ratio(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    let span = if span == 0.0 { 1.0 } else { span };
    (value - min) / span
}

fn scale_x(switch_rate: f64, bounds: &AxisBounds, chart: &ChartConfig) -> f64 {
    let ratio = ratio(switch_rate, bounds.switch_min, bounds.switch_max);
    chart.margin + ratio * (chart.width - chart.margin * 2.0)
}

fn scale_y(fit_rate: f64, bounds: &AxisBounds, chart: &ChartConfig) -> f64 {
    let ratio = ratio(fit_rate, bounds.fit_min, bounds.fit_max);
    chart.height - chart.margin - ratio * (chart.height - chart.margin * 2.0)
}

/// Fan out labels of points that share the exact same rates.
fn spread_labels(points: &mut [PositionedCollege], spacing: f64) {
    let mut groups: HashMap<(u64, u64), Vec<usize>> = HashMap::new();
    for (index, point) in points.iter().enumerate() {
        groups
            .entry((point.switch_rate.to_bits(), point.fit_rate.to_bits()))
            .or_default()
            .push(index);
    }

    for members in groups.values() {
        if members.len() < 2 {
            continue;
        }
        let center = (members.len() - 1) as f64 / 2.0;
        for (rank, &index) in members.iter().enumerate() {
            points[index].label_offset = (rank as f64 - center) * spacing;
        }
    }
}

/// Evenly spaced ticks: x ticks run left to right from `switch_min`,
/// y ticks run top to bottom from `fit_max`.
pub fn ticks(bounds: &AxisBounds, chart: &ChartConfig) -> (Vec<Tick>, Vec<Tick>) {
    let lines = chart.grid_lines.max(1);
    let plot_width = chart.width - chart.margin * 2.0;
    let plot_height = chart.height - chart.margin * 2.0;

    let mut x_ticks = Vec::with_capacity(lines + 1);
    let mut y_ticks = Vec::with_capacity(lines + 1);
    for step in 0..=lines {
        let ratio = step as f64 / lines as f64;
        x_ticks.push(Tick {
            position: chart.margin + ratio * plot_width,
            value: bounds.switch_min + ratio * (bounds.switch_max - bounds.switch_min),
        });
        y_ticks.push(Tick {
            position: chart.margin + ratio * plot_height,
            value: bounds.fit_max - ratio * (bounds.fit_max - bounds.fit_min),
        });
    }

    (x_ticks, y_ticks)
}

pub fn render_svg(layout: &ScatterLayout, personality_type: &str, chart: &ChartConfig) -> String {
    let (x_ticks, y_ticks) = ticks(&layout.bounds, chart);
    let (w, h, m) = (chart.width, chart.height, chart.margin);
    let mut svg = String::new();

    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" role="img">"#
    );
    let _ = writeln!(
        svg,
        r#"  <title>How {} students feel</title>"#,
        escape(personality_type)
    );
    let _ = writeln!(
        svg,
        r##"  <defs><linearGradient id="pointGradient" x1="0%" y1="0%" x2="100%" y2="100%"><stop offset="0%" stop-color="#a5b4fc"/><stop offset="100%" stop-color="#f0abfc"/></linearGradient></defs>"##
    );

    for tick in &y_ticks {
        let _ = writeln!(
            svg,
            r##"  <line x1="{m}" x2="{}" y1="{y:.2}" y2="{y:.2}" stroke="#e2e8f0" stroke-dasharray="4 6"/>"##,
            w - m,
            y = tick.position
        );
    }
    for tick in &x_ticks {
        let _ = writeln!(
            svg,
            r##"  <line x1="{x:.2}" x2="{x:.2}" y1="{m}" y2="{}" stroke="#e2e8f0" stroke-dasharray="4 6"/>"##,
            h - m,
            x = tick.position
        );
    }

    let _ = writeln!(
        svg,
        r##"  <line x1="{m}" x2="{}" y1="{}" y2="{}" stroke="#94a3b8"/>"##,
        w - m,
        h - m,
        h - m
    );
    let _ = writeln!(
        svg,
        r##"  <line x1="{m}" x2="{m}" y1="{m}" y2="{}" stroke="#94a3b8"/>"##,
        h - m
    );

    for tick in &x_ticks {
        let _ = writeln!(
            svg,
            r##"  <text x="{:.2}" y="{}" text-anchor="middle" fill="#475569" font-size="12">{:.0}%</text>"##,
            tick.position,
            h - m + 24.0,
            tick.value.round()
        );
    }
    for tick in &y_ticks {
        let _ = writeln!(
            svg,
            r##"  <text x="{}" y="{:.2}" text-anchor="end" fill="#475569" font-size="12">{:.0}%</text>"##,
            m - 14.0,
            tick.position + 4.0,
            tick.value.round()
        );
    }

    let _ = writeln!(
        svg,
        r##"  <text x="{}" y="{}" text-anchor="middle" fill="#334155" font-size="13">% Who Would Switch Majors</text>"##,
        w / 2.0,
        h - 8.0
    );
    let _ = writeln!(
        svg,
        r##"  <text x="{}" y="16" transform="rotate(-90)" text-anchor="middle" fill="#334155" font-size="13">% Who Feel Their Major Fits</text>"##,
        -(h / 2.0)
    );

    for point in &layout.points {
        let _ = writeln!(
            svg,
            r##"  <circle cx="{:.2}" cy="{:.2}" r="8" fill="url(#pointGradient)" stroke="#6366f1" stroke-width="2"/>"##,
            point.x, point.y
        );
        let _ = writeln!(
            svg,
            r##"  <text x="{:.2}" y="{:.2}" fill="#1f2937" font-size="11" font-weight="500">{}</text>"##,
            point.x + 12.0,
            point.y - 10.0 + point.label_offset,
            escape(&point.college)
        );
    }

    let _ = writeln!(svg, "</svg>");
    svg
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(college: &str, fit_rate: f64, switch_rate: f64) -> CollegeStats {
        CollegeStats {
            college: college.to_string(),
            total_responses: 2,
            fit_rate,
            switch_rate,
            score: 0.0,
        }
    }

    #[test]
    fn empty_input_uses_default_bounds() {
        let result = layout(&[], &ChartConfig::default());
        assert!(result.points.is_empty());
        assert_eq!(result.bounds, AxisBounds::default());

        let (x_ticks, y_ticks) = ticks(&result.bounds, &ChartConfig::default());
        assert!(x_ticks.iter().chain(&y_ticks).all(|t| t.position.is_finite()));
        assert_eq!(x_ticks.len(), 5);
        assert_eq!(y_ticks[0].value, 100.0);
    }

    #[test]
    fn single_point_gets_breathing_room() {
        let result = layout(&[stats("Law", 50.0, 10.0)], &ChartConfig::default());
        let bounds = result.bounds;

        // switch: [0, 30] padded by 5 -> [0, 35]
        assert!((bounds.switch_min - 0.0).abs() < 1e-9);
        assert!((bounds.switch_max - 35.0).abs() < 1e-9);
        // fit: [50, 50] padded by 5 -> [45, 55]
        assert!((bounds.fit_min - 45.0).abs() < 1e-9);
        assert!((bounds.fit_max - 55.0).abs() < 1e-9);

        let point = &result.points[0];
        assert!(point.x.is_finite() && point.y.is_finite());
        // fit 50 sits in the vertical middle
        assert!((point.y - 180.0).abs() < 1e-9);
        assert_eq!(point.label_offset, 0.0);
    }

    #[test]
    fn bounds_clamp_to_percent_envelope() {
        let colleges = [stats("A", 100.0, 100.0), stats("B", 0.0, 0.0)];
        let bounds = layout(&colleges, &ChartConfig::default()).bounds;
        assert_eq!(bounds.switch_min, 0.0);
        assert_eq!(bounds.switch_max, 100.0);
        assert_eq!(bounds.fit_min, 0.0);
        assert_eq!(bounds.fit_max, 100.0);
    }

    #[test]
    fn wide_ranges_pad_by_fifteen_percent() {
        let colleges = [stats("A", 90.0, 60.0), stats("B", 30.0, 20.0)];
        let bounds = layout(&colleges, &ChartConfig::default()).bounds;
        // switch [0, 60], padding 9
        assert!((bounds.switch_max - 69.0).abs() < 1e-9);
        assert_eq!(bounds.switch_min, 0.0);
        // fit [30, 90], padding 9
        assert!((bounds.fit_min - 21.0).abs() < 1e-9);
        assert!((bounds.fit_max - 99.0).abs() < 1e-9);
    }

    #[test]
    fn fit_axis_stays_anchored_at_fifty() {
        let colleges = [stats("A", 80.0, 10.0), stats("B", 90.0, 20.0)];
        let bounds = layout(&colleges, &ChartConfig::default()).bounds;
        // fit [50, 90], padding 6
        assert!((bounds.fit_min - 44.0).abs() < 1e-9);
        assert!((bounds.fit_max - 96.0).abs() < 1e-9);

        let colleges = [stats("C", 20.0, 10.0), stats("D", 30.0, 20.0)];
        let bounds = layout(&colleges, &ChartConfig::default()).bounds;
        // fit [20, 50], padding raised from 4.5 to 5
        assert!((bounds.fit_min - 15.0).abs() < 1e-9);
        assert!((bounds.fit_max - 55.0).abs() < 1e-9);
    }

    #[test]
    fn maps_linearly_with_inverted_y() {
        let chart = ChartConfig::default();
        let colleges = [stats("Low", 0.0, 0.0), stats("High", 100.0, 100.0)];
        let result = layout(&colleges, &chart);

        let low = &result.points[0];
        let high = &result.points[1];
        assert!((low.x - chart.margin).abs() < 1e-9);
        assert!((low.y - (chart.height - chart.margin)).abs() < 1e-9);
        assert!((high.x - (chart.width - chart.margin)).abs() < 1e-9);
        assert!((high.y - chart.margin).abs() < 1e-9);
    }

    #[test]
    fn shared_positions_fan_out_labels() {
        let colleges = [
            stats("Business", 75.0, 25.0),
            stats("Law", 60.0, 40.0),
            stats("Nursing", 75.0, 25.0),
            stats("Humanities", 75.0, 25.0),
        ];
        let result = layout(&colleges, &ChartConfig::default());
        let offsets: Vec<f64> = result.points.iter().map(|p| p.label_offset).collect();
        assert_eq!(offsets, vec![-14.0, 0.0, 0.0, 14.0]);

        // markers themselves do not move
        assert_eq!(result.points[0].x, result.points[2].x);
        assert_eq!(result.points[0].y, result.points[3].y);
    }

    #[test]
    fn pairs_split_evenly_around_the_point() {
        let colleges = [stats("A", 50.0, 50.0), stats("B", 50.0, 50.0)];
        let result = layout(&colleges, &ChartConfig::default());
        assert_eq!(result.points[0].label_offset, -7.0);
        assert_eq!(result.points[1].label_offset, 7.0);
    }

    #[test]
    fn svg_contains_every_college_label() {
        let colleges = [stats("Fine Arts & Communications", 80.0, 10.0), stats("Law", 55.0, 45.0)];
        let chart = ChartConfig::default();
        let svg = render_svg(&layout(&colleges, &chart), "INFP", &chart);

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("Fine Arts &amp; Communications"));
        assert!(svg.contains(">Law</text>"));
        assert_eq!(svg.matches("<circle").count(), 2);
        assert!(svg.contains("How INFP students feel"));
    }
}
