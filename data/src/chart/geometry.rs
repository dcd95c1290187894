use std::f32::consts::PI;

use super::ChartPoint;
use super::layout::LayoutConfig;
use super::series::{MetricSeries, SCALE_CEILING};
use super::catalog;

/// Concentric reference rings, as fractions of the configured radius.
pub const RING_FACTORS: [f32; 4] = [0.25, 0.5, 0.75, 1.0];

/// Axis labels sit slightly outside the outer ring.
const LABEL_RADIUS_FACTOR: f32 = 1.15;

/// Inner padding of the line-mode plot area, in px.
pub const LINE_PADDING: f32 = 32.0;

/// Horizontal placement of an axis label relative to its anchor point.
/// The dead zone around the vertical axis keeps labels from overlapping it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelAnchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone)]
pub struct Axis {
    pub end_x: f32,
    pub end_y: f32,
    pub label_x: f32,
    pub label_y: f32,
    pub key: String,
    pub label: String,
    pub anchor: LabelAnchor,
}

/// The static part of a radar chart: center, rings, and one spoke per
/// catalog key. Series vertices come from [`radar_vertices`].
#[derive(Debug, Clone)]
pub struct RadarGeometry {
    pub center_x: f32,
    pub center_y: f32,
    pub radius: f32,
    pub rings: [f32; 4],
    pub axes: Vec<Axis>,
    pub max_value: f32,
}

/// 12-o'clock start, clockwise.
fn angle(index: usize, count: usize) -> f32 {
    -PI / 2.0 + index as f32 * (2.0 * PI / count.max(1) as f32)
}

fn anchor_for(angle: f32) -> LabelAnchor {
    let cos = angle.cos();
    if cos > 0.1 {
        LabelAnchor::Start
    } else if cos < -0.1 {
        LabelAnchor::End
    } else {
        LabelAnchor::Middle
    }
}

pub fn radar_frame(keys: &[String], layout: &LayoutConfig, max_value: f32) -> RadarGeometry {
    let (center_x, center_y) = layout.center();
    let radius = layout.radius();
    let count = keys.len();

    let axes = keys
        .iter()
        .enumerate()
        .map(|(i, key)| {
            let angle = angle(i, count);
            let label_radius = radius * LABEL_RADIUS_FACTOR;
            Axis {
                end_x: center_x + radius * angle.cos(),
                end_y: center_y + radius * angle.sin(),
                label_x: center_x + label_radius * angle.cos(),
                label_y: center_y + label_radius * angle.sin(),
                key: key.clone(),
                label: catalog::humanize(key),
                anchor: anchor_for(angle),
            }
        })
        .collect();

    RadarGeometry {
        center_x,
        center_y,
        radius,
        rings: RING_FACTORS.map(|factor| radius * factor),
        axes,
        max_value: max_value.max(f32::EPSILON),
    }
}

/// One vertex per catalog key, in key order. The polygon closes by
/// implication; the first point is not repeated. An all-zero series yields
/// valid vertices collapsed onto the center.
pub fn radar_vertices(
    series: &MetricSeries,
    layout: &LayoutConfig,
    max_value: f32,
) -> Vec<ChartPoint> {
    let (center_x, center_y) = layout.center();
    let radius = layout.radius();
    let count = series.len();
    let max_value = max_value.max(f32::EPSILON);

    series
        .iter()
        .enumerate()
        .map(|(i, (key, value))| {
            let angle = angle(i, count);
            let r = (value / max_value) * radius;
            ChartPoint {
                x: center_x + r * angle.cos(),
                y: center_y + r * angle.sin(),
                key: key.to_string(),
                value,
            }
        })
        .collect()
}

/// The degraded mode: average score per evaluation over time.
#[derive(Debug, Clone)]
pub struct LineGeometry {
    pub points: Vec<ChartPoint>,
    pub y_ticks: Vec<(f32, String)>,
    pub min_y: f32,
    pub max_y: f32,
}

pub fn line(samples: &[(String, f32)], layout: &LayoutConfig) -> LineGeometry {
    let width = layout.width;
    let height = layout.height;
    let padding = LINE_PADDING;

    let mut min_y = 0.0f32;
    let mut max_y = SCALE_CEILING;
    for (_, value) in samples {
        min_y = min_y.min(*value);
        max_y = max_y.max(*value);
    }
    let span = (max_y - min_y).max(f32::EPSILON);

    let denominator = samples.len().saturating_sub(1).max(1) as f32;
    let plot_width = width - 2.0 * padding;
    let plot_height = height - 2.0 * padding;

    let map_y = |value: f32| height - padding - (value - min_y) / span * plot_height;

    let points = samples
        .iter()
        .enumerate()
        .map(|(i, (label, value))| ChartPoint {
            x: padding + i as f32 / denominator * plot_width,
            y: map_y(*value),
            key: label.clone(),
            value: *value,
        })
        .collect();

    let y_ticks = (min_y.ceil() as i32..=max_y.floor() as i32)
        .map(|tick| (map_y(tick as f32), format!("{tick}")))
        .collect();

    LineGeometry {
        points,
        y_ticks,
        min_y,
        max_y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::layout::{self, SizeClass};
    use club::EvaluationRecord;
    use serde_json::json;

    fn keys(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    fn series_of(scores: serde_json::Value, keys: &[String]) -> MetricSeries {
        let record: EvaluationRecord = serde_json::from_value(json!({
            "id": "a", "athleteId": "1", "date": "01-01-2024", "metrics": scores
        }))
        .unwrap();
        crate::chart::series::selected(&record, keys)
    }

    #[test]
    fn radar_produces_one_vertex_per_key_at_expected_angles() {
        let layout = layout::config_for(SizeClass::Tablet);
        let keys = keys(&["controle", "passe", "tir", "dribble"]);
        let series = series_of(
            json!({ "controle": 5, "passe": 5, "tir": 5, "dribble": 5 }),
            &keys,
        );

        let vertices = radar_vertices(&series, &layout, 5.0);
        assert_eq!(vertices.len(), 4);

        let (cx, cy) = layout.center();
        let radius = layout.radius();
        for (i, vertex) in vertices.iter().enumerate() {
            let expected = -PI / 2.0 + i as f32 * (2.0 * PI / 4.0);
            assert!((vertex.x - (cx + radius * expected.cos())).abs() < 1e-3);
            assert!((vertex.y - (cy + radius * expected.sin())).abs() < 1e-3);
        }
    }

    #[test]
    fn radar_vertices_stay_within_radius() {
        let layout = layout::config_for(SizeClass::Desktop);
        let keys = keys(&["controle", "passe", "tir"]);
        let series = series_of(json!({ "controle": 4, "passe": 1, "tir": 3 }), &keys);

        let (cx, cy) = layout.center();
        for vertex in radar_vertices(&series, &layout, 5.0) {
            let distance = ((vertex.x - cx).powi(2) + (vertex.y - cy).powi(2)).sqrt();
            assert!(distance <= layout.radius() + 1e-3);
        }
    }

    #[test]
    fn all_zero_series_collapses_onto_center() {
        let layout = layout::config_for(SizeClass::Mobile);
        let keys = keys(&["controle", "passe"]);
        let series = series_of(json!({}), &keys);

        let (cx, cy) = layout.center();
        for vertex in radar_vertices(&series, &layout, 5.0) {
            assert!(vertex.x.is_finite() && vertex.y.is_finite());
            assert!((vertex.x - cx).abs() < 1e-3);
            assert!((vertex.y - cy).abs() < 1e-3);
        }
    }

    #[test]
    fn label_anchors_avoid_the_vertical_axis() {
        let layout = layout::config_for(SizeClass::Tablet);
        let keys = keys(&["controle", "passe", "tir", "dribble"]);
        let frame = radar_frame(&keys, &layout, 5.0);

        // 4 axes: top, right, bottom, left.
        assert_eq!(frame.axes[0].anchor, LabelAnchor::Middle);
        assert_eq!(frame.axes[1].anchor, LabelAnchor::Start);
        assert_eq!(frame.axes[2].anchor, LabelAnchor::Middle);
        assert_eq!(frame.axes[3].anchor, LabelAnchor::End);
    }

    #[test]
    fn rings_scale_with_the_configured_radius() {
        let layout = layout::config_for(SizeClass::Mobile);
        let frame = radar_frame(&keys(&["controle"]), &layout, 5.0);
        let radius = layout.radius();

        assert_eq!(frame.rings, [
            radius * 0.25,
            radius * 0.5,
            radius * 0.75,
            radius
        ]);
    }

    #[test]
    fn line_coordinates_are_finite() {
        let layout = layout::config_for(SizeClass::Tablet);
        let samples = vec![
            ("01 Jan".to_string(), 3.2),
            ("02 Jan".to_string(), 4.1),
            ("03 Jan".to_string(), 2.8),
        ];

        let geometry = line(&samples, &layout);
        assert_eq!(geometry.points.len(), 3);
        for point in &geometry.points {
            assert!(point.x.is_finite());
            assert!(point.y.is_finite());
        }
    }

    #[test]
    fn single_sample_renders_at_left_padding() {
        let layout = layout::config_for(SizeClass::Mobile);
        let samples = vec![("01 Jan".to_string(), 3.0)];

        let geometry = line(&samples, &layout);
        assert_eq!(geometry.points.len(), 1);
        assert_eq!(geometry.points[0].x, LINE_PADDING);
        assert!(geometry.points[0].y.is_finite());
    }

    #[test]
    fn line_scale_expands_for_out_of_range_scores() {
        let layout = layout::config_for(SizeClass::Tablet);
        let samples = vec![("a".to_string(), -1.0), ("b".to_string(), 6.5)];

        let geometry = line(&samples, &layout);
        assert_eq!(geometry.min_y, -1.0);
        assert_eq!(geometry.max_y, 6.5);
    }
}
