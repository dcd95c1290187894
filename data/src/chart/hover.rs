use std::sync::LazyLock;

use enum_map::{EnumMap, enum_map};

use super::{ChartMode, ChartPoint};

/// Pointer-to-vertex distance below which the tooltip shows.
static SHOW_THRESHOLD: LazyLock<EnumMap<ChartMode, f32>> = LazyLock::new(|| {
    enum_map! {
        ChartMode::Radar => 12.0,
        ChartMode::Line => 14.0,
    }
});

pub fn show_threshold(mode: ChartMode) -> f32 {
    SHOW_THRESHOLD[mode]
}

pub fn distance(x: f32, y: f32, point: &ChartPoint) -> f32 {
    ((point.x - x).powi(2) + (point.y - y).powi(2)).sqrt()
}

/// Closest candidate vertex by Euclidean distance, O(candidates) per call.
pub fn nearest<'a>(
    x: f32,
    y: f32,
    candidates: impl IntoIterator<Item = &'a ChartPoint>,
) -> Option<(&'a ChartPoint, f32)> {
    let mut best: Option<(&ChartPoint, f32)> = None;

    for point in candidates {
        let d = distance(x, y, point);
        if best.map_or(true, |(_, best_d)| d < best_d) {
            best = Some((point, d));
        }
    }

    best
}

/// Nearest vertex only when inside the mode's show threshold.
pub fn hit<'a>(
    x: f32,
    y: f32,
    candidates: impl IntoIterator<Item = &'a ChartPoint>,
    mode: ChartMode,
) -> Option<&'a ChartPoint> {
    nearest(x, y, candidates)
        .filter(|(_, d)| *d < show_threshold(mode))
        .map(|(point, _)| point)
}

/// Line-mode lookup: points are evenly spaced, so snap to the nearest
/// index along x and distance-check that single synthetic point.
pub fn nearest_index_along_x(x: f32, points: &[ChartPoint]) -> Option<usize> {
    points
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            (a.x - x)
                .abs()
                .partial_cmp(&(b.x - x).abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(i, _)| i)
}

/// Transient tooltip state, passed top-down to whichever backend draws.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering {
        title: String,
        value: String,
        x: f32,
        y: f32,
    },
}

impl HoverState {
    pub fn is_idle(&self) -> bool {
        matches!(self, HoverState::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f32, y: f32, key: &str) -> ChartPoint {
        ChartPoint {
            x,
            y,
            key: key.to_string(),
            value: 3.0,
        }
    }

    #[test]
    fn exact_vertex_position_hits_at_distance_zero() {
        let points = vec![point(100.0, 50.0, "controle"), point(200.0, 80.0, "passe")];

        let (found, d) = nearest(200.0, 80.0, &points).unwrap();
        assert_eq!(found.key, "passe");
        assert_eq!(d, 0.0);
        assert!(hit(200.0, 80.0, &points, ChartMode::Radar).is_some());
    }

    #[test]
    fn nearest_picks_the_closest_candidate() {
        let points = vec![point(0.0, 0.0, "a"), point(10.0, 0.0, "b")];

        let (found, _) = nearest(7.0, 0.0, &points).unwrap();
        assert_eq!(found.key, "b");
    }

    #[test]
    fn at_or_beyond_threshold_there_is_no_hit() {
        let points = vec![point(0.0, 0.0, "a")];

        assert!(hit(12.0, 0.0, &points, ChartMode::Radar).is_none());
        assert!(hit(11.9, 0.0, &points, ChartMode::Radar).is_some());
        assert!(hit(13.9, 0.0, &points, ChartMode::Line).is_some());
    }

    #[test]
    fn no_candidates_means_no_result() {
        assert!(nearest(0.0, 0.0, &[]).is_none());
        assert!(nearest_index_along_x(0.0, &[]).is_none());
    }

    #[test]
    fn index_search_snaps_along_x() {
        let points = vec![
            point(32.0, 100.0, "01 Jan"),
            point(132.0, 40.0, "02 Jan"),
            point(232.0, 70.0, "03 Jan"),
        ];

        assert_eq!(nearest_index_along_x(120.0, &points), Some(1));
        assert_eq!(nearest_index_along_x(300.0, &points), Some(2));
    }
}
