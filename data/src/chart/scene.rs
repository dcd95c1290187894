use club::EvaluationRecord;

use super::geometry::{self, LineGeometry, RadarGeometry};
use super::hover::{self, HoverState};
use super::layout::LayoutConfig;
use super::{ChartMode, ChartPoint, catalog, date, series};
use crate::util;

pub const MEAN_MARKER_RADIUS: f32 = 3.0;
pub const SELECTED_MARKER_RADIUS: f32 = 5.0;

pub const TOOLTIP_WIDTH: f32 = 120.0;
pub const TOOLTIP_HEIGHT: f32 = 34.0;
const TOOLTIP_MARGIN: f32 = 8.0;
const TOOLTIP_POINTER_GAP: f32 = 12.0;

/// Everything a rendering backend needs to draw one frame, with no
/// drawing-API types involved. Rebuilt from current inputs on every
/// render pass.
#[derive(Debug, Clone)]
pub enum Scene {
    Radar(RadarScene),
    Line(LineScene),
    Empty,
}

#[derive(Debug, Clone)]
pub struct RadarScene {
    pub layout: LayoutConfig,
    pub frame: RadarGeometry,
    pub mean: Vec<ChartPoint>,
    pub selected: Option<SelectedSeries>,
}

#[derive(Debug, Clone)]
pub struct SelectedSeries {
    pub record_id: String,
    pub vertices: Vec<ChartPoint>,
}

#[derive(Debug, Clone)]
pub struct LineScene {
    pub layout: LayoutConfig,
    pub geometry: LineGeometry,
    pub record_ids: Vec<String>,
    pub highlighted: Option<usize>,
}

impl Scene {
    /// `records` is the date-sorted snapshot for one athlete. Zero usable
    /// metric keys degrades to the average-score line; zero records render
    /// nothing at all.
    pub fn build(
        records: &[EvaluationRecord],
        highlighted: Option<&str>,
        layout: &LayoutConfig,
    ) -> Scene {
        if records.is_empty() {
            return Scene::Empty;
        }

        let keys = catalog::discover(records);
        if keys.is_empty() {
            return Scene::Line(build_line(records, highlighted, layout));
        }

        let mean = series::mean(records, &keys);
        let selected_record =
            highlighted.and_then(|id| records.iter().find(|record| record.id == id));
        let selected_series = selected_record.map(|record| series::selected(record, &keys));

        let max_value = series::max_value(
            std::iter::once(&mean).chain(selected_series.as_ref()),
        );

        let frame = geometry::radar_frame(&keys, layout, max_value);
        let mean_vertices = geometry::radar_vertices(&mean, layout, max_value);
        let selected = selected_record.zip(selected_series).map(|(record, series)| {
            SelectedSeries {
                record_id: record.id.clone(),
                vertices: geometry::radar_vertices(&series, layout, max_value),
            }
        });

        Scene::Radar(RadarScene {
            layout: *layout,
            frame,
            mean: mean_vertices,
            selected,
        })
    }

    pub fn mode(&self) -> Option<ChartMode> {
        match self {
            Scene::Radar(_) => Some(ChartMode::Radar),
            Scene::Line(_) => Some(ChartMode::Line),
            Scene::Empty => None,
        }
    }

    /// Pointer position in chart-local coordinates to tooltip state.
    /// Mean vertices are always candidates; selected vertices only when a
    /// highlight exists.
    pub fn hover(&self, x: f32, y: f32) -> HoverState {
        match self {
            Scene::Empty => HoverState::Idle,
            Scene::Radar(scene) => {
                let candidates = scene.mean.iter().chain(
                    scene
                        .selected
                        .iter()
                        .flat_map(|selected| selected.vertices.iter()),
                );

                match hover::hit(x, y, candidates, ChartMode::Radar) {
                    Some(point) => {
                        let (tx, ty) = clamp_tooltip(x, y, &scene.layout);
                        HoverState::Hovering {
                            title: catalog::humanize(&point.key),
                            value: util::format_score(point.value),
                            x: tx,
                            y: ty,
                        }
                    }
                    None => HoverState::Idle,
                }
            }
            Scene::Line(scene) => {
                let Some(index) = hover::nearest_index_along_x(x, &scene.geometry.points)
                else {
                    return HoverState::Idle;
                };
                let point = &scene.geometry.points[index];

                if hover::distance(x, y, point) < hover::show_threshold(ChartMode::Line) {
                    let (tx, ty) = clamp_tooltip(x, y, &scene.layout);
                    HoverState::Hovering {
                        title: point.key.clone(),
                        value: util::format_score(point.value),
                        x: tx,
                        y: ty,
                    }
                } else {
                    HoverState::Idle
                }
            }
        }
    }

    /// Record id under a pointer activation, if any. In radar mode only
    /// selected-series vertices are pressable; in line mode every plotted
    /// evaluation is.
    pub fn pressed(&self, x: f32, y: f32) -> Option<&str> {
        match self {
            Scene::Empty => None,
            Scene::Radar(scene) => {
                let selected = scene.selected.as_ref()?;
                hover::hit(x, y, &selected.vertices, ChartMode::Radar)
                    .map(|_| selected.record_id.as_str())
            }
            Scene::Line(scene) => {
                let index = hover::nearest_index_along_x(x, &scene.geometry.points)?;
                let point = &scene.geometry.points[index];

                (hover::distance(x, y, point) < hover::show_threshold(ChartMode::Line))
                    .then(|| scene.record_ids[index].as_str())
            }
        }
    }
}

fn build_line(
    records: &[EvaluationRecord],
    highlighted: Option<&str>,
    layout: &LayoutConfig,
) -> LineScene {
    let samples: Vec<(String, f32)> = records
        .iter()
        .map(|record| {
            let label = date::parse(&record.date).format("%d %b").to_string();
            (label, series::average_score(record))
        })
        .collect();

    LineScene {
        layout: *layout,
        geometry: geometry::line(&samples, layout),
        record_ids: records.iter().map(|record| record.id.clone()).collect(),
        highlighted: highlighted
            .and_then(|id| records.iter().position(|record| record.id == id)),
    }
}

/// Keeps the tooltip box fully inside the layout viewport, preferring a
/// spot above the pointer.
fn clamp_tooltip(x: f32, y: f32, layout: &LayoutConfig) -> (f32, f32) {
    let max_x = (layout.width - TOOLTIP_WIDTH - TOOLTIP_MARGIN).max(TOOLTIP_MARGIN);
    let max_y = (layout.height - TOOLTIP_HEIGHT - TOOLTIP_MARGIN).max(TOOLTIP_MARGIN);

    (
        (x - TOOLTIP_WIDTH * 0.5).clamp(TOOLTIP_MARGIN, max_x),
        (y - TOOLTIP_HEIGHT - TOOLTIP_POINTER_GAP).clamp(TOOLTIP_MARGIN, max_y),
    )
}
