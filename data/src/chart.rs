pub mod catalog;
pub mod date;
pub mod geometry;
pub mod hover;
pub mod layout;
pub mod scene;
pub mod series;

use enum_map::Enum;
use serde::{Deserialize, Serialize};

/// Which of the two chart shapes is on screen.
///
/// Radar is the normal mode; the chart degrades to a single average-score
/// line when no usable metric keys are discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum, Serialize, Deserialize)]
pub enum ChartMode {
    Radar,
    Line,
}

/// A plotting-space coordinate tied back to the metric key (or date label,
/// in line mode) and score that produced it. Rebuilt on every layout pass,
/// never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub x: f32,
    pub y: f32,
    pub key: String,
    pub value: f32,
}
