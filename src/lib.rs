pub mod chart;
pub mod logger;
pub mod screen;
pub mod style;
pub mod widget;

pub use chart::Appearance;
pub use widget::chart::evaluation::{EvaluationChart, EvaluationChartEvent};
