pub mod svg;

use data::config::theme;
use iced::{Color, Theme};

/// Opacity of a series polygon's fill; the stroke stays at full alpha.
pub const MEAN_FILL_ALPHA: f32 = 0.25;
pub const SELECTED_FILL_ALPHA: f32 = 0.2;

/// The resolved color set both rendering backends draw with. Deriving it
/// in one place is what keeps the canvas widget and the SVG document
/// visually equivalent.
#[derive(Debug, Clone, Copy)]
pub struct Appearance {
    pub background: Color,
    pub text: Color,
    pub muted_text: Color,
    pub grid: Color,
    pub mean: Color,
    pub selected: Color,
    pub tooltip_bg: Color,
    pub tooltip_text: Color,
}

impl Appearance {
    pub fn from_theme(theme: &Theme) -> Self {
        let extended = theme.extended_palette();
        let palette = theme.palette();

        Self {
            background: palette.background,
            text: palette.text,
            muted_text: palette.text.scale_alpha(0.65),
            grid: extended.background.strong.color.scale_alpha(0.5),
            mean: theme::mean_series_color(&palette),
            selected: theme::selected_series_color(&palette),
            tooltip_bg: extended.secondary.base.color,
            tooltip_text: extended.secondary.base.text,
        }
    }
}
