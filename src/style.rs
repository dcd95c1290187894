use iced::Font;
use iced::theme::palette::Extended;
use iced::widget::canvas;

pub const TEXT_SIZE: f32 = 12.0;
pub const CHAR_W: f32 = TEXT_SIZE * 0.64;

pub const MONO: Font = Font::MONOSPACE;

pub fn dashed_line_from_palette(palette: &Extended) -> canvas::Stroke<'static> {
    canvas::Stroke {
        line_dash: canvas::LineDash {
            segments: &[3.0, 3.0],
            offset: 0,
        },
        ..canvas::Stroke::default()
            .with_color(palette.background.strong.color.scale_alpha(0.6))
            .with_width(1.0)
    }
}

pub fn grid_stroke(palette: &Extended) -> canvas::Stroke<'static> {
    canvas::Stroke::default()
        .with_color(palette.background.strong.color.scale_alpha(0.4))
        .with_width(1.0)
}
