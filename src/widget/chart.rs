pub mod evaluation;

use data::chart::geometry::LabelAnchor;
use iced::Alignment;

pub(crate) fn horizontal_alignment(anchor: LabelAnchor) -> Alignment {
    match anchor {
        LabelAnchor::Start => Alignment::Start,
        LabelAnchor::Middle => Alignment::Center,
        LabelAnchor::End => Alignment::End,
    }
}
