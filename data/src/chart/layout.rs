use std::sync::LazyLock;

use enum_map::{Enum, EnumMap, enum_map};

/// Upper bound of the mobile band, inclusive.
pub const MOBILE_MAX_WIDTH: f32 = 420.0;
/// Upper bound of the tablet band, inclusive.
pub const TABLET_MAX_WIDTH: f32 = 1024.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum SizeClass {
    Mobile,
    Tablet,
    Desktop,
}

/// Fixed sizing constants for one viewport band. Immutable for the
/// duration of a render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub width: f32,
    pub height: f32,
    pub center_offset_x: f32,
    pub center_offset_y: f32,
    pub radius_factor: f32,
}

impl LayoutConfig {
    pub fn center(&self) -> (f32, f32) {
        (
            self.width * 0.5 + self.center_offset_x,
            self.height * 0.5 + self.center_offset_y,
        )
    }

    pub fn radius(&self) -> f32 {
        self.width.min(self.height) * 0.5 * self.radius_factor
    }
}

static LAYOUTS: LazyLock<EnumMap<SizeClass, LayoutConfig>> = LazyLock::new(|| {
    enum_map! {
        SizeClass::Mobile => LayoutConfig {
            width: 320.0,
            height: 300.0,
            center_offset_x: 0.0,
            center_offset_y: 10.0,
            radius_factor: 0.62,
        },
        SizeClass::Tablet => LayoutConfig {
            width: 480.0,
            height: 400.0,
            center_offset_x: 0.0,
            center_offset_y: 12.0,
            radius_factor: 0.66,
        },
        SizeClass::Desktop => LayoutConfig {
            width: 640.0,
            height: 480.0,
            center_offset_x: 0.0,
            center_offset_y: 16.0,
            radius_factor: 0.70,
        },
    }
});

/// Bands are inclusive on the lower bound and exclusive on the upper, with
/// no gaps: mobile <= 420 < tablet <= 1024 < desktop.
pub fn class_for(viewport_width: f32) -> SizeClass {
    if viewport_width <= MOBILE_MAX_WIDTH {
        SizeClass::Mobile
    } else if viewport_width <= TABLET_MAX_WIDTH {
        SizeClass::Tablet
    } else {
        SizeClass::Desktop
    }
}

pub fn config_for(class: SizeClass) -> LayoutConfig {
    LAYOUTS[class]
}

pub fn resolve(viewport_width: f32) -> LayoutConfig {
    config_for(class_for(viewport_width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_are_exact() {
        assert_eq!(class_for(0.0), SizeClass::Mobile);
        assert_eq!(class_for(420.0), SizeClass::Mobile);
        assert_eq!(class_for(421.0), SizeClass::Tablet);
        assert_eq!(class_for(1024.0), SizeClass::Tablet);
        assert_eq!(class_for(1025.0), SizeClass::Desktop);
    }

    #[test]
    fn each_band_has_distinct_constants() {
        let mobile = config_for(SizeClass::Mobile);
        let tablet = config_for(SizeClass::Tablet);
        let desktop = config_for(SizeClass::Desktop);

        assert!(mobile.width < tablet.width);
        assert!(tablet.width < desktop.width);
    }

    #[test]
    fn radius_derives_from_shorter_side() {
        let config = config_for(SizeClass::Mobile);
        assert_eq!(config.radius(), 300.0 * 0.5 * 0.62);
    }
}
