/// <https://github.com/iced-rs/iced/blob/master/core/src/theme/palette.rs>
/// All credits and thanks to the authors of [`iced_core`]
pub use club_pitch_theme as default_theme;

use iced_core::{
    Color,
    theme::{Custom, Palette},
};
use palette::{FromColor, Hsva, RgbHue, rgb::Rgba};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct Theme(pub iced_core::Theme);

#[derive(Serialize, Deserialize)]
struct SerTheme {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    palette: Option<Palette>,
}

impl Default for Theme {
    fn default() -> Self {
        Self(iced_core::Theme::Custom(club_pitch_theme().into()))
    }
}

impl From<Theme> for iced_core::Theme {
    fn from(val: Theme) -> Self {
        val.0
    }
}

/// Default dark theme tuned for evaluation charts on club dashboards.
pub fn club_pitch_theme() -> Custom {
    Custom::new(
        "Club Pitch".to_string(),
        Palette {
            background: Color::from_rgb8(16, 20, 26),
            text: Color::from_rgb8(222, 226, 230),
            primary: Color::from_rgb8(86, 156, 214),
            success: Color::from_rgb8(82, 196, 120),
            danger: Color::from_rgb8(235, 107, 86),
            warning: Color::from_rgb8(255, 200, 87),
        },
    )
}

/// Light variant for reports and projector screens.
pub fn club_light_theme() -> Custom {
    Custom::new(
        "Club Light".to_string(),
        Palette {
            background: Color::from_rgb8(249, 250, 251),
            text: Color::from_rgb8(34, 40, 49),
            primary: Color::from_rgb8(28, 100, 178),
            success: Color::from_rgb8(36, 130, 76),
            danger: Color::from_rgb8(196, 69, 54),
            warning: Color::from_rgb8(184, 134, 11),
        },
    )
}

impl Serialize for Theme {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if let iced_core::Theme::Custom(custom) = &self.0 {
            let name = match custom.to_string().as_str() {
                "Club Pitch" => "club-pitch",
                "Club Light" => "club-light",
                _ => "custom",
            };
            let ser_theme = SerTheme {
                name: name.to_string(),
                palette: (name == "custom").then(|| self.0.palette()),
            };
            ser_theme.serialize(serializer)
        } else {
            let theme_str = match self.0 {
                iced_core::Theme::Dark => "dark",
                iced_core::Theme::Light => "light",
                iced_core::Theme::Ferra => "ferra",
                iced_core::Theme::Nord => "nord",
                iced_core::Theme::GruvboxDark => "gruvbox_dark",
                iced_core::Theme::GruvboxLight => "gruvbox_light",
                iced_core::Theme::TokyoNight => "tokyo_night",
                _ => "club-pitch",
            };
            theme_str.serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value =
            serde_json::Value::deserialize(deserializer).map_err(serde::de::Error::custom)?;

        if let Some(s) = value.as_str() {
            let theme = match s {
                "dark" => iced_core::Theme::Dark,
                "light" => iced_core::Theme::Light,
                "ferra" => iced_core::Theme::Ferra,
                "nord" => iced_core::Theme::Nord,
                "gruvbox_dark" => iced_core::Theme::GruvboxDark,
                "gruvbox_light" => iced_core::Theme::GruvboxLight,
                "tokyo_night" => iced_core::Theme::TokyoNight,
                "club-pitch" => Theme::default().0,
                "club-light" => iced_core::Theme::Custom(club_light_theme().into()),
                _ => {
                    return Err(serde::de::Error::custom(format!("Invalid theme: {s}")));
                }
            };
            return Ok(Theme(theme));
        }

        let serialized = SerTheme::deserialize(value).map_err(serde::de::Error::custom)?;

        let theme = match serialized.name.as_str() {
            "club-pitch" => Theme::default().0,
            "club-light" => iced_core::Theme::Custom(club_light_theme().into()),
            "custom" => {
                if let Some(palette) = serialized.palette {
                    iced_core::Theme::Custom(Custom::new("Custom".to_string(), palette).into())
                } else {
                    return Err(serde::de::Error::custom("Custom theme missing palette data"));
                }
            }
            _ => return Err(serde::de::Error::custom("Invalid theme")),
        };

        Ok(Theme(theme))
    }
}

/// Series colors both rendering backends share; keeping them here is what
/// makes the canvas and SVG pictures match.
pub fn mean_series_color(palette: &Palette) -> Color {
    palette.primary
}

pub fn selected_series_color(palette: &Palette) -> Color {
    palette.danger
}

pub fn hex_to_color(hex: &str) -> Option<Color> {
    if hex.len() == 7 || hex.len() == 9 {
        let hash = &hex[0..1];
        let r = u8::from_str_radix(&hex[1..3], 16);
        let g = u8::from_str_radix(&hex[3..5], 16);
        let b = u8::from_str_radix(&hex[5..7], 16);
        let a = (hex.len() == 9)
            .then(|| u8::from_str_radix(&hex[7..9], 16).ok())
            .flatten();

        return match (hash, r, g, b, a) {
            ("#", Ok(r), Ok(g), Ok(b), None) => Some(Color {
                r: f32::from(r) / 255.0,
                g: f32::from(g) / 255.0,
                b: f32::from(b) / 255.0,
                a: 1.0,
            }),
            ("#", Ok(r), Ok(g), Ok(b), Some(a)) => Some(Color {
                r: f32::from(r) / 255.0,
                g: f32::from(g) / 255.0,
                b: f32::from(b) / 255.0,
                a: f32::from(a) / 255.0,
            }),
            _ => None,
        };
    }

    None
}

pub fn color_to_hex(color: Color) -> String {
    use std::fmt::Write;

    let mut hex = String::with_capacity(9);

    let [r, g, b, a] = color.into_rgba8();

    let _ = write!(&mut hex, "#");
    let _ = write!(&mut hex, "{r:02X}");
    let _ = write!(&mut hex, "{g:02X}");
    let _ = write!(&mut hex, "{b:02X}");

    if a < u8::MAX {
        let _ = write!(&mut hex, "{a:02X}");
    }

    hex
}

pub fn lighten(color: Color, amount: f32) -> Color {
    let mut hsva = to_hsva(color);
    hsva.value = (hsva.value + amount).min(1.0);
    from_hsva(hsva)
}

pub fn darken(color: Color, amount: f32) -> Color {
    let mut hsva = to_hsva(color);
    hsva.value = (hsva.value - amount).max(0.0);
    from_hsva(hsva)
}

pub fn from_hsv_degrees(h_deg: f32, s: f32, v: f32) -> Color {
    let hue = RgbHue::from_degrees(h_deg);
    from_hsva(Hsva::new(hue, s, v, 1.0))
}

pub fn from_hsva(color: Hsva) -> Color {
    let rgba = palette::Srgba::from_color(color);
    Color {
        r: rgba.color.red,
        g: rgba.color.green,
        b: rgba.color.blue,
        a: rgba.alpha,
    }
}

pub fn to_hsva(color: Color) -> Hsva {
    Hsva::from_color(Rgba::new(color.r, color.g, color.b, color.a))
}

pub fn is_dark(color: Color) -> bool {
    let brightness = (color.r * 299.0 + color.g * 587.0 + color.b * 114.0) / 1000.0;
    brightness < 0.5
}
