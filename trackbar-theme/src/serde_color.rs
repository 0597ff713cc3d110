//! Custom serialization helpers for vello::peniko::Color
//!
//! Colors are written as `#rrggbb` or `#rrggbbaa`. Use with
//! `#[serde(with = "trackbar_theme::serde_color")]`.

use serde::{Deserialize, Deserializer, Serializer};
use vello::peniko::Color;

use crate::error::ThemeError;

/// Serialize a Color as a hex string.
pub fn serialize<S>(color: &Color, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_hex(*color))
}

/// Deserialize a Color from a hex string.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let hex = String::deserialize(deserializer)?;
    parse_hex_color(&hex).map_err(Error::custom)
}

/// Format a color as `#rrggbb`, or `#rrggbbaa` when it is not opaque.
pub fn to_hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    if rgba.a == 255 {
        format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

/// Parse `#rrggbb` or `#rrggbbaa` (the `#` is optional).
pub fn parse_hex_color(value: &str) -> Result<Color, ThemeError> {
    let invalid = |reason| ThemeError::InvalidHexColor {
        value: value.to_string(),
        reason,
    };

    let hex = value.trim_start_matches('#');
    if !hex.is_ascii() {
        return Err(invalid("not a hex string"));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid("not a hex string"))
    };

    match hex.len() {
        6 => Ok(Color::from_rgb8(channel(0)?, channel(2)?, channel(4)?)),
        8 => Ok(Color::from_rgba8(
            channel(0)?,
            channel(2)?,
            channel(4)?,
            channel(6)?,
        )),
        _ => Err(invalid("hex color must be 6 or 8 characters")),
    }
}
