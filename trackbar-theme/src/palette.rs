use serde::{Deserialize, Serialize};
use vello::peniko::{Brush, Color};

/// The parts of a track widget that carry their own color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackRole {
    /// The track between the thumb and the end of the range.
    Unreached,
    /// The track between the start of the range and the thumb.
    Reached,
    /// The draggable circle.
    Thumb,
    /// The progress label drawn on the thumb.
    Label,
}

/// Colors of a track widget.
///
/// Every field is optional in configuration files and falls back to the
/// default palette: light grey track, red progress and thumb, white label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackPalette {
    /// Color of the unreached track segment.
    #[serde(with = "crate::serde_color")]
    pub unreached: Color,
    /// Color of the reached track segment.
    #[serde(with = "crate::serde_color")]
    pub reached: Color,
    /// Color of the thumb.
    #[serde(with = "crate::serde_color")]
    pub thumb: Color,
    /// Color used for track and thumb while the widget is disabled.
    #[serde(with = "crate::serde_color")]
    pub disabled: Color,
    /// Color of the progress label.
    #[serde(with = "crate::serde_color")]
    pub label: Color,
}

impl TrackPalette {
    /// Color for `role`, taking the enabled state into account.
    ///
    /// The label keeps its color while disabled; everything else turns [disabled](Self::disabled).
    pub fn color(&self, role: TrackRole, enabled: bool) -> Color {
        match role {
            TrackRole::Label => self.label,
            _ if !enabled => self.disabled,
            TrackRole::Unreached => self.unreached,
            TrackRole::Reached => self.reached,
            TrackRole::Thumb => self.thumb,
        }
    }

    /// Solid brush for `role`.
    pub fn brush(&self, role: TrackRole, enabled: bool) -> Brush {
        Brush::Solid(self.color(role, enabled))
    }
}

impl Default for TrackPalette {
    fn default() -> Self {
        Self {
            unreached: Color::from_rgb8(0xee, 0xee, 0xee),
            reached: Color::from_rgb8(0xff, 0x33, 0x33),
            thumb: Color::from_rgb8(0xff, 0x33, 0x33),
            disabled: Color::from_rgb8(0xdd, 0xdd, 0xdd),
            label: Color::WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_overrides_track_and_thumb() {
        let palette = TrackPalette::default();
        for role in [TrackRole::Unreached, TrackRole::Reached, TrackRole::Thumb] {
            assert_eq!(palette.color(role, false), palette.disabled);
        }
        assert_eq!(palette.color(TrackRole::Label, false), palette.label);
    }

    #[test]
    fn test_enabled_colors() {
        let palette = TrackPalette::default();
        assert_eq!(palette.color(TrackRole::Unreached, true), palette.unreached);
        assert_eq!(palette.color(TrackRole::Reached, true), palette.reached);
        assert_eq!(palette.color(TrackRole::Thumb, true), palette.thumb);
        assert_eq!(
            palette.brush(TrackRole::Reached, true),
            Brush::Solid(palette.reached)
        );
    }

    #[test]
    fn test_partial_table_keeps_defaults() {
        let palette: TrackPalette = toml::from_str("reached = \"#00ff00\"").unwrap();
        assert_eq!(palette.reached, Color::from_rgb8(0, 0xff, 0));
        assert_eq!(palette.unreached, TrackPalette::default().unreached);
        assert_eq!(palette.label, Color::WHITE);
    }

    #[test]
    fn test_round_trips_through_toml() {
        let palette = TrackPalette {
            label: Color::from_rgba8(0, 0, 0, 0x80),
            ..TrackPalette::default()
        };

        let written = toml::to_string(&palette).unwrap();
        assert!(written.contains("reached = \"#ff3333\""));
        assert!(written.contains("label = \"#00000080\""));

        let read: TrackPalette = toml::from_str(&written).unwrap();
        assert_eq!(read, palette);
    }
}
