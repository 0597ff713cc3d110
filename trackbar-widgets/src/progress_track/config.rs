use std::path::Path;

use serde::Deserialize;
use trackbar_core::layout::{Orientation, Padding};
use trackbar_theme::palette::TrackPalette;

use crate::error::ConfigError;

/// Construction-time configuration of a [ProgressTrack](super::ProgressTrack).
///
/// Lengths are device independent (`dp`, text in `sp`) and converted with the
/// host's [Density](trackbar_core::units::Density) when the widget is built.
/// Every field is optional when loading from TOML:
///
/// ```toml
/// orientation = "vertical"
/// thumb_radius_dp = 8.0
/// show_label = true
/// max = 10
///
/// [palette]
/// reached = "#3366ff"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProgressTrackConfig {
    /// Track axis.
    pub orientation: Orientation,
    /// Stroke width of the track.
    pub track_thickness_dp: f32,
    /// Radius of the thumb. Grows to the label size when the label is shown.
    pub thumb_radius_dp: f32,
    /// Draw the current value on the thumb.
    pub show_label: bool,
    /// Text size of the label.
    pub label_size_sp: f32,
    /// Lower end of the range.
    pub min: i32,
    /// Upper end of the range.
    pub max: i32,
    /// Initial value, clamped into the range. Defaults to `min`.
    pub progress: Option<i32>,
    /// Initial enabled state.
    pub enabled: bool,
    /// Padding around the track.
    pub padding_dp: Padding,
    /// Colors.
    pub palette: TrackPalette,
}

impl ProgressTrackConfig {
    /// Parse a configuration from TOML.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loading progress track configuration from {:?}", path);
        Self::from_toml_str(&source)
    }

    /// Sets the orientation and returns itself.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the track thickness (dp) and returns itself.
    pub fn with_track_thickness(mut self, dp: f32) -> Self {
        self.track_thickness_dp = dp;
        self
    }

    /// Sets the thumb radius (dp) and returns itself.
    pub fn with_thumb_radius(mut self, dp: f32) -> Self {
        self.thumb_radius_dp = dp;
        self
    }

    /// Shows the progress label at the given text size (sp) and returns itself.
    pub fn with_label(mut self, size_sp: f32) -> Self {
        self.show_label = true;
        self.label_size_sp = size_sp;
        self
    }

    /// Sets the value range and returns itself.
    pub fn with_range(mut self, min: i32, max: i32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Sets the initial value and returns itself.
    pub fn with_progress(mut self, progress: i32) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Sets the initial enabled state and returns itself.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the padding (dp) and returns itself.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding_dp = padding;
        self
    }

    /// Sets the colors and returns itself.
    pub fn with_palette(mut self, palette: TrackPalette) -> Self {
        self.palette = palette;
        self
    }
}

impl Default for ProgressTrackConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            track_thickness_dp: 4.0,
            thumb_radius_dp: 3.0,
            show_label: false,
            label_size_sp: 12.0,
            min: 0,
            max: 100,
            progress: None,
            enabled: true,
            padding_dp: Padding::ZERO,
            palette: TrackPalette::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trackbar_core::vg::peniko::Color;

    #[test]
    fn test_empty_document_is_default() {
        let config = ProgressTrackConfig::from_toml_str("").unwrap();
        assert_eq!(config, ProgressTrackConfig::default());
    }

    #[test]
    fn test_full_document() {
        let config = ProgressTrackConfig::from_toml_str(
            r##"
            orientation = "vertical"
            track_thickness_dp = 6.0
            thumb_radius_dp = 9.0
            show_label = true
            label_size_sp = 14.0
            min = -10
            max = 10
            progress = 3
            enabled = false

            [padding_dp]
            top = 4.0
            bottom = 2.0

            [palette]
            reached = "#3366ff"
            "##,
        )
        .unwrap();

        assert_eq!(config.orientation, Orientation::Vertical);
        assert_eq!(config.track_thickness_dp, 6.0);
        assert_eq!(config.thumb_radius_dp, 9.0);
        assert!(config.show_label);
        assert_eq!(config.label_size_sp, 14.0);
        assert_eq!((config.min, config.max), (-10, 10));
        assert_eq!(config.progress, Some(3));
        assert!(!config.enabled);
        assert_eq!(config.padding_dp, Padding::new(0.0, 4.0, 0.0, 2.0));
        assert_eq!(config.palette.reached, Color::from_rgb8(0x33, 0x66, 0xff));
        assert_eq!(config.palette.thumb, TrackPalette::default().thumb);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            ProgressTrackConfig::from_toml_str("orientation = \"diagonal\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            ProgressTrackConfig::from_toml_str("[palette]\nthumb = \"#12\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = ProgressTrackConfig::from_file("/nonexistent/trackbar.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_builder() {
        let config = ProgressTrackConfig::default()
            .with_orientation(Orientation::Vertical)
            .with_label(10.0)
            .with_range(5, 15)
            .with_progress(7);
        assert!(config.show_label);
        assert_eq!(config.label_size_sp, 10.0);
        assert_eq!(config.progress, Some(7));
        assert_eq!(config.orientation, Orientation::Vertical);
    }
}
