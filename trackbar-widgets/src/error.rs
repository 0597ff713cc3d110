use std::path::PathBuf;

use thiserror::Error;
use trackbar_core::units::InvalidDensity;

/// Errors raised while building a widget from its configuration.
///
/// These are contract violations by the host and are reported at
/// construction; a built widget never fails at runtime.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The value range is empty or inverted.
    #[error("invalid range: max ({max}) must be greater than min ({min})")]
    InvalidRange {
        /// The configured minimum.
        min: i32,
        /// The configured maximum.
        max: i32,
    },

    /// The track thickness is not a positive length.
    #[error("track thickness must be positive, got {0}px")]
    InvalidTrackThickness(f32),

    /// The thumb radius is negative or not finite.
    #[error("thumb radius must be zero or positive, got {0}px")]
    InvalidThumbRadius(f32),

    /// The label text size is not a positive length.
    #[error("label text size must be positive, got {0}px")]
    InvalidLabelSize(f32),

    /// A padding value is negative or not finite.
    #[error("padding must be zero or positive, got {0}px")]
    InvalidPadding(f32),

    /// The display density is unusable.
    #[error(transparent)]
    InvalidDensity(#[from] InvalidDensity),

    /// The configuration file is not valid TOML or has wrong types.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration file could not be read.
    #[error("failed to read configuration file {path:?}: {source}")]
    Io {
        /// The file that failed to load.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
}
