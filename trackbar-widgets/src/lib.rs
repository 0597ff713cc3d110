#![warn(missing_docs)]

//! Widget library for trackbar => See `trackbar` crate.

/// Contains the [ConfigError](error::ConfigError) type.
pub mod error;

/// Contains the [progress_track::ProgressTrack] widget.
pub mod progress_track;
