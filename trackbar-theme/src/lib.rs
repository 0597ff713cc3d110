#![warn(missing_docs)]

//! # Trackbar Theming
//!
//! Colors for trackbar widgets: the [TrackPalette](palette::TrackPalette) with
//! its defaults, hex color parsing for configuration files, and the
//! [ThemeError](error::ThemeError) type.
//!
//! ```rust
//! use trackbar_theme::palette::{TrackPalette, TrackRole};
//!
//! let palette = TrackPalette::default();
//! let thumb = palette.color(TrackRole::Thumb, true);
//! let disabled = palette.color(TrackRole::Thumb, false);
//! assert_ne!(thumb, disabled);
//! ```

pub use vello::peniko;

/// Contains the [ThemeError](error::ThemeError) type.
pub mod error;

/// Contains the [TrackPalette](palette::TrackPalette).
pub mod palette;

/// Serde helpers for hex colors.
pub mod serde_color;
