#![warn(missing_docs)]

//! Core library for trackbar => See `trackbar` crate.
//!
//! Contains the host-facing abstractions widgets are written against:
//! graphics, layout constraints, units, pointer input and update flags.

pub use vello as vg;

/// Contains the [Update](update::Update) bitflag.
pub mod update;

/// Contains useful types and functions for layout interaction.
pub mod layout;

/// Contains device-independent unit conversion.
pub mod units;

/// Contains pointer input types.
pub mod input;

/// Contains text metrics and, with the `text` feature, Parley based text rendering.
pub mod text;

/// Contains the vector graphics interface abstraction
///
/// Widgets draw through [vgi::Graphics] so they stay decoupled from the backend.
/// A Vello backend and a recording backend are provided.
pub mod vgi;

/// Contains the core widget functionalities
pub mod widget;
