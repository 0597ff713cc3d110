use thiserror::Error;

/// Returned when a [Density] is built from a non-positive or non-finite scale.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("invalid display density (scale = {scale}, font_scale = {font_scale})")]
pub struct InvalidDensity {
    /// The rejected pixel scale.
    pub scale: f32,
    /// The rejected font scale.
    pub font_scale: f32,
}

/// Display density used to convert device-independent units into pixels.
///
/// Hosts pass this in explicitly at construction instead of widgets looking
/// it up from a global.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Density {
    scale: f32,
    font_scale: f32,
}

impl Density {
    /// Density of a baseline (160 dpi) display: `1dp == 1sp == 1px`.
    pub const BASELINE: Density = Density {
        scale: 1.0,
        font_scale: 1.0,
    };

    /// Create a density with a pixel scale and a separate font scale.
    ///
    /// `font_scale` is the pixel scale multiplied by the user's text size preference.
    pub fn new(scale: f32, font_scale: f32) -> Result<Self, InvalidDensity> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(scale) || !valid(font_scale) {
            return Err(InvalidDensity { scale, font_scale });
        }

        Ok(Self { scale, font_scale })
    }

    /// Create a density where fonts scale the same as everything else.
    pub fn uniform(scale: f32) -> Result<Self, InvalidDensity> {
        Self::new(scale, scale)
    }

    /// The pixel scale.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// The font scale.
    pub fn font_scale(&self) -> f32 {
        self.font_scale
    }

    /// Convert density-independent pixels into device pixels.
    pub fn dp_to_px(&self, dp: f32) -> f32 {
        dp * self.scale
    }

    /// Convert scale-independent pixels into device pixels.
    pub fn sp_to_px(&self, sp: f32) -> f32 {
        sp * self.font_scale
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::BASELINE
    }
}
