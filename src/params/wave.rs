//! Wave field configuration.

use std::f32::consts::PI;

/// Traveling wave configuration (world units)
#[derive(Debug, Clone)]
pub struct WaveConfig {
    /// Half of the wavelength (world units).
    /// Also the half-width of the displayed stretch of water.
    pub half_wavelength: f32,

    /// Wave amplitude (world units)
    pub amplitude: f32,

    /// Multiplier on the deep-water phase speed sqrt(g L / pi)
    pub speed_scale: f32,

    /// Number of vertices in the displayed wave line
    pub display_samples: usize,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            half_wavelength: 5.0,
            amplitude: 0.2,
            speed_scale: 0.5,
            display_samples: 50,
        }
    }
}

impl WaveConfig {
    /// Wavenumber (radians per world unit)
    pub fn wavenumber(&self) -> f32 {
        PI / self.half_wavelength
    }
}
