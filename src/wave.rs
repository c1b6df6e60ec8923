//! Traveling cosine wave field.

use std::f32::consts::PI;

use crate::params::{Environment, WaveConfig};

/// Parameters of a single traveling cosine wave (world units)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParameters {
    /// Peak height above still water (world units)
    pub amplitude: f32,

    /// Spatial frequency (radians per world unit)
    pub wavenumber: f32,

    /// Temporal frequency (radians per second)
    pub angular_frequency: f32,

    /// Crest speed (world units per second)
    pub phase_velocity: f32,
}

impl WaveParameters {
    /// Build from amplitude, wavenumber and phase velocity.
    /// Angular frequency follows as `phase_velocity * wavenumber`.
    pub fn new(amplitude: f32, wavenumber: f32, phase_velocity: f32) -> Self {
        Self {
            amplitude,
            wavenumber,
            angular_frequency: phase_velocity * wavenumber,
            phase_velocity,
        }
    }

    /// Derive the wave from its configuration.
    ///
    /// Phase velocity is the deep-water speed `sqrt(g L / pi)` for half
    /// wavelength `L`, scaled by `speed_scale`.
    pub fn from_config(config: &WaveConfig, env: &Environment) -> Self {
        let phase_velocity =
            config.speed_scale * (env.gravity_mps2 * config.half_wavelength / PI).sqrt();
        Self::new(config.amplitude, config.wavenumber(), phase_velocity)
    }

    /// Still water
    pub fn calm() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Water surface height at horizontal position `x` and time `time_s`
    pub fn height(&self, x: f32, time_s: f32) -> f32 {
        self.amplitude * (self.wavenumber * x - self.angular_frequency * time_s).cos()
    }

    /// Distance between crests (world units); infinite for a flat surface
    pub fn wavelength(&self) -> f32 {
        2.0 * PI / self.wavenumber
    }

    /// Time between crests passing a fixed point (seconds)
    pub fn period_s(&self) -> f32 {
        2.0 * PI / self.angular_frequency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_wave() -> WaveParameters {
        WaveParameters::from_config(&WaveConfig::default(), &Environment::default())
    }

    #[test]
    fn test_height_bounded_by_amplitude() {
        let wave = default_wave();

        for i in -200..=200 {
            let x = i as f32 * 0.173;
            for j in 0..100 {
                let t = j as f32 * 0.37;
                let h = wave.height(x, t);
                assert!(
                    h.abs() <= wave.amplitude + 1e-6,
                    "height {} exceeds amplitude at x={} t={}",
                    h,
                    x,
                    t
                );
            }
        }
    }

    #[test]
    fn test_height_at_origin() {
        let wave = default_wave();
        assert!((wave.height(0.0, 0.0) - wave.amplitude).abs() < 1e-6);
    }

    #[test]
    fn test_crest_travels_at_phase_velocity() {
        let wave = default_wave();
        let t = 0.8;
        let crest_x = wave.phase_velocity * t;

        assert!((wave.height(crest_x, t) - wave.amplitude).abs() < 1e-5);
    }

    #[test]
    fn test_derived_parameters() {
        let wave = default_wave();

        // L = 5 units: K = pi / 5, V = 0.5 * sqrt(9.81 * 5 / pi)
        assert!((wave.wavenumber - PI / 5.0).abs() < 1e-6);
        assert!((wave.phase_velocity - 1.975_671).abs() < 1e-4);
        assert!((wave.angular_frequency - 1.241_351).abs() < 1e-4);
        assert!((wave.wavelength() - 10.0).abs() < 1e-4);
        assert!(wave.period_s() > 0.0);
    }

    #[test]
    fn test_calm_water_is_flat() {
        let wave = WaveParameters::calm();
        for i in -10..10 {
            assert_eq!(wave.height(i as f32, i as f32 * 0.5 + 5.0), 0.0);
        }
    }
}
