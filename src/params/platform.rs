//! Floating platform construction constants.

/// Platform dimensions and material constants.
///
/// Dimensions are in world units; densities are SI.
#[derive(Debug, Clone)]
pub struct PlatformConfig {
    /// Extent along the wave direction (world units)
    pub width: f32,

    /// Extent out of the plane of the screen (world units)
    pub breadth: f32,

    /// Thickness (world units)
    pub depth: f32,

    /// Density of the hull material (kg/m^3)
    pub density_kg_m3: f32,

    /// Mass per unit area of the solar panels on the top face (kg/m^2)
    pub panel_areal_mass_kg_m2: f32,

    /// Fraction of the top face covered by panels (0..=1)
    pub panel_coverage: f32,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            width: 1.5,
            breadth: 1.5,
            depth: 0.12,
            density_kg_m3: 70.0,
            panel_areal_mass_kg_m2: 1.0,
            panel_coverage: 1.0,
        }
    }
}
