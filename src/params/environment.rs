//! Physical environment shared by the wave model and the platform dynamics.

/// Physical constants of the scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    /// Acceleration due to gravity (m/s^2)
    pub gravity_mps2: f32,

    /// Density of water (kg/m^3)
    pub water_density_kg_m3: f32,

    /// Length of one world (display) unit in meters.
    /// The whole scene is drawn in world units; loads are computed in SI.
    pub meters_per_unit: f32,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            gravity_mps2: 9.81,
            water_density_kg_m3: 997.0,
            meters_per_unit: 3.35,
        }
    }
}

impl Environment {
    /// Convert a length in world units to meters
    pub fn to_meters(&self, units: f32) -> f32 {
        units * self.meters_per_unit
    }

    /// Convert a length in meters to world units
    pub fn to_units(&self, meters: f32) -> f32 {
        meters / self.meters_per_unit
    }
}
