//! Integration and start-up parameters.

/// Time stepping and numerical integration parameters
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Fixed timestep (seconds)
    pub dt_s: f32,

    /// Segments the bottom face is split into for the pressure integral.
    /// Must be at least 1; the pressure is sampled at `force_samples + 1`
    /// points, ends included. Zero is treated as 1.
    pub force_samples: usize,

    /// Height of the center of mass above the wave amplitude at start,
    /// as a fraction of the platform depth.
    /// 0.2 keeps the start-up transient small.
    pub initial_clearance_fraction: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt_s: 0.001,
            force_samples: 5000,
            initial_clearance_fraction: 0.2,
        }
    }
}
