//! Rigid floating platform: geometry, state and heave/pitch dynamics.

mod dynamics;

// Re-export public types
pub use dynamics::{HydrostaticLoads, PlatformDynamics};

use glam::Vec2;

use crate::params::{Environment, PlatformConfig, SimConfig};
use crate::wave::WaveParameters;

/// Platform dimensions and inertial properties.
///
/// Dimensions are in world units, mass and inertia in SI.
/// Derived once at start-up and never modified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformGeometry {
    pub width: f32,
    pub depth: f32,
    pub breadth: f32,
    pub mass_kg: f32,
    /// Moment of inertia about the pitch axis (kg m^2)
    pub moment_of_inertia_kg_m2: f32,
}

impl PlatformGeometry {
    /// Derive mass and inertia of the hull plus the panels on its top face
    pub fn from_config(config: &PlatformConfig, env: &Environment) -> Self {
        let width_m = env.to_meters(config.width);
        let breadth_m = env.to_meters(config.breadth);
        let depth_m = env.to_meters(config.depth);

        let hull_mass = config.density_kg_m3 * width_m * breadth_m * depth_m;
        let panel_mass =
            config.panel_areal_mass_kg_m2 * config.panel_coverage * width_m * breadth_m;

        let mass = hull_mass + panel_mass;

        // Box term over the total mass, plus the panel sheet half a depth
        // above the center
        let box_inertia = mass * (width_m * width_m + depth_m * depth_m) / 12.0;
        let panel_inertia =
            panel_mass * (width_m * width_m / 12.0 + depth_m * depth_m / 4.0);

        Self {
            width: config.width,
            depth: config.depth,
            breadth: config.breadth,
            mass_kg: mass,
            moment_of_inertia_kg_m2: box_inertia + panel_inertia,
        }
    }

    /// Weight (N)
    pub fn weight_n(&self, env: &Environment) -> f32 {
        self.mass_kg * env.gravity_mps2
    }
}

/// Kinematic state of the platform (world units, radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformState {
    /// Center of mass
    pub position: Vec2,
    /// Pitch angle, counter-clockwise positive
    pub angle: f32,
    pub velocity: Vec2,
    pub angular_velocity: f32,
}

impl PlatformState {
    /// Level platform at rest with its center of mass at `position`
    pub fn at_rest(position: Vec2) -> Self {
        Self {
            position,
            angle: 0.0,
            velocity: Vec2::ZERO,
            angular_velocity: 0.0,
        }
    }

    /// Start-up state: level, at rest, centered, just above the wave crest
    pub fn initial(wave: &WaveParameters, geometry: &PlatformGeometry, sim: &SimConfig) -> Self {
        let height = wave.amplitude + geometry.depth * sim.initial_clearance_fraction;
        Self::at_rest(Vec2::new(0.0, height))
    }

    /// Map a point from platform-local coordinates to world coordinates
    pub fn to_world(&self, local: Vec2) -> Vec2 {
        self.position + Vec2::from_angle(self.angle).rotate(local)
    }

    /// Quad corners in world coordinates:
    /// bottom-left, top-left, bottom-right, top-right
    pub fn corners(&self, geometry: &PlatformGeometry) -> [Vec2; 4] {
        let hw = geometry.width / 2.0;
        let hd = geometry.depth / 2.0;
        [
            self.to_world(Vec2::new(-hw, -hd)),
            self.to_world(Vec2::new(-hw, hd)),
            self.to_world(Vec2::new(hw, -hd)),
            self.to_world(Vec2::new(hw, hd)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_geometry() -> PlatformGeometry {
        PlatformGeometry::from_config(&PlatformConfig::default(), &Environment::default())
    }

    #[test]
    fn test_geometry_mass_and_inertia() {
        let geometry = default_geometry();

        // Hull: 70 * (1.5 * 3.35)^2 * (0.12 * 3.35), panels: 1.0 * (1.5 * 3.35)^2
        assert!((geometry.mass_kg - 735.803).abs() < 0.01);

        // Total mass in the box term, panels counted again as a sheet
        let (w, d) = (1.5f64 * 3.35, 0.12f64 * 3.35);
        let panel = w * w;
        let mass = 70.0 * w * w * d + panel;
        let expected = mass * (w * w + d * d) / 12.0 + panel * (w * w / 12.0 + d * d / 4.0);
        assert!((expected - 1612.3527).abs() < 1e-3);
        assert!((geometry.moment_of_inertia_kg_m2 as f64 - expected).abs() < 0.05);
        assert_eq!(geometry.width, 1.5);
        assert_eq!(geometry.depth, 0.12);
    }

    #[test]
    fn test_weight() {
        let env = Environment::default();
        let geometry = default_geometry();

        assert!((geometry.weight_n(&env) - 7218.23).abs() < 0.01);
    }

    #[test]
    fn test_initial_state() {
        let env = Environment::default();
        let wave = WaveParameters::from_config(&crate::params::WaveConfig::default(), &env);
        let state = PlatformState::initial(&wave, &default_geometry(), &SimConfig::default());

        assert!((state.position.y - 0.224).abs() < 1e-6);
        assert_eq!(state.position.x, 0.0);
        assert_eq!(state.angle, 0.0);
        assert_eq!(state.velocity, Vec2::ZERO);
        assert_eq!(state.angular_velocity, 0.0);
    }

    #[test]
    fn test_level_corners() {
        let geometry = default_geometry();
        let state = PlatformState::at_rest(Vec2::new(0.5, 1.0));
        let [bl, tl, br, tr] = state.corners(&geometry);

        assert!(bl.abs_diff_eq(Vec2::new(-0.25, 0.94), 1e-6));
        assert!(tl.abs_diff_eq(Vec2::new(-0.25, 1.06), 1e-6));
        assert!(br.abs_diff_eq(Vec2::new(1.25, 0.94), 1e-6));
        assert!(tr.abs_diff_eq(Vec2::new(1.25, 1.06), 1e-6));
    }

    #[test]
    fn test_tilted_corners_rotate_about_center() {
        let geometry = default_geometry();
        let mut state = PlatformState::at_rest(Vec2::ZERO);
        state.angle = std::f32::consts::FRAC_PI_2;

        // Quarter turn counter-clockwise: the right end points up
        let [bl, _, br, _] = state.corners(&geometry);
        assert!(br.abs_diff_eq(Vec2::new(0.06, 0.75), 1e-6));
        assert!(bl.abs_diff_eq(Vec2::new(0.06, -0.75), 1e-6));

        for corner in state.corners(&geometry) {
            let radius = (geometry.width * geometry.width + geometry.depth * geometry.depth)
                .sqrt()
                / 2.0;
            assert!((corner.length() - radius).abs() < 1e-5);
        }
    }
}
