//! Hydrostatic loads and semi-implicit Euler integration of heave and pitch.

use glam::Vec2;

use super::{PlatformGeometry, PlatformState};
use crate::params::Environment;
use crate::wave::WaveParameters;

/// Net vertical force and couple acting on the platform
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HydrostaticLoads {
    /// Net vertical force including weight (N, up positive)
    pub force_n: f32,
    /// Net couple about the center of mass (N m, counter-clockwise positive)
    pub couple_nm: f32,
    /// Number of bottom-face samples below the water surface
    pub submerged_samples: usize,
}

/// Heave/pitch integrator for a rigid platform on a traveling wave
#[derive(Debug, Clone)]
pub struct PlatformDynamics {
    geometry: PlatformGeometry,
    env: Environment,
    force_samples: usize,
}

impl PlatformDynamics {
    /// Create an integrator splitting the bottom face into `force_samples`
    /// segments. Zero is raised to one.
    pub fn new(geometry: PlatformGeometry, env: Environment, force_samples: usize) -> Self {
        Self {
            geometry,
            env,
            force_samples: force_samples.max(1),
        }
    }

    pub fn geometry(&self) -> &PlatformGeometry {
        &self.geometry
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Still-water draft (world units) at which the loads below balance the
    /// weight on a level platform.
    ///
    /// The bottom face is sampled at `force_samples + 1` points, each standing
    /// for one segment of width `width / force_samples` in world units, so the
    /// wetted footprint is `(force_samples + 1) * segment` by the breadth in
    /// meters.
    pub fn still_water_draft(&self) -> f32 {
        let geometry = &self.geometry;
        let env = &self.env;

        let segment = geometry.width / self.force_samples as f32;
        let wetted = (self.force_samples + 1) as f32 * segment;
        let stiffness = env.water_density_kg_m3
            * env.gravity_mps2
            * wetted
            * env.to_meters(geometry.breadth);

        env.to_units(geometry.mass_kg / stiffness)
    }

    /// Integrate hydrostatic pressure along the bottom face.
    ///
    /// The face is sampled at `force_samples + 1` evenly spaced points,
    /// both ends included. At each point the lever arm `x` is the sample's
    /// horizontal offset plus the center of mass abscissa, in meters. The
    /// bottom height is `(y - (d/2) cos(theta) + x sin(theta))` scaled to
    /// meters, and the wave is read at `(cx + offset cos(theta))` scaled to
    /// meters. A submerged point adds `rho dx h b g / cos(theta)` to the
    /// force and `x rho dx h b g` to the couple, with `h` the depth below the
    /// surface in meters, `b` the breadth in meters and `dx` the segment
    /// width in world units. Submersion depth is not capped.
    pub fn hydrostatic_loads(
        &self,
        state: &PlatformState,
        wave: &WaveParameters,
        time_s: f32,
    ) -> HydrostaticLoads {
        let geometry = &self.geometry;
        let env = &self.env;

        let segment = geometry.width / self.force_samples as f32;
        let breadth_m = env.to_meters(geometry.breadth);
        let (sin_angle, cos_angle) = state.angle.sin_cos();
        let half_width = geometry.width / 2.0;
        let half_depth = geometry.depth / 2.0;

        let mut loads = HydrostaticLoads {
            force_n: -geometry.weight_n(env),
            ..Default::default()
        };

        for i in 0..=self.force_samples {
            let offset = -half_width + i as f32 * segment;

            let lever_m = env.to_meters(state.position.x + offset);
            let horizontal_m = env.to_meters(state.position.x + offset * cos_angle);
            let bottom_m =
                env.to_meters(state.position.y - half_depth * cos_angle + lever_m * sin_angle);
            let water_m = env.to_meters(wave.height(horizontal_m, time_s));

            if bottom_m < water_m {
                let d_force = env.water_density_kg_m3
                    * segment
                    * (water_m - bottom_m)
                    * breadth_m
                    * env.gravity_mps2;

                loads.force_n += d_force / cos_angle;
                loads.couple_nm += lever_m * d_force;
                loads.submerged_samples += 1;
            }
        }

        loads
    }

    /// Advance the state by `dt_s` using loads evaluated at `time_s`.
    ///
    /// Velocities are updated first and the new velocities move the
    /// platform. No stability bound is enforced on `dt_s`.
    pub fn step(
        &self,
        state: &PlatformState,
        wave: &WaveParameters,
        time_s: f32,
        dt_s: f32,
    ) -> (PlatformState, HydrostaticLoads) {
        let loads = self.hydrostatic_loads(state, wave, time_s);

        // Velocity is held in world units per second: v (m/s) moves the
        // center of mass by v * dt / meters_per_unit
        let acceleration = self.env.to_units(loads.force_n / self.geometry.mass_kg);
        let angular_acceleration = loads.couple_nm / self.geometry.moment_of_inertia_kg_m2;

        let velocity = state.velocity + Vec2::new(0.0, acceleration * dt_s);
        let angular_velocity = state.angular_velocity + angular_acceleration * dt_s;

        let next = PlatformState {
            position: state.position + velocity * dt_s,
            angle: state.angle + angular_velocity * dt_s,
            velocity,
            angular_velocity,
        };

        (next, loads)
    }
}
