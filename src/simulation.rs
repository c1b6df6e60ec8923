//! High-level simulation system: wave, platform and their display meshes.

use log::{info, trace};

use crate::mesh::{PlatformQuad, WaveLine};
use crate::params::{Environment, PlatformConfig, RenderConfig, SimConfig, WaveConfig};
use crate::platform::{HydrostaticLoads, PlatformDynamics, PlatformGeometry, PlatformState};
use crate::wave::WaveParameters;

/// Owns all simulation state; advanced once per frame
pub struct Simulation {
    pub wave: WaveParameters,
    pub dynamics: PlatformDynamics,
    pub state: PlatformState,
    pub wave_line: WaveLine,
    pub platform_quad: PlatformQuad,
    time_s: f32,
    dt_s: f32,
    steps: u64,
}

impl Simulation {
    /// Create the simulation with the platform level and at rest above the crest
    pub fn new(
        wave_config: &WaveConfig,
        platform_config: &PlatformConfig,
        env: Environment,
        sim_config: &SimConfig,
        render_config: &RenderConfig,
    ) -> Self {
        let wave = WaveParameters::from_config(wave_config, &env);
        let geometry = PlatformGeometry::from_config(platform_config, &env);
        let state = PlatformState::initial(&wave, &geometry, sim_config);
        let dynamics = PlatformDynamics::new(geometry, env, sim_config.force_samples);

        info!(
            "Wave: amplitude {:.3}, wavenumber {:.4}/unit, angular frequency {:.4} rad/s, phase velocity {:.4} units/s",
            wave.amplitude, wave.wavenumber, wave.angular_frequency, wave.phase_velocity
        );
        info!(
            "Wave: wavelength {:.3} units, period {:.3} s",
            wave.wavelength(),
            wave.period_s()
        );
        info!(
            "Platform: mass {:.1} kg, moment of inertia {:.1} kg m^2, still-water draft {:.4} units",
            geometry.mass_kg,
            geometry.moment_of_inertia_kg_m2,
            dynamics.still_water_draft()
        );

        let mut wave_line = WaveLine::new(wave_config, render_config.wave_color);
        wave_line.update(&wave, 0.0);
        let platform_quad = PlatformQuad::new(&state, &geometry, render_config.platform_color);

        Self {
            wave,
            dynamics,
            state,
            wave_line,
            platform_quad,
            time_s: 0.0,
            dt_s: sim_config.dt_s,
            steps: 0,
        }
    }

    /// Simulated time (seconds)
    pub fn time_s(&self) -> f32 {
        self.time_s
    }

    /// Advance one fixed step: move the wave, integrate the platform and
    /// rebuild both meshes
    pub fn update(&mut self) -> HydrostaticLoads {
        self.time_s += self.dt_s;
        self.steps += 1;

        self.wave_line.update(&self.wave, self.time_s);

        let (next, loads) = self
            .dynamics
            .step(&self.state, &self.wave, self.time_s, self.dt_s);
        self.state = next;

        self.platform_quad
            .update(&self.state, self.dynamics.geometry());

        trace!(
            "step {} (t = {:.3} s): force {:.1} N, couple {:.2} N m, height {:.4}, angle {:.4}",
            self.steps,
            self.time_s,
            loads.force_n,
            loads.couple_nm,
            self.state.position.y,
            self.state.angle
        );

        loads
    }
}
