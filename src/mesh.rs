//! Display meshes: the wave line strip and the platform quad.

use bytemuck::{Pod, Zeroable};

use crate::params::WaveConfig;
use crate::platform::{PlatformGeometry, PlatformState};
use crate::wave::WaveParameters;

/// Vertex data shared by both meshes (position + color)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// Water surface sampled at fixed abscissae, drawn as a line strip
pub struct WaveLine {
    pub vertices: Vec<Vertex>,
}

impl WaveLine {
    /// Create a flat line of `display_samples` vertices covering
    /// `[-half_wavelength, half_wavelength)`
    pub fn new(config: &WaveConfig, color: [f32; 3]) -> Self {
        let n = config.display_samples;
        let half = config.half_wavelength;

        let vertices = (0..n)
            .map(|i| Vertex {
                position: [-half + 2.0 * i as f32 * half / n as f32, 0.0, 0.0],
                color,
            })
            .collect();

        Self { vertices }
    }

    /// Resample the surface height at every vertex
    pub fn update(&mut self, wave: &WaveParameters, time_s: f32) {
        for vertex in &mut self.vertices {
            vertex.position[1] = wave.height(vertex.position[0], time_s);
        }
    }
}

/// Platform rectangle as two triangles
pub struct PlatformQuad {
    /// Bottom-left, top-left, bottom-right, top-right
    pub vertices: [Vertex; 4],
    pub indices: [u32; 6],
}

impl PlatformQuad {
    pub fn new(state: &PlatformState, geometry: &PlatformGeometry, color: [f32; 3]) -> Self {
        let mut quad = Self {
            vertices: [Vertex {
                position: [0.0; 3],
                color,
            }; 4],
            indices: [0, 1, 2, 1, 2, 3],
        };
        quad.update(state, geometry);
        quad
    }

    /// Move the corners to the platform's current pose
    pub fn update(&mut self, state: &PlatformState, geometry: &PlatformGeometry) {
        for (vertex, corner) in self.vertices.iter_mut().zip(state.corners(geometry)) {
            vertex.position = [corner.x, corner.y, 0.0];
        }
    }
}
