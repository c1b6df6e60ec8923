//! Window and drawing configuration.

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window title
    pub title: &'static str,

    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Half of the visible height (world units).
    /// Horizontal extent follows from the window aspect ratio.
    pub view_half_height: f32,

    /// Background color (linear RGB)
    pub clear_color: [f64; 3],

    /// Wave line color (linear RGB)
    pub wave_color: [f32; 3],

    /// Platform color (linear RGB)
    pub platform_color: [f32; 3],

    /// Vertex shader source path, relative to the working directory
    pub vertex_shader_path: &'static str,

    /// Fragment shader source path, relative to the working directory
    pub fragment_shader_path: &'static str,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: "WaveSim",
            window_width: 800,
            window_height: 600,
            view_half_height: 1.0,
            clear_color: [0.2, 0.3, 0.3],
            wave_color: [1.0, 0.5, 0.2],
            platform_color: [1.0, 0.5, 0.2],
            vertex_shader_path: "shaders/vertex.wgsl",
            fragment_shader_path: "shaders/fragment.wgsl",
        }
    }
}

