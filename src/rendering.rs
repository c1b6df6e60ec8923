//! Rendering system with wgpu pipelines and shader program management.

use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use log::{error, warn};
use wgpu::util::DeviceExt;
use winit::dpi::PhysicalSize;
use winit::window::Window;

use crate::error::RenderError;
use crate::mesh::{PlatformQuad, Vertex, WaveLine};
use crate::params::RenderConfig;
use crate::shader::{ShaderSources, ShaderStage};

/// Uniform buffer for the shader program (view-projection matrix)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct ViewUniforms {
    pub view_proj: [[f32; 4]; 4],
}

impl ViewUniforms {
    pub fn new(half_height: f32, aspect_ratio: f32) -> Self {
        Self {
            view_proj: view_projection(half_height, aspect_ratio).to_cols_array_2d(),
        }
    }
}

/// Orthographic projection centered on the origin showing
/// `2 * half_height` world units vertically
pub fn view_projection(half_height: f32, aspect_ratio: f32) -> Mat4 {
    let half_width = half_height * aspect_ratio;
    Mat4::orthographic_rh(-half_width, half_width, -half_height, half_height, -1.0, 1.0)
}

/// The two pipelines built from the single shader program
struct Pipelines {
    wave: wgpu::RenderPipeline,
    platform: wgpu::RenderPipeline,
}

/// Rendering system managing wgpu device, pipelines, and buffers
pub struct RenderSystem {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
    /// None when the shader program failed to build
    pipelines: Option<Pipelines>,
    wave_vertex_buffer: wgpu::Buffer,
    wave_vertex_count: u32,
    platform_vertex_buffer: wgpu::Buffer,
    platform_index_buffer: wgpu::Buffer,
    platform_index_count: u32,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    clear_color: wgpu::Color,
    view_half_height: f32,
}

impl RenderSystem {
    /// Create new rendering system
    pub async fn new(
        window: Arc<Window>,
        wave_line: &WaveLine,
        platform_quad: &PlatformQuad,
        render_config: &RenderConfig,
    ) -> Result<Self, RenderError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        // Create surface (window must have 'static lifetime via Arc)
        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(RenderError::NoAdapter)?;

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Main Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await?;

        // Errors outside an error scope are logged rather than panicking
        device.on_uncaptured_error(Box::new(|e: wgpu::Error| error!("GPU error: {}", e)));

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or(surface_caps.formats.first())
            .copied()
            .ok_or(RenderError::NoSurfaceFormat)?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            // Frame rate is set by the frame pacer, not by vsync
            present_mode: wgpu::PresentMode::AutoNoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        // Create buffers
        let wave_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Wave Vertex Buffer"),
            contents: bytemuck::cast_slice(&wave_line.vertices),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        let platform_vertex_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Platform Vertex Buffer"),
                contents: bytemuck::cast_slice(&platform_quad.vertices),
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            });

        let platform_index_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Platform Index Buffer"),
                contents: bytemuck::cast_slice(&platform_quad.indices),
                usage: wgpu::BufferUsages::INDEX,
            });

        let uniforms = ViewUniforms::new(
            render_config.view_half_height,
            config.width as f32 / config.height as f32,
        );

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("View Uniform Buffer"),
            contents: bytemuck::cast_slice(&[uniforms]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let uniform_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("View Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("View Bind Group"),
            layout: &uniform_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let sources = ShaderSources::load(
            render_config.vertex_shader_path,
            render_config.fragment_shader_path,
        );
        let pipelines = build_pipelines(
            &device,
            &sources,
            &uniform_bind_group_layout,
            config.format,
        )
        .await;

        let [r, g, b] = render_config.clear_color;

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
            pipelines,
            wave_vertex_buffer,
            wave_vertex_count: wave_line.vertices.len() as u32,
            platform_vertex_buffer,
            platform_index_buffer,
            platform_index_count: platform_quad.indices.len() as u32,
            uniform_buffer,
            uniform_bind_group,
            clear_color: wgpu::Color { r, g, b, a: 1.0 },
            view_half_height: render_config.view_half_height,
        })
    }

    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    /// Reconfigure the surface and keep the view aspect-correct
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }

        self.size = new_size;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);

        let uniforms = ViewUniforms::new(
            self.view_half_height,
            new_size.width as f32 / new_size.height as f32,
        );
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[uniforms]));
    }

    /// Upload the current wave line and platform quad
    pub fn update_meshes(&self, wave_line: &WaveLine, platform_quad: &PlatformQuad) {
        self.queue.write_buffer(
            &self.wave_vertex_buffer,
            0,
            bytemuck::cast_slice(&wave_line.vertices),
        );
        self.queue.write_buffer(
            &self.platform_vertex_buffer,
            0,
            bytemuck::cast_slice(&platform_quad.vertices),
        );
    }

    /// Render a frame: wave line strip, then platform quad
    pub fn render(&self) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // Without a valid program only the clear color is shown
            if let Some(pipelines) = &self.pipelines {
                render_pass.set_bind_group(0, &self.uniform_bind_group, &[]);

                render_pass.set_pipeline(&pipelines.wave);
                render_pass.set_vertex_buffer(0, self.wave_vertex_buffer.slice(..));
                render_pass.draw(0..self.wave_vertex_count, 0..1);

                render_pass.set_pipeline(&pipelines.platform);
                render_pass.set_vertex_buffer(0, self.platform_vertex_buffer.slice(..));
                render_pass.set_index_buffer(
                    self.platform_index_buffer.slice(..),
                    wgpu::IndexFormat::Uint32,
                );
                render_pass.draw_indexed(0..self.platform_index_count, 0, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

/// Compile both stages and link the program into the wave and platform
/// pipelines. Any failure is logged and yields `None`.
async fn build_pipelines(
    device: &wgpu::Device,
    sources: &ShaderSources,
    bind_group_layout: &wgpu::BindGroupLayout,
    format: wgpu::TextureFormat,
) -> Option<Pipelines> {
    let vertex = compile_stage(device, sources, ShaderStage::Vertex).await;
    let fragment = compile_stage(device, sources, ShaderStage::Fragment).await;
    let (vertex, fragment) = (vertex?, fragment?);

    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Render Pipeline Layout"),
        bind_group_layouts: &[bind_group_layout],
        push_constant_ranges: &[],
    });

    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let wave = create_pipeline(
        device,
        &layout,
        &vertex,
        &fragment,
        format,
        wgpu::PrimitiveTopology::LineStrip,
        "Wave Pipeline",
    );
    let platform = create_pipeline(
        device,
        &layout,
        &vertex,
        &fragment,
        format,
        wgpu::PrimitiveTopology::TriangleList,
        "Platform Pipeline",
    );

    if let Some(e) = device.pop_error_scope().await {
        warn!("shader program linking error: {}", e);
        return None;
    }

    Some(Pipelines { wave, platform })
}

async fn compile_stage(
    device: &wgpu::Device,
    sources: &ShaderSources,
    stage: ShaderStage,
) -> Option<wgpu::ShaderModule> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(stage.name()),
        source: wgpu::ShaderSource::Wgsl(sources.source(stage).into()),
    });

    match device.pop_error_scope().await {
        Some(e) => {
            warn!("shader compilation error for {}: {}", stage.name(), e);
            None
        }
        None => Some(module),
    }
}

fn create_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    vertex: &wgpu::ShaderModule,
    fragment: &wgpu::ShaderModule,
    format: wgpu::TextureFormat,
    topology: wgpu::PrimitiveTopology,
    label: &str,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: vertex,
            entry_point: Some("vs_main"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[
                    wgpu::VertexAttribute {
                        offset: 0,
                        shader_location: 0,
                        format: wgpu::VertexFormat::Float32x3,
                    },
                    wgpu::VertexAttribute {
                        offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                        shader_location: 1,
                        format: wgpu::VertexFormat::Float32x3,
                    },
                ],
            }],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: fragment,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            // The quad's triangles have mixed winding
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_view_projection_maps_view_edges_to_clip_edges() {
        let proj = view_projection(1.0, 800.0 / 600.0);

        let top_right = proj.project_point3(Vec3::new(800.0 / 600.0, 1.0, 0.0));
        let bottom_left = proj.project_point3(Vec3::new(-800.0 / 600.0, -1.0, 0.0));

        assert!(top_right.truncate().abs_diff_eq(glam::Vec2::ONE, 1e-6));
        assert!(bottom_left.truncate().abs_diff_eq(-glam::Vec2::ONE, 1e-6));
    }

    #[test]
    fn test_view_projection_keeps_scene_plane_in_depth_range() {
        let proj = view_projection(1.0, 1.0);
        let p = proj.project_point3(Vec3::new(0.3, -0.2, 0.0));

        assert!((0.0..=1.0).contains(&p.z));
        assert!((p.x - 0.3).abs() < 1e-6);
        assert!((p.y + 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_uniforms_layout() {
        assert_eq!(std::mem::size_of::<ViewUniforms>(), 64);
        assert_eq!(std::mem::size_of::<Vertex>(), 24);

        let uniforms = ViewUniforms::new(2.0, 1.0);
        assert_eq!(uniforms.view_proj[0][0], 0.5);
        assert_eq!(uniforms.view_proj[1][1], 0.5);
    }
}
