//! WaveSim - a floating platform heaving and pitching on a traveling wave.
//!
//! One window, one shader program: the wave is drawn as a line strip and the
//! platform as a quad, both rebuilt every fixed simulation step.

use std::sync::Arc;

use anyhow::Context;
use log::{error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use wavesim::clock::FramePacer;
use wavesim::params::*;
use wavesim::rendering::RenderSystem;
use wavesim::simulation::Simulation;

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    simulation: Simulation,
    pacer: FramePacer,
    render_config: RenderConfig,

    /// Set when start-up fails inside the event loop
    fatal: Option<anyhow::Error>,
}

impl App {
    fn new() -> Self {
        let render_config = RenderConfig::default();
        let simulation = Simulation::new(
            &WaveConfig::default(),
            &PlatformConfig::default(),
            Environment::default(),
            &SimConfig::default(),
            &render_config,
        );

        Self {
            window: None,
            render_system: None,
            simulation,
            pacer: FramePacer::new(),
            render_config,
            fatal: None,
        }
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let window_attributes = Window::default_attributes()
            .with_title(self.render_config.title)
            .with_inner_size(winit::dpi::PhysicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = Arc::new(
            event_loop
                .create_window(window_attributes)
                .context("Failed to create window")?,
        );

        let render_system = pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            &self.simulation.wave_line,
            &self.simulation.platform_quad,
            &self.render_config,
        ))
        .context("Failed to initialise graphics")?;

        self.window = Some(window);
        self.render_system = Some(render_system);
        Ok(())
    }

    /// Advance the simulation one step and draw it
    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render_system) = self.render_system.as_mut() else {
            return;
        };

        self.simulation.update();
        self.pacer.pace(self.simulation.time_s());

        render_system.update_meshes(
            &self.simulation.wave_line,
            &self.simulation.platform_quad,
        );

        match render_system.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = render_system.size();
                render_system.resize(size);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("GPU out of memory");
                event_loop.exit();
            }
            Err(e) => warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        match self.init_graphics(event_loop) {
            Ok(()) => info!("WaveSim is running, press ESC to quit"),
            Err(e) => {
                self.fatal = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(physical_size) => {
                if let Some(render_system) = &mut self.render_system {
                    render_system.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => self.render_frame(event_loop),
            _ => {}
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app)?;

    match app.fatal.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
