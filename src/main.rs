//! Wavefield - an interactive noise-driven wave field
//!
//! Columns of points drift on a simplex-noise current and ripple away
//! from the pointer on damped springs.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use log::{error, info, warn};
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalPosition, PhysicalSize},
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use wavefield::cli::Args;
use wavefield::params::{RenderConfig, WaveParams};
use wavefield::recording;
use wavefield::rendering::gpu::{build_stroke_vertices, RenderSystem};
use wavefield::rendering::trace_columns;
use wavefield::wave::{SharedWaveSimulation, WaveSimulation};

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    // Simulation
    simulation: SharedWaveSimulation,

    // Configuration
    render_config: RenderConfig,

    /// Physical → logical conversion factor
    scale_factor: f64,

    /// Logical viewport size
    viewport: (f64, f64),

    // Time tracking
    start_time: Instant,
}

impl App {
    fn new(seed: f64, render_config: RenderConfig) -> Self {
        let simulation = SharedWaveSimulation::new(WaveSimulation::new(seed));
        let viewport = (
            render_config.window_width as f64,
            render_config.window_height as f64,
        );

        Self {
            window: None,
            render_system: None,
            simulation,
            render_config,
            scale_factor: 1.0,
            viewport,
            start_time: Instant::now(),
        }
    }

    /// Apply a new physical window size to the surface and the simulation
    fn resize(&mut self, size: PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            return;
        }
        let logical: LogicalSize<f64> = size.to_logical(self.scale_factor);
        self.viewport = (logical.width, logical.height);

        self.simulation.resize(logical.width, logical.height);
        if let Some(render_system) = &mut self.render_system {
            render_system.resize((size.width, size.height), self.viewport);
        }
    }

    /// Forward a physical pointer position in logical units
    fn pointer_moved(&self, position: PhysicalPosition<f64>) {
        let logical = position.to_logical::<f64>(self.scale_factor);
        self.simulation.on_pointer_move(logical.x, logical.y);
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

        let window_attributes = Window::default_attributes()
            .with_title("Wavefield")
            .with_inner_size(LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        self.scale_factor = self
            .render_config
            .pixel_ratio
            .unwrap_or_else(|| window.scale_factor());

        let size = window.inner_size();
        let logical: LogicalSize<f64> = size.to_logical(self.scale_factor);
        self.viewport = (logical.width, logical.height);

        let render_system = match pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            (size.width, size.height),
            self.viewport,
            &self.render_config,
        )) {
            Ok(render_system) => render_system,
            Err(e) => {
                error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        self.simulation.resize(self.viewport.0, self.viewport.1);

        info!(
            "Window {}x{} logical at pixel ratio {}",
            self.viewport.0, self.viewport.1, self.scale_factor
        );
        println!("\nWavefield is running!");
        println!("Move the pointer across the waves. Press ESC to quit\n");

        self.window = Some(window);
        self.render_system = Some(render_system);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if self.render_config.pixel_ratio.is_none() {
                    self.scale_factor = scale_factor;
                }
            }
            WindowEvent::Resized(size) => self.resize(size),
            WindowEvent::CursorMoved { position, .. } => self.pointer_moved(position),
            WindowEvent::Touch(Touch {
                phase: TouchPhase::Started | TouchPhase::Moved,
                location,
                ..
            }) => self.pointer_moved(location),
            WindowEvent::RedrawRequested => self.render_frame(event_loop),
            _ => {}
        }
    }
}

impl App {
    /// Advance the simulation and draw a single frame
    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render_system) = &mut self.render_system else {
            return;
        };

        let time_ms = self.start_time.elapsed().as_secs_f64() * 1000.0;

        let render_config = &self.render_config;
        let viewport = self.viewport;
        let vertices = self.simulation.tick(time_ms, |lattice| {
            build_stroke_vertices(&trace_columns(lattice), render_config, viewport)
        });
        render_system.update_vertices(&vertices);

        match render_system.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                if let Some(window) = &self.window {
                    let size = window.inner_size();
                    self.resize(size);
                }
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("GPU out of memory");
                event_loop.exit();
            }
            Err(e) => warn!("Render error: {:?}", e),
        }
    }
}

fn run_window(args: &Args) -> Result<(), String> {
    let render_config = args.render_config();
    render_config.validate()?;

    let mut app = App::new(args.seed, render_config);
    let event_loop =
        EventLoop::new().map_err(|e| format!("Failed to create event loop: {}", e))?;
    event_loop
        .run_app(&mut app)
        .map_err(|e| format!("Event loop error: {}", e))
}

fn run_recording(args: &Args) -> Result<(), String> {
    let Some(config) = args.create_recording_config()? else {
        return Ok(());
    };
    let written = recording::record(
        args.seed,
        WaveParams::default(),
        &args.render_config(),
        &config,
        args.sweep,
    )?;
    println!("Wrote {} frames to {}", written, config.frames_dir().display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    println!("Wavefield - noise-driven wave field");
    println!("Seed: {}\n", args.seed);

    let result = if args.record.is_some() {
        run_recording(&args)
    } else {
        run_window(&args)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
