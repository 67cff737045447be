//! Application event loop: winit handler wiring simulation, camera, renderer.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::agent::Population;
use crate::camera::OrbitCamera;
use crate::error::AppError;
use crate::gpu::GpuState;
use crate::input::Input;
use crate::time::Time;

const WINDOW_TITLE: &str = "Strange Trails";

/// Frames between FPS refreshes of the window title.
const TITLE_UPDATE_FRAMES: u64 = 30;

struct App {
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    population: Population,
    camera: OrbitCamera,
    input: Input,
    time: Time,
}

impl App {
    fn new() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            window: None,
            gpu_state: None,
            population: Population::seed(&mut rng),
            camera: OrbitCamera::new(),
            input: Input::new(),
            time: Time::new(),
        }
    }

    /// One full frame: fixed-step simulation, camera input, render.
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        self.time.update();

        self.population.step_frame();

        self.camera.handle_input(&self.input);
        self.input.begin_frame();

        if let Some(gpu_state) = &mut self.gpu_state {
            match gpu_state.render(&self.camera, &self.population) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => gpu_state.resize(winit::dpi::PhysicalSize {
                    width: gpu_state.config.width,
                    height: gpu_state.config.height,
                }),
                Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                Err(e) => eprintln!("Render error: {:?}", e),
            }
        }

        if let Some(window) = &self.window {
            if self.time.frame() % TITLE_UPDATE_FRAMES == 0 {
                window.set_title(&format!("{} — {:.0} fps", WINDOW_TITLE, self.time.fps()));
            }
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attrs = Window::default_attributes()
                .with_title(WINDOW_TITLE)
                .with_inner_size(winit::dpi::LogicalSize::new(1200, 800));

            let window = match event_loop.create_window(window_attrs) {
                Ok(window) => Arc::new(window),
                Err(e) => {
                    eprintln!("{}", AppError::Window(e));
                    event_loop.exit();
                    return;
                }
            };
            self.window = Some(window.clone());

            match pollster::block_on(GpuState::new(window)) {
                Ok(gpu_state) => self.gpu_state = Some(gpu_state),
                Err(e) => {
                    eprintln!("{}", AppError::Gpu(e));
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.input.handle_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => {
                self.frame(event_loop);
            }
            _ => {}
        }
    }
}

/// Run the visualization. Blocks until the window is closed.
pub fn run() -> Result<(), AppError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app)?;
    Ok(())
}
