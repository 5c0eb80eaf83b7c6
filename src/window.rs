//! winit host for the animated backdrop.
//!
//! Opens one window, mounts an [`Animation`] on it and drives it from
//! `RedrawRequested`. The window's redraw request is the frame scheduler;
//! closing the window unmounts the animation before the loop exits.
//!
//! Keys: `Space` pauses and resumes, `Escape` closes.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::animation::{Animation, FrameScheduler};
use crate::config::SceneConfig;
use crate::error::AppError;
use crate::gpu::GpuState;
use crate::simulation::SymbolSimulator;
use crate::time::FrameClock;
use crate::viewport::{Viewport, ViewportProvider};

const TITLE_REFRESH: Duration = Duration::from_secs(1);

/// Frame scheduler backed by `Window::request_redraw`.
pub struct WindowScheduler {
    window: Arc<Window>,
    active: bool,
}

impl WindowScheduler {
    pub fn new(window: Arc<Window>) -> Self {
        Self {
            window,
            active: true,
        }
    }
}

impl FrameScheduler for WindowScheduler {
    fn request_frame(&mut self) {
        if self.active {
            self.window.request_redraw();
        }
    }

    fn cancel(&mut self) {
        self.active = false;
    }
}

/// Logical inner size of a window.
struct WindowViewport<'a>(&'a Window);

impl ViewportProvider for WindowViewport<'_> {
    fn viewport(&self) -> Viewport {
        let size = self.0.inner_size().to_logical::<f64>(self.0.scale_factor());
        Viewport::new(size.width, size.height)
    }
}

pub struct App {
    scene: SceneConfig,
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    animation: Option<Animation<WindowScheduler>>,
    error: Option<AppError>,
    last_title_update: Instant,
}

impl App {
    pub fn new(scene: SceneConfig) -> Self {
        Self {
            scene,
            window: None,
            gpu_state: None,
            animation: None,
            error: None,
            last_title_update: Instant::now(),
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        let window_attrs = Window::default_attributes()
            .with_title(self.scene.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.scene.window.width,
                self.scene.window.height,
            ));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let capacity = self.scene.labels.len();
        let gpu_state = pollster::block_on(GpuState::new(window.clone(), capacity))?;

        let viewport = WindowViewport(&window).viewport();
        let simulator = SymbolSimulator::from_scene(&self.scene, viewport);
        let clock = FrameClock::from_secs(self.scene.motion.min_frame_interval);
        let scheduler = WindowScheduler::new(window.clone());
        let animation = Animation::mount(simulator, clock, scheduler);

        self.window = Some(window);
        self.gpu_state = Some(gpu_state);
        self.animation = Some(animation);
        Ok(())
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(animation) = self.animation.take() {
            let simulator = animation.unmount();
            debug!(ticks = simulator.ticks(), "released simulator");
        }
        event_loop.exit();
    }

    fn update_title(&mut self) {
        let (Some(window), Some(animation)) = (&self.window, &self.animation) else {
            return;
        };
        if self.last_title_update.elapsed() < TITLE_REFRESH {
            return;
        }
        self.last_title_update = Instant::now();

        let clock = animation.clock();
        let title = if clock.is_paused() {
            format!("{} (paused)", self.scene.window.title)
        } else {
            format!("{} - {:.0} fps", self.scene.window.title, clock.fps())
        };
        window.set_title(&title);
        debug!(fps = clock.fps(), frame = clock.frame(), "frame stats");
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(gpu_state), Some(animation)) =
            (&self.window, &mut self.gpu_state, &mut self.animation)
        else {
            return;
        };

        animation.on_frame(Instant::now(), &WindowViewport(window), gpu_state);

        match gpu_state.render() {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu_state.resize(winit::dpi::PhysicalSize {
                    width: gpu_state.config.width,
                    height: gpu_state.config.height,
                })
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("GPU out of memory, closing");
                self.shutdown(event_loop);
                return;
            }
            Err(e) => warn!(error = ?e, "skipped frame"),
        }

        self.update_title();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init(event_loop) {
                error!(error = %e, "failed to start");
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.shutdown(event_loop);
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                    debug!(
                        width = physical_size.width,
                        height = physical_size.height,
                        "resized"
                    );
                }
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.set_scale_factor(scale_factor);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => match code {
                KeyCode::Space => {
                    if let Some(animation) = &mut self.animation {
                        animation.toggle_pause();
                    }
                }
                KeyCode::Escape => self.shutdown(event_loop),
                _ => {}
            },
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            _ => {}
        }
    }
}

/// Open a window and animate `scene` until it is closed.
pub fn run(scene: SceneConfig) -> Result<(), AppError> {
    scene.validate()?;
    info!(
        labels = scene.labels.len(),
        seed = ?scene.seed,
        "starting glyphfloat"
    );

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(scene);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
