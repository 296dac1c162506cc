//! Standalone preview window for the header scene, backed by winit.
//!
//! The window stands in for the whole header: the solid fills it, rotates
//! at the configured per-frame rates and follows window resizes.
//!
//! ```no_run
//! # use vitae::Viewer;
//! Viewer::builder()
//!     .with_title("header preview")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    error::VitaeError,
    gpu::render_context::RenderContext,
    options::{Options, SceneOptions},
    renderer::{GpuSceneBackend, SurfaceHost},
    scene::{
        FrameHandle, FrameScheduler, SceneController, SurfaceSize, Viewport,
    },
};

type WindowController = SceneController<GpuSceneBackend<WindowHost>, RedrawScheduler>;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with default options and the title "vitae preview".
    fn new() -> Self {
        Self {
            options: None,
            title: "vitae preview".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A window showing the header solid on its own.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`VitaeError::Viewer`] if the event loop cannot be created
    /// or exits abnormally.
    pub fn run(self) -> Result<(), VitaeError> {
        let event_loop =
            EventLoop::new().map_err(|e| VitaeError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Wait);

        // The window is the header, so the surface takes all of it.
        let scene = SceneOptions {
            height_fraction: 1.0,
            ..self.options.scene
        };

        let mut app = ViewerApp {
            window: None,
            controller: None,
            scene,
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| VitaeError::Viewer(e.to_string()))
    }
}

// ── Surface and frame hooks ──────────────────────────────────────────────

/// [`SurfaceHost`] for the preview window. winit owns the window size, so
/// resizing is a no-op; detaching hides the window.
struct WindowHost {
    window: Arc<Window>,
}

impl SurfaceHost for WindowHost {
    fn set_size(&mut self, _size: SurfaceSize) {}

    fn detach(&mut self) {
        self.window.set_visible(false);
    }
}

/// [`FrameScheduler`] that asks winit for a redraw. Redraw requests cannot
/// be withdrawn; a stale one reaches a torn-down controller and is ignored.
struct RedrawScheduler {
    window: Arc<Window>,
    next: i32,
}

impl FrameScheduler for RedrawScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.window.request_redraw();
        self.next = self.next.wrapping_add(1);
        Some(FrameHandle(self.next))
    }

    fn cancel_frame(&mut self, _handle: FrameHandle) {}
}

fn window_viewport(window: &Window) -> Viewport {
    let inner = window.inner_size();
    Viewport::new(
        f64::from(inner.width.max(1)),
        f64::from(inner.height.max(1)),
    )
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    controller: Option<WindowController>,
    scene: SceneOptions,
    title: String,
}

impl ViewerApp {
    /// Logical window size: three quarters of the monitor wide and 40% of it
    /// tall, a fixed 1280x512 strip when no monitor is known.
    fn initial_size(event_loop: &ActiveEventLoop) -> winit::dpi::LogicalSize<u32> {
        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let Some(mon) = monitor else {
            return winit::dpi::LogicalSize::new(1280, 512);
        };
        let mon_size = mon.size();
        let scale = mon.scale_factor();
        let width = f64::from(mon_size.width) / scale * 0.75;
        let height = f64::from(mon_size.height) / scale * 0.4;
        winit::dpi::LogicalSize::new(width as u32, height as u32)
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_transparent(true)
            .with_inner_size(Self::initial_size(event_loop));
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let viewport = window_viewport(&window);
        let size = SurfaceSize::for_viewport(viewport, self.scene.height_fraction);
        let context = match pollster::block_on(RenderContext::new(
            Arc::clone(&window),
            (size.width, size.height),
        )) {
            Ok(context) => context,
            Err(e) => {
                log::error!("Failed to initialize renderer: {e}");
                event_loop.exit();
                return;
            }
        };

        let host = WindowHost {
            window: Arc::clone(&window),
        };
        let backend = GpuSceneBackend::new(context, host, &self.scene);
        let scheduler = RedrawScheduler {
            window: Arc::clone(&window),
            next: 0,
        };
        self.controller = Some(SceneController::mount(
            Some(backend),
            scheduler,
            viewport,
            &self.scene,
        ));
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                if let Some(mut controller) = self.controller.take() {
                    controller.teardown();
                }
                event_loop.exit();
            }

            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                if let (Some(window), Some(controller)) =
                    (&self.window, &mut self.controller)
                {
                    controller.on_resize(window_viewport(window));
                }
            }

            WindowEvent::RedrawRequested => {
                if let Some(controller) = &mut self.controller {
                    controller.on_frame();
                }
            }

            _ => (),
        }
    }
}
