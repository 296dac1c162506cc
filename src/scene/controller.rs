use super::state::{RotationRates, SceneState, SurfaceSize, Viewport};
use crate::options::SceneOptions;

/// Opaque id of a scheduled frame callback (a `requestAnimationFrame`
/// handle in the browser).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Schedules the controller's next [`on_frame`](SceneController::on_frame)
/// call at the display refresh rate.
pub trait FrameScheduler {
    /// Ask for one callback on the next display refresh. Returns `None` if
    /// the host refused to schedule it.
    fn request_frame(&mut self) -> Option<FrameHandle>;

    /// Cancel a callback returned by [`request_frame`](Self::request_frame)
    /// that has not fired yet.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Everything that draws the decoration: surface, geometry, material,
/// lights, camera and renderer.
///
/// The four release methods are called in order on teardown, each exactly
/// once, whether or not the others had anything to release.
pub trait SceneBackend {
    /// Resize the render surface and update the camera projection.
    fn resize(&mut self, size: SurfaceSize, aspect: f32);

    /// Draw one frame with the solid at the given orientation.
    fn render(&mut self, state: &SceneState);

    /// Remove the render surface from the page.
    fn detach_surface(&mut self);

    /// Free the solid's vertex data.
    fn release_geometry(&mut self);

    /// Free the material (pipeline and uniforms).
    fn release_material(&mut self);

    /// Free the renderer (device, queue, configured surface).
    fn release_renderer(&mut self);
}

/// Drives the rotating header solid from mount to unmount.
///
/// A controller mounted without a backend (no display surface available)
/// is inert: it never schedules frames and its teardown has nothing to
/// release.
pub struct SceneController<B: SceneBackend, S: FrameScheduler> {
    state: SceneState,
    rates: RotationRates,
    height_fraction: f32,
    backend: Option<B>,
    scheduler: S,
    pending: Option<FrameHandle>,
    torn_down: bool,
}

impl<B: SceneBackend, S: FrameScheduler> SceneController<B, S> {
    /// Size the backend for `viewport` and schedule the first frame.
    pub fn mount(
        backend: Option<B>,
        scheduler: S,
        viewport: Viewport,
        options: &SceneOptions,
    ) -> Self {
        let mut controller = Self::new(backend, scheduler, viewport, options);
        controller.start();
        controller
    }

    /// Mount with a backend produced by asynchronous setup.
    ///
    /// If the owner unmounted while setup was in flight, the backend's
    /// surface is detached and its resources released right away, no frame
    /// is scheduled and `None` is returned.
    pub fn mount_settled(
        backend: B,
        scheduler: S,
        viewport: Viewport,
        options: &SceneOptions,
        unmounted: bool,
    ) -> Option<Self> {
        let mut controller = Self::new(Some(backend), scheduler, viewport, options);
        if unmounted {
            log::debug!("header scene unmounted during setup");
            controller.teardown();
            return None;
        }
        controller.start();
        Some(controller)
    }

    fn new(
        backend: Option<B>,
        scheduler: S,
        viewport: Viewport,
        options: &SceneOptions,
    ) -> Self {
        Self {
            state: SceneState::new(SurfaceSize::for_viewport(
                viewport,
                options.height_fraction,
            )),
            rates: RotationRates::from(options),
            height_fraction: options.height_fraction,
            backend,
            scheduler,
            pending: None,
            torn_down: false,
        }
    }

    fn start(&mut self) {
        let size = self.state.size;
        match self.backend.as_mut() {
            Some(backend) => {
                backend.resize(size, size.aspect());
                self.pending = self.scheduler.request_frame();
                log::debug!(
                    "header scene mounted at {}x{}",
                    size.width,
                    size.height
                );
            }
            None => {
                log::debug!("no header surface, decoration skipped");
            }
        }
    }

    /// One display refresh: rotate, redraw, then schedule the next frame.
    pub fn on_frame(&mut self) {
        self.pending = None;
        if self.torn_down {
            return;
        }
        let Some(backend) = self.backend.as_mut() else {
            return;
        };
        self.state.advance(self.rates);
        backend.render(&self.state);
        self.pending = self.scheduler.request_frame();
    }

    /// Apply a viewport change immediately; the next frame renders at the
    /// new size.
    pub fn on_resize(&mut self, viewport: Viewport) {
        if self.torn_down {
            return;
        }
        let size = SurfaceSize::for_viewport(viewport, self.height_fraction);
        self.state.resize(size);
        if let Some(backend) = self.backend.as_mut() {
            backend.resize(size, self.state.aspect());
        }
    }

    /// Cancel the pending frame, detach the surface and release every GPU
    /// resource. Subsequent calls do nothing.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;

        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        if let Some(mut backend) = self.backend.take() {
            backend.detach_surface();
            backend.release_geometry();
            backend.release_material();
            backend.release_renderer();
        }
        log::debug!("header scene torn down");
    }

    /// Current orientation and size.
    #[must_use]
    pub const fn state(&self) -> &SceneState {
        &self.state
    }

    /// Frame callback currently scheduled, if any.
    #[must_use]
    pub const fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// `true` while a backend is attached and teardown has not run.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        !self.torn_down && self.backend.is_some()
    }

    /// The backend, until teardown releases it.
    #[must_use]
    pub const fn backend(&self) -> Option<&B> {
        self.backend.as_ref()
    }
}

impl<B: SceneBackend, S: FrameScheduler> Drop for SceneController<B, S> {
    fn drop(&mut self) {
        self.teardown();
    }
}
