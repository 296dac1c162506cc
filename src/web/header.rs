use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::{HtmlCanvasElement, Window};

use super::frame::AnimationFrameScheduler;
use super::surface::HeaderCanvas;
use super::viewport;
use crate::gpu::render_context::RenderContext;
use crate::options::SceneOptions;
use crate::renderer::{GpuSceneBackend, SurfaceHost};
use crate::scene::{SceneController, SurfaceSize};

type WebController =
    SceneController<GpuSceneBackend<HeaderCanvas>, AnimationFrameScheduler>;

type SharedController = Rc<RefCell<Option<WebController>>>;

/// The rotating solid behind the page header, from mount to unmount.
///
/// GPU initialization is asynchronous: the canvas is inserted immediately,
/// the controller starts once the device is ready. If the page unmounts
/// first, the initialization result is discarded. If initialization fails
/// the canvas is removed and the header renders without decoration.
pub struct HeaderScene {
    controller: SharedController,
    unmounted: Rc<Cell<bool>>,
    canvas: Option<HtmlCanvasElement>,
    resize: Option<EventListener>,
}

impl HeaderScene {
    /// Mount the decoration into the element with DOM id `header_id`.
    ///
    /// Does nothing (and logs at debug level) when the window, the header
    /// element or the viewport size is unavailable.
    pub fn mount(header_id: &str, options: &SceneOptions) -> Self {
        let mut scene = Self {
            controller: Rc::new(RefCell::new(None)),
            unmounted: Rc::new(Cell::new(false)),
            canvas: None,
            resize: None,
        };

        let Some(window) = web_sys::window() else {
            return scene;
        };
        let header = window
            .document()
            .and_then(|d| d.get_element_by_id(header_id));
        let (Some(header), Some(initial)) = (header, viewport(&window)) else {
            log::debug!("no #{header_id} surface, decoration skipped");
            return scene;
        };

        let size = SurfaceSize::for_viewport(initial, options.height_fraction);
        let canvas = match HeaderCanvas::attach(&header, size) {
            Ok(canvas) => canvas,
            Err(e) => {
                log::warn!("header decoration disabled: {e}");
                return scene;
            }
        };
        scene.canvas = Some(canvas.element().clone());

        let controller = Rc::clone(&scene.controller);
        let resize_window = window.clone();
        scene.resize = Some(EventListener::new(&window, "resize", move |_| {
            let Some(current) = viewport(&resize_window) else {
                return;
            };
            if let Some(c) = controller.borrow_mut().as_mut() {
                c.on_resize(current);
            }
        }));

        wasm_bindgen_futures::spawn_local(start(
            window,
            canvas,
            size,
            options.clone(),
            Rc::clone(&scene.controller),
            Rc::clone(&scene.unmounted),
        ));
        scene
    }

    /// Whether the controller is running (GPU initialized, not unmounted).
    pub fn is_running(&self) -> bool {
        self.controller
            .borrow()
            .as_ref()
            .is_some_and(SceneController::is_running)
    }

    /// Stop rendering and release everything. Safe to call more than once.
    pub fn unmount(&mut self) {
        self.unmounted.set(true);
        self.resize = None;

        let controller = self.controller.borrow_mut().take();
        if let Some(mut controller) = controller {
            controller.teardown();
        }
        // Covers an unmount while GPU setup is still in flight.
        if let Some(canvas) = self.canvas.take() {
            canvas.remove();
        }
    }
}

impl Drop for HeaderScene {
    fn drop(&mut self) {
        self.unmount();
    }
}

async fn start(
    window: Window,
    mut canvas: HeaderCanvas,
    size: SurfaceSize,
    options: SceneOptions,
    controller: SharedController,
    unmounted: Rc<Cell<bool>>,
) {
    let target = wgpu::SurfaceTarget::Canvas(canvas.element().clone());
    let context = match RenderContext::new(target, (size.width, size.height)).await {
        Ok(context) => context,
        Err(e) => {
            log::warn!("header decoration disabled: {e}");
            canvas.detach();
            return;
        }
    };

    // The viewport may have changed while the device was being created.
    let Some(current) = viewport(&window) else {
        canvas.detach();
        context.device.destroy();
        return;
    };
    let backend = GpuSceneBackend::new(context, canvas, &options);

    // The scheduler lives inside the controller; a weak reference keeps
    // the frame callback from holding it alive.
    let weak = Rc::downgrade(&controller);
    let scheduler = AnimationFrameScheduler::new(move |_timestamp| {
        if let Some(controller) = weak.upgrade() {
            if let Some(c) = controller.borrow_mut().as_mut() {
                c.on_frame();
            }
        }
    });

    *controller.borrow_mut() =
        SceneController::mount_settled(backend, scheduler, current, &options, unmounted.get());
}
