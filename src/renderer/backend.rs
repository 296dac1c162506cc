//! wgpu implementation of the scene backend.

use super::solid::SolidRenderer;
use crate::gpu::render_context::RenderContext;
use crate::options::SceneOptions;
use crate::scene::{SceneBackend, SceneState, SurfaceSize};

/// The page element (or window) the render surface lives in.
pub trait SurfaceHost {
    /// Match the element's drawing-buffer size to `size`.
    fn set_size(&mut self, size: SurfaceSize);

    /// Remove the element from the page. Called once, on teardown.
    fn detach(&mut self);
}

/// Draws the header solid with wgpu into a surface owned by `H`.
pub struct GpuSceneBackend<H: SurfaceHost> {
    context: Option<RenderContext>,
    solid: SolidRenderer,
    host: H,
}

impl<H: SurfaceHost> GpuSceneBackend<H> {
    /// Build the scene (solid, lights, camera) on an initialized context.
    pub fn new(context: RenderContext, host: H, options: &SceneOptions) -> Self {
        let aspect =
            context.config.width as f32 / context.config.height.max(1) as f32;
        let solid = SolidRenderer::new(
            &context.device,
            context.format(),
            context.premultiplied_alpha(),
            options,
            aspect,
        );
        Self {
            context: Some(context),
            solid,
            host,
        }
    }

    /// The surface host.
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// The solid renderer.
    pub const fn solid(&self) -> &SolidRenderer {
        &self.solid
    }
}

impl<H: SurfaceHost> SceneBackend for GpuSceneBackend<H> {
    fn resize(&mut self, size: SurfaceSize, aspect: f32) {
        self.host.set_size(size);
        if let Some(context) = self.context.as_mut() {
            context.resize(size.width, size.height);
        }
        self.solid.set_aspect(aspect);
    }

    fn render(&mut self, state: &SceneState) {
        let Some(context) = self.context.as_ref() else {
            return;
        };
        self.solid.prepare(&context.queue, state);

        let frame = match context.get_next_frame() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                context.reconfigure();
                return;
            }
            Err(wgpu::SurfaceError::Timeout) => return,
            Err(e) => {
                log::warn!("header frame skipped: {e}");
                return;
            }
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = context.create_encoder();
        self.solid.draw(&mut encoder, &view);
        context.submit(encoder);
        frame.present();
    }

    fn detach_surface(&mut self) {
        self.host.detach();
    }

    fn release_geometry(&mut self) {
        self.solid.release_geometry();
    }

    fn release_material(&mut self) {
        self.solid.release_material();
    }

    fn release_renderer(&mut self) {
        if let Some(context) = self.context.take() {
            context.device.destroy();
        }
    }
}
