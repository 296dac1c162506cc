//! wgpu rendering of the header decoration.
//!
//! [`solid::SolidRenderer`] owns the dodecahedron's GPU resources;
//! [`backend::GpuSceneBackend`] adapts it and a
//! [`RenderContext`](crate::gpu::render_context::RenderContext) to the
//! scene controller's backend seam.

pub mod backend;
pub mod geometry;
pub mod solid;

pub use backend::{GpuSceneBackend, SurfaceHost};
