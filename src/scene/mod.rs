//! Lifecycle of the decorative header scene.
//!
//! [`SceneController`] is host-agnostic: the browser drives it through
//! `requestAnimationFrame` and `resize` events, the native preview through
//! winit redraws. Drawing is delegated to a [`SceneBackend`]; the wgpu one
//! lives in [`crate::renderer`].

mod controller;
mod state;

pub use controller::{FrameHandle, FrameScheduler, SceneBackend, SceneController};
pub use state::{RotationRates, SceneState, SurfaceSize, Viewport};
