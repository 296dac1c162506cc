//! Browser bindings for the page: the intersection observer behind the
//! reveal animation, the `requestAnimationFrame` loop and canvas behind
//! the header scene, and small window helpers.
//!
//! Everything here is a thin adapter over a trait in the platform-neutral
//! modules ([`RegionObserver`](crate::visibility::RegionObserver),
//! [`FrameScheduler`](crate::scene::FrameScheduler),
//! [`SurfaceHost`](crate::renderer::SurfaceHost)); the logic lives there.

pub mod frame;
pub mod header;
pub mod intersection;
pub mod surface;

pub use frame::AnimationFrameScheduler;
pub use header::HeaderScene;
pub use intersection::DomObserver;
pub use surface::HeaderCanvas;

use wasm_bindgen::JsValue;
use web_sys::{Document, ScrollBehavior, ScrollToOptions, Window};

use crate::error::VitaeError;
use crate::scene::Viewport;

pub(crate) fn js_error(context: &str, err: &JsValue) -> VitaeError {
    VitaeError::Dom(format!("{context}: {err:?}"))
}

pub(crate) fn document() -> Result<Document, VitaeError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| VitaeError::Dom("no document".to_owned()))
}

/// The window's inner size in CSS pixels.
pub fn viewport(window: &Window) -> Option<Viewport> {
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Viewport::new(width, height))
}

/// Vertical scroll offset of the page, `0.0` when unavailable.
pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Smoothly scroll the page back to the top.
pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Route `log` output and panics to the browser console.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("console logger already installed");
    }
}
