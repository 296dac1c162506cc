use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlCanvasElement};

use super::js_error;
use crate::error::VitaeError;
use crate::renderer::SurfaceHost;
use crate::scene::SurfaceSize;

/// Inline style keeping the canvas under the header's text and links and
/// out of hit testing. The header itself must establish a stacking context
/// (`position: relative; isolation: isolate`). Width and height are set in
/// CSS pixels by [`SurfaceHost::set_size`], matching the drawing buffer.
const CANVAS_STYLE: &str = "position:absolute;top:0;left:0;\
                            z-index:-1;pointer-events:none;display:block;";

/// The `<canvas>` the header solid renders into.
pub struct HeaderCanvas {
    canvas: HtmlCanvasElement,
    attached: bool,
}

impl HeaderCanvas {
    /// Create a canvas of `size` and insert it as the first child of
    /// `header`, behind the foreground content.
    ///
    /// # Errors
    ///
    /// Returns [`VitaeError::Dom`] if the canvas cannot be created or
    /// inserted.
    pub fn attach(header: &Element, size: SurfaceSize) -> Result<Self, VitaeError> {
        let document = header
            .owner_document()
            .ok_or_else(|| VitaeError::Dom("header has no document".to_owned()))?;
        let canvas = document
            .create_element("canvas")
            .map_err(|e| js_error("create canvas", &e))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| VitaeError::Dom("canvas is not a canvas".to_owned()))?;

        canvas.set_class_name("header-scene");
        canvas
            .set_attribute("style", CANVAS_STYLE)
            .map_err(|e| js_error("canvas style", &e))?;
        canvas
            .set_attribute("aria-hidden", "true")
            .map_err(|e| js_error("canvas aria-hidden", &e))?;

        let first = header.first_child();
        let _ = header
            .insert_before(&canvas, first.as_ref())
            .map_err(|e| js_error("insert canvas", &e))?;

        let mut host = Self {
            canvas,
            attached: true,
        };
        host.set_size(size);
        Ok(host)
    }

    /// The canvas element.
    pub const fn element(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl SurfaceHost for HeaderCanvas {
    fn set_size(&mut self, size: SurfaceSize) {
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);

        let (width, height) = size.css_size();
        let style = self.canvas.style();
        if let Err(e) = style
            .set_property("width", &width)
            .and_then(|()| style.set_property("height", &height))
        {
            log::warn!("canvas size style: {e:?}");
        }
    }

    fn detach(&mut self) {
        if self.attached {
            self.canvas.remove();
            self.attached = false;
        }
    }
}
