use std::rc::Rc;

use gloo::render::{request_animation_frame, AnimationFrame};

use crate::scene::{FrameHandle, FrameScheduler};

/// [`FrameScheduler`] over `window.requestAnimationFrame`.
///
/// Each request is a one-shot [`AnimationFrame`], cancelled when dropped, so
/// cancelling a frame or dropping the scheduler leaves no callback behind.
pub struct AnimationFrameScheduler {
    on_frame: Rc<dyn Fn(f64)>,
    pending: Option<(FrameHandle, AnimationFrame)>,
    next: i32,
}

impl AnimationFrameScheduler {
    /// Call `on_frame` with the frame timestamp on every scheduled refresh.
    pub fn new(on_frame: impl Fn(f64) + 'static) -> Self {
        Self {
            on_frame: Rc::new(on_frame),
            pending: None,
            next: 0,
        }
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.next = self.next.wrapping_add(1);
        let handle = FrameHandle(self.next);
        let on_frame = Rc::clone(&self.on_frame);
        let frame = request_animation_frame(move |timestamp| on_frame(timestamp));
        // Replacing the previous entry drops a frame that has already fired.
        self.pending = Some((handle, frame));
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending.as_ref().is_some_and(|(h, _)| *h == handle) {
            self.pending = None;
        }
    }
}
