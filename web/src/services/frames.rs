//! Continuous `requestAnimationFrame` loop

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};

/// Calls a closure on every animation frame until stopped or dropped.
pub struct FrameLoop {
    pending: Rc<RefCell<Option<AnimationFrame>>>,
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    /// Start the loop. `on_frame` receives the frame timestamp in milliseconds.
    pub fn start<F>(on_frame: F) -> Self
    where
        F: FnMut(f64) + 'static,
    {
        let frame_loop = Self {
            pending: Rc::new(RefCell::new(None)),
            running: Rc::new(Cell::new(true)),
        };
        schedule(
            Rc::clone(&frame_loop.pending),
            Rc::clone(&frame_loop.running),
            Rc::new(RefCell::new(on_frame)),
        );
        frame_loop
    }

    /// Cancel the pending frame. Idempotent.
    pub fn stop(&self) {
        self.running.set(false);
        // Dropping the handle cancels the request
        self.pending.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule<F>(
    pending: Rc<RefCell<Option<AnimationFrame>>>,
    running: Rc<Cell<bool>>,
    on_frame: Rc<RefCell<F>>,
) where
    F: FnMut(f64) + 'static,
{
    let frame = request_animation_frame({
        let pending = Rc::clone(&pending);
        move |timestamp| {
            if !running.get() {
                return;
            }
            (&mut *on_frame.borrow_mut())(timestamp);
            if running.get() {
                schedule(pending, running, on_frame);
            }
        }
    });
    *pending.borrow_mut() = Some(frame);
}
