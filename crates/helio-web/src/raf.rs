//! requestAnimationFrame driver.
//!
//! Owns the frame callback and exposes start/stop, so the per-tick logic
//! itself stays in `AppRunner::tick` where it can be driven headlessly.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Drives a callback once per display refresh for as long as it runs.
pub struct RafDriver {
    /// Handle of the most recently scheduled frame, None while stopped.
    raf_id: Rc<Cell<Option<i32>>>,
    /// Timestamp of the previous frame, for delta computation.
    last_ts: Rc<Cell<f64>>,
}

impl RafDriver {
    pub fn new() -> Self {
        Self {
            raf_id: Rc::new(Cell::new(None)),
            last_ts: Rc::new(Cell::new(0.0)),
        }
    }

    /// Start the loop. `frame` receives the delta since the previous
    /// frame in seconds (0.0 on the first frame).
    pub fn start(&self, mut frame: impl FnMut(f32) + 'static) {
        if self.raf_id.get().is_some() {
            return;
        }
        let raf_id = Rc::clone(&self.raf_id);
        let last_ts = Rc::clone(&self.last_ts);

        // The closure reschedules itself, so it must hold its own cell.
        let cell: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let cell_inner = Rc::clone(&cell);

        *cell.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
            let prev = last_ts.replace(timestamp);
            let dt = if prev > 0.0 {
                ((timestamp - prev) / 1000.0) as f32
            } else {
                0.0
            };

            frame(dt);

            // Stopped mid-frame: do not reschedule
            if raf_id.get().is_none() {
                return;
            }
            let borrow = cell_inner.borrow();
            let closure = borrow.as_ref().expect("frame closure present");
            raf_id.set(Some(request_frame(closure)));
        }));

        let borrow = cell.borrow();
        let closure = borrow.as_ref().expect("frame closure present");
        self.raf_id.set(Some(request_frame(closure)));
    }

    /// Cancel the pending frame and stop the loop.
    pub fn stop(&self) {
        if let Some(id) = self.raf_id.take() {
            web_sys::window()
                .expect("no window")
                .cancel_animation_frame(id)
                .expect("cancelAnimationFrame failed");
        }
        self.last_ts.set(0.0);
    }

    /// Whether a frame is currently scheduled.
    pub fn is_running(&self) -> bool {
        self.raf_id.get().is_some()
    }
}

impl Default for RafDriver {
    fn default() -> Self {
        Self::new()
    }
}

fn request_frame(closure: &Closure<dyn FnMut(f64)>) -> i32 {
    web_sys::window()
        .expect("no window")
        .request_animation_frame(closure.as_ref().unchecked_ref::<js_sys::Function>())
        .expect("requestAnimationFrame failed")
}
