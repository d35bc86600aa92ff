use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Self-rescheduling requestAnimationFrame loop with explicit cancellation.
pub struct AnimationLoop {
    tick: FrameClosure,
    pending: Rc<Cell<Option<i32>>>,
    stopped: Rc<Cell<bool>>,
}

impl AnimationLoop {
    pub fn start(mut on_frame: impl FnMut() + 'static) -> Self {
        let tick: FrameClosure = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));
        let stopped = Rc::new(Cell::new(false));

        let tick_clone = tick.clone();
        let pending_clone = pending.clone();
        let stopped_clone = stopped.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_clone.set(None);
            if stopped_clone.get() {
                return;
            }
            on_frame();
            pending_clone.set(request_frame(&tick_clone));
        }) as Box<dyn FnMut()>));

        pending.set(request_frame(&tick));
        Self {
            tick,
            pending,
            stopped,
        }
    }

    /// Cancel the pending frame request and drop the frame closure.
    /// Must not be called from inside the frame callback itself.
    pub fn cancel(&self) {
        self.stopped.set(true);
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // Breaks the closure <-> Rc cycle.
        self.tick.borrow_mut().take();
    }

    pub fn is_running(&self) -> bool {
        !self.stopped.get()
    }
}

fn request_frame(tick: &FrameClosure) -> Option<i32> {
    let w = web::window()?;
    let borrowed = tick.borrow();
    let closure = borrowed.as_ref()?;
    w.request_animation_frame(closure.as_ref().unchecked_ref()).ok()
}

/// Repeating wall-clock timer; cleared when dropped.
pub struct Interval {
    handle: Option<i32>,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(period_ms: i32, callback: impl FnMut() + 'static) -> Option<Self> {
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let w = web::window()?;
        match w.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period_ms,
        ) {
            Ok(handle) => Some(Self {
                handle: Some(handle),
                _closure: closure,
            }),
            Err(e) => {
                log::warn!("setInterval failed: {:?}", e);
                None
            }
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let (Some(handle), Some(w)) = (self.handle.take(), web::window()) {
            w.clear_interval_with_handle(handle);
        }
    }
}
