//! Scroll wiring for `StoryView`.
//!
//! Window scroll events feed the coordinator; the debounce task runs on
//! `window.setTimeout` with a single reused closure.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use super::dom::read_viewport;
use super::SharedState;
use crate::debounce::Scheduler;

/// `setTimeout`-backed scheduler.
pub(crate) struct TimeoutScheduler {
    window: Window,
    callback: Option<Closure<dyn FnMut()>>,
}

impl TimeoutScheduler {
    pub(crate) fn new(window: Window) -> Self {
        Self {
            window,
            callback: None,
        }
    }

    /// Install the closure run when the debounce task fires.
    pub(crate) fn bind(&mut self, state: Weak<RefCell<SharedState>>) {
        let closure = Closure::wrap(Box::new(move || {
            let Some(state) = state.upgrade() else {
                return;
            };
            // A busy state means a selection is already running.
            if let Ok(mut s) = state.try_borrow_mut() {
                s.on_timer();
            }
        }) as Box<dyn FnMut()>);
        self.callback = Some(closure);
    }
}

impl Scheduler for TimeoutScheduler {
    type Handle = i32;

    fn schedule(&mut self, delay_ms: u32) -> Option<i32> {
        let callback = self.callback.as_ref()?;
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                i32::try_from(delay_ms).unwrap_or(i32::MAX),
            )
            .ok()
    }

    fn cancel(&mut self, handle: i32) {
        self.window.clear_timeout_with_handle(handle);
    }
}

/// Build the window scroll listener.
pub(crate) fn scroll_listener(
    window: Window,
    state: &Rc<RefCell<SharedState>>,
) -> Closure<dyn FnMut(web_sys::Event)> {
    let weak_state = Rc::downgrade(state);
    Closure::wrap(Box::new(move |_event: web_sys::Event| {
        let Some(state) = weak_state.upgrade() else {
            return;
        };
        let sample = read_viewport(&window).sample();
        if let Ok(mut s) = state.try_borrow_mut() {
            s.on_scroll(sample);
        }
    }) as Box<dyn FnMut(web_sys::Event)>)
}
