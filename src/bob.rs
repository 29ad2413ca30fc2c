//! Gentle vertical bobbing on the avatar frame, one step per animation frame.

#[cfg(test)]
#[path = "bob_test.rs"]
mod bob_test;

use crate::consts::{BOB_AMPLITUDE_PX, BOB_STEP};

#[derive(Debug, Clone, Copy, Default)]
pub struct Bob {
    phase: f64,
}

impl Bob {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(self) -> f64 {
        self.phase
    }

    /// Advance one frame and return the vertical offset in pixels.
    pub fn advance(&mut self) -> f64 {
        self.phase += BOB_STEP;
        self.phase.sin() * BOB_AMPLITUDE_PX
    }

    /// Advance one frame and return the `translate` value.
    pub fn next_translate(&mut self) -> String {
        format!("0 {}px", self.advance())
    }
}

#[cfg(feature = "browser")]
pub use binding::mount;

#[cfg(feature = "browser")]
mod binding {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Document, HtmlElement, Window};

    use super::Bob;
    use crate::consts::AVATAR_SELECTOR;
    use crate::error::PageError;

    type FrameCallback = Closure<dyn FnMut(f64)>;

    fn step(avatar: &HtmlElement, bob: &mut Bob) {
        if let Err(err) = avatar.style().set_property("translate", &bob.next_translate()) {
            log::warn!("bob: failed to set translate: {err:?}");
        }
    }

    fn request(window: &Window, cb: &FrameCallback) {
        if let Err(err) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::warn!("bob: animation frame refused, stopping: {err:?}");
        }
    }

    pub fn mount(document: &Document) -> Result<(), PageError> {
        let window = web_sys::window().ok_or(PageError::NoWindow)?;
        let Some(avatar) = document.query_selector(AVATAR_SELECTOR)? else {
            log::debug!("bob: no {AVATAR_SELECTOR}, skipped");
            return Ok(());
        };
        let avatar = avatar
            .dyn_into::<HtmlElement>()
            .map_err(|_| PageError::Js("avatar is not an HTML element".to_owned()))?;

        let mut bob = Bob::new();
        step(&avatar, &mut bob);

        // The callback re-requests itself through this slot every frame.
        let holder: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let holder_for_cb = Rc::clone(&holder);
        let win = window.clone();
        let cb = Closure::wrap(Box::new(move |_ts: f64| {
            step(&avatar, &mut bob);
            if let Some(cb) = holder_for_cb.borrow().as_ref() {
                request(&win, cb);
            }
        }) as Box<dyn FnMut(f64)>);
        request(&window, &cb);
        *holder.borrow_mut() = Some(cb);
        Ok(())
    }
}
