//! Pointer parallax and the spotlight pointer context.
//!
//! Every pointer move shifts each target by its depth times the pointer's
//! normalized offset from the viewport center. The first target (the hero
//! avatar when present) moves with [`PRIMARY_PARALLAX_DEPTH`], the rest with
//! [`SECONDARY_PARALLAX_DEPTH`].
//!
//! The raw pointer position goes into a [`PointerContext`] rather than a
//! global; [`Spotlight`] reads it back out as the `--mx`/`--my` root style
//! variables the spotlight glow is drawn from.
//!
//! Updates run once per native event with no throttling.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::consts::{PRIMARY_PARALLAX_DEPTH, SECONDARY_PARALLAX_DEPTH};

/// Pointer position in CSS pixels relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Normalized offset of `pointer` from the center, roughly `-1.0..=1.0`
    /// on each axis. A degenerate axis yields 0.
    #[must_use]
    pub fn offset(self, pointer: Pointer) -> (f64, f64) {
        (normalize(pointer.x, self.width / 2.0), normalize(pointer.y, self.height / 2.0))
    }
}

fn normalize(value: f64, center: f64) -> f64 {
    if center > 0.0 { (value - center) / center } else { 0.0 }
}

/// Depth coefficient for the target at `index`.
#[must_use]
pub fn depth_for(index: usize) -> f64 {
    if index == 0 { PRIMARY_PARALLAX_DEPTH } else { SECONDARY_PARALLAX_DEPTH }
}

/// `transform` value for a target at `depth`.
#[must_use]
pub fn transform_css(offset: (f64, f64), depth: f64) -> String {
    // `+ 0.0` folds -0 into 0 so a centered pointer prints "0px".
    format!("translate3d({}px, {}px, 0)", offset.0 * depth + 0.0, offset.1 * depth + 0.0)
}

/// Last known pointer position, shared between the writer and presenters.
#[derive(Debug, Clone, Default)]
pub struct PointerContext(Rc<Cell<Pointer>>);

impl PointerContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, pointer: Pointer) {
        self.0.set(pointer);
    }

    #[must_use]
    pub fn get(&self) -> Pointer {
        self.0.get()
    }
}

/// Presents the pointer context as root style variables.
#[derive(Debug, Clone)]
pub struct Spotlight {
    context: PointerContext,
}

impl Spotlight {
    #[must_use]
    pub fn new(context: PointerContext) -> Self {
        Self { context }
    }

    /// `(property, value)` pairs for the root element's style.
    #[must_use]
    pub fn style_vars(&self) -> [(&'static str, String); 2] {
        let pointer = self.context.get();
        [("--mx", format!("{}px", pointer.x)), ("--my", format!("{}px", pointer.y))]
    }
}

/// Parallax over a fixed set of targets.
#[derive(Debug, Clone)]
pub struct Parallax {
    targets: usize,
    context: PointerContext,
}

impl Parallax {
    #[must_use]
    pub fn new(targets: usize, context: PointerContext) -> Self {
        Self { targets, context }
    }

    /// Record the pointer and return one transform per target, in order.
    pub fn on_pointer_move(&self, pointer: Pointer, viewport: Viewport) -> Vec<String> {
        self.context.set(pointer);
        let offset = viewport.offset(pointer);
        (0..self.targets).map(|index| transform_css(offset, depth_for(index))).collect()
    }
}

#[cfg(feature = "browser")]
pub use binding::mount;

#[cfg(feature = "browser")]
mod binding {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{AddEventListenerOptions, Document, HtmlElement, MouseEvent, Window};

    use super::{Parallax, Pointer, PointerContext, Spotlight, Viewport};
    use crate::consts::{CARD_SELECTOR, HERO_AVATAR_SELECTOR};
    use crate::error::PageError;

    fn targets(document: &Document) -> Result<Vec<HtmlElement>, PageError> {
        let mut out = Vec::new();
        if let Some(hero) = document.query_selector(HERO_AVATAR_SELECTOR)? {
            if let Ok(hero) = hero.dyn_into::<HtmlElement>() {
                out.push(hero);
            }
        }
        let cards = document.query_selector_all(CARD_SELECTOR)?;
        for i in 0..cards.length() {
            if let Some(card) = cards.item(i) {
                if let Ok(card) = card.dyn_into::<HtmlElement>() {
                    out.push(card);
                }
            }
        }
        Ok(out)
    }

    fn viewport(window: &Window) -> Viewport {
        let width = window.inner_width().map_or(0.0, |v| v.as_f64().unwrap_or(0.0));
        let height = window.inner_height().map_or(0.0, |v| v.as_f64().unwrap_or(0.0));
        Viewport::new(width, height)
    }

    fn present(root: &HtmlElement, spotlight: &Spotlight) {
        for (name, value) in spotlight.style_vars() {
            if let Err(err) = root.style().set_property(name, &value) {
                log::warn!("spotlight: failed to set {name}: {err:?}");
            }
        }
    }

    pub fn mount(document: &Document) -> Result<(), PageError> {
        let window = web_sys::window().ok_or(PageError::NoWindow)?;
        let root = document
            .document_element()
            .ok_or(PageError::NoDocument)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| PageError::Js("document element is not an HTML element".to_owned()))?;
        let targets = targets(document)?;
        let context = PointerContext::new();
        let parallax = Parallax::new(targets.len(), context.clone());
        let spotlight = Spotlight::new(context);

        let win = window.clone();
        let on_move = Closure::wrap(Box::new(move |event: MouseEvent| {
            let pointer = Pointer::new(f64::from(event.client_x()), f64::from(event.client_y()));
            let transforms = parallax.on_pointer_move(pointer, viewport(&win));
            for (el, transform) in targets.iter().zip(transforms) {
                if let Err(err) = el.style().set_property("transform", &transform) {
                    log::warn!("parallax: failed to set transform: {err:?}");
                }
            }
            present(&root, &spotlight);
        }) as Box<dyn FnMut(MouseEvent)>);

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        window.add_event_listener_with_callback_and_add_event_listener_options(
            "mousemove",
            on_move.as_ref().unchecked_ref(),
            &options,
        )?;
        on_move.forget();
        Ok(())
    }
}
