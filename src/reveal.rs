//! Scroll reveal: `.reveal` elements gain `is-visible` the first time they
//! scroll into view, then stop being observed.
//!
//! ARCHITECTURE
//! ============
//! [`RevealTracker`] holds the one-way hidden→visible state per registered
//! element and answers "reveal and detach now?" for each observer entry.
//! The browser binding feeds it from a single shared `IntersectionObserver`
//! (threshold `REVEAL_THRESHOLD`), or reveals everything up front when the
//! host has no observer.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// How candidates get revealed on this host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Register every candidate with one shared observer.
    Observe,
    /// Reveal every candidate immediately.
    Immediate,
}

impl Strategy {
    #[must_use]
    pub fn detect(has_observer: bool, candidates: usize) -> Self {
        if has_observer && candidates > 0 { Self::Observe } else { Self::Immediate }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    visible: Vec<bool>,
    observing: usize,
}

impl RevealTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hidden candidate. Returns its index.
    pub fn register(&mut self) -> usize {
        self.visible.push(false);
        self.observing += 1;
        self.visible.len() - 1
    }

    /// Handle an observer entry. Returns `true` exactly once per element:
    /// the first time it is reported intersecting. The caller then shows it
    /// and stops observing it.
    pub fn on_entry(&mut self, index: usize, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        match self.visible.get_mut(index) {
            Some(visible) if !*visible => {
                *visible = true;
                self.observing -= 1;
                true
            }
            _ => false,
        }
    }

    /// Reveal every still-hidden candidate. Returns the newly revealed indices.
    pub fn reveal_all(&mut self) -> Vec<usize> {
        let mut revealed = Vec::new();
        for (index, visible) in self.visible.iter_mut().enumerate() {
            if !*visible {
                *visible = true;
                revealed.push(index);
            }
        }
        self.observing = 0;
        revealed
    }

    #[must_use]
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    /// Candidates still waiting to scroll into view.
    #[must_use]
    pub fn observing(&self) -> usize {
        self.observing
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

#[cfg(feature = "browser")]
pub use binding::mount;

#[cfg(feature = "browser")]
mod binding {
    use js_sys::{Array, Reflect};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::{RevealTracker, Strategy};
    use crate::consts::{REVEAL_SELECTOR, REVEAL_THRESHOLD, REVEAL_VISIBLE_CLASS};
    use crate::error::PageError;

    fn show(el: &Element) {
        if let Err(err) = el.class_list().add_1(REVEAL_VISIBLE_CLASS) {
            log::warn!("reveal: failed to add class: {err:?}");
        }
    }

    fn observe(candidates: &[Element], mut tracker: RevealTracker) -> Result<(), PageError> {
        // Tracker slots are candidate positions.
        let slots = candidates.to_vec();
        let on_entries = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = slots.iter().position(|el| *el == target) else {
                    continue;
                };
                if tracker.on_entry(index, entry.is_intersecting()) {
                    show(&target);
                    observer.unobserve(&target);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer = IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &init)?;
        on_entries.forget();
        for el in candidates {
            observer.observe(el);
        }
        Ok(())
    }

    pub fn mount(document: &Document) -> Result<(), PageError> {
        let window = web_sys::window().ok_or(PageError::NoWindow)?;
        let nodes = document.query_selector_all(REVEAL_SELECTOR)?;
        let mut tracker = RevealTracker::new();
        let mut candidates = Vec::new();
        for i in 0..nodes.length() {
            let Some(node) = nodes.item(i) else {
                continue;
            };
            let Ok(el) = node.dyn_into::<Element>() else {
                continue;
            };
            tracker.register();
            candidates.push(el);
        }

        let has_observer = Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);
        if Strategy::detect(has_observer, candidates.len()) == Strategy::Observe {
            match observe(&candidates, tracker.clone()) {
                Ok(()) => return Ok(()),
                Err(err) => log::warn!("reveal: observer unavailable, revealing all: {err}"),
            }
        }
        for index in tracker.reveal_all() {
            if let Some(el) = candidates.get(index) {
                show(el);
            }
        }
        Ok(())
    }
}
