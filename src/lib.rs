//! Client-side behavior for the portfolio page.
//!
//! This crate is compiled to WebAssembly and started once when the page
//! loads. Every affordance is split into a pure core that runs (and is
//! tested) natively, and a thin binding compiled only with the `browser`
//! feature that wires the core to the DOM. Components mount independently;
//! a missing element skips that component and nothing else.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Persisted light/dark flag and the toggle button |
//! | [`storage`] | Key/value persistence seam (`localStorage` or in-memory) |
//! | [`skill_bar`] | Clamped skill-level width transitions |
//! | [`typewriter`] | Type/delete phrase cycling state machine |
//! | [`reveal`] | Observe-once scroll reveal |
//! | [`parallax`] | Pointer parallax and the spotlight pointer context |
//! | [`bob`] | Frame-driven avatar bobbing |
//! | [`chat`] | Canned-reply chat mock |
//! | [`contact`] | Contact form mock with validation |
//! | [`consts`] | Shared selectors, ids, and timings |
//! | [`error`] | Error type for the browser bindings |
//! | `page` | Browser boot sequence (`browser` feature only) |

pub mod bob;
pub mod chat;
pub mod consts;
pub mod contact;
pub mod error;
pub mod parallax;
pub mod reveal;
pub mod skill_bar;
pub mod storage;
pub mod theme;
pub mod typewriter;

#[cfg(feature = "browser")]
mod page;

#[cfg(feature = "browser")]
use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point, run by the generated glue as soon as the module loads.
#[cfg(feature = "browser")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already installed: {err}").into());
    }
    page::boot();
}
