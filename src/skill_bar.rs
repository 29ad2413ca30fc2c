//! Skill bar width animation.
//!
//! Each `.skill-list .bar` declares its level in `data-level`. The level is
//! clamped to `0..=100` and applied as a width transition on the next frame.

#[cfg(test)]
#[path = "skill_bar_test.rs"]
mod skill_bar_test;

/// Parse a declared level. Reads the leading integer the way HTML authors
/// expect (`" 80"`, `"80%"`, `"80.5"` are all 80). Absent or unparsable
/// input is 0; out-of-range input is clamped.
#[must_use]
pub fn parse_level(raw: Option<&str>) -> u8 {
    let level = raw.map_or(0, leading_integer);
    u8::try_from(level.clamp(0, 100)).unwrap_or(0)
}

fn leading_integer(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0_i64, |acc, d| acc.saturating_mul(10).saturating_add(i64::from(d - b'0')));
    if negative { -magnitude } else { magnitude }
}

/// CSS width for a clamped level, e.g. `"75%"`.
#[must_use]
pub fn width_css(level: u8) -> String {
    format!("{}%", level.min(100))
}

#[cfg(feature = "browser")]
pub use binding::mount;

#[cfg(feature = "browser")]
mod binding {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Document, HtmlElement};

    use super::{parse_level, width_css};
    use crate::consts::{SKILL_BAR_SELECTOR, SKILL_BAR_TRANSITION, SKILL_LEVEL_ATTRIBUTE};
    use crate::error::PageError;

    fn animate(bar: &HtmlElement, level: u8) -> Result<(), PageError> {
        let style = bar.style();
        style.set_property("transition", SKILL_BAR_TRANSITION)?;
        style.set_property("width", &width_css(level))?;
        Ok(())
    }

    /// Schedule one width transition per bar on the next frame.
    pub fn mount(document: &Document) -> Result<(), PageError> {
        let window = web_sys::window().ok_or(PageError::NoWindow)?;
        let bars = document.query_selector_all(SKILL_BAR_SELECTOR)?;
        for i in 0..bars.length() {
            let Some(node) = bars.item(i) else {
                continue;
            };
            let Ok(bar) = node.dyn_into::<HtmlElement>() else {
                continue;
            };
            let level = parse_level(bar.get_attribute(SKILL_LEVEL_ATTRIBUTE).as_deref());
            let frame = Closure::once_into_js(move || {
                if let Err(err) = animate(&bar, level) {
                    log::warn!("skill bar: {err}");
                }
            });
            window.request_animation_frame(frame.unchecked_ref())?;
        }
        Ok(())
    }
}
