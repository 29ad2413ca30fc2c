//! Boot sequence: mount every component against the live document.
//!
//! Components are independent. A component that fails to mount is logged
//! and skipped; the rest still mount.

use web_sys::Document;

use crate::consts::YEAR_ID;
use crate::error::PageError;
use crate::{bob, chat, contact, parallax, reveal, skill_bar, theme, typewriter};

type Mount = fn(&Document) -> Result<(), PageError>;

const COMPONENTS: [(&str, Mount); 9] = [
    ("theme", theme::mount),
    ("year", mount_year),
    ("skill bars", skill_bar::mount),
    ("typewriter", typewriter::mount),
    ("reveal", reveal::mount),
    ("parallax", parallax::mount),
    ("bob", bob::mount),
    ("chat", chat::mount),
    ("contact", contact::mount),
];

/// Write the current year into the footer.
fn mount_year(document: &Document) -> Result<(), PageError> {
    if let Some(el) = document.get_element_by_id(YEAR_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
    Ok(())
}

pub fn boot() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("boot: {}", PageError::NoDocument);
        return;
    };
    let mut mounted = 0;
    for (name, mount) in COMPONENTS {
        match mount(&document) {
            Ok(()) => mounted += 1,
            Err(err) => log::warn!("{name}: failed to mount: {err}"),
        }
    }
    log::info!("page behavior ready ({mounted}/{} components)", COMPONENTS.len());
}
