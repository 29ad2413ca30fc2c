//! Light/dark theme preference.
//!
//! The preference is read once at startup from the [`FlagStore`] under
//! [`THEME_STORAGE_KEY`]. Dark is the default and is presented by the
//! absence of `data-theme` on `<body>`; light sets `data-theme="light"`.
//! The toggle button flips the theme, persists it, and swaps its icon.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts::THEME_STORAGE_KEY;
use crate::storage::FlagStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Interpret a stored value. Only `"light"` selects light.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value for `<body data-theme>`; `None` means the attribute is removed.
    #[must_use]
    pub fn body_attribute(self) -> Option<&'static str> {
        match self {
            Self::Light => Some("light"),
            Self::Dark => None,
        }
    }

    /// Icon markup shown inside the toggle button after switching to `self`.
    #[must_use]
    pub fn icon_markup(self) -> &'static str {
        match self {
            Self::Light => r#"<i class="fa-solid fa-sun"></i>"#,
            Self::Dark => r#"<i class="fa-solid fa-moon"></i>"#,
        }
    }
}

/// The active theme plus the store it persists to.
#[derive(Debug)]
pub struct ThemeFlag<S: FlagStore> {
    store: S,
    current: Theme,
}

impl<S: FlagStore> ThemeFlag<S> {
    /// Read the persisted preference.
    #[must_use]
    pub fn load(store: S) -> Self {
        let current = Theme::from_stored(store.get(THEME_STORAGE_KEY).as_deref());
        Self { store, current }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme and persist it. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.store.set(THEME_STORAGE_KEY, self.current.as_str());
        self.current
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(feature = "browser")]
pub use binding::mount;

#[cfg(feature = "browser")]
mod binding {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Document, HtmlElement};

    use super::{Theme, ThemeFlag};
    use crate::consts::{THEME_ATTRIBUTE, THEME_TOGGLE_ID};
    use crate::error::PageError;
    use crate::storage::LocalStore;

    fn apply(body: &HtmlElement, theme: Theme) -> Result<(), PageError> {
        match theme.body_attribute() {
            Some(value) => body.set_attribute(THEME_ATTRIBUTE, value)?,
            None => body.remove_attribute(THEME_ATTRIBUTE)?,
        }
        Ok(())
    }

    /// Apply the stored theme and wire the toggle button, if present.
    pub fn mount(document: &Document) -> Result<(), PageError> {
        let body = document.body().ok_or(PageError::NoBody)?;
        let mut flag = ThemeFlag::load(LocalStore);
        if flag.current() == Theme::Light {
            apply(&body, Theme::Light)?;
        }

        let Some(toggle) = document.get_element_by_id(THEME_TOGGLE_ID) else {
            log::debug!("theme: no #{THEME_TOGGLE_ID}, toggle disabled");
            return Ok(());
        };

        let button = toggle.clone();
        let on_click = Closure::wrap(Box::new(move || {
            let next = flag.toggle();
            if let Err(err) = apply(&body, next) {
                log::warn!("theme: failed to apply {}: {err}", next.as_str());
            }
            button.set_inner_html(next.icon_markup());
        }) as Box<dyn FnMut()>);
        toggle.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
        Ok(())
    }
}
