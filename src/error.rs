//! Error type for the browser bindings.
//!
//! Pure cores never fail (contact validation has its own error in
//! [`crate::contact`]). Bindings return `Result<(), PageError>` so `web-sys`
//! calls can use `?`; boot logs the error and moves on to the next component.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("no window object")]
    NoWindow,
    #[error("no document on window")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(feature = "browser")]
impl From<wasm_bindgen::JsValue> for PageError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
