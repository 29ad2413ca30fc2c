use super::*;

#[test]
fn display_names_missing_host_objects() {
    assert_eq!(PageError::NoWindow.to_string(), "no window object");
    assert_eq!(PageError::NoDocument.to_string(), "no document on window");
}

#[test]
fn missing_body_is_distinct_from_missing_document() {
    assert_eq!(PageError::NoBody.to_string(), "document has no body");
    assert_ne!(PageError::NoBody.to_string(), PageError::NoDocument.to_string());
}

#[test]
fn js_error_carries_message() {
    let err = PageError::Js("boom".to_owned());
    assert_eq!(err.to_string(), "javascript error: boom");
}
