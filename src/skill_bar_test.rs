use super::*;

#[test]
fn level_above_range_clamps_to_full_width() {
    assert_eq!(width_css(parse_level(Some("150"))), "100%");
}

#[test]
fn negative_level_clamps_to_zero() {
    assert_eq!(width_css(parse_level(Some("-5"))), "0%");
}

#[test]
fn missing_attribute_is_zero() {
    assert_eq!(width_css(parse_level(None)), "0%");
}

#[test]
fn unparsable_level_is_zero() {
    assert_eq!(parse_level(Some("abc")), 0);
    assert_eq!(parse_level(Some("")), 0);
    assert_eq!(parse_level(Some("-")), 0);
}

#[test]
fn leading_integer_is_used() {
    assert_eq!(parse_level(Some(" 80")), 80);
    assert_eq!(parse_level(Some("80%")), 80);
    assert_eq!(parse_level(Some("62.9")), 62);
    assert_eq!(parse_level(Some("+40")), 40);
}

#[test]
fn huge_level_saturates_then_clamps() {
    assert_eq!(parse_level(Some("99999999999999999999999")), 100);
}
