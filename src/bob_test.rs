#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn starts_at_rest() {
    assert_eq!(Bob::new().phase(), 0.0);
}

#[test]
fn offsets_follow_sine_of_accumulated_phase() {
    let mut bob = Bob::new();
    for n in 1..=200 {
        let y = bob.advance();
        let expected = (BOB_STEP * f64::from(n)).sin() * BOB_AMPLITUDE_PX;
        assert!((y - expected).abs() < 1e-9, "frame {n}: {y} vs {expected}");
    }
}

#[test]
fn offset_stays_within_amplitude() {
    let mut bob = Bob::new();
    assert!((0..1_000).all(|_| bob.advance().abs() <= BOB_AMPLITUDE_PX));
}

#[test]
fn translate_moves_only_vertically() {
    let mut bob = Bob::new();
    let value = bob.next_translate();
    assert!(value.starts_with("0 "));
    assert!(value.ends_with("px"));
}
