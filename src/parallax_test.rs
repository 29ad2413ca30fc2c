#![allow(clippy::float_cmp)]

use super::*;

fn screen() -> Viewport {
    Viewport::new(800.0, 600.0)
}

#[test]
fn centered_pointer_has_zero_offset() {
    assert_eq!(screen().offset(Pointer::new(400.0, 300.0)), (0.0, 0.0));
}

#[test]
fn corners_map_to_unit_offsets() {
    assert_eq!(screen().offset(Pointer::new(0.0, 0.0)), (-1.0, -1.0));
    assert_eq!(screen().offset(Pointer::new(800.0, 600.0)), (1.0, 1.0));
}

#[test]
fn zero_sized_viewport_yields_no_offset() {
    assert_eq!(Viewport::new(0.0, 0.0).offset(Pointer::new(10.0, 10.0)), (0.0, 0.0));
}

#[test]
fn first_target_moves_deeper() {
    assert_eq!(depth_for(0), PRIMARY_PARALLAX_DEPTH);
    assert_eq!(depth_for(1), SECONDARY_PARALLAX_DEPTH);
    assert_eq!(depth_for(9), SECONDARY_PARALLAX_DEPTH);
}

#[test]
fn centered_pointer_prints_plain_zero() {
    assert_eq!(transform_css((0.0, -0.0), 8.0), "translate3d(0px, 0px, 0)");
}

#[test]
fn top_left_pointer_transforms_each_target() {
    let parallax = Parallax::new(3, PointerContext::new());
    let transforms = parallax.on_pointer_move(Pointer::new(0.0, 0.0), screen());
    assert_eq!(
        transforms,
        vec![
            "translate3d(-8px, -8px, 0)".to_owned(),
            "translate3d(-2px, -2px, 0)".to_owned(),
            "translate3d(-2px, -2px, 0)".to_owned(),
        ]
    );
}

#[test]
fn fractional_offsets_keep_precision() {
    let parallax = Parallax::new(1, PointerContext::new());
    let transforms = parallax.on_pointer_move(Pointer::new(600.0, 150.0), screen());
    assert_eq!(transforms, vec!["translate3d(4px, -4px, 0)".to_owned()]);
}

#[test]
fn no_targets_still_records_pointer() {
    let context = PointerContext::new();
    let parallax = Parallax::new(0, context.clone());
    assert!(parallax.on_pointer_move(Pointer::new(12.0, 34.0), screen()).is_empty());
    assert_eq!(context.get(), Pointer::new(12.0, 34.0));
}

#[test]
fn spotlight_reads_shared_pointer() {
    let context = PointerContext::new();
    let spotlight = Spotlight::new(context.clone());
    Parallax::new(1, context).on_pointer_move(Pointer::new(412.0, 97.0), screen());
    assert_eq!(
        spotlight.style_vars(),
        [("--mx", "412px".to_owned()), ("--my", "97px".to_owned())]
    );
}
