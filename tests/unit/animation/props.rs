use super::*;

#[test]
fn scalar_lerp_is_linear() {
    let v = PropValue::lerp(&PropValue::Scalar(0.0), &PropValue::Scalar(10.0), 0.25);
    assert_eq!(v, PropValue::Scalar(2.5));
}

#[test]
fn clip_lerp_grows_band() {
    let a = Rect::new(0.0, 0.0, 1.0, 0.0);
    let b = Rect::new(0.0, 0.0, 1.0, 1.0);
    let mid = PropValue::lerp(&a.into(), &b.into(), 0.5).as_clip().unwrap();
    assert_eq!(mid.height(), 0.5);
    assert_eq!(mid.width(), 1.0);
}

#[test]
fn shape_check_catches_missing_and_mismatched_keys() {
    let from = PropertySet::new()
        .with(Prop::Opacity, 0.0)
        .with(Prop::TranslateY, 50.0);
    let to = PropertySet::new()
        .with(Prop::Opacity, 1.0)
        .with(Prop::TranslateY, 0.0);
    assert!(from.matches_shape(&to));

    let missing = PropertySet::new().with(Prop::Opacity, 1.0);
    assert!(!from.matches_shape(&missing));

    let wrong_kind = PropertySet::new()
        .with(Prop::Opacity, Rect::ZERO)
        .with(Prop::TranslateY, 0.0);
    assert!(!from.matches_shape(&wrong_kind));
}

#[test]
fn lerp_toward_walks_target_keys() {
    let from = PropertySet::new().with(Prop::Opacity, 0.0);
    let to = PropertySet::new().with(Prop::Opacity, 1.0);
    let out: Vec<_> = from.lerp_toward(&to, 0.5).collect();
    assert_eq!(out, vec![(Prop::Opacity, PropValue::Scalar(0.5))]);
}
