use super::*;

fn vp(scroll_top: f64) -> Viewport {
    Viewport::new(scroll_top, 900.0).unwrap()
}

#[test]
fn turns_on_strictly_past_the_threshold() {
    let mut flag = ScrolledFlag::default();
    assert_eq!(flag.threshold(), 50.0);
    assert_eq!(flag.update(vp(0.0)), None);
    assert_eq!(flag.update(vp(50.0)), None);
    assert!(!flag.is_scrolled());
    assert_eq!(flag.update(vp(50.5)), Some(true));
    assert!(flag.is_scrolled());
}

#[test]
fn reports_only_changes() {
    let mut flag = ScrolledFlag::new(50.0);
    assert_eq!(flag.update(vp(400.0)), Some(true));
    assert_eq!(flag.update(vp(800.0)), None);
    assert_eq!(flag.update(vp(10.0)), Some(false));
    assert_eq!(flag.update(vp(0.0)), None);
}

#[test]
fn first_update_reflects_a_restored_scroll_position() {
    let mut flag = ScrolledFlag::new(120.0);
    assert_eq!(flag.update(vp(3000.0)), Some(true));
}
