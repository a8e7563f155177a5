use super::*;
use crate::surface::scene::SceneGraph;

fn vp(scroll_top: f64) -> Viewport {
    Viewport::new(scroll_top, 1000.0).unwrap()
}

#[test]
fn enter_fires_once_per_crossing() {
    let mut scene = SceneGraph::new();
    let node = scene.insert("section");
    let mut obs = ViewportObserver::new();
    let id = obs
        .observe(node, ElementBounds::new(1500.0, 400.0), ObserveOptions::default())
        .unwrap();

    assert!(obs.update(vp(0.0)).is_empty());
    // Trigger line at scroll 700 is 700 + 800 = 1500.
    assert_eq!(obs.update(vp(700.0)), vec![ViewportEvent::Enter(id)]);
    assert!(obs.update(vp(900.0)).is_empty());
    assert_eq!(obs.update(vp(100.0)), vec![ViewportEvent::Exit(id)]);
}

#[test]
fn once_mode_never_reports_exit() {
    let mut scene = SceneGraph::new();
    let node = scene.insert("footer");
    let mut obs = ViewportObserver::new();
    let opts = ObserveOptions {
        threshold_fraction: 0.1,
        mode: RevealMode::Once,
    };
    let id = obs
        .observe(node, ElementBounds::new(500.0, 100.0), opts)
        .unwrap();

    assert_eq!(obs.update(vp(0.0)), vec![ViewportEvent::Enter(id)]);
    assert!(obs.update(vp(-2000.0)).is_empty());
}

#[test]
fn unobserve_is_idempotent() {
    let mut scene = SceneGraph::new();
    let node = scene.insert("a");
    let mut obs = ViewportObserver::new();
    let id = obs
        .observe(node, ElementBounds::new(0.0, 10.0), ObserveOptions::default())
        .unwrap();

    assert!(obs.unobserve(id));
    assert!(!obs.unobserve(id));
    assert!(!obs.is_observing(id));
    assert!(obs.update(vp(0.0)).is_empty());
}

#[test]
fn bounds_updates_apply_on_next_update() {
    let mut scene = SceneGraph::new();
    let node = scene.insert("a");
    let mut obs = ViewportObserver::new();
    let id = obs
        .observe(node, ElementBounds::new(5000.0, 10.0), ObserveOptions::default())
        .unwrap();

    assert!(obs.update(vp(0.0)).is_empty());
    assert!(obs.set_bounds(id, ElementBounds::new(100.0, 10.0)));
    assert_eq!(obs.update(vp(0.0)), vec![ViewportEvent::Enter(id)]);
    assert_eq!(obs.node(id), Some(node));
}

#[test]
fn threshold_outside_unit_range_is_rejected() {
    let mut scene = SceneGraph::new();
    let node = scene.insert("a");
    let mut obs = ViewportObserver::new();
    let opts = ObserveOptions {
        threshold_fraction: 1.5,
        mode: RevealMode::Once,
    };
    assert!(obs.observe(node, ElementBounds::new(0.0, 1.0), opts).is_err());
    assert!(obs.is_empty());
}
