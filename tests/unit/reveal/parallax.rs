use super::*;
use crate::surface::scene::SceneGraph;

fn vp(scroll_top: f64) -> Viewport {
    Viewport::new(scroll_top, 1000.0).unwrap()
}

fn setup() -> (SceneGraph, ParallaxController, ParallaxHandle, NodeId) {
    let mut scene = SceneGraph::new();
    let node = scene.insert("hero-parallax");
    let mut pc = ParallaxController::new();
    let h = pc
        .register(&mut scene, node, ElementBounds::new(1000.0, 500.0), 50.0)
        .unwrap();
    (scene, pc, h, node)
}

fn shift(scene: &SceneGraph, node: NodeId) -> f64 {
    scene.scalar(node, Prop::TranslateYPercent).unwrap()
}

#[test]
fn progress_runs_from_top_bottom_to_bottom_top() {
    let b = ElementBounds::new(1000.0, 500.0);
    assert_eq!(scrub_progress(b, vp(0.0)), 0.0);
    assert_eq!(scrub_progress(b, vp(-200.0)), 0.0);
    assert!((scrub_progress(b, vp(750.0)) - 0.5).abs() < 1e-9);
    assert_eq!(scrub_progress(b, vp(1500.0)), 1.0);
    assert_eq!(scrub_progress(b, vp(4000.0)), 1.0);
}

#[test]
fn registration_applies_resting_offset() {
    let (scene, pc, h, node) = setup();
    assert_eq!(shift(&scene, node), 0.0);
    assert_eq!(pc.progress(h), Some(0.0));
    assert_eq!(pc.node(h), Some(node));
}

#[test]
fn scrolling_scrubs_linearly_in_both_directions() {
    let (mut scene, mut pc, h, node) = setup();

    pc.on_scroll(vp(750.0), &mut scene);
    assert!((shift(&scene, node) + 25.0).abs() < 1e-9);

    pc.on_scroll(vp(1500.0), &mut scene);
    assert!((shift(&scene, node) + 50.0).abs() < 1e-9);

    pc.on_scroll(vp(375.0), &mut scene);
    assert!((shift(&scene, node) + 12.5).abs() < 1e-9);
    assert!((pc.progress(h).unwrap() - 0.25).abs() < 1e-9);

    pc.on_scroll(vp(0.0), &mut scene);
    assert_eq!(shift(&scene, node), 0.0);
}

#[test]
fn set_bounds_moves_the_scrub_window() {
    let (mut scene, mut pc, h, node) = setup();
    assert!(pc.set_bounds(h, ElementBounds::new(0.0, 500.0)).unwrap());
    pc.on_scroll(vp(0.0), &mut scene);
    assert!((shift(&scene, node) + 100.0 / 3.0).abs() < 1e-9);
    assert!(pc.set_bounds(h, ElementBounds::new(f64::NAN, 1.0)).is_err());
}

#[test]
fn rejects_non_finite_input() {
    let mut scene = SceneGraph::new();
    let node = scene.insert("bg");
    let mut pc = ParallaxController::new();
    assert!(pc.register(&mut scene, node, ElementBounds::new(0.0, 100.0), f64::INFINITY).is_err());
    assert!(pc.register(&mut scene, node, ElementBounds::new(0.0, -1.0), 50.0).is_err());
    assert!(pc.is_empty());
}

#[test]
fn unregistered_elements_stop_following_scroll() {
    let (mut scene, mut pc, h, node) = setup();
    pc.on_scroll(vp(750.0), &mut scene);
    assert!(pc.unregister(h));
    assert!(!pc.unregister(h));

    pc.on_scroll(vp(1500.0), &mut scene);
    assert!((shift(&scene, node) + 25.0).abs() < 1e-9);
    assert_eq!(pc.progress(h), None);
}

#[test]
fn teardown_detaches_everything() {
    let (mut scene, mut pc, _h, node) = setup();
    let other = scene.insert("services-parallax");
    pc.register(&mut scene, other, ElementBounds::new(2000.0, 400.0), 30.0)
        .unwrap();
    assert_eq!(pc.len(), 2);

    pc.teardown();
    assert!(pc.is_empty());
    let writes = scene.writes(node);
    pc.on_scroll(vp(1500.0), &mut scene);
    assert_eq!(scene.writes(node), writes);
}
