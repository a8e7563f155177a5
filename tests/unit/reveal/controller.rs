use super::*;
use crate::surface::scene::SceneGraph;

fn vp(scroll_top: f64) -> Viewport {
    Viewport::new(scroll_top, 1000.0).unwrap()
}

fn setup(mode: RevealMode) -> (SceneGraph, RevealController, RevealHandle, NodeId) {
    let mut scene = SceneGraph::new();
    let node = scene.insert("about");
    let mut rc = RevealController::new();
    let h = rc
        .register(
            &mut scene,
            node,
            ElementBounds::new(1200.0, 300.0),
            &RevealTag::new("fade-up").mode(mode),
            &RevealPreset::default(),
        )
        .unwrap();
    (scene, rc, h, node)
}

#[test]
fn registration_applies_hidden_state() {
    let (scene, rc, h, node) = setup(RevealMode::Toggle);
    assert_eq!(scene.scalar(node, Prop::Opacity), Some(0.0));
    assert_eq!(scene.scalar(node, Prop::TranslateY), Some(100.0));
    assert_eq!(rc.status(h).unwrap().state, RevealState::Unrevealed);
}

#[test]
fn toggle_mode_reveals_and_conceals() {
    let (mut scene, mut rc, h, node) = setup(RevealMode::Toggle);

    let changes = rc.on_scroll(vp(500.0));
    assert_eq!(
        changes,
        vec![RevealChange {
            handle: h,
            state: RevealState::Revealing
        }]
    );
    rc.tick(1.0, &mut scene);
    assert_eq!(rc.status(h).unwrap().state, RevealState::Revealed);
    assert_eq!(scene.scalar(node, Prop::Opacity), Some(1.0));

    rc.on_scroll(vp(0.0));
    assert_eq!(rc.status(h).unwrap().state, RevealState::Concealing);
    rc.tick(1.0, &mut scene);
    let status = rc.status(h).unwrap();
    assert_eq!(status.state, RevealState::Unrevealed);
    assert_eq!(status.plays, 1);
    assert_eq!(status.reverses, 1);
    assert_eq!(scene.scalar(node, Prop::Opacity), Some(0.0));
}

#[test]
fn once_mode_ignores_later_crossings() {
    let (mut scene, mut rc, h, _node) = setup(RevealMode::Once);

    rc.on_scroll(vp(500.0));
    rc.tick(1.0, &mut scene);
    assert_eq!(rc.status(h).unwrap().state, RevealState::Revealed);
    assert!(!rc.is_observing(h));

    for top in [0.0, 600.0, 0.0, 900.0] {
        assert!(rc.on_scroll(vp(top)).is_empty());
        rc.tick(0.5, &mut scene);
    }
    let status = rc.status(h).unwrap();
    assert_eq!(status.state, RevealState::Revealed);
    assert_eq!(status.plays, 1);
    assert_eq!(status.reverses, 0);
}

#[test]
fn batch_registration_staggers_start_times() {
    let mut scene = SceneGraph::new();
    let nodes = scene.insert_many("gallery-item", 3);
    let items: Vec<_> = nodes
        .iter()
        .map(|&n| (n, ElementBounds::new(800.0, 200.0)))
        .collect();

    let mut rc = RevealController::new();
    let preset = RevealPreset {
        rise: 50.0,
        duration: 0.8,
        ease: Ease::Linear,
    };
    let handles = rc
        .register_batch(
            &mut scene,
            &items,
            &RevealTag::new("gallery").mode(RevealMode::Once),
            &preset,
            0.1,
        )
        .unwrap();
    assert_eq!(handles.len(), 3);

    rc.on_scroll(vp(0.0));
    rc.tick(0.15, &mut scene);
    let first = scene.scalar(nodes[0], Prop::Opacity).unwrap();
    let second = scene.scalar(nodes[1], Prop::Opacity).unwrap();
    let third = scene.scalar(nodes[2], Prop::Opacity).unwrap();
    assert!(first > second);
    assert!(second > 0.0);
    assert_eq!(third, 0.0);

    rc.tick(1.0, &mut scene);
    for h in handles {
        assert_eq!(rc.status(h).unwrap().state, RevealState::Revealed);
    }
}

#[test]
fn unregister_stops_animation_against_detached_node() {
    let (mut scene, mut rc, h, node) = setup(RevealMode::Toggle);
    rc.on_scroll(vp(500.0));
    rc.tick(0.2, &mut scene);

    scene.detach(node);
    assert!(rc.unregister(h));
    assert!(!rc.unregister(h));
    let writes = scene.writes(node);
    rc.on_scroll(vp(0.0));
    rc.tick(1.0, &mut scene);
    assert_eq!(scene.writes(node), writes);
    assert!(rc.status(h).is_none());
    assert!(rc.is_empty());
}

#[test]
fn teardown_detaches_everything() {
    let (mut scene, mut rc, h, _node) = setup(RevealMode::Toggle);
    rc.on_scroll(vp(500.0));
    rc.teardown();
    assert!(rc.is_empty());
    assert!(!rc.is_observing(h));
    assert!(rc.tick(1.0, &mut scene).is_empty());
}

#[test]
fn invalid_threshold_is_rejected() {
    let mut scene = SceneGraph::new();
    let node = scene.insert("x");
    let mut rc = RevealController::new();
    let err = rc
        .register(
            &mut scene,
            node,
            ElementBounds::new(0.0, 1.0),
            &RevealTag::new("bad").threshold(-0.5),
            &RevealPreset::default(),
        )
        .unwrap_err();
    assert!(matches!(err, ShutterError::Validation(_)));
}
