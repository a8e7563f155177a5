use super::*;

fn three() -> Vec<GalleryImage> {
    vec![
        GalleryImage::new(1, "1.jpg", "one", "Weddings"),
        GalleryImage::new(2, "2.jpg", "two", "Portraits"),
        GalleryImage::new(3, "3.jpg", "three", "Weddings"),
    ]
}

fn ids(g: &GalleryController) -> Vec<u32> {
    g.filtered_images().iter().map(|img| img.id).collect()
}

#[test]
fn weddings_walkthrough() {
    let lock = ScrollLock::new();
    let mut g = GalleryController::new(three(), &lock).unwrap();
    assert_eq!(
        g.categories(),
        vec![
            Category::All,
            Category::parse("Weddings"),
            Category::parse("Portraits")
        ]
    );

    g.select_category("Weddings");
    assert_eq!(ids(&g), vec![1, 3]);

    assert!(g.select_image(3));
    assert_eq!(g.selected_id(), Some(3));
    assert_eq!(lock.holder(), Some(LockHolder::Lightbox));
    assert_eq!(lock.style(), Some(LockStyle::Hidden));

    assert!(g.navigate(Direction::Next));
    assert_eq!(g.selected_id(), Some(1));
    assert_eq!(g.position(), Some((0, 2)));
    assert!(g.navigate(Direction::Next));
    assert_eq!(g.selected_id(), Some(3));

    g.select_category("Portraits");
    assert_eq!(ids(&g), vec![2]);
    assert!(!g.lightbox_open());
    assert!(!lock.is_locked());
}

#[test]
fn navigation_is_cyclic_both_ways() {
    let lock = ScrollLock::new();
    let mut g = GalleryController::new(three(), &lock).unwrap();
    for start in [1, 2, 3] {
        g.select_image(start);
        for _ in 0..3 {
            g.navigate(Direction::Next);
        }
        assert_eq!(g.selected_id(), Some(start));
        for _ in 0..3 {
            g.navigate(Direction::Prev);
        }
        assert_eq!(g.selected_id(), Some(start));
    }
    g.select_image(1);
    g.navigate(Direction::Prev);
    assert_eq!(g.selected_id(), Some(3));
}

#[test]
fn changing_category_closes_only_when_selection_leaves_the_view() {
    for image in three() {
        for label in ["All", "Weddings", "Portraits"] {
            let lock = ScrollLock::new();
            let mut g = GalleryController::new(three(), &lock).unwrap();
            assert!(g.select_image(image.id));
            g.select_category(label);
            let keeps = image.matches(&Category::parse(label));
            assert_eq!(g.lightbox_open(), keeps, "image {} under {label}", image.id);
            assert_eq!(lock.is_locked(), keeps);
        }
    }
}

#[test]
fn selecting_outside_the_view_is_a_silent_no_op() {
    let lock = ScrollLock::new();
    let mut g = GalleryController::new(three(), &lock).unwrap();
    g.select_category("Weddings");
    assert!(!g.select_image(2));
    assert!(!g.select_image(42));
    assert!(!g.lightbox_open());
    assert!(!lock.is_locked());
    assert!(matches!(g.position_of(2), Err(ShutterError::NotFound(_))));
}

#[test]
fn navigate_while_closed_does_nothing() {
    let lock = ScrollLock::new();
    let mut g = GalleryController::new(three(), &lock).unwrap();
    assert!(!g.navigate(Direction::Next));
    assert_eq!(g.selected_id(), None);
}

#[test]
fn empty_category_cannot_open() {
    let lock = ScrollLock::new();
    let mut g = GalleryController::new(three(), &lock).unwrap();
    g.select_image(1);
    g.select_category("Events");
    assert!(g.filtered_images().is_empty());
    assert!(!g.lightbox_open());
    assert!(!g.select_image(1));

    let mut empty = GalleryController::new(Vec::new(), &lock).unwrap();
    assert!(!empty.select_image(1));
    assert!(!empty.navigate(Direction::Prev));
}

#[test]
fn close_and_teardown_release_the_lock() {
    let lock = ScrollLock::new();
    let mut g = GalleryController::new(three(), &lock).unwrap();
    g.select_image(2);
    assert!(g.holds_lock());
    assert!(g.close_lightbox());
    assert!(!g.close_lightbox());
    assert!(!lock.is_locked());

    g.select_image(2);
    g.teardown();
    g.teardown();
    assert!(!lock.is_locked());
}

#[test]
fn switching_images_keeps_a_single_lock() {
    let lock = ScrollLock::new();
    let mut g = GalleryController::new(three(), &lock).unwrap();
    g.select_image(1);
    g.select_image(2);
    assert!(g.holds_lock());
    g.close_lightbox();
    assert!(!lock.is_locked());
}

#[test]
fn duplicate_ids_fail_construction() {
    let mut images = three();
    images.push(GalleryImage::new(1, "x.jpg", "dup", "Events"));
    assert!(GalleryController::new(images, &ScrollLock::new()).is_err());
}
