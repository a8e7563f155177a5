use super::*;

fn sample() -> Vec<GalleryImage> {
    vec![
        GalleryImage::new(1, "a.jpg", "Wedding", "Weddings"),
        GalleryImage::new(2, "b.jpg", "Portrait", "Portraits"),
        GalleryImage::new(3, "c.jpg", "Another wedding", "Weddings"),
    ]
}

#[test]
fn categories_start_with_all_in_first_seen_order() {
    assert_eq!(
        categories(&sample()),
        vec![
            Category::All,
            Category::Named("Weddings".into()),
            Category::Named("Portraits".into()),
        ]
    );
    assert_eq!(categories(&[]), vec![Category::All]);
}

#[test]
fn all_parses_case_insensitively() {
    assert_eq!(Category::parse("All"), Category::All);
    assert_eq!(Category::parse(" ALL "), Category::All);
    assert_eq!(Category::parse("Events"), Category::Named("Events".into()));
    assert_eq!(Category::All.to_string(), "All");
}

#[test]
fn matches_honours_sentinel() {
    let img = &sample()[1];
    assert!(img.matches(&Category::All));
    assert!(img.matches(&Category::parse("Portraits")));
    assert!(!img.matches(&Category::parse("Weddings")));
}

#[test]
fn duplicate_ids_are_rejected() {
    let mut images = sample();
    images.push(GalleryImage::new(2, "d.jpg", "dup", "Events"));
    assert!(matches!(
        validate_catalog(&images),
        Err(ShutterError::Validation(_))
    ));
    validate_catalog(&sample()).unwrap();
}

#[test]
fn image_filed_under_all_is_rejected() {
    let images = vec![GalleryImage::new(1, "a.jpg", "x", "all")];
    assert!(validate_catalog(&images).is_err());
}

#[test]
fn alt_is_accepted_as_caption() {
    let img: GalleryImage = serde_json::from_str(
        r#"{ "id": 4, "src": "e.jpg", "alt": "Event Photography", "category": "Events" }"#,
    )
    .unwrap();
    assert_eq!(img.caption, "Event Photography");

    let cat: Category = serde_json::from_str(r#""all""#).unwrap();
    assert_eq!(cat, Category::All);
}

#[test]
fn padded_category_labels_match_their_button() {
    let images: Vec<GalleryImage> = serde_json::from_str(
        r#"[
            { "id": 1, "src": "a.jpg", "category": "Weddings " },
            { "id": 2, "src": "b.jpg", "category": "Portraits" },
            { "id": 3, "src": "c.jpg", "category": " Weddings" }
        ]"#,
    )
    .unwrap();
    validate_catalog(&images).unwrap();

    let buttons = categories(&images);
    assert_eq!(
        buttons,
        vec![
            Category::All,
            Category::Named("Weddings".into()),
            Category::Named("Portraits".into()),
        ]
    );
    assert!(images[0].matches(&buttons[1]));
    assert!(images[2].matches(&buttons[1]));

    let lock = crate::lock::scroll::ScrollLock::new();
    let mut g = crate::gallery::controller::GalleryController::new(images, &lock).unwrap();
    g.select_category(buttons[1].clone());
    let ids: Vec<u32> = g.filtered_images().iter().map(|img| img.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert!(g.select_image(1));
}

#[test]
fn new_trims_the_category() {
    let img = GalleryImage::new(5, "e.jpg", "x", "  Events ");
    assert_eq!(img.category, "Events");
}
