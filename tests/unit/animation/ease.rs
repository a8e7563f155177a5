use super::*;

const ALL: [Ease; 10] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::InQuart,
    Ease::OutQuart,
    Ease::InOutQuart,
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn names_parse_back() {
    for ease in ALL {
        assert_eq!(Ease::parse(ease.name()).unwrap(), ease);
    }
    assert_eq!("Power3.InOut".parse::<Ease>().unwrap(), Ease::InOutQuart);
    assert_eq!(Ease::parse("linear").unwrap(), Ease::Linear);
}

#[test]
fn unknown_names_are_rejected() {
    assert!(Ease::parse("elastic.out").is_err());
    assert!(Ease::parse("  ").is_err());
}

#[test]
fn serde_uses_names() {
    let s = serde_json::to_string(&Ease::OutQuart).unwrap();
    assert_eq!(s, "\"power3.out\"");
    let back: Ease = serde_json::from_str("\"power2.inOut\"").unwrap();
    assert_eq!(back, Ease::InOutCubic);
}
