use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ShutterError::invalid_state("x")
            .to_string()
            .contains("invalid state:")
    );
    assert!(ShutterError::not_found("x").to_string().contains("not found:"));
    assert!(
        ShutterError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ShutterError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ShutterError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
