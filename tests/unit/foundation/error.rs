use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BujoError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(BujoError::anchor("x").to_string().contains("anchor error:"));
    assert!(BujoError::draw("x").to_string().contains("draw error:"));
    assert!(BujoError::output("x").to_string().contains("output error:"));
    assert!(
        BujoError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BujoError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
