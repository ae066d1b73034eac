use super::*;

#[test]
fn default_profile_is_blank() {
    let state = ProfileState::default();
    assert!(state.username.is_empty());
    assert!(state.image_url.is_none());
    assert!(state.error.is_none());
}

#[test]
fn avatar_src_uses_uploaded_image() {
    assert_eq!(
        avatar_src(Some("https://img.example/me.jpg")),
        "https://img.example/me.jpg"
    );
}

#[test]
fn avatar_src_falls_back_to_stock_image() {
    assert_eq!(avatar_src(None), DEFAULT_AVATAR_URL);
    assert_eq!(avatar_src(Some("")), DEFAULT_AVATAR_URL);
}
