//! Profile state for the signed-in user.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

/// Stock avatar shown until the user uploads an image.
pub const DEFAULT_AVATAR_URL: &str = "https://www.gravatar.com/avatar/";

/// Profile data fetched once per session; read-only here except for the
/// image, which the profile menu can replace via upload.
#[derive(Clone, Debug, Default)]
pub struct ProfileState {
    pub username: String,
    pub email: String,
    pub image_url: Option<String>,
    pub error: Option<String>,
}

/// Image source for the header avatar, with the stock fallback.
pub fn avatar_src(image_url: Option<&str>) -> String {
    match image_url {
        Some(url) if !url.is_empty() => url.to_owned(),
        _ => DEFAULT_AVATAR_URL.to_owned(),
    }
}
