/// Configuration for the frontend application

/// Base URL the site is served from
/// - For local development: "/"
/// - For GitHub Pages: "/portfolio/"
#[cfg(not(feature = "github-pages"))]
pub const BASE_URL: &str = "/";

#[cfg(feature = "github-pages")]
pub const BASE_URL: &str = "/portfolio/";

/// `localStorage` key holding the persisted theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Circular reveal animation settings.
pub const REVEAL_DURATION_MS: f64 = 300.0;
pub const REVEAL_EASING: &str = "ease-in";
pub const REVEAL_PSEUDO_ELEMENT: &str = "::view-transition-new(root)";

/// Prefix an in-site path (e.g. `/#about`) with [`BASE_URL`].
pub fn route_path(path: &str) -> String {
    // Remove leading slash if present
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}{}", BASE_URL, path)
}
