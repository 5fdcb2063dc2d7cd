//! Image URL resolution.
//!
//! The catalog returns relative image paths such as `/74xTEgt7R36.jpg`. This
//! module turns them into full CDN URLs, substituting a generic placeholder
//! when a movie has no artwork.

/// Base URL of the catalog's image CDN.
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/";

/// Placeholder shown for movies without artwork.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://placehold.co/500x750/cccccc/333333?text=No+Image";

/// Rendition of a movie image.
///
/// Posters are requested at a fixed medium width; backdrops, which back the
/// detail overlay, are requested at the original resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    Poster,
    Backdrop,
}

impl ImageSize {
    /// CDN path segment selecting the rendition.
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Poster => "w500",
            Self::Backdrop => "original",
        }
    }
}

/// Resolves a relative image path into a full URL.
///
/// Returns the placeholder URL when `path` is `None` or empty.
///
/// # Examples
///
/// ```
/// use cinescope::catalog::{resolve_image, ImageSize, PLACEHOLDER_IMAGE_URL};
///
/// let url = resolve_image(Some("/abc.jpg"), ImageSize::Poster);
/// assert_eq!(url, "https://image.tmdb.org/t/p/w500/abc.jpg");
///
/// assert_eq!(resolve_image(None, ImageSize::Backdrop), PLACEHOLDER_IMAGE_URL);
/// ```
#[must_use]
pub fn resolve_image(path: Option<&str>, size: ImageSize) -> String {
    match path {
        Some(path) if !path.trim().is_empty() => {
            format!("{IMAGE_BASE_URL}{}{path}", size.segment())
        }
        _ => PLACEHOLDER_IMAGE_URL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poster_uses_fixed_width_rendition() {
        assert_eq!(
            resolve_image(Some("/poster.jpg"), ImageSize::Poster),
            "https://image.tmdb.org/t/p/w500/poster.jpg"
        );
    }

    #[test]
    fn backdrop_uses_original_rendition() {
        assert_eq!(
            resolve_image(Some("/backdrop.jpg"), ImageSize::Backdrop),
            "https://image.tmdb.org/t/p/original/backdrop.jpg"
        );
    }

    #[test]
    fn missing_or_blank_path_falls_back_to_placeholder() {
        assert_eq!(resolve_image(None, ImageSize::Poster), PLACEHOLDER_IMAGE_URL);
        assert_eq!(resolve_image(Some(""), ImageSize::Poster), PLACEHOLDER_IMAGE_URL);
        assert_eq!(resolve_image(Some("  "), ImageSize::Backdrop), PLACEHOLDER_IMAGE_URL);
    }
}
