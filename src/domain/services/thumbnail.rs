//! Thumbnail URL derivation for the image host.

/// Path segment after which transformation directives are inserted.
pub const UPLOAD_MARKER: &str = "/upload/";

/// Directives producing a 260x195 cropped, auto-format, auto-quality variant.
pub const THUMBNAIL_DIRECTIVES: &str = "w_260,h_195,c_fill,f_auto,q_auto";

/// Maps a full-resolution image URL to its gallery thumbnail variant.
///
/// The directive block goes right after the first `/upload/` segment. URLs
/// without the marker are returned unchanged.
#[must_use]
pub fn resolve_thumbnail_url(image_url: &str) -> String {
    image_url.replacen(
        UPLOAD_MARKER,
        &format!("{UPLOAD_MARKER}{THUMBNAIL_DIRECTIVES}/"),
        1,
    )
}
