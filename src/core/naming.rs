// src/core/naming.rs
//
// Local file names for downloaded images: derived from the URL path,
// completed with an extension when the URL has none, and suffixed on collision.

use image::ImageFormat;
use percent_encoding::percent_decode_str;
use url::Url;

use super::sanitize::sanitize_filename;
use crate::config::consts::FALLBACK_STEM;

/// Split `name` into stem and extension at the last dot.
/// A leading dot or a trailing dot does not count as an extension separator.
pub fn split_name(name: &str) -> (&str, Option<&str>) {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => (stem, Some(ext)),
        _ => (name, None),
    }
}

/// Last non-empty path segment of `url`, percent-decoded and sanitized. Query
/// and fragment never take part. URLs without a usable segment (`/`, `data:`)
/// get `FALLBACK_STEM`.
pub fn suggested_filename(url: &Url) -> String {
    url.path_segments()
        .and_then(|segs| segs.filter(|s| !s.is_empty()).last())
        .map(|seg| sanitize_filename(&percent_decode_str(seg).decode_utf8_lossy()))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| s!(FALLBACK_STEM))
}

/// `photo.jpg` + 2 → `photo(2).jpg`. Zero returns the name unchanged.
pub fn with_suffix(name: &str, n: usize) -> String {
    if n == 0 {
        return s!(name);
    }
    match split_name(name) {
        (stem, Some(ext)) => format!("{stem}({n}).{ext}"),
        (stem, None) => format!("{stem}({n})"),
    }
}

fn format_from_content_type(content_type: &str) -> Option<&'static str> {
    let mime = content_type.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
    if mime == "image/svg+xml" {
        return Some("svg");
    }
    ImageFormat::from_mime_type(&mime).and_then(|f| f.extensions_str().first().copied())
}

fn format_from_bytes(bytes: &[u8]) -> Option<&'static str> {
    image::guess_format(bytes)
        .ok()
        .and_then(|f| f.extensions_str().first().copied())
}

/// Append an extension when `name` has none, inferred from the response
/// Content-Type first, then from the payload's magic bytes.
pub fn ensure_extension(name: &str, content_type: Option<&str>, bytes: &[u8]) -> String {
    if split_name(name).1.is_some() {
        return s!(name);
    }
    let ext = content_type
        .and_then(format_from_content_type)
        .or_else(|| format_from_bytes(bytes));

    match ext {
        Some(ext) => format!("{name}.{ext}"),
        None => s!(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn split() {
        assert_eq!(split_name("photo.jpg"), ("photo", Some("jpg")));
        assert_eq!(split_name("archive.tar.gz"), ("archive.tar", Some("gz")));
        assert_eq!(split_name("README"), ("README", None));
        assert_eq!(split_name(".profile"), (".profile", None));
        assert_eq!(split_name("trailing."), ("trailing.", None));
    }

    #[test]
    fn name_from_last_segment_without_query() {
        assert_eq!(suggested_filename(&url("https://ex.com/a/b/photo.jpg?size=large#top")), "photo.jpg");
        assert_eq!(suggested_filename(&url("https://ex.com/a/b/")), "b");
        assert_eq!(suggested_filename(&url("https://ex.com/")), FALLBACK_STEM);
        assert_eq!(suggested_filename(&url("https://ex.com")), FALLBACK_STEM);
        assert_eq!(suggested_filename(&url("data:image/png;base64,iVBORw0KGgo=")), FALLBACK_STEM);
    }

    #[test]
    fn name_is_percent_decoded() {
        assert_eq!(suggested_filename(&url("https://ex.com/caf%C3%A9%20photo.jpg")), "café_photo.jpg");
        // an encoded slash must not smuggle a path separator through
        assert_eq!(suggested_filename(&url("https://ex.com/a%2Fb.png")), "a_b.png");
    }

    #[test]
    fn name_is_sanitized() {
        assert_eq!(suggested_filename(&url("https://ex.com/img/..")), FALLBACK_STEM);
        assert_eq!(suggested_filename(&url("https://ex.com/img/con.png")), "_con.png");
    }

    #[test]
    fn suffixes() {
        assert_eq!(with_suffix("photo.jpg", 0), "photo.jpg");
        assert_eq!(with_suffix("photo.jpg", 1), "photo(1).jpg");
        assert_eq!(with_suffix("photo.jpg", 12), "photo(12).jpg");
        assert_eq!(with_suffix("image", 3), "image(3)");
    }

    #[test]
    fn extension_from_content_type() {
        assert_eq!(ensure_extension("image", Some("image/png"), b""), "image.png");
        assert_eq!(ensure_extension("pic", Some("image/jpeg; charset=binary"), b""), "pic.jpg");
        assert_eq!(ensure_extension("logo", Some("image/svg+xml"), b"<svg/>"), "logo.svg");
    }

    #[test]
    fn extension_from_magic_bytes() {
        let png = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
        assert_eq!(ensure_extension("image", Some("application/octet-stream"), png), "image.png");
        assert_eq!(ensure_extension("anim", None, b"GIF89a......"), "anim.gif");
    }

    #[test]
    fn existing_extension_or_unknown_payload_left_alone() {
        assert_eq!(ensure_extension("photo.webp", Some("image/png"), b""), "photo.webp");
        assert_eq!(ensure_extension("blob", Some("text/plain"), b"hello"), "blob");
    }
}
