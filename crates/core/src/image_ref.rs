//! Classification of stored image references and data-URL helpers.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::catalog::DEMO_URL_PREFIX;

pub const MIME_JPEG: &str = "image/jpeg";
pub const MIME_PNG: &str = "image/png";
pub const MIME_WEBP: &str = "image/webp";

/// The four shapes an [`ImageRecord::data`](crate::types::ImageRecord)
/// value can take, in the order they are tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRef<'a> {
    /// A `data:` URL; already self-contained.
    Embedded(&'a str),
    /// An `http(s)://` URL.
    Remote(&'a str),
    /// A path under the demo asset URL prefix. Holds the part after the
    /// prefix, which is not yet validated.
    LocalDemo(&'a str),
    /// Anything else is treated as bare base64.
    RawBase64(&'a str),
}

impl<'a> ImageRef<'a> {
    pub fn classify(data: &'a str) -> Self {
        if data.starts_with("data:") {
            ImageRef::Embedded(data)
        } else if is_remote_url(data) {
            ImageRef::Remote(data)
        } else if let Some(filename) = data.strip_prefix(DEMO_URL_PREFIX) {
            ImageRef::LocalDemo(filename)
        } else {
            ImageRef::RawBase64(data)
        }
    }
}

pub fn is_remote_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// MIME type for a demo asset by extension. Unknown extensions are JPEG.
pub fn mime_for_filename(filename: &str) -> &'static str {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => MIME_JPEG,
        "png" => MIME_PNG,
        _ => MIME_JPEG,
    }
}

/// Base64-encode `bytes` into a `data:` URL.
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    wrap_base64(mime, &STANDARD.encode(bytes))
}

/// Wrap an already base64-encoded payload in a `data:` URL.
pub fn wrap_base64(mime: &str, payload: &str) -> String {
    format!("data:{mime};base64,{payload}")
}

/// At most `max_chars` leading characters, for log previews.
pub fn preview(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}
