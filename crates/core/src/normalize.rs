//! Output normalization: whatever the hosted model hands back becomes one
//! image reference string.

use crate::image_ref::{self, MIME_PNG};

/// The shapes a generation result can take once adapted from the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutput {
    /// Image bytes, either downloaded or returned inline.
    Bytes(Vec<u8>),
    /// An `http(s)://` URL.
    Url(String),
    /// Any other string.
    Text(String),
    ItemList(Vec<GenerationOutput>),
    /// A value with no recognised shape.
    Other(serde_json::Value),
}

impl GenerationOutput {
    /// Canonical form of a bytes or URL result; `None` for every other shape.
    fn canonical(&self) -> Option<String> {
        match self {
            GenerationOutput::Bytes(bytes) => Some(image_ref::encode_data_url(MIME_PNG, bytes)),
            GenerationOutput::Url(url) => Some(url.clone()),
            _ => None,
        }
    }

    fn to_json(&self) -> serde_json::Value {
        match self {
            GenerationOutput::Bytes(bytes) => {
                image_ref::encode_data_url(MIME_PNG, bytes).into()
            }
            GenerationOutput::Url(s) | GenerationOutput::Text(s) => s.clone().into(),
            GenerationOutput::ItemList(items) => items.iter().map(Self::to_json).collect(),
            GenerationOutput::Other(value) => value.clone(),
        }
    }
}

/// Reduce `output` to a single image reference.
///
/// Bytes become a PNG data URL and URLs pass through. For a non-empty list
/// only the first item counts: bytes and URLs as above, any other string
/// as-is, anything else as its JSON text. Every other shape falls back to
/// `original`, so this never fails.
pub fn normalize_output(output: &GenerationOutput, original: &str) -> String {
    if let Some(canonical) = output.canonical() {
        return canonical;
    }
    match output {
        GenerationOutput::ItemList(items) => match items.first() {
            Some(first) => first.canonical().unwrap_or_else(|| match first {
                GenerationOutput::Text(text) => text.clone(),
                other => other.to_json().to_string(),
            }),
            None => fallback(output, original),
        },
        _ => fallback(output, original),
    }
}

fn fallback(output: &GenerationOutput, original: &str) -> String {
    tracing::warn!(?output, "Unrecognised generation output, using the original image");
    original.to_string()
}
