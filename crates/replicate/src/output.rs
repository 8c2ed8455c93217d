//! Adapts a prediction's JSON `output` into [`GenerationOutput`].

use akiya_core::image_ref::is_remote_url;
use akiya_core::normalize::GenerationOutput;
use serde_json::Value;

pub fn adapt_output(value: Value) -> GenerationOutput {
    match value {
        Value::String(s) if is_remote_url(&s) => GenerationOutput::Url(s),
        Value::String(s) => GenerationOutput::Text(s),
        Value::Array(items) => {
            GenerationOutput::ItemList(items.into_iter().map(adapt_output).collect())
        }
        other => GenerationOutput::Other(other),
    }
}

/// The first URL in `output`, looking into the head of a list.
pub fn first_url(output: &GenerationOutput) -> Option<&str> {
    match output {
        GenerationOutput::Url(url) => Some(url),
        GenerationOutput::ItemList(items) => items.first().and_then(first_url),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn url_string() {
        assert_eq!(
            adapt_output(json!("https://replicate.delivery/pbxt/out.png")),
            GenerationOutput::Url("https://replicate.delivery/pbxt/out.png".into())
        );
    }

    #[test]
    fn list_of_urls_keeps_order() {
        let adapted = adapt_output(json!(["https://a/1.png", "https://a/2.png"]));
        assert_eq!(
            adapted,
            GenerationOutput::ItemList(vec![
                GenerationOutput::Url("https://a/1.png".into()),
                GenerationOutput::Url("https://a/2.png".into()),
            ])
        );
        assert_eq!(first_url(&adapted), Some("https://a/1.png"));
    }

    #[test]
    fn other_shapes() {
        assert_eq!(adapt_output(json!("plain")), GenerationOutput::Text("plain".into()));
        assert_eq!(
            adapt_output(json!("httpbin-output")),
            GenerationOutput::Text("httpbin-output".into())
        );
        assert_eq!(adapt_output(json!(null)), GenerationOutput::Other(json!(null)));
        assert_eq!(
            adapt_output(json!({"url": "https://a"})),
            GenerationOutput::Other(json!({"url": "https://a"}))
        );
        assert_eq!(first_url(&GenerationOutput::Text("x".into())), None);
    }
}
