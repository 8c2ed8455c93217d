use serde::Serialize;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// A listed property and the images attached to it so far.
///
/// `images` only ever grows: uploads and successful generations append to
/// it, nothing reorders or removes entries.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyRecord {
    pub id: String,
    pub name: String,
    pub address: String,
    pub price: String,
    pub area: String,
    pub age: String,
    pub description: String,
    pub images: Vec<ImageRecord>,
}

/// An uploaded or generated image attached to a property.
///
/// `data` holds a data URL, a remote URL, a local demo path or bare base64;
/// see [`crate::image_ref::ImageRef`] for how each form is told apart.
#[derive(Debug, Clone, Serialize)]
pub struct ImageRecord {
    pub id: String,
    pub data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<Timestamp>,
}

impl ImageRecord {
    /// A freshly uploaded image with a new random id.
    pub fn uploaded(data: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            data,
            original_id: None,
            style: None,
            generated_at: None,
        }
    }

    /// The result of renovating `original_id` in `style`.
    pub fn generated(original_id: &str, style: &str, data: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            data,
            original_id: Some(original_id.to_string()),
            style: Some(style.to_string()),
            generated_at: Some(chrono::Utc::now()),
        }
    }

    /// A transient record for a demo placeholder whose reference was
    /// supplied by the caller. Never stored.
    pub fn placeholder(id: &str, data: String) -> Self {
        Self {
            id: id.to_string(),
            data,
            original_id: None,
            style: None,
            generated_at: None,
        }
    }
}

/// A sample photo offered for a property type.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DemoImage {
    pub id: &'static str,
    pub name: &'static str,
    pub url: &'static str,
    pub description: &'static str,
}
