//! Turns a stored image reference into something the hosted model accepts.
//!
//! Precedence, first match wins:
//!
//! 1. `data:` URLs pass through.
//! 2. `http(s)://` URLs pass through.
//! 3. `/static/demo-images/<file>` is read from the demo directory and
//!    embedded, after the allow-list and containment checks.
//! 4. Anything else is treated as bare base64 and wrapped as PNG.

use std::path::{Path, PathBuf};

use crate::catalog::DEMO_ASSET_FILENAMES;
use crate::error::CoreError;
use crate::image_ref::{self, ImageRef, MIME_PNG};

pub struct ImageResolver {
    demo_dir: PathBuf,
}

impl ImageResolver {
    pub fn new(demo_dir: impl Into<PathBuf>) -> Self {
        Self {
            demo_dir: demo_dir.into(),
        }
    }

    pub fn demo_dir(&self) -> &Path {
        &self.demo_dir
    }

    /// Resolve `data` into a data URL or remote URL.
    pub async fn resolve(&self, data: &str) -> Result<String, CoreError> {
        match ImageRef::classify(data) {
            ImageRef::Embedded(url) | ImageRef::Remote(url) => Ok(url.to_string()),
            ImageRef::LocalDemo(filename) => self.embed_demo_asset(filename).await,
            ImageRef::RawBase64(payload) => Ok(image_ref::wrap_base64(MIME_PNG, payload)),
        }
    }

    async fn embed_demo_asset(&self, filename: &str) -> Result<String, CoreError> {
        let path = self.demo_asset_path(filename).await?;
        let bytes = tokio::fs::read(&path).await.map_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "Failed to read demo image");
            CoreError::Internal("Failed to read demo image".into())
        })?;
        tracing::debug!(filename, size = bytes.len(), "Embedded demo image");
        Ok(image_ref::encode_data_url(
            image_ref::mime_for_filename(filename),
            &bytes,
        ))
    }

    /// Validate `filename` and return its canonical path inside the demo
    /// directory. Nothing is opened until this succeeds.
    async fn demo_asset_path(&self, filename: &str) -> Result<PathBuf, CoreError> {
        if filename.contains(['/', '\\']) || !DEMO_ASSET_FILENAMES.contains(&filename) {
            tracing::warn!(filename, "Rejected demo image path");
            return Err(invalid_demo_path());
        }

        let base = canonicalize(&self.demo_dir).await?;
        let candidate = canonicalize(&base.join(filename)).await?;
        if !candidate.starts_with(&base) {
            tracing::warn!(filename, "Demo image path escapes the demo directory");
            return Err(invalid_demo_path());
        }
        Ok(candidate)
    }
}

fn invalid_demo_path() -> CoreError {
    CoreError::Validation("Invalid demo image path".into())
}

async fn canonicalize(path: &Path) -> Result<PathBuf, CoreError> {
    tokio::fs::canonicalize(path).await.map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "Failed to locate demo image");
        CoreError::Internal("Failed to read demo image".into())
    })
}
