use std::sync::Arc;

use akiya_core::generation::ImageGenerator;
use akiya_core::resolver::ImageResolver;
use akiya_replicate::ReplicateGenerator;

use crate::config::ServerConfig;
use crate::store::PropertyStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Properties and their images.
    pub store: Arc<PropertyStore>,
    pub resolver: Arc<ImageResolver>,
    /// Hosted model client. `None` puts renovation into mock mode.
    pub generator: Option<Arc<dyn ImageGenerator>>,
}

impl AppState {
    /// Build state from configuration: seeded store, resolver over the demo
    /// directory, and a Replicate generator when a token is configured.
    pub fn from_config(config: &ServerConfig) -> Self {
        let generator = config
            .replicate
            .as_ref()
            .map(|rc| Arc::new(ReplicateGenerator::new(rc)) as Arc<dyn ImageGenerator>);

        Self {
            store: Arc::new(PropertyStore::seeded()),
            resolver: Arc::new(ImageResolver::new(&config.demo_assets_dir)),
            generator,
        }
    }

    pub fn generation_mode(&self) -> &'static str {
        if self.generator.is_some() {
            "live"
        } else {
            "mock"
        }
    }
}
