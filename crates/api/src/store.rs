use akiya_core::catalog;
use akiya_core::error::CoreError;
use akiya_core::types::{ImageRecord, PropertyRecord};
use indexmap::IndexMap;
use tokio::sync::RwLock;

/// In-memory property listings, shared across requests for the lifetime of
/// the process.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc`.
/// Appending an image takes the write lock, so concurrent appends never
/// lose an update.
pub struct PropertyStore {
    properties: RwLock<IndexMap<String, PropertyRecord>>,
}

impl PropertyStore {
    pub fn new(properties: Vec<PropertyRecord>) -> Self {
        let map = properties.into_iter().map(|p| (p.id.clone(), p)).collect();
        Self {
            properties: RwLock::new(map),
        }
    }

    /// A store holding the fixed catalog listings.
    pub fn seeded() -> Self {
        Self::new(catalog::seed_properties())
    }

    /// Snapshot of every property, in catalog order.
    pub async fn list(&self) -> Vec<PropertyRecord> {
        self.properties.read().await.values().cloned().collect()
    }

    pub async fn contains(&self, house_id: &str) -> bool {
        self.properties.read().await.contains_key(house_id)
    }

    /// Find an image attached to a property. Fails if the property itself
    /// is unknown; `Ok(None)` means the property exists but the image does not.
    pub async fn find_image(
        &self,
        house_id: &str,
        image_id: &str,
    ) -> Result<Option<ImageRecord>, CoreError> {
        let properties = self.properties.read().await;
        let property = properties.get(house_id).ok_or_else(|| house_not_found(house_id))?;
        Ok(property.images.iter().find(|i| i.id == image_id).cloned())
    }

    pub async fn append_image(&self, house_id: &str, image: ImageRecord) -> Result<(), CoreError> {
        let mut properties = self.properties.write().await;
        let property = properties
            .get_mut(house_id)
            .ok_or_else(|| house_not_found(house_id))?;
        property.images.push(image);
        Ok(())
    }
}

fn house_not_found(house_id: &str) -> CoreError {
    CoreError::NotFound {
        entity: "House",
        id: house_id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use assert_matches::assert_matches;

    use super::*;

    #[tokio::test]
    async fn seeded_store_lists_catalog_in_order() {
        let store = PropertyStore::seeded();
        let ids: Vec<_> = store.list().await.into_iter().map(|p| p.id).collect();
        assert_eq!(ids, ["house1", "house2"]);
    }

    #[tokio::test]
    async fn append_then_find() {
        let store = PropertyStore::seeded();
        let image = ImageRecord::uploaded("iVBORw0KGgo".into());
        let id = image.id.clone();
        store.append_image("house2", image).await.unwrap();

        let found = store.find_image("house2", &id).await.unwrap().unwrap();
        assert_eq!(found.data, "iVBORw0KGgo");
        assert!(store.find_image("house1", &id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unknown_house_is_not_found() {
        let store = PropertyStore::seeded();
        let err = store
            .append_image("house9", ImageRecord::uploaded("x".into()))
            .await
            .unwrap_err();
        assert_matches!(err, CoreError::NotFound { entity: "House", .. });
        assert_matches!(
            store.find_image("house9", "img").await,
            Err(CoreError::NotFound { .. })
        );
    }

    #[tokio::test]
    async fn concurrent_appends_are_all_kept() {
        let store = Arc::new(PropertyStore::seeded());
        let tasks: Vec<_> = (0..32)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    store
                        .append_image("house1", ImageRecord::uploaded(format!("img{i}")))
                        .await
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let house1 = &store.list().await[0];
        assert_eq!(house1.images.len(), 32);
    }
}
