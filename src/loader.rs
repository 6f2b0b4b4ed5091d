use tracing::{error, info};

use crate::store::DocumentStore;

/// Opaque identifier (URI) for a displayable image.
pub type ImageRef = String;

/// Fetches the ordered image list from the document store, once, at startup.
pub struct ImageListLoader<S> {
    store: S,
    collection: String,
}

impl<S: DocumentStore> ImageListLoader<S> {
    pub fn new(store: S, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }

    /// Returns the image references in the store's ascending index order.
    ///
    /// Never fails: any store error is logged and mapped to an empty list,
    /// leaving the caller in the well-defined "no images yet" state. A load
    /// either fully succeeds or counts as a complete failure.
    pub async fn load_images(&self) -> Vec<ImageRef> {
        match self.store.fetch_collection(&self.collection).await {
            Ok(documents) => {
                info!(
                    collection = %self.collection,
                    count = documents.len(),
                    "image list loaded"
                );
                documents.into_iter().map(|doc| doc.url).collect()
            }
            Err(e) => {
                error!("error fetching images: {e:#}");
                Vec::new()
            }
        }
    }
}
