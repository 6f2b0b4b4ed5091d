use anyhow::{Context, Result};
use serde::Deserialize;

/// One document of the image collection as stored remotely. The `index`
/// field carries the externally assigned display order.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageDocument {
    pub index: i64,
    pub url: String,
}

/// Read-only access to an ordered document collection.
///
/// Constructed explicitly at startup and handed to whoever needs it; there
/// is no ambient global client.
#[allow(async_fn_in_trait)]
pub trait DocumentStore {
    async fn fetch_collection(&self, collection: &str) -> Result<Vec<ImageDocument>>;
}

/// HTTP-backed document store: `GET {base_url}/{collection}` returning a
/// JSON array of documents.
pub struct HttpStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl DocumentStore for HttpStore {
    async fn fetch_collection(&self, collection: &str) -> Result<Vec<ImageDocument>> {
        let url = format!("{}/{}", self.base_url, collection);
        let body = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("store unreachable at {url}"))?
            .error_for_status()
            .context("store rejected the collection query")?
            .text()
            .await
            .context("failed to read collection response")?;
        parse_collection(&body)
    }
}

/// Parses a collection response body and orders the documents ascending by
/// their `index` field. The wire may deliver them in any order; the sort key
/// is authoritative.
pub fn parse_collection(body: &str) -> Result<Vec<ImageDocument>> {
    let mut documents: Vec<ImageDocument> =
        serde_json::from_str(body).context("malformed collection response")?;
    documents.sort_by_key(|doc| doc.index);
    Ok(documents)
}
