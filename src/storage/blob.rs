//! HTTP blob-store storage. Each image is uploaded to `{base_url}/img_{id}`.

use async_trait::async_trait;

use super::Storage;
use crate::error::StippleError;

/// Default blob endpoint.
pub const DEFAULT_BLOB_URL: &str = "https://api.val.town/v1/blob";

/// Storage key for an image id.
pub fn blob_key(id: &str) -> String {
    format!("img_{}", id)
}

#[derive(Debug, Clone)]
pub struct BlobStorage {
    base_url: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl BlobStorage {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self, StippleError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("stipplecard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| StippleError::Storage(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            base_url: base_url.into(),
            token,
            client,
        })
    }

    /// URL an image with this id is uploaded to.
    pub fn url_for(&self, id: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), blob_key(id))
    }
}

#[async_trait]
impl Storage for BlobStorage {
    fn name(&self) -> &'static str {
        "blob"
    }

    async fn save(&self, id: &str, png: &[u8]) -> Result<(), StippleError> {
        let url = self.url_for(id);
        let mut request = self.client.post(&url).body(png.to_vec());
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| StippleError::Storage(format!("Blob upload to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StippleError::Storage(format!(
                "Blob upload to {} returned {}",
                url, status
            )));
        }

        tracing::debug!(%url, bytes = png.len(), "image uploaded");
        Ok(())
    }
}
