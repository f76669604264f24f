use bytes::Bytes;
use tokio::fs::File;

use common::prelude::{ContentItem, ContentKind};

use crate::api::client::{ApiClient, ApiError};
use crate::api::v0::content::{FetchContentRequest, ListContentRequest, PutContentRequest};

/// The three remote operations the sync engine needs
#[async_trait::async_trait]
pub trait ContentTransport: Send + Sync {
    /// Enumerate every item the remote store holds
    async fn list_items(&self) -> Result<Vec<ContentItem>, ApiError>;

    /// Fetch the bytes of one item, shaping the request from its kind
    async fn fetch_bytes(&self, id: &str, kind: ContentKind) -> Result<Bytes, ApiError>;

    /// Replace one item with the contents of an open local file
    async fn push_bytes(&self, id: &str, content_type: &str, file: File) -> Result<(), ApiError>;
}

#[async_trait::async_trait]
impl ContentTransport for ApiClient {
    async fn list_items(&self) -> Result<Vec<ContentItem>, ApiError> {
        self.call(ListContentRequest).await
    }

    async fn fetch_bytes(&self, id: &str, kind: ContentKind) -> Result<Bytes, ApiError> {
        self.call(FetchContentRequest::new(id, kind)).await
    }

    async fn push_bytes(&self, id: &str, content_type: &str, file: File) -> Result<(), ApiError> {
        let mut request = PutContentRequest::new(id, content_type, file);
        if let Ok(metadata) = request.body.metadata().await {
            request = request.with_length(metadata.len());
        }
        self.call(request).await
    }
}
