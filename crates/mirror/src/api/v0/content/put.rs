use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::{Body, Client, RequestBuilder, Response, StatusCode};
use tokio::fs::File;
use url::Url;

use super::content_url;
use crate::api::client::{ApiError, ApiRequest};

/// `PUT /api/v0/content/{id}`: replace one item with the bytes of a local file.
///
/// The file is streamed as the body; the remote answers `201 Created` on
/// success and anything else is a rejection.
#[derive(Debug)]
pub struct PutContentRequest {
    pub id: String,
    pub content_type: String,
    pub body: File,
    /// Sent as `Content-Length` when known
    pub length: Option<u64>,
}

impl PutContentRequest {
    pub fn new(id: impl Into<String>, content_type: impl Into<String>, body: File) -> Self {
        Self {
            id: id.into(),
            content_type: content_type.into(),
            body,
            length: None,
        }
    }

    pub fn with_length(mut self, length: u64) -> Self {
        self.length = Some(length);
        self
    }
}

#[async_trait::async_trait]
impl ApiRequest for PutContentRequest {
    type Response = ();

    const SUCCESS: StatusCode = StatusCode::CREATED;

    fn build_request(self, base_url: &Url, client: &Client) -> Result<RequestBuilder, ApiError> {
        let full_url = content_url(base_url, &self.id)?;
        let mut builder = client
            .put(full_url)
            .header(CONTENT_TYPE, self.content_type);
        if let Some(length) = self.length {
            builder = builder.header(CONTENT_LENGTH, length);
        }
        Ok(builder.body(Body::from(self.body)))
    }

    async fn decode(_response: Response) -> Result<Self::Response, ApiError> {
        Ok(())
    }
}
