use bytes::Bytes;
use reqwest::{Client, RequestBuilder, Response};
use url::Url;

use common::prelude::ContentKind;

use super::content_url;
use crate::api::client::{ApiError, ApiRequest};

/// `GET /api/v0/content/{id}[.json|.text]`: the bytes of one item.
///
/// JSON and text items are requested through their rendered variants, which
/// the kind decides. Everything else is fetched raw.
#[derive(Debug, Clone)]
pub struct FetchContentRequest {
    pub id: String,
    pub kind: ContentKind,
}

impl FetchContentRequest {
    pub fn new(id: impl Into<String>, kind: ContentKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }

    /// Path below `/api/v0/content/` this request targets
    pub fn target(&self) -> String {
        format!("{}{}", self.id, self.kind.remote_suffix().unwrap_or_default())
    }
}

#[async_trait::async_trait]
impl ApiRequest for FetchContentRequest {
    type Response = Bytes;

    fn build_request(self, base_url: &Url, client: &Client) -> Result<RequestBuilder, ApiError> {
        let full_url = content_url(base_url, &self.target())?;
        Ok(client.get(full_url))
    }

    async fn decode(response: Response) -> Result<Self::Response, ApiError> {
        Ok(response.bytes().await?)
    }
}
