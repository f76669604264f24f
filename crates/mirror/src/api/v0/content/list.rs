use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder, Response};
use url::Url;

use common::prelude::ContentItem;

use super::content_url;
use crate::api::client::{ApiError, ApiRequest};

/// `GET /api/v0/content/all`: every item the remote store knows about
#[derive(Debug, Clone, Default)]
pub struct ListContentRequest;

#[async_trait::async_trait]
impl ApiRequest for ListContentRequest {
    type Response = Vec<ContentItem>;

    fn build_request(self, base_url: &Url, client: &Client) -> Result<RequestBuilder, ApiError> {
        let full_url = content_url(base_url, "all")?;
        Ok(client
            .get(full_url)
            .header(ACCEPT, "application/json; charset=utf-8"))
    }

    async fn decode(response: Response) -> Result<Self::Response, ApiError> {
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
