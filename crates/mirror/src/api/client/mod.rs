mod client;
mod error;

pub use client::{ApiClient, ApiCredentials, API_KEY_HEADER, API_KEY_ID_HEADER, REQUEST_TIMEOUT};
pub use error::ApiError;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use url::Url;

/// A single call against the content API.
///
/// Each endpoint is a request type that knows how to build itself, which
/// status means success, and how to read the successful response.
#[async_trait::async_trait]
pub trait ApiRequest: Send {
    type Response: Send;

    /// The only status treated as success
    const SUCCESS: StatusCode = StatusCode::OK;

    fn build_request(self, base_url: &Url, client: &Client) -> Result<RequestBuilder, ApiError>;

    async fn decode(response: Response) -> Result<Self::Response, ApiError>;
}
