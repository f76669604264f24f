use std::fmt;
use std::time::Duration;

use reqwest::{header::HeaderMap, header::HeaderValue, Client};
use url::Url;

use super::error::ApiError;
use super::ApiRequest;

// header names must be lowercase to be used as static header names
pub const API_KEY_ID_HEADER: &str = "x-magda-api-key-id";
pub const API_KEY_HEADER: &str = "x-magda-api-key";

/// Every request is bounded by this; there is no finer-grained cancellation
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(2 * 60);

/// Key pair sent with every request
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredentials {
    pub key_id: String,
    pub key: String,
}

impl ApiCredentials {
    pub fn new(key_id: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key: key.into(),
        }
    }
}

impl fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("key_id", &self.key_id)
            .field("key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    pub remote: Url,
    client: Client,
}

impl ApiClient {
    pub fn new(remote: &Url, credentials: &ApiCredentials) -> Result<Self, ApiError> {
        let mut key_id = HeaderValue::from_str(&credentials.key_id)
            .map_err(|_| ApiError::InvalidHeader(API_KEY_ID_HEADER))?;
        key_id.set_sensitive(true);
        let mut key = HeaderValue::from_str(&credentials.key)
            .map_err(|_| ApiError::InvalidHeader(API_KEY_HEADER))?;
        key.set_sensitive(true);

        let mut default_headers = HeaderMap::new();
        default_headers.insert(API_KEY_ID_HEADER, key_id);
        default_headers.insert(API_KEY_HEADER, key);

        let client = Client::builder()
            .default_headers(default_headers)
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("content-mirror/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            remote: remote.clone(),
            client,
        })
    }

    pub async fn call<T: ApiRequest>(&self, request: T) -> Result<T::Response, ApiError> {
        let request_builder = request.build_request(&self.remote, &self.client)?;
        let response = request_builder.send().await?;

        if response.status() == T::SUCCESS {
            T::decode(response).await
        } else {
            Err(ApiError::from_response(response).await)
        }
    }
}
