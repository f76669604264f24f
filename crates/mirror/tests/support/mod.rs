//! Shared helpers for tests against a mock content API
#![allow(dead_code)]

use std::path::Path;

use tempfile::TempDir;
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

use common::prelude::ContentPaths;
use content_mirror::api::client::{API_KEY_HEADER, API_KEY_ID_HEADER};
use content_mirror::{ApiClient, ApiCredentials, SyncEngine, SyncOptions};

pub const KEY_ID: &str = "test-key-id";
pub const KEY: &str = "test-key-secret";

/// Start a mock remote and a client pointed at it
pub async fn setup_remote() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = client_for(&server.uri());
    (server, client)
}

pub fn client_for(uri: &str) -> ApiClient {
    let url = Url::parse(uri).unwrap();
    ApiClient::new(&url, &ApiCredentials::new(KEY_ID, KEY)).unwrap()
}

/// Engine writing under `<temp>/data`
pub fn engine_in(temp: &TempDir, client: ApiClient, options: SyncOptions) -> SyncEngine<ApiClient> {
    SyncEngine::new(client, ContentPaths::new(temp.path().join("data")), options)
}

/// A mock for `method` on `/api/v0/content/{target}` that also requires both auth headers
pub fn content_mock(http_method: &str, target: &str) -> MockBuilder {
    Mock::given(method(http_method))
        .and(path(format!("/api/v0/content/{}", target)))
        .and(header(API_KEY_ID_HEADER, KEY_ID))
        .and(header(API_KEY_HEADER, KEY))
}

/// Serve `items` from the list endpoint
pub async fn mount_list(server: &MockServer, items: serde_json::Value) {
    content_mock("GET", "all")
        .respond_with(ResponseTemplate::new(200).set_body_json(items))
        .mount(server)
        .await;
}

pub fn read(root: &Path, name: &str) -> Vec<u8> {
    std::fs::read(root.join(name)).unwrap()
}
