//! In-memory transport for exercising the engine without a remote

use std::collections::HashMap;
use std::sync::Mutex;

use bytes::Bytes;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

use common::prelude::{ContentItem, ContentKind};

use super::ContentTransport;
use crate::api::client::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushedItem {
    pub id: String,
    pub content_type: String,
    pub body: Vec<u8>,
}

#[derive(Default)]
pub struct FakeTransport {
    items: Vec<ContentItem>,
    bodies: HashMap<String, Bytes>,
    list_error: Mutex<Option<ApiError>>,
    fetch_errors: Mutex<HashMap<String, ApiError>>,
    push_errors: Mutex<HashMap<String, ApiError>>,
    fetched: Mutex<Vec<(String, ContentKind)>>,
    pushed: Mutex<Vec<PushedItem>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, item: ContentItem, body: &[u8]) -> Self {
        self.bodies
            .insert(item.id.clone(), Bytes::copy_from_slice(body));
        self.items.push(item);
        self
    }

    pub fn with_failing_item(mut self, item: ContentItem, error: ApiError) -> Self {
        self.fetch_errors
            .get_mut()
            .unwrap()
            .insert(item.id.clone(), error);
        self.items.push(item);
        self
    }

    pub fn with_list_error(mut self, error: ApiError) -> Self {
        *self.list_error.get_mut().unwrap() = Some(error);
        self
    }

    pub fn with_push_error(mut self, id: &str, error: ApiError) -> Self {
        self.push_errors
            .get_mut()
            .unwrap()
            .insert(id.to_string(), error);
        self
    }

    /// Ids fetched so far, in order
    pub fn fetched(&self) -> Vec<String> {
        self.fetched
            .lock()
            .unwrap()
            .iter()
            .map(|(id, _)| id.clone())
            .collect()
    }

    pub fn fetched_kinds(&self) -> Vec<(String, ContentKind)> {
        self.fetched.lock().unwrap().clone()
    }

    /// Items pushed so far, in order
    pub fn pushed(&self) -> Vec<PushedItem> {
        self.pushed.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ContentTransport for FakeTransport {
    async fn list_items(&self) -> Result<Vec<ContentItem>, ApiError> {
        if let Some(error) = self.list_error.lock().unwrap().take() {
            return Err(error);
        }
        Ok(self.items.clone())
    }

    async fn fetch_bytes(&self, id: &str, kind: ContentKind) -> Result<Bytes, ApiError> {
        self.fetched.lock().unwrap().push((id.to_string(), kind));
        if let Some(error) = self.fetch_errors.lock().unwrap().remove(id) {
            return Err(error);
        }
        Ok(self.bodies.get(id).cloned().unwrap_or_default())
    }

    async fn push_bytes(&self, id: &str, content_type: &str, mut file: File) -> Result<(), ApiError> {
        let mut body = Vec::new();
        file.read_to_end(&mut body)
            .await
            .expect("test file should be readable");

        if let Some(error) = self.push_errors.lock().unwrap().remove(id) {
            return Err(error);
        }
        self.pushed.lock().unwrap().push(PushedItem {
            id: id.to_string(),
            content_type: content_type.to_string(),
            body,
        });
        Ok(())
    }
}
