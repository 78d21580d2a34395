//! HTTP client for the content store REST API

use crate::error::{Result, StoreError};
use crate::types::{Content, ContentDraft, StoreConfig};
use reqwest::{header, Client, StatusCode};
use std::time::Duration;

/// Typed client for the content store
///
/// All record operations go through `{base_url}/api/conteudos`. The store
/// owns record identity and creation timestamps; this client never invents
/// either.
pub struct ContentStoreClient {
    config: StoreConfig,
    client: Client,
}

impl ContentStoreClient {
    /// Create a new content store client
    pub fn new(config: StoreConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self { config, client }
    }

    /// Base URL of the backing store
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/api/conteudos", self.config.base_url)
    }

    fn record_url(&self, id: i64) -> String {
        format!("{}/api/conteudos/{}", self.config.base_url, id)
    }

    /// List all content records
    pub async fn list(&self) -> Result<Vec<Content>> {
        let response = self.client.get(self.collection_url()).send().await?;
        self.handle_response(response).await
    }

    /// Get a single record by id
    pub async fn get(&self, id: i64) -> Result<Content> {
        let response = self.client.get(self.record_url(id)).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(id.to_string()));
        }
        self.handle_response(response).await
    }

    /// Create a new record from a draft
    ///
    /// The draft is validated locally first; an invalid draft never reaches
    /// the network.
    pub async fn create(&self, draft: &ContentDraft) -> Result<Content> {
        draft.validate()?;

        let response = self
            .client
            .post(self.collection_url())
            .header(header::CONTENT_TYPE, "application/json")
            .json(draft)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Update an existing record from a draft
    pub async fn update(&self, id: i64, draft: &ContentDraft) -> Result<Content> {
        draft.validate()?;

        let response = self
            .client
            .put(self.record_url(id))
            .header(header::CONTENT_TYPE, "application/json")
            .json(draft)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(id.to_string()));
        }
        self.handle_response(response).await
    }

    /// Delete a record; returns false if it was already gone
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let response = self.client.delete(self.record_url(id)).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Server {
                status,
                message: body,
            });
        }
        Ok(true)
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        if response.status() == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound("resource not found".to_string()));
        }

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("content store returned HTTP {}: {}", status, body);
            return Err(StoreError::Server {
                status,
                message: body,
            });
        }

        let body = response.json().await?;
        Ok(body)
    }
}
