//! Remote record store — hosted document collection and blob storage.
//!
//! A thin reqwest client over the cappic backend: moments live in a document
//! collection queried by equality on `userId` and ordered descending on
//! `timestamp`; images live in blob storage addressed by a generated path
//! and are returned as retrievable URLs. Requests carry a bearer token when
//! a session is active. No retries and no timeouts — failures surface as
//! errors and the coordinator decides how to degrade.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::moment::types::Moment;
use crate::store::RecordStore;

/// HTTP client for the hosted moment collection and blob store.
pub struct RemoteStore {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BlobResponse {
    url: String,
}

impl RemoteStore {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token,
        }
    }

    /// Update a stored moment in place. Capability only — the coordinator
    /// does not orchestrate updates.
    pub async fn update_moment(&self, id: &str, moment: &Moment) -> Result<()> {
        let url = format!("{}/moments/{id}", self.base_url);
        let response = self
            .authorized(self.http.patch(&url))
            .json(moment)
            .send()
            .await
            .with_context(|| format!("HTTP request failed for {url}"))?;

        anyhow::ensure!(
            response.status().is_success(),
            "moment update failed with HTTP {}",
            response.status()
        );
        Ok(())
    }

    /// Delete a stored moment. Capability only, like [`Self::update_moment`].
    pub async fn delete_moment(&self, id: &str) -> Result<()> {
        let url = format!("{}/moments/{id}", self.base_url);
        let response = self
            .authorized(self.http.delete(&url))
            .send()
            .await
            .with_context(|| format!("HTTP request failed for {url}"))?;

        anyhow::ensure!(
            response.status().is_success(),
            "moment delete failed with HTTP {}",
            response.status()
        );
        Ok(())
    }

    /// Upload an image to blob storage under `<uid>/<epoch-millis>_<filename>`
    /// and return the retrievable URL.
    pub async fn upload_image(&self, uid: &str, filename: &str, bytes: Vec<u8>) -> Result<String> {
        let path = format!("{uid}/{}_{filename}", chrono::Utc::now().timestamp_millis());
        let url = format!("{}/blobs/{path}", self.base_url);

        let response = self
            .authorized(self.http.post(&url))
            .body(bytes)
            .send()
            .await
            .with_context(|| format!("HTTP request failed for {url}"))?;

        anyhow::ensure!(
            response.status().is_success(),
            "image upload failed with HTTP {}",
            response.status()
        );

        let blob: BlobResponse = response
            .json()
            .await
            .context("failed to parse blob upload response")?;
        Ok(blob.url)
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

impl RecordStore for RemoteStore {
    async fn list_moments(&self, uid: &str) -> Result<Vec<Moment>> {
        let url = format!("{}/moments", self.base_url);
        let response = self
            .authorized(self.http.get(&url))
            .query(&[("userId", uid), ("orderBy", "timestamp"), ("direction", "desc")])
            .send()
            .await
            .with_context(|| format!("HTTP request failed for {url}"))?;

        anyhow::ensure!(
            response.status().is_success(),
            "moment list failed with HTTP {}",
            response.status()
        );

        response
            .json()
            .await
            .context("failed to parse moment list response")
    }

    async fn create_moment(&self, moment: &Moment) -> Result<Moment> {
        let url = format!("{}/moments", self.base_url);
        let response = self
            .authorized(self.http.post(&url))
            .json(moment)
            .send()
            .await
            .with_context(|| format!("HTTP request failed for {url}"))?;

        anyhow::ensure!(
            response.status().is_success(),
            "moment create failed with HTTP {}",
            response.status()
        );

        response
            .json()
            .await
            .context("failed to parse moment create response")
    }
}
