use crate::{Monitor, PageId, requests, responses};
use reqwest::StatusCode;
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path)).json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn raw_post(
        &self,
        path: &str,
        query: &[(&str, &str)],
        body: Vec<u8>,
    ) -> ReqwestResult {
        let request = self
            .inner_client
            .post(self.format_url(path))
            .query(query)
            .body(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Methods on the backend API
impl APIClient {
    /// Check whether no other page uses this slug.
    pub async fn get_slug_uniqueness(
        &self,
        slug: &str,
    ) -> Result<bool, ClientError> {
        let details = requests::SlugUniqueness {
            slug: slug.to_string(),
        };
        let response = self.post("page/slug_unique", &details).await?;
        ok_body(response).await
    }

    /// Create a page in the workspace, returning the persisted page.
    pub async fn create_page(
        &self,
        details: &requests::CreatePage,
    ) -> Result<responses::Page, ClientError> {
        let response = self.post("create_page", details).await?;
        ok_body(response).await
    }

    pub async fn update_page(
        &self,
        details: &requests::UpdatePage,
    ) -> Result<(), ClientError> {
        let response = self.post("update_page", details).await?;
        ok_empty(response).await
    }

    pub async fn get_page(
        &self,
        page_id: &PageId,
    ) -> Result<responses::Page, ClientError> {
        let response = self.post("get_page", page_id).await?;
        ok_body(response).await
    }

    /// Get the monitors that can be attached to pages of a workspace.
    pub async fn list_monitors(
        &self,
        details: &requests::ListMonitors,
    ) -> Result<Vec<Monitor>, ClientError> {
        let response = self.post("list_monitors", details).await?;
        ok_body(response).await
    }

    /// Store a file in the blob store, returning its public URL.
    pub async fn upload_blob(
        &self,
        filename: &str,
        data: Vec<u8>,
    ) -> Result<responses::UploadedBlob, ClientError> {
        let response = self
            .raw_post("upload", &[("filename", filename)], data)
            .await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}
