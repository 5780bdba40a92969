//! HTTP Transport
//!
//! JSON over `reqwest` (browser `fetch` under WASM).

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::ApiError;

/// HTTP client for the recipe backend
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

/// Origin of the page the bundle runs in, e.g. `https://host:8080`
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

impl HttpApi {
    /// `base_url` is prepended to every path
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Client for `base_url`, or for the page's own origin when it is empty.
    ///
    /// reqwest only takes absolute URLs, so same-origin needs the origin spelled out.
    pub fn for_page(base_url: &str) -> Self {
        if base_url.is_empty() {
            Self::new(page_origin().unwrap_or_default())
        } else {
            Self::new(base_url)
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn receive<R: DeserializeOwned>(response: reqwest::Response) -> Result<R, ApiError> {
        Ok(response.error_for_status()?.json::<R>().await?)
    }

    pub(super) async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        log::debug!("POST {}", url);
        let response = self.client.post(&url).json(body).send().await?;
        Self::receive(response).await
    }

    pub(super) async fn post_empty<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let url = self.url(path);
        log::debug!("POST {}", url);
        let response = self.client.post(&url).send().await?;
        Self::receive(response).await
    }

    pub(super) async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let url = self.url(path);
        log::debug!("DELETE {}", url);
        let response = self.client.delete(&url).send().await?;
        Self::receive(response).await
    }
}
