//! Site API client
//!
//!     The site backend serves three endpoints:
//!
//!     - `GET /api/gloss?outline=..&language=..` → `{success, response | message}`
//!     - `GET /page/<name>` → the page's document tree
//!     - `GET /api/dict` → `{success, response: {entries} | message}` with every dictionary entry
//!
//!     Gloss fetches always resolve: a transport failure becomes the message
//!     `Unknown error` and an API failure carries the server's message. The real transport
//!     error is only logged.

use crate::lauvinko::dictionary::{DictEntries, DictResponse};
use crate::lauvinko::document::Document;
use crate::lauvinko::error::FetchError;
use crate::lauvinko::gloss::{GlossData, GlossParams, GlossResponse, GlossSource};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

const UNKNOWN_ERROR: &str = "Unknown error";

/// Envelope of every API answer.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub response: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn into_result(self) -> Result<T, String> {
        match (self.success, self.response) {
            (true, Some(response)) => Ok(response),
            (true, None) => Err("Missing response".to_string()),
            (false, _) => Err(self.message.unwrap_or_else(|| UNKNOWN_ERROR.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: Url::parse(base_url)?,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, FetchError> {
        Ok(self.base_url.join(path)?)
    }

    async fn get(&self, url: Url) -> Result<reqwest::Response, FetchError> {
        tracing::debug!("GET {}", url);
        Ok(self.http.get(url).send().await?.error_for_status()?)
    }

    async fn get_api<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        let envelope: ApiResponse<T> = self.get(url).await?.json().await?;
        envelope.into_result().map_err(FetchError::Api)
    }

    /// Fetch the rows of one gloss.
    pub async fn gloss(&self, params: &GlossParams) -> GlossResponse {
        let url = match self.endpoint("/api/gloss") {
            Ok(mut url) => {
                url.query_pairs_mut()
                    .append_pair("outline", &params.outline)
                    .append_pair("language", params.language.code());
                url
            }
            Err(err) => {
                tracing::warn!("gloss endpoint: {}", err);
                return Err(UNKNOWN_ERROR.to_string());
            }
        };

        match self.get_api::<GlossData>(url).await {
            Ok(data) => Ok(data),
            Err(FetchError::Api(message)) => Err(message),
            Err(err) => {
                tracing::warn!("gloss fetch for {:?} failed: {}", params.outline, err);
                Err(UNKNOWN_ERROR.to_string())
            }
        }
    }

    /// Fetch and decode a page's document tree.
    pub async fn page(&self, name: &str) -> Result<Document, FetchError> {
        let url = self.endpoint(&format!("/page/{}", name))?;
        let body = self.get(url).await?.text().await?;
        Ok(Document::from_json(&body)?)
    }

    /// Fetch every dictionary entry.
    pub async fn dictionary(&self) -> Result<DictEntries, FetchError> {
        let url = self.endpoint("/api/dict")?;
        let payload: DictResponse = self.get_api(url).await?;
        Ok(payload.entries)
    }
}

impl GlossSource for ApiClient {
    async fn fetch_gloss(&self, params: &GlossParams) -> GlossResponse {
        self.gloss(params).await
    }
}
