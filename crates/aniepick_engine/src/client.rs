use std::time::Duration;

use aniepick_core::{CatalogItem, CatalogRequest, Genre};
use aniepick_logging::{pick_debug, pick_info};
use futures_util::StreamExt;
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::wire::{Envelope, WireAnime, WireGenre};
use crate::{FailureKind, FetchError};

pub const DEFAULT_BASE_URL: &str = "https://api.jikan.moe/v4";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
    pub page_limit: u32,
    /// Courtesy pause before every request to stay under the API's rate limit.
    pub request_delay: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
            page_limit: 25,
            request_delay: Duration::from_millis(1000),
        }
    }
}

/// Read-only remote anime catalog.
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetches one listing page, keeping only items complete enough to show.
    async fn fetch_page(&self, request: &CatalogRequest) -> Result<Vec<CatalogItem>, FetchError>;

    async fn fetch_genres(&self) -> Result<Vec<Genre>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct JikanClient {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl JikanClient {
    pub fn new(settings: ClientSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn endpoint(&self, path: &str, params: &[(&'static str, String)]) -> Result<Url, FetchError> {
        let raw = format!("{}/{}", self.settings.base_url.trim_end_matches('/'), path);
        let mut url = Url::parse(&raw)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if !params.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        if !self.settings.request_delay.is_zero() {
            tokio::time::sleep(self.settings.request_delay).await;
        }

        pick_debug!("GET {}", url);
        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }

        serde_json::from_slice(&bytes)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))
    }
}

#[async_trait::async_trait]
impl CatalogSource for JikanClient {
    async fn fetch_page(&self, request: &CatalogRequest) -> Result<Vec<CatalogItem>, FetchError> {
        let params = request.query_params(self.settings.page_limit);
        pick_debug!("Catalog request {} params: {:?}", request.path(), params);
        let url = self.endpoint(request.path(), &params)?;

        let envelope: Envelope<WireAnime> = self.get_json(url).await?;
        let received = envelope.into_data();
        let total = received.len();
        let items: Vec<CatalogItem> = received
            .into_iter()
            .filter_map(WireAnime::into_complete_item)
            .collect();
        pick_info!(
            "Catalog page {} of {}: {} received, {} usable",
            request.page(),
            request.path(),
            total,
            items.len()
        );
        Ok(items)
    }

    async fn fetch_genres(&self) -> Result<Vec<Genre>, FetchError> {
        let url = self.endpoint("genres/anime", &[])?;
        let envelope: Envelope<WireGenre> = self.get_json(url).await?;
        Ok(envelope.into_data().into_iter().map(Genre::from).collect())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
