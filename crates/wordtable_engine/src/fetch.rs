use std::time::Duration;

use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use url::Url;
use wordtable_logging::{table_debug, table_info};

use crate::{FailureKind, FetchError, RequestedWord, WordCounts};

pub const WORDS_PATH: &str = "api/get_requested_words";
pub const COUNTS_PATH: &str = "api/get_word_counts";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// Root the API paths are resolved against.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000/".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 10 * 1024 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait ApiClient: Send + Sync {
    async fn requested_words(&self) -> Result<Vec<RequestedWord>, FetchError>;
    async fn word_counts(&self) -> Result<WordCounts, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestApiClient {
    settings: FetchSettings,
    base: Url,
    client: reqwest::Client,
}

impl ReqwestApiClient {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let base = parse_base_url(&settings.base_url)?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self {
            settings,
            base,
            client,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, FetchError> {
        self.base
            .join(path)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = self.endpoint(path)?;
        table_info!("GET {}", url);

        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                format!("HTTP error! Status: {}", status.as_u16()),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(too_large(self.settings.max_bytes, content_len));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(too_large(self.settings.max_bytes, next_len));
            }
            bytes.extend_from_slice(&chunk);
        }
        table_debug!("GET {} returned {} bytes", path, bytes.len());

        serde_json::from_slice(&bytes)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))
    }
}

#[async_trait::async_trait]
impl ApiClient for ReqwestApiClient {
    async fn requested_words(&self) -> Result<Vec<RequestedWord>, FetchError> {
        self.get_json(WORDS_PATH).await
    }

    async fn word_counts(&self) -> Result<WordCounts, FetchError> {
        self.get_json(COUNTS_PATH).await
    }
}

/// Parses the API root, adding the trailing slash `Url::join` needs to keep
/// the last path segment.
fn parse_base_url(raw: &str) -> Result<Url, FetchError> {
    let mut normalized = raw.trim().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    let url = Url::parse(&normalized)
        .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(FetchError::new(
            FailureKind::InvalidUrl,
            format!("unsupported scheme {}", url.scheme()),
        ));
    }
    Ok(url)
}

fn too_large(max_bytes: u64, actual: u64) -> FetchError {
    FetchError::new(
        FailureKind::TooLarge {
            max_bytes,
            actual: Some(actual),
        },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return FetchError::new(FailureKind::Decode, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
