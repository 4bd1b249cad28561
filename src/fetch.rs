//! Manifest retrieval.

use crate::config::FetchConfig;
use reqwest::{Client, StatusCode};

/// Errors fetching a manifest. A failed fetch is never retried.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request could not be sent or the body could not be read.
    #[error("Failed to fetch {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("Failed to fetch {url}: HTTP {status}")]
    Status { url: String, status: StatusCode },
}

/// Something that can produce manifest text for a URL.
#[async_trait::async_trait]
pub trait ManifestSource: Send + Sync {
    /// Fetch the body of `url` as text.
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}

/// [`ManifestSource`] that performs a single HTTP(S) GET.
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(config: &FetchConfig) -> Self {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client with user agent: {}", e);
                Client::new()
            });

        Self { client }
    }
}

#[async_trait::async_trait]
impl ManifestSource for HttpSource {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let transport = |source| FetchError::Transport {
            url: url.to_string(),
            source,
        };

        tracing::info!("Downloading manifest from {}", url);
        let response = self.client.get(url).send().await.map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let text = response.text().await.map_err(transport)?;
        tracing::debug!("Fetched {} bytes from {}", text.len(), url);
        Ok(text)
    }
}
