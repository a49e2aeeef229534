//! HTTP client implementation
//!
//! This module provides the core HTTP client for the SDK. Each call is a
//! single attempt: failures are classified and returned, never retried.

use crate::config::SdkConfig;
use crate::error::{SdkError, SdkResult};
use reqwest::{header, Client, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::{debug, error};
use url::Url;

/// The HTTP client for making API requests
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
    config: Arc<SdkConfig>,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration
    pub fn new(config: SdkConfig) -> SdkResult<Self> {
        config.validate()?;
        let base_url = Url::parse(&config.base_url)?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let mut builder = Client::builder()
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .gzip(true)
            .brotli(true);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(SdkError::NetworkError)?;

        Ok(Self {
            client,
            base_url,
            config: Arc::new(config),
        })
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    /// Build the full URL for a sequence of path segments.
    ///
    /// Segments are percent-encoded, so a user-typed key can never escape
    /// its path position.
    pub fn url(&self, segments: &[&str]) -> SdkResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                SdkError::ConfigurationError(format!(
                    "Base URL cannot be used as a base: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> SdkResult<T> {
        self.get_with_query::<T, ()>(segments, None).await
    }

    /// Make a GET request with optional query parameters
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        query: Option<&Q>,
    ) -> SdkResult<T> {
        let url = self.url(segments)?;
        let response = self.execute(url, query).await?;

        let status = response.status();
        if !status.is_success() {
            // Failure bodies are never parsed
            debug!("Non-success status {}", status);
            return Err(SdkError::RemoteError {
                status: status.as_u16(),
            });
        }

        let text = response.text().await.map_err(|e| self.classify(e))?;

        if self.config.enable_logging {
            debug!("Response body: {}", text);
        }

        serde_json::from_str(&text).map_err(SdkError::SerializationError)
    }

    /// Send one request, no retries
    async fn execute<Q: Serialize + ?Sized>(
        &self,
        url: Url,
        query: Option<&Q>,
    ) -> SdkResult<Response> {
        let mut request = self.client.get(url.clone());

        if let Some(q) = query {
            request = request.query(q);
        }

        if self.config.enable_logging {
            debug!("Request: GET {}", url);
        }

        request.send().await.map_err(|e| {
            error!("Request to {} failed: {}", url, e);
            self.classify(e)
        })
    }

    fn classify(&self, e: reqwest::Error) -> SdkError {
        match self.config.timeout {
            Some(timeout) if e.is_timeout() => SdkError::Timeout(timeout.as_secs()),
            _ => SdkError::NetworkError(e),
        }
    }
}

/// Offset/limit pair for the list endpoint
#[derive(Debug, Clone, Copy, Serialize, Default, PartialEq, Eq)]
pub struct PaginationParams {
    /// Entries per page
    pub limit: u32,
    /// Entries to skip
    pub offset: u32,
}

impl PaginationParams {
    /// Page of `limit` entries starting at `offset`
    pub fn new(offset: u32, limit: u32) -> Self {
        Self { limit, offset }
    }
}
