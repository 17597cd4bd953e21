use std::time::Instant;

use reqwest::Client;
use tracing::{debug, info, warn};
use url::Url;

use super::adapter::adapt;
use super::error::PipelineError;
use super::raw::RawPipelineResponse;
use super::view::PipelineData;
use crate::config::Config;
use crate::constants::{PIPELINE_RUN_PATH, USER_AGENT};

/// Client for the pipeline `run` endpoint.
///
/// The caller owns the underlying [`reqwest::Client`], including any timeout.
#[derive(Debug, Clone)]
pub struct PipelineClient {
    http: Client,
    run_url: Url,
}

impl PipelineClient {
    /// Create a client for the pipeline served under `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid absolute URL.
    pub fn new(http: Client, base_url: &str) -> Result<Self, PipelineError> {
        let mut base = Url::parse(base_url)?;
        // Treat the base as a directory so joining keeps any path prefix.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let run_url = base.join(PIPELINE_RUN_PATH)?;
        Ok(Self { http, run_url })
    }

    /// Build the HTTP client and pipeline client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built or the base URL is
    /// invalid.
    pub fn from_config(config: &Config) -> Result<Self, PipelineError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.http_timeout {
            builder = builder.timeout(timeout);
        }
        Self::new(builder.build()?, &config.pipeline_base_url)
    }

    #[must_use]
    pub fn run_url(&self) -> &Url {
        &self.run_url
    }

    /// Fetch a raw pipeline run without adapting it.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Status`] on a non-success status,
    /// [`PipelineError::Request`] on transport failure and
    /// [`PipelineError::InvalidShape`] if the body is malformed.
    pub async fn fetch_raw(
        &self,
        limit: u32,
        query: &str,
    ) -> Result<RawPipelineResponse, PipelineError> {
        let started = Instant::now();
        debug!(url = %self.run_url, limit, query, "Requesting pipeline run");

        let response = self
            .http
            .get(self.run_url.clone())
            .query(&[("limit", limit.to_string().as_str()), ("query", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, query, "Pipeline request failed");
            return Err(PipelineError::Status { status });
        }

        let body = response.bytes().await?;
        let raw = RawPipelineResponse::from_slice(&body)?;

        info!(
            query,
            categories = raw.categories.len(),
            topics = raw.topics.len(),
            posts = raw.posts.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Fetched pipeline run"
        );

        Ok(raw)
    }

    /// Fetch a pipeline run and adapt it into dashboard view-models.
    ///
    /// # Errors
    ///
    /// See [`fetch_raw`](Self::fetch_raw).
    pub async fn fetch_pipeline_data(
        &self,
        limit: u32,
        query: &str,
    ) -> Result<PipelineData, PipelineError> {
        let raw = self.fetch_raw(limit, query).await?;
        Ok(adapt(&raw))
    }
}
