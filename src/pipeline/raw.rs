//! Wire shapes returned by `GET /pipeline/run`.
//!
//! Fields the dashboard does not need are ignored. Optional fields mirror what
//! the pipeline omits for some runs.

use serde::{Deserialize, Serialize};

use super::error::PipelineError;

/// Full body of a pipeline run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPipelineResponse {
    pub categories: Vec<RawCategory>,
    pub topics: Vec<RawTopic>,
    pub posts: Vec<RawPost>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCategory {
    pub id: String,
    pub name: String,
    pub total_posts: u64,
    pub avg_sentiment: f64,
    #[serde(default)]
    pub topic_count: Option<u64>,
    #[serde(default)]
    pub relevance_score: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTopic {
    pub id: String,
    pub category_id: String,
    pub name: String,
    pub post_count: u64,
    pub engagement_score: f64,
    #[serde(default)]
    pub avg_sentiment: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPost {
    pub id: String,
    pub topic_id: String,
    pub text: String,
    pub sentiment_score: f64,
    #[serde(default)]
    pub likes: Option<u64>,
    #[serde(default)]
    pub reposts: Option<u64>,
    #[serde(default)]
    pub posted_at: Option<String>,
    #[serde(default)]
    pub engagement_score: Option<f64>,
}

impl RawPipelineResponse {
    /// Parse and validate a response body.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidShape`] if the body is not JSON of the
    /// expected shape or fails [`validate`](Self::validate).
    pub fn from_slice(body: &[u8]) -> Result<Self, PipelineError> {
        let raw: Self = serde_json::from_slice(body)
            .map_err(|e| PipelineError::invalid_shape(e.to_string()))?;
        raw.validate()?;
        Ok(raw)
    }

    /// Check the invariants the adapter relies on.
    ///
    /// Duplicate ids are accepted; the adapter resolves category lookups to
    /// the last entry.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidShape`] on a negative or non-finite
    /// engagement score.
    pub fn validate(&self) -> Result<(), PipelineError> {
        for topic in &self.topics {
            if !topic.engagement_score.is_finite() || topic.engagement_score < 0.0 {
                return Err(PipelineError::invalid_shape(format!(
                    "topic '{}' has invalid engagement score {}",
                    topic.id, topic.engagement_score
                )));
            }
        }

        Ok(())
    }
}
