//! Display-facing shapes produced by the adapter.

use serde::{Deserialize, Serialize};

use super::sentiment::SentimentDistribution;

/// Adapted result of one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineData {
    pub categories: Vec<Category>,
    pub topics: Vec<Topic>,
    pub posts: Vec<Post>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub total_posts: u64,
    /// Same as `total_posts`; the dashboard reads this name.
    pub total_tweets: u64,
    pub avg_sentiment: f64,
    pub relevance_score: f64,
    pub topic_count: Option<u64>,
    pub icon: String,
    pub color: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    pub category_id: String,
    pub category_name: String,
    pub name: String,
    pub description: String,
    pub post_count: u64,
    pub total_tweets: u64,
    pub engagement_score: f64,
    /// `engagement_score` scaled against the batch maximum, in `[0, 100]`.
    pub relevance_score: f64,
    pub avg_sentiment: f64,
    pub sentiment_distribution: SentimentDistribution,
    pub total_likes: u64,
    pub total_retweets: u64,
    pub total_replies: u64,
    pub is_rising: bool,
    pub trend_duration: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub topic_id: String,
    pub content: String,
    pub sentiment_score: f64,
    pub sentiment_label: String,
    pub posted_at: Option<String>,
    pub engagement_score: Option<f64>,
    pub likes: u64,
    pub retweets: u64,
    pub replies: u64,
    pub author_name: String,
    pub author_handle: String,
    pub author_avatar: String,
    pub author_verified: bool,
}
