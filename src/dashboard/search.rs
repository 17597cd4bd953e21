//! Topic search: text match, category and sentiment filters, ordering.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::Serialize;

use crate::pipeline::Topic;

/// Average sentiment beyond which a topic counts as positive or negative.
const SENTIMENT_BAND: f64 = 0.3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentFilter {
    #[default]
    All,
    Positive,
    Negative,
    Neutral,
}

impl SentimentFilter {
    #[must_use]
    pub fn matches(&self, avg_sentiment: f64) -> bool {
        match self {
            Self::All => true,
            Self::Positive => avg_sentiment > SENTIMENT_BAND,
            Self::Negative => avg_sentiment < -SENTIMENT_BAND,
            Self::Neutral => (-SENTIMENT_BAND..=SENTIMENT_BAND).contains(&avg_sentiment),
        }
    }
}

impl FromStr for SentimentFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "positive" => Ok(Self::Positive),
            "negative" => Ok(Self::Negative),
            "neutral" => Ok(Self::Neutral),
            _ => Err(format!(
                "must be 'all', 'positive', 'negative' or 'neutral', got '{s}'"
            )),
        }
    }
}

/// Ordering of search results; always descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Relevance,
    Engagement,
    Tweets,
    Sentiment,
}

impl SortBy {
    fn compare(self, a: &Topic, b: &Topic) -> Ordering {
        match self {
            Self::Relevance => b.relevance_score.total_cmp(&a.relevance_score),
            Self::Engagement => b.engagement_score.total_cmp(&a.engagement_score),
            Self::Tweets => b.total_tweets.cmp(&a.total_tweets),
            Self::Sentiment => b.avg_sentiment.total_cmp(&a.avg_sentiment),
        }
    }
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "relevance" => Ok(Self::Relevance),
            "engagement" => Ok(Self::Engagement),
            "tweets" => Ok(Self::Tweets),
            "sentiment" => Ok(Self::Sentiment),
            _ => Err(format!(
                "must be 'relevance', 'engagement', 'tweets' or 'sentiment', got '{s}'"
            )),
        }
    }
}

/// Filters and ordering applied to a batch of topics.
#[derive(Debug, Clone, Default)]
pub struct TopicSearch {
    /// Case-insensitive substring of the topic name or description.
    pub text: Option<String>,
    pub category_id: Option<String>,
    pub sentiment: SentimentFilter,
    pub sort: SortBy,
}

impl TopicSearch {
    /// Whether any filter narrows the result.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        self.text.as_deref().is_some_and(|t| !t.trim().is_empty())
            || self.category_id.is_some()
            || self.sentiment != SentimentFilter::All
    }

    /// Filter and sort `topics`. The sort is stable, so ties keep batch order.
    #[must_use]
    pub fn apply<'a>(&self, topics: &'a [Topic]) -> Vec<&'a Topic> {
        let needle = self
            .text
            .as_deref()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty());

        let mut results: Vec<&Topic> = topics
            .iter()
            .filter(|topic| {
                needle.as_deref().is_none_or(|n| {
                    topic.name.to_lowercase().contains(n)
                        || topic.description.to_lowercase().contains(n)
                })
            })
            .filter(|topic| {
                self.category_id
                    .as_deref()
                    .is_none_or(|id| topic.category_id == id)
            })
            .filter(|topic| self.sentiment.matches(topic.avg_sentiment))
            .collect();

        results.sort_by(|a, b| self.sort.compare(a, b));
        results
    }
}
