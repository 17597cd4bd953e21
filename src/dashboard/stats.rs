use serde::Serialize;

use super::format::{compact_number, signed};
use crate::pipeline::PipelineData;

/// Headline numbers shown above the category grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_tweets: u64,
    /// `total_tweets` in compact form, e.g. `12.3K`.
    pub total_tweets_display: String,
    /// Mean of the categories' average sentiment; 0 with no categories.
    pub avg_sentiment: f64,
    pub sentiment_label: &'static str,
    pub active_trends: usize,
    pub rising_topics: usize,
}

/// Change in headline numbers since the previous snapshot, as rendered next to
/// each stat on a refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsDelta {
    pub tweets: String,
    pub topics: String,
    pub rising: String,
}

impl DashboardStats {
    #[must_use]
    pub fn from_data(data: &PipelineData) -> Self {
        let total_tweets = data
            .categories
            .iter()
            .fold(0_u64, |acc, c| acc.saturating_add(c.total_tweets));
        let avg_sentiment = if data.categories.is_empty() {
            0.0
        } else {
            data.categories.iter().map(|c| c.avg_sentiment).sum::<f64>()
                / data.categories.len() as f64
        };

        Self {
            total_tweets,
            total_tweets_display: compact_number(total_tweets),
            avg_sentiment,
            sentiment_label: sentiment_label(avg_sentiment),
            active_trends: data.topics.len(),
            rising_topics: data.topics.iter().filter(|t| t.is_rising).count(),
        }
    }

    #[must_use]
    pub fn delta_since(&self, previous: &Self) -> StatsDelta {
        StatsDelta {
            tweets: change(self.total_tweets, previous.total_tweets),
            topics: change(self.active_trends as u64, previous.active_trends as u64),
            rising: change(self.rising_topics as u64, previous.rising_topics as u64),
        }
    }
}

fn change(now: u64, before: u64) -> String {
    if now >= before {
        signed(i64::try_from(now - before).unwrap_or(i64::MAX))
    } else {
        signed(-i64::try_from(before - now).unwrap_or(i64::MAX))
    }
}

/// `Positive`, `Negative` or `Neutral` by the sign of an average sentiment.
#[must_use]
pub fn sentiment_label(avg: f64) -> &'static str {
    if avg > 0.0 {
        "Positive"
    } else if avg < 0.0 {
        "Negative"
    } else {
        "Neutral"
    }
}
