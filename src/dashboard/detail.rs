//! Category and topic drill-down views, and the topic report payload.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::format::{with_thousands, EngagementBreakdown};
use super::stats::sentiment_label;
use crate::pipeline::{Category, PipelineData, Post, SentimentDistribution, Topic};

/// Posts included in a topic report.
const REPORT_TOP_POSTS: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct CategoryDetail<'a> {
    pub category: &'a Category,
    pub topics: Vec<&'a Topic>,
    /// Bucket-wise sum of the topics' histograms.
    pub sentiment: SentimentDistribution,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopicDetail<'a> {
    pub topic: &'a Topic,
    pub category: Option<&'a Category>,
    pub posts: Vec<&'a Post>,
    pub engagement: EngagementBreakdown,
}

impl PipelineData {
    /// Look up a category and gather its topics.
    #[must_use]
    pub fn category_detail(&self, category_id: &str) -> Option<CategoryDetail<'_>> {
        let category = self.categories.iter().find(|c| c.id == category_id)?;
        let topics: Vec<&Topic> = self
            .topics
            .iter()
            .filter(|t| t.category_id == category_id)
            .collect();

        let mut sentiment = SentimentDistribution::default();
        for topic in &topics {
            sentiment += topic.sentiment_distribution;
        }

        Some(CategoryDetail {
            category,
            topics,
            sentiment,
        })
    }

    /// Look up a topic with its category and posts.
    #[must_use]
    pub fn topic_detail(&self, topic_id: &str) -> Option<TopicDetail<'_>> {
        let topic = self.topics.iter().find(|t| t.id == topic_id)?;
        Some(TopicDetail {
            topic,
            category: self.categories.iter().find(|c| c.id == topic.category_id),
            posts: self.posts.iter().filter(|p| p.topic_id == topic_id).collect(),
            engagement: EngagementBreakdown::new(
                topic.total_likes,
                topic.total_retweets,
                topic.total_replies,
            ),
        })
    }
}

/// Snapshot of a topic suitable for saving or exporting.
///
/// The analysis fields sit under `report_data`, which is the shape saved
/// reports are read back in.
#[derive(Debug, Clone, Serialize)]
pub struct TopicReport {
    pub topic_id: String,
    pub topic_name: String,
    pub category_name: String,
    pub report_data: ReportData,
    pub ai_summary: String,
    /// Five-band label of the topic's average sentiment.
    pub sentiment_label: &'static str,
    pub saved_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportData {
    pub sentiment_distribution: SentimentDistribution,
    pub engagement_metrics: EngagementMetrics,
    pub top_tweets: Vec<ReportPost>,
    pub relevance_score: f64,
    pub avg_sentiment: f64,
    pub trend_duration: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct EngagementMetrics {
    pub likes: u64,
    pub retweets: u64,
    pub replies: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportPost {
    pub content: String,
    pub author: String,
    pub likes: u64,
}

impl TopicDetail<'_> {
    /// Build a report stamped with `saved_at`.
    #[must_use]
    pub fn report(&self, saved_at: DateTime<Utc>) -> TopicReport {
        let topic = self.topic;
        TopicReport {
            topic_id: topic.id.clone(),
            topic_name: topic.name.clone(),
            category_name: self
                .category
                .map_or_else(|| "Unknown".to_string(), |c| c.name.clone()),
            report_data: ReportData {
                sentiment_distribution: topic.sentiment_distribution,
                engagement_metrics: EngagementMetrics {
                    likes: topic.total_likes,
                    retweets: topic.total_retweets,
                    replies: 0,
                },
                top_tweets: self
                    .posts
                    .iter()
                    .take(REPORT_TOP_POSTS)
                    .map(|p| ReportPost {
                        content: p.content.clone(),
                        author: p.author_name.clone(),
                        likes: p.likes,
                    })
                    .collect(),
                relevance_score: topic.relevance_score,
                avg_sentiment: topic.avg_sentiment,
                trend_duration: topic.trend_duration.clone(),
            },
            ai_summary: summary(topic),
            sentiment_label: report_sentiment_label(topic.avg_sentiment),
            saved_at,
        }
    }
}

fn summary(topic: &Topic) -> String {
    format!(
        "{} is currently trending with a relevance score of {:.1}. The overall sentiment is {} with {} tweets analyzed.",
        topic.name,
        topic.relevance_score,
        sentiment_label(topic.avg_sentiment).to_lowercase(),
        with_thousands(topic.total_tweets),
    )
}

/// `Very Positive` at 1 and above down to `Very Negative` below -1.
#[must_use]
pub fn report_sentiment_label(avg: f64) -> &'static str {
    if avg >= 1.0 {
        "Very Positive"
    } else if avg >= 0.3 {
        "Positive"
    } else if avg >= -0.3 {
        "Neutral"
    } else if avg >= -1.0 {
        "Negative"
    } else {
        "Very Negative"
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::pipeline::{adapt, RawCategory, RawPipelineResponse, RawPost, RawTopic};

    fn sample() -> PipelineData {
        let raw = RawPipelineResponse {
            categories: vec![RawCategory {
                id: "c1".to_string(),
                name: "Politics".to_string(),
                total_posts: 1500,
                avg_sentiment: -0.4,
                topic_count: Some(2),
                relevance_score: Some(12.5),
            }],
            topics: vec![
                RawTopic {
                    id: "t1".to_string(),
                    category_id: "c1".to_string(),
                    name: "election".to_string(),
                    post_count: 1200,
                    engagement_score: 20.0,
                    avg_sentiment: Some(-0.6),
                },
                RawTopic {
                    id: "t2".to_string(),
                    category_id: "c1".to_string(),
                    name: "debate".to_string(),
                    post_count: 300,
                    engagement_score: 4.0,
                    avg_sentiment: Some(0.0),
                },
                RawTopic {
                    id: "t3".to_string(),
                    category_id: "missing".to_string(),
                    name: "misc".to_string(),
                    post_count: 0,
                    engagement_score: 1.0,
                    avg_sentiment: None,
                },
            ],
            posts: (0..7)
                .map(|i| RawPost {
                    id: format!("p{i}"),
                    topic_id: if i < 6 { "t1" } else { "t2" }.to_string(),
                    text: format!("post {i}"),
                    sentiment_score: if i % 2 == 0 { -1.0 } else { 0.0 },
                    likes: Some(i),
                    reposts: Some(1),
                    posted_at: None,
                    engagement_score: None,
                })
                .collect(),
        };
        adapt(&raw)
    }

    #[test]
    fn test_category_detail_aggregates_topics() {
        let data = sample();
        let detail = data.category_detail("c1").unwrap();
        assert_eq!(detail.category.name, "Politics");
        assert_eq!(detail.topics.len(), 2);
        assert_eq!(detail.sentiment.total(), 7);
        assert_eq!(detail.sentiment.negative, 4);
        assert_eq!(detail.sentiment.neutral, 3);
        assert!(data.category_detail("nope").is_none());
    }

    #[test]
    fn test_topic_detail() {
        let data = sample();
        let detail = data.topic_detail("t1").unwrap();
        assert_eq!(detail.posts.len(), 6);
        assert_eq!(detail.category.map(|c| c.id.as_str()), Some("c1"));
        assert_eq!(detail.engagement.likes, 15);
        assert_eq!(detail.engagement.retweets, 6);

        let orphan = data.topic_detail("t3").unwrap();
        assert!(orphan.category.is_none());
        assert!(orphan.posts.is_empty());
        assert!(data.topic_detail("nope").is_none());
    }

    #[test]
    fn test_topic_detail_with_huge_engagement() {
        let raw = RawPipelineResponse {
            categories: vec![],
            topics: vec![RawTopic {
                id: "t1".to_string(),
                category_id: "c1".to_string(),
                name: "viral".to_string(),
                post_count: 0,
                engagement_score: 1e20,
                avg_sentiment: None,
            }],
            posts: vec![],
        };
        raw.validate().unwrap();
        let data = adapt(&raw);

        let detail = data.topic_detail("t1").unwrap();
        assert_eq!(detail.engagement.likes, u64::MAX);
        assert_eq!(detail.engagement.retweets, u64::MAX);
        assert_eq!(detail.engagement.total, u64::MAX);
    }

    #[test]
    fn test_report() {
        let data = sample();
        let saved_at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let report = data.topic_detail("t1").unwrap().report(saved_at);

        assert_eq!(report.category_name, "Politics");
        assert_eq!(report.report_data.top_tweets.len(), 5);
        assert_eq!(report.report_data.top_tweets[0].author, "Bluesky User");
        assert_eq!(report.report_data.engagement_metrics.likes, 15);
        assert_eq!(report.report_data.engagement_metrics.replies, 0);
        assert_eq!(
            report.ai_summary,
            "election is currently trending with a relevance score of 100.0. \
             The overall sentiment is negative with 1,200 tweets analyzed."
        );
        assert_eq!(report.sentiment_label, "Negative");
        assert_eq!(report.saved_at, saved_at);
    }

    #[test]
    fn test_report_serializes_nested_report_data() {
        let data = sample();
        let saved_at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let report = data.topic_detail("t1").unwrap().report(saved_at);
        let value = serde_json::to_value(&report).unwrap();

        let mut keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "ai_summary",
                "category_name",
                "report_data",
                "saved_at",
                "sentiment_label",
                "topic_id",
                "topic_name"
            ]
        );
        assert_eq!(value["report_data"]["top_tweets"][0]["content"], "post 0");
        assert_eq!(value["report_data"]["trend_duration"], "24h");
        assert_eq!(value["report_data"]["engagement_metrics"]["retweets"], 6);
        assert_eq!(value["report_data"]["sentiment_distribution"]["negative"], 3);
    }

    #[test]
    fn test_report_sentiment_label_bands() {
        assert_eq!(report_sentiment_label(1.0), "Very Positive");
        assert_eq!(report_sentiment_label(0.3), "Positive");
        assert_eq!(report_sentiment_label(0.29), "Neutral");
        assert_eq!(report_sentiment_label(-0.3), "Neutral");
        assert_eq!(report_sentiment_label(-0.31), "Negative");
        assert_eq!(report_sentiment_label(-1.0), "Negative");
        assert_eq!(report_sentiment_label(-1.01), "Very Negative");
    }

    #[test]
    fn test_report_unknown_category() {
        let data = sample();
        let report = data
            .topic_detail("t3")
            .unwrap()
            .report(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(report.category_name, "Unknown");
        assert!(report.report_data.top_tweets.is_empty());
        assert!(report.ai_summary.contains("sentiment is neutral"));
        assert_eq!(report.sentiment_label, "Neutral");
    }
}
