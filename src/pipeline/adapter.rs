//! Turns a raw pipeline run into dashboard view-models.
//!
//! Everything here is a pure function of the payload: categories, topics and
//! posts are rebuilt from scratch on every call.

use std::collections::HashMap;

use tracing::debug;

use super::category_meta::category_meta;
use super::duration::trend_duration;
use super::raw::{RawCategory, RawPipelineResponse, RawPost, RawTopic};
use super::sentiment::{SentimentDistribution, SentimentLevel};
use super::view::{Category, PipelineData, Post, Topic};
use crate::constants::{
    FALLBACK_CATEGORY_LABEL, PLACEHOLDER_AUTHOR_AVATAR, PLACEHOLDER_AUTHOR_HANDLE,
    PLACEHOLDER_AUTHOR_NAME, RISING_THRESHOLD,
};

/// Adapt a raw pipeline response.
///
/// Validation happens once, when the body is parsed. A category id that
/// appears more than once resolves to its last entry.
#[must_use]
pub fn adapt(raw: &RawPipelineResponse) -> PipelineData {
    let category_names: HashMap<&str, &str> = raw
        .categories
        .iter()
        .map(|c| (c.id.as_str(), c.name.as_str()))
        .collect();

    let mut posts_by_topic: HashMap<&str, Vec<&RawPost>> = HashMap::new();
    for post in &raw.posts {
        posts_by_topic
            .entry(post.topic_id.as_str())
            .or_default()
            .push(post);
    }

    let max_engagement = raw
        .topics
        .iter()
        .map(|t| t.engagement_score)
        .fold(1.0_f64, f64::max);

    let categories = raw.categories.iter().map(adapt_category).collect();

    let topics = raw
        .topics
        .iter()
        .map(|topic| {
            let category_name = category_names
                .get(topic.category_id.as_str())
                .copied()
                .unwrap_or(FALLBACK_CATEGORY_LABEL);
            let posts = posts_by_topic
                .get(topic.id.as_str())
                .map_or(&[][..], Vec::as_slice);
            adapt_topic(topic, category_name, posts, max_engagement)
        })
        .collect();

    let posts = raw.posts.iter().map(adapt_post).collect();

    let data = PipelineData {
        categories,
        topics,
        posts,
    };

    debug!(
        categories = data.categories.len(),
        topics = data.topics.len(),
        posts = data.posts.len(),
        max_engagement,
        "Adapted pipeline response"
    );

    data
}

fn adapt_category(raw: &RawCategory) -> Category {
    let meta = category_meta(&raw.name);
    Category {
        id: raw.id.clone(),
        name: raw.name.clone(),
        total_posts: raw.total_posts,
        total_tweets: raw.total_posts,
        avg_sentiment: raw.avg_sentiment,
        relevance_score: raw.relevance_score.unwrap_or(0.0),
        topic_count: raw.topic_count,
        icon: meta.icon.to_string(),
        color: meta.color.to_string(),
        description: format!("Analysis of {} trends", raw.name),
    }
}

fn adapt_topic(
    raw: &RawTopic,
    category_name: &str,
    posts: &[&RawPost],
    max_engagement: f64,
) -> Topic {
    let sentiment_distribution =
        SentimentDistribution::from_scores(posts.iter().map(|p| p.sentiment_score));
    let (total_likes, total_retweets) = engagement_totals(raw.engagement_score, posts);

    Topic {
        id: raw.id.clone(),
        category_id: raw.category_id.clone(),
        category_name: category_name.to_string(),
        name: raw.name.clone(),
        description: format!("Viral topic in {category_name}"),
        post_count: raw.post_count,
        total_tweets: raw.post_count,
        engagement_score: raw.engagement_score,
        relevance_score: relevance(raw.engagement_score, max_engagement),
        avg_sentiment: raw.avg_sentiment.unwrap_or(0.0),
        sentiment_distribution,
        total_likes,
        total_retweets,
        total_replies: 0,
        is_rising: raw.engagement_score > RISING_THRESHOLD,
        trend_duration: trend_duration(posts.iter().filter_map(|p| p.posted_at.as_deref())),
    }
}

fn adapt_post(raw: &RawPost) -> Post {
    Post {
        id: raw.id.clone(),
        topic_id: raw.topic_id.clone(),
        content: raw.text.clone(),
        sentiment_score: raw.sentiment_score,
        sentiment_label: SentimentLevel::classify(raw.sentiment_score)
            .label()
            .to_string(),
        posted_at: raw.posted_at.clone(),
        engagement_score: raw.engagement_score,
        likes: raw.likes.unwrap_or(0),
        retweets: raw.reposts.unwrap_or(0),
        replies: 0,
        author_name: PLACEHOLDER_AUTHOR_NAME.to_string(),
        author_handle: PLACEHOLDER_AUTHOR_HANDLE.to_string(),
        author_avatar: PLACEHOLDER_AUTHOR_AVATAR.to_string(),
        author_verified: false,
    }
}

/// Scale an engagement score to `[0, 100]` against the batch maximum.
fn relevance(engagement: f64, max_engagement: f64) -> f64 {
    (engagement / max_engagement.max(1.0) * 100.0)
        .round()
        .clamp(0.0, 100.0)
}

/// Sum likes and reposts over a topic's posts.
///
/// When both sums are zero (including topics without posts) the totals are
/// estimated from the engagement score: half of it as likes, a quarter as
/// retweets. Sums and estimates saturate at `u64::MAX`.
fn engagement_totals(engagement: f64, posts: &[&RawPost]) -> (u64, u64) {
    let likes = posts
        .iter()
        .fold(0_u64, |acc, p| acc.saturating_add(p.likes.unwrap_or(0)));
    let reposts = posts
        .iter()
        .fold(0_u64, |acc, p| acc.saturating_add(p.reposts.unwrap_or(0)));

    if likes == 0 && reposts == 0 {
        let engagement = engagement.max(0.0);
        ((engagement / 2.0).floor() as u64, (engagement / 4.0).floor() as u64)
    } else {
        (likes, reposts)
    }
}
