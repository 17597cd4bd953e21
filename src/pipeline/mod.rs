//! Pipeline response adapter.
//!
//! Fetches `GET /pipeline/run` and reshapes the flat categories, topics and
//! posts it returns into the view-models the dashboard renders.

pub mod adapter;
pub mod category_meta;
pub mod client;
pub mod duration;
pub mod error;
pub mod raw;
pub mod sentiment;
pub mod view;

pub use adapter::adapt;
pub use client::PipelineClient;
pub use error::PipelineError;
pub use raw::{RawCategory, RawPipelineResponse, RawPost, RawTopic};
pub use sentiment::{SentimentDistribution, SentimentLevel};
pub use view::{Category, PipelineData, Post, Topic};
