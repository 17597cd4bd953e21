//! Page-level views derived from adapted pipeline data.

pub mod detail;
pub mod format;
pub mod search;
pub mod stats;

pub use detail::{CategoryDetail, ReportData, TopicDetail, TopicReport};
pub use search::{SentimentFilter, SortBy, TopicSearch};
pub use stats::{DashboardStats, StatsDelta};
