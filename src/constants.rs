//! Shared constants used across the application.

/// User agent sent with pipeline requests.
pub const USER_AGENT: &str = concat!("trend-pulse/", env!("CARGO_PKG_VERSION"));

/// Path of the pipeline run endpoint, relative to the configured base URL.
pub const PIPELINE_RUN_PATH: &str = "pipeline/run";

/// Number of posts requested from the pipeline when nothing else is configured.
pub const DEFAULT_LIMIT: u32 = 300;

/// Search query used when nothing else is configured.
pub const DEFAULT_QUERY: &str = "news";

/// A topic is "rising" when its engagement score is strictly above this.
pub const RISING_THRESHOLD: f64 = 5.0;

/// Label used for topics whose category reference does not resolve.
pub const FALLBACK_CATEGORY_LABEL: &str = "General";

/// Placeholder author identity; the pipeline does not expose authors.
pub const PLACEHOLDER_AUTHOR_NAME: &str = "Bluesky User";
pub const PLACEHOLDER_AUTHOR_HANDLE: &str = "@bluesky.user";
pub const PLACEHOLDER_AUTHOR_AVATAR: &str =
    "https://ui-avatars.com/api/?name=Bluesky+User&background=random";
