//! Number formatting shared by the dashboard views.

use serde::Serialize;

/// Compact display form: `1.2M`, `3.4K`, or the plain number below 1000.
#[must_use]
pub fn compact_number(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Group digits with commas, e.g. `12,345`.
#[must_use]
pub fn with_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Render a signed change: `+3`, `-2`, `0`.
#[must_use]
pub fn signed(delta: i64) -> String {
    if delta > 0 {
        format!("+{delta}")
    } else {
        delta.to_string()
    }
}

/// Likes/retweets/replies split of a topic's engagement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EngagementBreakdown {
    pub likes: u64,
    pub retweets: u64,
    pub replies: u64,
    pub total: u64,
    pub likes_pct: f64,
    pub retweets_pct: f64,
    pub replies_pct: f64,
}

impl EngagementBreakdown {
    #[must_use]
    pub fn new(likes: u64, retweets: u64, replies: u64) -> Self {
        let total = likes.saturating_add(retweets).saturating_add(replies);
        Self {
            likes,
            retweets,
            replies,
            total,
            likes_pct: percentage(likes, total),
            retweets_pct: percentage(retweets, total),
            replies_pct: percentage(replies, total),
        }
    }
}

/// Share of `total`, rounded to one decimal; 0 when `total` is 0.
fn percentage(value: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (value as f64 / total as f64 * 1000.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_number() {
        assert_eq!(compact_number(0), "0");
        assert_eq!(compact_number(999), "999");
        assert_eq!(compact_number(1_000), "1.0K");
        assert_eq!(compact_number(12_345), "12.3K");
        assert_eq!(compact_number(2_500_000), "2.5M");
    }

    #[test]
    fn test_with_thousands() {
        assert_eq!(with_thousands(7), "7");
        assert_eq!(with_thousands(1_000), "1,000");
        assert_eq!(with_thousands(12_345_678), "12,345,678");
    }

    #[test]
    fn test_signed() {
        assert_eq!(signed(3), "+3");
        assert_eq!(signed(0), "0");
        assert_eq!(signed(-2), "-2");
    }

    #[test]
    fn test_engagement_breakdown() {
        let b = EngagementBreakdown::new(5, 1, 0);
        assert_eq!(b.total, 6);
        assert!((b.likes_pct - 83.3).abs() < 1e-9);
        assert!((b.retweets_pct - 16.7).abs() < 1e-9);
        assert!(b.replies_pct.abs() < f64::EPSILON);

        let empty = EngagementBreakdown::new(0, 0, 0);
        assert!(empty.likes_pct.abs() < f64::EPSILON);
    }

    #[test]
    fn test_engagement_breakdown_saturates() {
        let b = EngagementBreakdown::new(u64::MAX, u64::MAX, 0);
        assert_eq!(b.total, u64::MAX);
        assert!((b.likes_pct - 100.0).abs() < 1e-9);
    }
}
