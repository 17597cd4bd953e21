use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

/// Five-point sentiment bucket assigned to a single post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLevel {
    ExtremeNegative,
    Negative,
    Neutral,
    Positive,
    ExtremePositive,
}

impl SentimentLevel {
    /// Bucket a per-post sentiment score.
    ///
    /// Scores are integers in `[-2, 2]` upstream. Only an exact zero is
    /// neutral; a fractional score in `(0, 1)` falls through to negative.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn classify(score: f64) -> Self {
        if score >= 2.0 {
            Self::ExtremePositive
        } else if score >= 1.0 {
            Self::Positive
        } else if score == 0.0 {
            Self::Neutral
        } else if score <= -2.0 {
            Self::ExtremeNegative
        } else {
            Self::Negative
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::ExtremeNegative => "Extreme Negative",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
            Self::Positive => "Positive",
            Self::ExtremePositive => "Extreme Positive",
        }
    }
}

/// Histogram of post sentiment for a topic or category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    pub extreme_negative: u64,
    pub negative: u64,
    pub neutral: u64,
    pub positive: u64,
    pub extreme_positive: u64,
}

impl SentimentDistribution {
    /// Build a histogram from raw sentiment scores.
    pub fn from_scores<I>(scores: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut dist = Self::default();
        for score in scores {
            dist.record(SentimentLevel::classify(score));
        }
        dist
    }

    pub fn record(&mut self, level: SentimentLevel) {
        match level {
            SentimentLevel::ExtremeNegative => self.extreme_negative += 1,
            SentimentLevel::Negative => self.negative += 1,
            SentimentLevel::Neutral => self.neutral += 1,
            SentimentLevel::Positive => self.positive += 1,
            SentimentLevel::ExtremePositive => self.extreme_positive += 1,
        }
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.extreme_negative + self.negative + self.neutral + self.positive + self.extreme_positive
    }
}

impl AddAssign for SentimentDistribution {
    fn add_assign(&mut self, rhs: Self) {
        self.extreme_negative += rhs.extreme_negative;
        self.negative += rhs.negative;
        self.neutral += rhs.neutral;
        self.positive += rhs.positive;
        self.extreme_positive += rhs.extreme_positive;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_integer_scores() {
        assert_eq!(SentimentLevel::classify(2.0), SentimentLevel::ExtremePositive);
        assert_eq!(SentimentLevel::classify(1.0), SentimentLevel::Positive);
        assert_eq!(SentimentLevel::classify(0.0), SentimentLevel::Neutral);
        assert_eq!(SentimentLevel::classify(-1.0), SentimentLevel::Negative);
        assert_eq!(SentimentLevel::classify(-2.0), SentimentLevel::ExtremeNegative);
    }

    #[test]
    fn test_classify_out_of_range_and_fractional() {
        assert_eq!(SentimentLevel::classify(3.0), SentimentLevel::ExtremePositive);
        assert_eq!(SentimentLevel::classify(-7.0), SentimentLevel::ExtremeNegative);
        assert_eq!(SentimentLevel::classify(1.5), SentimentLevel::Positive);
        assert_eq!(SentimentLevel::classify(0.5), SentimentLevel::Negative);
        assert_eq!(SentimentLevel::classify(-0.5), SentimentLevel::Negative);
    }

    #[test]
    fn test_histogram_total_matches_input() {
        let scores = [2.0, 2.0, 1.0, 0.0, 0.0, 0.0, -1.0, -2.0];
        let dist = SentimentDistribution::from_scores(scores);
        assert_eq!(dist.total(), scores.len() as u64);
        assert_eq!(dist.extreme_positive, 2);
        assert_eq!(dist.neutral, 3);
        assert_eq!(dist.extreme_negative, 1);
    }

    #[test]
    fn test_add_assign() {
        let mut a = SentimentDistribution::from_scores([2.0, 0.0]);
        a += SentimentDistribution::from_scores([0.0, -1.0]);
        assert_eq!(a.neutral, 2);
        assert_eq!(a.negative, 1);
        assert_eq!(a.total(), 4);
    }

    #[test]
    fn test_serializes_snake_case() {
        let json = serde_json::to_value(SentimentDistribution::from_scores([2.0])).unwrap();
        assert_eq!(json["extreme_positive"], 1);
        assert_eq!(json["extreme_negative"], 0);
    }
}
