use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};

/// Duration shown when no post in a topic carries a usable timestamp.
pub const DEFAULT_TREND_DURATION: &str = "24h";

/// Parse a post timestamp.
///
/// Accepts RFC 3339 (what Bluesky emits) and naive ISO 8601 date-times, which
/// are taken as UTC.
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Render the spread between the earliest and latest timestamp.
///
/// Unparseable timestamps are skipped. With none left the result is
/// [`DEFAULT_TREND_DURATION`].
pub fn trend_duration<'a, I>(timestamps: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut bounds: Option<(DateTime<Utc>, DateTime<Utc>)> = None;
    for ts in timestamps.into_iter().filter_map(parse_timestamp) {
        bounds = Some(match bounds {
            Some((min, max)) => (min.min(ts), max.max(ts)),
            None => (ts, ts),
        });
    }

    bounds.map_or_else(
        || DEFAULT_TREND_DURATION.to_string(),
        |(min, max)| format_span(max - min),
    )
}

fn format_span(span: TimeDelta) -> String {
    if span < TimeDelta::hours(1) {
        "<1h".to_string()
    } else if span < TimeDelta::hours(48) {
        format!("{}h", span.num_hours())
    } else {
        format!("{}d", span.num_days())
    }
}
