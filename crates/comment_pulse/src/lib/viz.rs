//! Chart-ready aggregate series over enriched comment records.
//!
//! Pure projections of one video's record set; rendering is left to
//! whatever presentation layer consumes the exported JSON.

use std::{fs, path::Path, path::PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comment_store::{Comment, Sentiment};
use itertools::Itertools;
use serde::Serialize;
use std::collections::BTreeMap;

/// Comment count for one calendar day (UTC).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateCount {
    pub date: NaiveDate,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentimentCount {
    pub sentiment: Sentiment,
    pub count: u64,
}

/// Per-day counts for one sentiment label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentimentSeries {
    pub sentiment: Sentiment,
    pub points: Vec<DateCount>,
}

/// Comments per day, ascending by date.
pub fn comments_over_time(comments: &[Comment]) -> Vec<DateCount> {
    let mut by_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for comment in comments {
        *by_day.entry(comment.date.date_naive()).or_default() += 1;
    }

    by_day
        .into_iter()
        .map(|(date, count)| DateCount { date, count })
        .collect()
}

/// Per-sentiment daily counts, one series per label present in the input.
/// Unscored records are excluded.
pub fn sentiment_over_time(comments: &[Comment]) -> Vec<SentimentSeries> {
    Sentiment::ALL
        .into_iter()
        .filter_map(|sentiment| {
            let labeled = comments
                .iter()
                .filter(|c| c.sentiment == Some(sentiment))
                .cloned()
                .collect_vec();

            (!labeled.is_empty()).then(|| SentimentSeries {
                sentiment,
                points: comments_over_time(&labeled),
            })
        })
        .collect()
}

/// Total count per sentiment label present in the input.
pub fn sentiment_counts(comments: &[Comment]) -> Vec<SentimentCount> {
    let counts = comments.iter().filter_map(|c| c.sentiment).counts();

    Sentiment::ALL
        .into_iter()
        .filter_map(|sentiment| {
            counts.get(&sentiment).map(|&count| SentimentCount {
                sentiment,
                count: count as u64,
            })
        })
        .collect()
}

/// Writes the three chart series as JSON documents under
/// `<out_dir>/<video_id>/`.
pub fn write_all_charts(out_dir: &Path, video_id: &str, comments: &[Comment]) -> Result<()> {
    let chart_dir = out_dir.join(video_id);
    fs::create_dir_all(&chart_dir).with_context(|| format!("create {:?}", chart_dir))?;

    write_json(
        chart_dir.join("comments_over_time.json"),
        &comments_over_time(comments),
    )?;
    write_json(
        chart_dir.join("sentiment_over_time.json"),
        &sentiment_over_time(comments),
    )?;
    write_json(
        chart_dir.join("sentiment_counts.json"),
        &sentiment_counts(comments),
    )?;

    tracing::info!(video_id = %video_id, dir = ?chart_dir, "Wrote chart series");

    Ok(())
}

fn write_json<T: Serialize>(path: PathBuf, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize chart series")?;
    fs::write(&path, json).with_context(|| format!("write {:?}", path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Datelike, TimeZone, Utc};

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, day, hour, 0, 0).unwrap()
    }

    fn comment(day: u32, hour: u32, sentiment: Sentiment) -> Comment {
        Comment::new("text", at(day, hour)).with_sentiment(sentiment)
    }

    #[test]
    fn test_comments_over_time_groups_by_day_ascending() {
        let comments = vec![
            comment(3, 9, Sentiment::Positive),
            comment(1, 10, Sentiment::Negative),
            comment(3, 22, Sentiment::Neutral),
            comment(1, 1, Sentiment::Positive),
            comment(2, 12, Sentiment::Positive),
        ];

        let series = comments_over_time(&comments);

        let days: Vec<u32> = series.iter().map(|p| p.date.day()).collect();
        assert_eq!(days, vec![1, 2, 3]);
        assert_eq!(series.iter().map(|p| p.count).collect_vec(), vec![2, 1, 2]);

        let total: u64 = series.iter().map(|p| p.count).sum();
        assert_eq!(total as usize, comments.len());
    }

    #[test]
    fn test_sentiment_counts_cover_exactly_present_labels() {
        let comments = vec![
            comment(1, 0, Sentiment::Positive),
            comment(1, 1, Sentiment::Positive),
            comment(2, 0, Sentiment::Negative),
        ];

        let counts = sentiment_counts(&comments);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].sentiment, Sentiment::Positive);
        assert_eq!(counts[0].count, 2);
        assert_eq!(counts[1].sentiment, Sentiment::Negative);
        assert_eq!(counts[1].count, 1);
    }

    #[test]
    fn test_unscored_records_are_excluded_from_sentiment_series() {
        let mut comments = vec![comment(1, 0, Sentiment::Neutral)];
        comments.push(Comment::new("unscored", at(1, 2)));

        assert!(sentiment_counts(&comments).iter().all(|c| c.count == 1));
        let series = sentiment_over_time(&comments);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].sentiment, Sentiment::Neutral);
        assert_eq!(series[0].points, vec![DateCount { date: at(1, 0).date_naive(), count: 1 }]);
    }

    #[test]
    fn test_sentiment_over_time_splits_per_label() {
        let comments = vec![
            comment(1, 0, Sentiment::Positive),
            comment(1, 5, Sentiment::Negative),
            comment(2, 0, Sentiment::Positive),
        ];

        let series = sentiment_over_time(&comments);
        assert_eq!(series.len(), 2);

        let positive = &series[0];
        assert_eq!(positive.sentiment, Sentiment::Positive);
        assert_eq!(positive.points.len(), 2);
        assert!(positive.points.iter().all(|p| p.count == 1));

        let negative = &series[1];
        assert_eq!(negative.sentiment, Sentiment::Negative);
        assert_eq!(negative.points.len(), 1);
    }

    #[test]
    fn test_empty_input_yields_empty_series() {
        assert!(comments_over_time(&[]).is_empty());
        assert!(sentiment_over_time(&[]).is_empty());
        assert!(sentiment_counts(&[]).is_empty());
    }
}
