use std::fmt::Write;

use chrono::DateTime;

use crate::models::{Emoji, Sentiment, StatsSnapshot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub event: String,
    pub feedback: String,
    pub emoji: String,
    pub category: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub sentiment_series: Vec<SeriesPoint>,
    pub emoji_series: Vec<SeriesPoint>,
    pub table_rows: Vec<TableRow>,
}

/// Reshapes a snapshot into chart-ready series and table rows. Pure: no
/// network, no hidden state, missing keys read as zero.
pub fn present(snapshot: &StatsSnapshot) -> DashboardView {
    let sentiment_series = Sentiment::ALL
        .iter()
        .map(|sentiment| SeriesPoint {
            label: sentiment.label().to_string(),
            value: snapshot.sentiment_stats.get(*sentiment),
        })
        .collect();

    let emoji_series = Emoji::ALL
        .iter()
        .map(|emoji| SeriesPoint {
            label: emoji.glyph().to_string(),
            value: snapshot.emoji_stats.get(emoji.glyph()).copied().unwrap_or(0),
        })
        .collect();

    let table_rows = snapshot
        .feedbacks
        .iter()
        .map(|record| TableRow {
            event: record.event.clone(),
            feedback: record.feedback.clone(),
            emoji: record.emoji.clone(),
            category: record.category.clone(),
            timestamp: humanize_timestamp(&record.timestamp),
        })
        .collect();

    DashboardView {
        sentiment_series,
        emoji_series,
        table_rows,
    }
}

pub fn series_total(series: &[SeriesPoint]) -> u64 {
    series.iter().map(|point| point.value).sum()
}

/// Accepts the timestamp formats the backend has been seen to emit and leaves
/// anything unrecognized untouched.
pub fn humanize_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

pub fn render_dashboard(view: &DashboardView, total_feedbacks: u64) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# Admin Dashboard");
    let _ = writeln!(output, "{total_feedbacks} feedbacks recorded");
    let _ = writeln!(output);
    let _ = writeln!(output, "## Sentiment Distribution");

    for point in &view.sentiment_series {
        let _ = writeln!(output, "- {}: {}", point.label, point.value);
    }
    let _ = writeln!(output, "Total: {}", series_total(&view.sentiment_series));

    let _ = writeln!(output);
    let _ = writeln!(output, "## Emoji Distribution");

    for point in &view.emoji_series {
        let _ = writeln!(output, "- {}: {}", point.label, point.value);
    }
    let _ = writeln!(output, "Total: {}", series_total(&view.emoji_series));

    let _ = writeln!(output);
    let _ = writeln!(output, "## All Feedbacks");

    if view.table_rows.is_empty() {
        let _ = writeln!(output, "No feedback recorded yet.");
    } else {
        for row in view.table_rows.iter() {
            let _ = writeln!(
                output,
                "- {} | {} | {} | {} | {}",
                row.event, row.feedback, row.emoji, row.category, row.timestamp
            );
        }
    }

    output
}
