use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum Emoji {
    #[serde(rename = "😊")]
    Positive,
    #[serde(rename = "😐")]
    Neutral,
    #[serde(rename = "😢")]
    Negative,
}

impl Emoji {
    pub const ALL: [Emoji; 3] = [Emoji::Positive, Emoji::Neutral, Emoji::Negative];

    pub fn glyph(self) -> &'static str {
        match self {
            Emoji::Positive => "😊",
            Emoji::Neutral => "😐",
            Emoji::Negative => "😢",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedbackPayload {
    pub feedback: String,
    pub event: String,
    pub emoji: Emoji,
}

/// Held only for the duration of a single login attempt.
#[derive(Debug, Clone, Serialize)]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct SentimentCounts {
    #[serde(default)]
    pub positive: u64,
    #[serde(default)]
    pub neutral: u64,
    #[serde(default)]
    pub negative: u64,
}

impl SentimentCounts {
    pub fn get(&self, sentiment: Sentiment) -> u64 {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }
}

/// A stored feedback as the backend returns it, server-assigned fields included.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct FeedbackRecord {
    #[serde(default)]
    pub event: String,
    #[serde(default)]
    pub feedback: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub timestamp: String,
}

/// Point-in-time aggregate fetched once per authenticated session. Every field
/// defaults so a sparse payload deserializes instead of failing; missing keys
/// read as zero downstream.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct StatsSnapshot {
    #[serde(default)]
    pub total_feedbacks: u64,
    #[serde(default)]
    pub sentiment_stats: SentimentCounts,
    #[serde(default)]
    pub emoji_stats: HashMap<String, u64>,
    #[serde(default)]
    pub feedbacks: Vec<FeedbackRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_payload_serializes_emoji_as_glyph() {
        let payload = FeedbackPayload {
            feedback: "Great!".to_string(),
            event: "Hack Day".to_string(),
            emoji: Emoji::Positive,
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["emoji"], "😊");
        assert_eq!(json["event"], "Hack Day");
        assert_eq!(json["feedback"], "Great!");
    }

    #[test]
    fn snapshot_deserializes_full_payload() {
        let raw = r#"{
            "total_feedbacks": 7,
            "sentiment_stats": {"positive": 5, "neutral": 0, "negative": 2},
            "emoji_stats": {"😊": 5, "😢": 2},
            "feedbacks": [
                {"event": "Hack Day", "feedback": "Great!", "emoji": "😊",
                 "category": "positive", "timestamp": "2026-02-02T10:30:00Z"}
            ]
        }"#;

        let snapshot: StatsSnapshot = serde_json::from_str(raw).unwrap();
        assert_eq!(snapshot.total_feedbacks, 7);
        assert_eq!(snapshot.sentiment_stats.get(Sentiment::Positive), 5);
        assert_eq!(snapshot.emoji_stats.get("😢"), Some(&2));
        assert_eq!(snapshot.feedbacks.len(), 1);
        assert_eq!(snapshot.feedbacks[0].category, "positive");
    }

    #[test]
    fn snapshot_tolerates_missing_fields() {
        let snapshot: StatsSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(snapshot.total_feedbacks, 0);
        assert_eq!(snapshot.sentiment_stats, SentimentCounts::default());
        assert!(snapshot.emoji_stats.is_empty());
        assert!(snapshot.feedbacks.is_empty());
    }

    #[test]
    fn login_response_defaults_to_failure() {
        let response: LoginResponse = serde_json::from_str("{}").unwrap();
        assert!(!response.success);
    }
}
