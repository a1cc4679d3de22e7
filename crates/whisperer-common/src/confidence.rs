//! Confidence bucketing for suggested mappings.
//!
//! The same boundaries drive the API's `confidence_level` field and the badge
//! rendering in the UI, so they live here rather than in handler code.

use serde::{Deserialize, Serialize};

/// Quality bucket for a mapping confidence score in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceBucket {
    /// Score of zero: no target was found above the suggestion threshold.
    None,
    /// Below 0.4.
    Low,
    /// 0.4 up to (but excluding) 0.7.
    Medium,
    /// 0.7 and above.
    High,
}

impl ConfidenceBucket {
    pub fn from_score(score: f64) -> Self {
        if score <= 0.0 {
            ConfidenceBucket::None
        } else if score >= 0.7 {
            ConfidenceBucket::High
        } else if score >= 0.4 {
            ConfidenceBucket::Medium
        } else {
            ConfidenceBucket::Low
        }
    }

    /// Stable identifier used in API payloads and CSS class names.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceBucket::None => "none",
            ConfidenceBucket::Low => "low",
            ConfidenceBucket::Medium => "medium",
            ConfidenceBucket::High => "high",
        }
    }

    /// Badge text: rounded percentage, except the zero bucket.
    pub fn display(score: f64) -> String {
        match Self::from_score(score) {
            ConfidenceBucket::None => "No match".to_string(),
            _ => format!("{}%", (score * 100.0).round() as i64),
        }
    }
}
