use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::wellness::recommendations::Recommendation;
use crate::wellness::stress::{RawSignals, StressLevel, StressResult};

/// Identifier wrapper for a crew member submitting checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CrewMemberId(pub String);

/// Identifier assigned to each persisted stress check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckId(pub String);

/// Form submission for a single analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckSubmission {
    pub member_id: CrewMemberId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub signals: RawSignals,
}

/// Timestamped history entry written after every analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressCheckRecord {
    pub check_id: CheckId,
    pub member_id: CrewMemberId,
    pub signals: RawSignals,
    pub result: StressResult,
    pub recorded_at: DateTime<Utc>,
}

/// Title and description of a recommendation that was shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationLogEntry {
    pub member_id: CrewMemberId,
    pub check_id: CheckId,
    pub title: String,
    pub description: String,
    pub logged_at: DateTime<Utc>,
}

/// Notice raised for the rest of the crew when a member reports high stress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewAlert {
    pub member_id: CrewMemberId,
    pub member_name: String,
    pub level: StressLevel,
    pub score: u8,
    pub message: String,
    pub raised_at: DateTime<Utc>,
}

/// Everything the presentation layer needs after one analysis.
#[derive(Debug, Clone, Serialize)]
pub struct StressAnalysis {
    pub check_id: CheckId,
    pub member_id: CrewMemberId,
    pub recorded_at: DateTime<Utc>,
    pub result: StressResult,
    pub recommendations: Vec<Recommendation>,
    pub logged_recommendations: usize,
    pub alert_raised: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LevelCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

/// Rolled-up view of a member's recent checks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistorySummary {
    pub member_id: CrewMemberId,
    pub checks: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_level: Option<StressLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_score: Option<u8>,
    pub level_counts: LevelCounts,
}

impl HistorySummary {
    /// `records` are expected newest first, as returned by the history repository.
    pub fn from_records(member_id: CrewMemberId, records: &[StressCheckRecord]) -> Self {
        let mut level_counts = LevelCounts::default();
        for record in records {
            match record.result.level {
                StressLevel::Low => level_counts.low += 1,
                StressLevel::Medium => level_counts.medium += 1,
                StressLevel::High => level_counts.high += 1,
            }
        }

        let average_score = if records.is_empty() {
            None
        } else {
            let total: usize = records
                .iter()
                .map(|record| usize::from(record.result.score))
                .sum();
            // Half rounds up.
            let mean = (total + records.len() / 2) / records.len();
            Some(u8::try_from(mean).unwrap_or(u8::MAX))
        };

        let latest = records.first();

        Self {
            member_id,
            checks: records.len(),
            average_score,
            latest_level: latest.map(|record| record.result.level),
            latest_score: latest.map(|record| record.result.score),
            level_counts,
        }
    }
}
