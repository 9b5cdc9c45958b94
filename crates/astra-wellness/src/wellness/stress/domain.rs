use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Highest score still classified as low stress.
pub const LOW_STRESS_CEILING: u8 = 25;
/// Highest score still classified as medium stress.
pub const MEDIUM_STRESS_CEILING: u8 = 55;

/// Self-reported readings for a single check. Values are not range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawSignals {
    pub sleep_hours: f64,
    pub mood_level: i32,
    pub heart_rate_bpm: i32,
    pub activity_level: ActivityLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    None,
    Light,
    Moderate,
    Intense,
}

impl ActivityLevel {
    pub const fn label(self) -> &'static str {
        match self {
            ActivityLevel::None => "none",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Intense => "intense",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = UnknownActivityLevel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "intense" => Ok(Self::Intense),
            _ => Err(UnknownActivityLevel(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown activity level '{0}', expected none, light, moderate or intense")]
pub struct UnknownActivityLevel(pub String);

/// Three-tier severity derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressLevel {
    Low,
    Medium,
    High,
}

impl StressLevel {
    pub const fn from_score(score: u8) -> Self {
        if score <= LOW_STRESS_CEILING {
            StressLevel::Low
        } else if score <= MEDIUM_STRESS_CEILING {
            StressLevel::Medium
        } else {
            StressLevel::High
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            StressLevel::Low => "low",
            StressLevel::Medium => "medium",
            StressLevel::High => "high",
        }
    }
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Input dimension a contribution was scored from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    Sleep,
    Mood,
    HeartRate,
    Activity,
}

/// Signal bands that count as stress-contributing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressFactorKind {
    SevereSleepDeficit,
    InsufficientSleep,
    SlightlyLowSleep,
    ExcessiveSleep,
    VeryLowMood,
    LowMood,
    NeutralMood,
    LowHeartRate,
    ElevatedHeartRate,
    SlightlyElevatedHeartRate,
    NoPhysicalActivity,
}

impl StressFactorKind {
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::SevereSleepDeficit => "factor_sleep_severe",
            Self::InsufficientSleep => "factor_sleep_low",
            Self::SlightlyLowSleep => "factor_sleep_mild",
            Self::ExcessiveSleep => "factor_sleep_excess",
            Self::VeryLowMood => "factor_mood_very_low",
            Self::LowMood => "factor_mood_low",
            Self::NeutralMood => "factor_mood_neutral",
            Self::LowHeartRate => "factor_hr_low",
            Self::ElevatedHeartRate => "factor_hr_high",
            Self::SlightlyElevatedHeartRate => "factor_hr_mild",
            Self::NoPhysicalActivity => "factor_activity_none",
        }
    }
}

/// Points one signal added to (or removed from) the raw total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalContribution {
    pub signal: Signal,
    pub points: i16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factor: Option<StressFactorKind>,
}

/// Outcome of a single evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StressResult {
    pub score: u8,
    pub level: StressLevel,
    pub factors: Vec<String>,
    pub explanation: String,
    #[serde(default)]
    pub contributions: Vec<SignalContribution>,
}
