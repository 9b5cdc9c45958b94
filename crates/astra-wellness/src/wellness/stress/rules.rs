use super::domain::{ActivityLevel, RawSignals, Signal, SignalContribution, StressFactorKind};

/// Score each signal independently, in sleep, mood, heart rate, activity order.
///
/// Band checks are plain `<`/`<=` chains, so out-of-range readings land in the
/// most severe band of their dimension instead of being rejected.
pub(crate) fn score_signals(signals: &RawSignals) -> [SignalContribution; 4] {
    [
        sleep(signals.sleep_hours),
        mood(signals.mood_level),
        heart_rate(signals.heart_rate_bpm),
        activity(signals.activity_level),
    ]
}

pub(crate) fn total_score(contributions: &[SignalContribution]) -> u8 {
    let raw: i32 = contributions
        .iter()
        .map(|contribution| i32::from(contribution.points))
        .sum();
    raw.clamp(0, 100) as u8
}

fn sleep(hours: f64) -> SignalContribution {
    let (points, factor) = if hours < 4.0 {
        (30, Some(StressFactorKind::SevereSleepDeficit))
    } else if hours < 6.0 {
        (20, Some(StressFactorKind::InsufficientSleep))
    } else if hours < 7.0 {
        (10, Some(StressFactorKind::SlightlyLowSleep))
    } else if hours > 10.0 {
        (10, Some(StressFactorKind::ExcessiveSleep))
    } else {
        (0, None)
    };

    SignalContribution {
        signal: Signal::Sleep,
        points,
        factor,
    }
}

fn mood(level: i32) -> SignalContribution {
    let (points, factor) = if level <= 2 {
        (35, Some(StressFactorKind::VeryLowMood))
    } else if level <= 4 {
        (25, Some(StressFactorKind::LowMood))
    } else if level <= 5 {
        (15, Some(StressFactorKind::NeutralMood))
    } else if level <= 6 {
        (5, None)
    } else {
        (0, None)
    };

    SignalContribution {
        signal: Signal::Mood,
        points,
        factor,
    }
}

fn heart_rate(bpm: i32) -> SignalContribution {
    let (points, factor) = if bpm < 50 {
        (15, Some(StressFactorKind::LowHeartRate))
    } else if bpm > 100 {
        (25, Some(StressFactorKind::ElevatedHeartRate))
    } else if bpm > 90 {
        (15, Some(StressFactorKind::SlightlyElevatedHeartRate))
    } else if bpm > 80 {
        (5, None)
    } else {
        (0, None)
    };

    SignalContribution {
        signal: Signal::HeartRate,
        points,
        factor,
    }
}

fn activity(level: ActivityLevel) -> SignalContribution {
    let (points, factor) = match level {
        ActivityLevel::None => (10, Some(StressFactorKind::NoPhysicalActivity)),
        ActivityLevel::Light => (0, None),
        ActivityLevel::Moderate | ActivityLevel::Intense => (-5, None),
    };

    SignalContribution {
        signal: Signal::Activity,
        points,
        factor,
    }
}
