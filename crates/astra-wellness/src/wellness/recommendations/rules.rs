use super::RecommendationKind;
use crate::wellness::stress::{ActivityLevel, RawSignals, StressLevel, StressResult};
use tracing::trace;

pub(crate) type RulePredicate = fn(&StressResult, &RawSignals) -> bool;

/// A recommendation rule: when `applies` holds, every kind in `produces` is
/// appended in the listed order.
pub(crate) struct RecommendationRule {
    pub id: &'static str,
    pub applies: RulePredicate,
    pub produces: &'static [RecommendationKind],
}

/// Declaration order is priority order. All matching rules fire; the selector
/// truncates afterwards.
pub(crate) static RULES: [RecommendationRule; 7] = [
    RecommendationRule {
        id: "high_stress_support",
        applies: is_high_stress,
        produces: &[
            RecommendationKind::BreathingExercise,
            RecommendationKind::TalkToAstra,
        ],
    },
    RecommendationRule {
        id: "short_sleep",
        applies: slept_under_six_hours,
        produces: &[RecommendationKind::RestReminder],
    },
    RecommendationRule {
        id: "low_mood",
        applies: mood_at_most_four,
        produces: &[RecommendationKind::StressReliefGame],
    },
    RecommendationRule {
        id: "elevated_heart_rate",
        applies: heart_rate_above_ninety,
        produces: &[RecommendationKind::RelaxationExercise],
    },
    RecommendationRule {
        id: "inactive",
        applies: no_activity,
        produces: &[RecommendationKind::PhysicalActivity],
    },
    RecommendationRule {
        id: "low_stress_affirmation",
        applies: is_low_stress,
        produces: &[RecommendationKind::GreatWork],
    },
    RecommendationRule {
        id: "crew_connection",
        applies: is_elevated_stress,
        produces: &[RecommendationKind::ConnectWithCrew],
    },
];

fn is_high_stress(result: &StressResult, _: &RawSignals) -> bool {
    result.level == StressLevel::High
}

fn slept_under_six_hours(_: &StressResult, signals: &RawSignals) -> bool {
    signals.sleep_hours < 6.0
}

fn mood_at_most_four(_: &StressResult, signals: &RawSignals) -> bool {
    signals.mood_level <= 4
}

fn heart_rate_above_ninety(_: &StressResult, signals: &RawSignals) -> bool {
    signals.heart_rate_bpm > 90
}

fn no_activity(_: &StressResult, signals: &RawSignals) -> bool {
    signals.activity_level == ActivityLevel::None
}

fn is_low_stress(result: &StressResult, _: &RawSignals) -> bool {
    result.level == StressLevel::Low
}

fn is_elevated_stress(result: &StressResult, _: &RawSignals) -> bool {
    result.level != StressLevel::Low
}

/// Kinds produced by every matching rule, before truncation.
pub(crate) fn matching_kinds(
    result: &StressResult,
    signals: &RawSignals,
) -> Vec<RecommendationKind> {
    RULES
        .iter()
        .filter(|rule| (rule.applies)(result, signals))
        .inspect(|rule| trace!(rule = rule.id, "recommendation rule matched"))
        .flat_map(|rule| rule.produces.iter().copied())
        .collect()
}
