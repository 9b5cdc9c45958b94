//! Rule-based stress scoring over four self-reported signals.

pub mod domain;
mod explanation;
mod rules;

use std::sync::Arc;

pub use domain::{
    ActivityLevel, RawSignals, Signal, SignalContribution, StressFactorKind, StressLevel,
    StressResult, UnknownActivityLevel, LOW_STRESS_CEILING, MEDIUM_STRESS_CEILING,
};

use super::messages::{EnglishCatalog, MessageCatalog};

/// Stateless scorer. The catalog only affects the rendered factor and explanation text.
#[derive(Clone)]
pub struct StressScorer {
    catalog: Arc<dyn MessageCatalog>,
}

impl Default for StressScorer {
    fn default() -> Self {
        Self::new(Arc::new(EnglishCatalog))
    }
}

impl StressScorer {
    pub fn new(catalog: Arc<dyn MessageCatalog>) -> Self {
        Self { catalog }
    }

    pub fn evaluate(&self, signals: &RawSignals) -> StressResult {
        let contributions = rules::score_signals(signals);
        let score = rules::total_score(&contributions);
        let level = StressLevel::from_score(score);

        let factors: Vec<String> = contributions
            .iter()
            .filter_map(|contribution| contribution.factor)
            .map(|factor| self.catalog.format(factor.message_key(), &[]))
            .collect();

        let explanation = explanation::compose(level, &factors, self.catalog.as_ref());

        StressResult {
            score,
            level,
            factors,
            explanation,
            contributions: contributions.to_vec(),
        }
    }
}

/// Evaluate with the English catalog.
pub fn evaluate_stress(signals: &RawSignals) -> StressResult {
    StressScorer::default().evaluate(signals)
}
