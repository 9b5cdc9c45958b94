pub mod checks;
pub mod messages;
pub mod recommendations;
pub mod stress;

pub use messages::{EnglishCatalog, MessageCatalog};
pub use recommendations::{
    select_recommendations, Recommendation, RecommendationKind, RecommendationSelector,
    MAX_RECOMMENDATIONS,
};
pub use stress::{
    evaluate_stress, ActivityLevel, RawSignals, Signal, SignalContribution, StressFactorKind,
    StressLevel, StressResult, StressScorer,
};
