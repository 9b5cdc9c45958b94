//! Per-check flow around the scorer: evaluate, select, then hand the outcome to
//! the history store, the recommendation log, and the crew alert hook.
//!
//! Scoring finishes before anything is persisted. Collaborators are traits so the
//! hosted backend can be swapped for in-memory fakes in tests and demos.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    CheckId, CheckSubmission, CrewAlert, CrewMemberId, HistorySummary, LevelCounts,
    RecommendationLogEntry, StressAnalysis, StressCheckRecord,
};
pub use repository::{
    AlertError, CrewAlertPublisher, HistoryError, LogError, RecommendationLog,
    StressHistoryRepository,
};
pub use router::stress_check_router;
pub use service::{CheckServiceError, StressCheckService};
