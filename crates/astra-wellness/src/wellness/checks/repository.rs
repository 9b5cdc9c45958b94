use super::domain::{CrewAlert, CrewMemberId, RecommendationLogEntry, StressCheckRecord};

/// History storage so the service can be exercised without a hosted document store.
pub trait StressHistoryRepository: Send + Sync {
    fn append(&self, record: StressCheckRecord) -> Result<(), HistoryError>;
    /// Newest first, at most `limit` records.
    fn recent(
        &self,
        member_id: &CrewMemberId,
        limit: usize,
    ) -> Result<Vec<StressCheckRecord>, HistoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("check already recorded")]
    Conflict,
    #[error("history store unavailable: {0}")]
    Unavailable(String),
}

/// Append-only log of the recommendations shown to a member.
pub trait RecommendationLog: Send + Sync {
    fn append(&self, entry: RecommendationLogEntry) -> Result<(), LogError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("recommendation log unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook for high-stress notices.
pub trait CrewAlertPublisher: Send + Sync {
    fn publish(&self, alert: CrewAlert) -> Result<(), AlertError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    #[error("alert transport unavailable: {0}")]
    Transport(String),
}
