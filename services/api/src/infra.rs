use astra_wellness::wellness::checks::{
    AlertError, CrewAlert, CrewAlertPublisher, CrewMemberId, HistoryError, LogError,
    RecommendationLog, RecommendationLogEntry, StressCheckRecord, StressHistoryRepository,
};
use astra_wellness::wellness::ActivityLevel;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryStressHistory {
    records: Arc<Mutex<Vec<StressCheckRecord>>>,
}

impl StressHistoryRepository for InMemoryStressHistory {
    fn append(&self, record: StressCheckRecord) -> Result<(), HistoryError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| HistoryError::Unavailable("history mutex poisoned".to_string()))?;
        if guard.iter().any(|stored| stored.check_id == record.check_id) {
            return Err(HistoryError::Conflict);
        }
        guard.push(record);
        Ok(())
    }

    fn recent(
        &self,
        member_id: &CrewMemberId,
        limit: usize,
    ) -> Result<Vec<StressCheckRecord>, HistoryError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| HistoryError::Unavailable("history mutex poisoned".to_string()))?;
        // Appends arrive in submission order, so reverse iteration is newest first.
        Ok(guard
            .iter()
            .rev()
            .filter(|record| &record.member_id == member_id)
            .take(limit)
            .cloned()
            .collect())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryRecommendationLog {
    entries: Arc<Mutex<Vec<RecommendationLogEntry>>>,
}

impl RecommendationLog for InMemoryRecommendationLog {
    fn append(&self, entry: RecommendationLogEntry) -> Result<(), LogError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|_| LogError::Unavailable("log mutex poisoned".to_string()))?;
        guard.push(entry);
        Ok(())
    }
}

impl InMemoryRecommendationLog {
    pub(crate) fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryCrewAlerts {
    events: Arc<Mutex<Vec<CrewAlert>>>,
}

impl CrewAlertPublisher for InMemoryCrewAlerts {
    fn publish(&self, alert: CrewAlert) -> Result<(), AlertError> {
        let mut guard = self
            .events
            .lock()
            .map_err(|_| AlertError::Transport("alert mutex poisoned".to_string()))?;
        guard.push(alert);
        Ok(())
    }
}

impl InMemoryCrewAlerts {
    pub(crate) fn events(&self) -> Vec<CrewAlert> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

pub(crate) fn parse_activity(raw: &str) -> Result<ActivityLevel, String> {
    raw.parse::<ActivityLevel>().map_err(|err| err.to_string())
}
