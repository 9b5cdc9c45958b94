use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{TimeZone, Utc};
use serde_json::Value;

use crate::config::HistoryConfig;
use crate::wellness::checks::domain::{
    CheckId, CheckSubmission, CrewAlert, CrewMemberId, RecommendationLogEntry, StressCheckRecord,
};
use crate::wellness::checks::repository::{
    AlertError, CrewAlertPublisher, HistoryError, LogError, RecommendationLog,
    StressHistoryRepository,
};
use crate::wellness::checks::{stress_check_router, StressCheckService};
use crate::wellness::stress::{evaluate_stress, ActivityLevel, RawSignals};

pub(super) fn member() -> CrewMemberId {
    CrewMemberId("crew-ortiz".to_string())
}

pub(super) fn overloaded_signals() -> RawSignals {
    RawSignals {
        sleep_hours: 3.0,
        mood_level: 1,
        heart_rate_bpm: 110,
        activity_level: ActivityLevel::None,
    }
}

pub(super) fn rested_signals() -> RawSignals {
    RawSignals {
        sleep_hours: 8.0,
        mood_level: 8,
        heart_rate_bpm: 70,
        activity_level: ActivityLevel::Moderate,
    }
}

pub(super) fn strained_signals() -> RawSignals {
    RawSignals {
        sleep_hours: 6.5,
        mood_level: 5,
        heart_rate_bpm: 85,
        activity_level: ActivityLevel::Light,
    }
}

pub(super) fn submission(signals: RawSignals) -> CheckSubmission {
    CheckSubmission {
        member_id: member(),
        display_name: Some("Commander Ortiz".to_string()),
        signals,
    }
}

pub(super) fn record(check: u32, signals: RawSignals) -> StressCheckRecord {
    StressCheckRecord {
        check_id: CheckId(format!("chk-test-{check}")),
        member_id: member(),
        signals,
        result: evaluate_stress(&signals),
        recorded_at: Utc
            .with_ymd_and_hms(2025, 3, 1, 8, check, 0)
            .single()
            .expect("valid timestamp"),
    }
}

pub(super) type MemoryService = StressCheckService<MemoryHistory, MemoryLog, MemoryAlerts>;

pub(super) fn build_service() -> (
    MemoryService,
    Arc<MemoryHistory>,
    Arc<MemoryLog>,
    Arc<MemoryAlerts>,
) {
    let history = Arc::new(MemoryHistory::default());
    let log = Arc::new(MemoryLog::default());
    let alerts = Arc::new(MemoryAlerts::default());
    let service = StressCheckService::new(
        history.clone(),
        log.clone(),
        alerts.clone(),
        HistoryConfig::default(),
    );
    (service, history, log, alerts)
}

#[derive(Default)]
pub(super) struct MemoryHistory {
    pub(super) records: Mutex<Vec<StressCheckRecord>>,
}

impl StressHistoryRepository for MemoryHistory {
    fn append(&self, record: StressCheckRecord) -> Result<(), HistoryError> {
        let mut guard = self.records.lock().expect("history mutex poisoned");
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
        let guard = self.records.lock().expect("history mutex poisoned");
        Ok(guard
            .iter()
            .rev()
            .filter(|record| &record.member_id == member_id)
            .take(limit)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub(super) struct MemoryLog {
    entries: Mutex<Vec<RecommendationLogEntry>>,
}

impl MemoryLog {
    pub(super) fn entries(&self) -> Vec<RecommendationLogEntry> {
        self.entries.lock().expect("log mutex poisoned").clone()
    }
}

impl RecommendationLog for MemoryLog {
    fn append(&self, entry: RecommendationLogEntry) -> Result<(), LogError> {
        self.entries.lock().expect("log mutex poisoned").push(entry);
        Ok(())
    }
}

#[derive(Default)]
pub(super) struct MemoryAlerts {
    events: Mutex<Vec<CrewAlert>>,
}

impl MemoryAlerts {
    pub(super) fn events(&self) -> Vec<CrewAlert> {
        self.events.lock().expect("alert mutex poisoned").clone()
    }
}

impl CrewAlertPublisher for MemoryAlerts {
    fn publish(&self, alert: CrewAlert) -> Result<(), AlertError> {
        self.events.lock().expect("alert mutex poisoned").push(alert);
        Ok(())
    }
}

pub(super) struct OfflineHistory;

impl StressHistoryRepository for OfflineHistory {
    fn append(&self, _record: StressCheckRecord) -> Result<(), HistoryError> {
        Err(HistoryError::Unavailable("document store offline".to_string()))
    }

    fn recent(
        &self,
        _member_id: &CrewMemberId,
        _limit: usize,
    ) -> Result<Vec<StressCheckRecord>, HistoryError> {
        Err(HistoryError::Unavailable("document store offline".to_string()))
    }
}

pub(super) struct ConflictingHistory;

impl StressHistoryRepository for ConflictingHistory {
    fn append(&self, _record: StressCheckRecord) -> Result<(), HistoryError> {
        Err(HistoryError::Conflict)
    }

    fn recent(
        &self,
        _member_id: &CrewMemberId,
        _limit: usize,
    ) -> Result<Vec<StressCheckRecord>, HistoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct OfflineLog;

impl RecommendationLog for OfflineLog {
    fn append(&self, _entry: RecommendationLogEntry) -> Result<(), LogError> {
        Err(LogError::Unavailable("log collection offline".to_string()))
    }
}

pub(super) struct OfflineAlerts;

impl CrewAlertPublisher for OfflineAlerts {
    fn publish(&self, _alert: CrewAlert) -> Result<(), AlertError> {
        Err(AlertError::Transport("alert channel closed".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn router_with_service(service: MemoryService) -> axum::Router {
    stress_check_router(Arc::new(service))
}
