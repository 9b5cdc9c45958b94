use std::sync::{Arc, Mutex};

use astra_wellness::config::HistoryConfig;
use astra_wellness::wellness::checks::{
    AlertError, CheckSubmission, CrewAlert, CrewAlertPublisher, CrewMemberId, HistoryError,
    LogError, RecommendationLog, RecommendationLogEntry, StressCheckRecord, StressCheckService,
    StressHistoryRepository,
};
use astra_wellness::wellness::{ActivityLevel, RawSignals, StressLevel};

#[derive(Default)]
struct VecHistory(Mutex<Vec<StressCheckRecord>>);

impl StressHistoryRepository for VecHistory {
    fn append(&self, record: StressCheckRecord) -> Result<(), HistoryError> {
        self.0.lock().expect("history").push(record);
        Ok(())
    }

    fn recent(
        &self,
        member_id: &CrewMemberId,
        limit: usize,
    ) -> Result<Vec<StressCheckRecord>, HistoryError> {
        let mut records: Vec<_> = self
            .0
            .lock()
            .expect("history")
            .iter()
            .filter(|record| &record.member_id == member_id)
            .cloned()
            .collect();
        records.sort_by(|left, right| right.recorded_at.cmp(&left.recorded_at));
        records.truncate(limit);
        Ok(records)
    }
}

#[derive(Default)]
struct VecLog(Mutex<Vec<RecommendationLogEntry>>);

impl RecommendationLog for VecLog {
    fn append(&self, entry: RecommendationLogEntry) -> Result<(), LogError> {
        self.0.lock().expect("log").push(entry);
        Ok(())
    }
}

#[derive(Default)]
struct VecAlerts(Mutex<Vec<CrewAlert>>);

impl CrewAlertPublisher for VecAlerts {
    fn publish(&self, alert: CrewAlert) -> Result<(), AlertError> {
        self.0.lock().expect("alerts").push(alert);
        Ok(())
    }
}

fn submit(member: &str, signals: RawSignals) -> CheckSubmission {
    CheckSubmission {
        member_id: CrewMemberId(member.to_string()),
        display_name: None,
        signals,
    }
}

#[test]
fn crew_checks_are_kept_apart_and_alerts_follow_high_stress() {
    let history = Arc::new(VecHistory::default());
    let log = Arc::new(VecLog::default());
    let alerts = Arc::new(VecAlerts::default());
    let service = StressCheckService::new(
        history.clone(),
        log.clone(),
        alerts.clone(),
        HistoryConfig::default(),
    );

    let calm = RawSignals {
        sleep_hours: 7.5,
        mood_level: 7,
        heart_rate_bpm: 64,
        activity_level: ActivityLevel::Light,
    };
    let frayed = RawSignals {
        sleep_hours: 4.5,
        mood_level: 2,
        heart_rate_bpm: 96,
        activity_level: ActivityLevel::None,
    };

    let first = service.analyze(submit("crew-lee", calm)).expect("calm check");
    let second = service
        .analyze(submit("crew-singh", frayed))
        .expect("frayed check");

    assert_eq!(first.result.level, StressLevel::Low);
    assert_eq!(second.result.level, StressLevel::High);
    assert!(second.alert_raised);

    let raised = alerts.0.lock().expect("alerts").clone();
    assert_eq!(raised.len(), 1);
    assert_eq!(raised[0].member_id, CrewMemberId("crew-singh".to_string()));
    assert_eq!(raised[0].member_name, "A crew member");

    let lee = service
        .history(&CrewMemberId("crew-lee".to_string()), None)
        .expect("history");
    assert_eq!(lee.len(), 1);
    assert_eq!(lee[0].check_id, first.check_id);

    let logged = log.0.lock().expect("log").len();
    assert_eq!(
        logged,
        first.recommendations.len() + second.recommendations.len()
    );
}
