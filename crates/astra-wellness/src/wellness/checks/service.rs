use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;
use tracing::{info, warn};

use super::domain::{
    CheckId, CheckSubmission, CrewAlert, CrewMemberId, HistorySummary, RecommendationLogEntry,
    StressAnalysis, StressCheckRecord,
};
use super::repository::{
    CrewAlertPublisher, HistoryError, RecommendationLog, StressHistoryRepository,
};
use crate::config::HistoryConfig;
use crate::wellness::messages::{EnglishCatalog, MessageCatalog};
use crate::wellness::recommendations::{Recommendation, RecommendationSelector};
use crate::wellness::stress::{StressLevel, StressResult, StressScorer};

/// Service wiring the scorer and selector to the history, log, and alert collaborators.
pub struct StressCheckService<H, L, A> {
    scorer: StressScorer,
    selector: RecommendationSelector,
    catalog: Arc<dyn MessageCatalog>,
    history: Arc<H>,
    log: Arc<L>,
    alerts: Arc<A>,
    history_config: HistoryConfig,
    submissions: Mutex<()>,
}

static CHECK_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_check_id() -> CheckId {
    let id = CHECK_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    CheckId(format!("chk-{id:06}"))
}

impl<H, L, A> StressCheckService<H, L, A>
where
    H: StressHistoryRepository + 'static,
    L: RecommendationLog + 'static,
    A: CrewAlertPublisher + 'static,
{
    pub fn new(history: Arc<H>, log: Arc<L>, alerts: Arc<A>, config: HistoryConfig) -> Self {
        Self::with_catalog(Arc::new(EnglishCatalog), history, log, alerts, config)
    }

    pub fn with_catalog(
        catalog: Arc<dyn MessageCatalog>,
        history: Arc<H>,
        log: Arc<L>,
        alerts: Arc<A>,
        config: HistoryConfig,
    ) -> Self {
        Self {
            scorer: StressScorer::new(catalog.clone()),
            selector: RecommendationSelector::new(catalog.clone()),
            catalog,
            history,
            log,
            alerts,
            history_config: config,
            submissions: Mutex::new(()),
        }
    }

    /// Score a submission, persist it, and report what was shown.
    ///
    /// Only a failed history write is an error. Recommendation log and crew
    /// alert failures are logged and reflected in the returned counters.
    pub fn analyze(
        &self,
        submission: CheckSubmission,
    ) -> Result<StressAnalysis, CheckServiceError> {
        let CheckSubmission {
            member_id,
            display_name,
            signals,
        } = submission;

        let result = self.scorer.evaluate(&signals);
        let recommendations = self.selector.select(&result, &signals);

        // Sequential submissions are persisted in call order.
        let _turn = self
            .submissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let check_id = next_check_id();
        let recorded_at = Utc::now();
        self.history.append(StressCheckRecord {
            check_id: check_id.clone(),
            member_id: member_id.clone(),
            signals,
            result: result.clone(),
            recorded_at,
        })?;

        let logged_recommendations =
            self.log_recommendations(&member_id, &check_id, &recommendations);

        let alert_raised = result.level == StressLevel::High
            && self.raise_crew_alert(&member_id, display_name.as_deref(), &result);

        info!(
            member = %member_id.0,
            check = %check_id.0,
            score = result.score,
            level = %result.level,
            recommendations = recommendations.len(),
            "stress check recorded"
        );

        Ok(StressAnalysis {
            check_id,
            member_id,
            recorded_at,
            result,
            recommendations,
            logged_recommendations,
            alert_raised,
        })
    }

    /// Most recent checks for a member, newest first.
    pub fn history(
        &self,
        member_id: &CrewMemberId,
        limit: Option<usize>,
    ) -> Result<Vec<StressCheckRecord>, CheckServiceError> {
        let limit = limit.unwrap_or(self.history_config.default_limit);
        Ok(self.history.recent(member_id, limit)?)
    }

    pub fn summary(
        &self,
        member_id: &CrewMemberId,
        limit: Option<usize>,
    ) -> Result<HistorySummary, CheckServiceError> {
        let records = self.history(member_id, limit)?;
        Ok(HistorySummary::from_records(member_id.clone(), &records))
    }

    fn log_recommendations(
        &self,
        member_id: &CrewMemberId,
        check_id: &CheckId,
        recommendations: &[Recommendation],
    ) -> usize {
        let mut logged = 0;
        for recommendation in recommendations {
            let entry = RecommendationLogEntry {
                member_id: member_id.clone(),
                check_id: check_id.clone(),
                title: recommendation.title.clone(),
                description: recommendation.description.clone(),
                logged_at: Utc::now(),
            };
            match self.log.append(entry) {
                Ok(()) => logged += 1,
                Err(error) => warn!(
                    member = %member_id.0,
                    title = %recommendation.title,
                    %error,
                    "failed to log recommendation"
                ),
            }
        }
        logged
    }

    fn raise_crew_alert(
        &self,
        member_id: &CrewMemberId,
        display_name: Option<&str>,
        result: &StressResult,
    ) -> bool {
        let member_name = match display_name.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.catalog.format("crew_member", &[]),
        };
        let message = self
            .catalog
            .format("alert_msg_generated", &[("name", member_name.clone())]);

        let alert = CrewAlert {
            member_id: member_id.clone(),
            member_name,
            level: result.level,
            score: result.score,
            message,
            raised_at: Utc::now(),
        };

        match self.alerts.publish(alert) {
            Ok(()) => true,
            Err(error) => {
                warn!(member = %member_id.0, %error, "failed to publish crew alert");
                false
            }
        }
    }
}

/// Error raised by the stress check service.
#[derive(Debug, thiserror::Error)]
pub enum CheckServiceError {
    #[error(transparent)]
    History(#[from] HistoryError),
}
