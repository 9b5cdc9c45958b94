use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use super::domain::{
    CheckSubmission, CrewMemberId, HistorySummary, StressAnalysis, StressCheckRecord,
};
use super::repository::{CrewAlertPublisher, RecommendationLog, StressHistoryRepository};
use super::service::StressCheckService;
use crate::error::AppError;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct HistoryQuery {
    pub(crate) limit: Option<usize>,
}

/// Router builder exposing HTTP endpoints for analysis and history.
pub fn stress_check_router<H, L, A>(service: Arc<StressCheckService<H, L, A>>) -> Router
where
    H: StressHistoryRepository + 'static,
    L: RecommendationLog + 'static,
    A: CrewAlertPublisher + 'static,
{
    Router::new()
        .route("/api/v1/stress/checks", post(analyze_handler::<H, L, A>))
        .route(
            "/api/v1/stress/checks/:member_id",
            get(history_handler::<H, L, A>),
        )
        .route(
            "/api/v1/stress/checks/:member_id/summary",
            get(summary_handler::<H, L, A>),
        )
        .with_state(service)
}

pub(crate) async fn analyze_handler<H, L, A>(
    State(service): State<Arc<StressCheckService<H, L, A>>>,
    Json(submission): Json<CheckSubmission>,
) -> Result<Json<StressAnalysis>, AppError>
where
    H: StressHistoryRepository + 'static,
    L: RecommendationLog + 'static,
    A: CrewAlertPublisher + 'static,
{
    Ok(Json(service.analyze(submission)?))
}

pub(crate) async fn history_handler<H, L, A>(
    State(service): State<Arc<StressCheckService<H, L, A>>>,
    Path(member_id): Path<String>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<StressCheckRecord>>, AppError>
where
    H: StressHistoryRepository + 'static,
    L: RecommendationLog + 'static,
    A: CrewAlertPublisher + 'static,
{
    let records = service.history(&CrewMemberId(member_id), query.limit)?;
    Ok(Json(records))
}

pub(crate) async fn summary_handler<H, L, A>(
    State(service): State<Arc<StressCheckService<H, L, A>>>,
    Path(member_id): Path<String>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistorySummary>, AppError>
where
    H: StressHistoryRepository + 'static,
    L: RecommendationLog + 'static,
    A: CrewAlertPublisher + 'static,
{
    let summary = service.summary(&CrewMemberId(member_id), query.limit)?;
    Ok(Json(summary))
}
