use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path, Query, State},
    http::{Request, StatusCode},
    response::IntoResponse,
};
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::config::HistoryConfig;
use crate::wellness::checks::router::{history_handler, HistoryQuery};
use crate::wellness::checks::{stress_check_router, StressCheckService};

fn post_check(payload: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/stress/checks")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

#[tokio::test]
async fn analyze_endpoint_returns_scored_check() {
    let (service, _, _, alerts) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(post_check(json!({
            "member_id": "crew-ortiz",
            "display_name": "Commander Ortiz",
            "signals": {
                "sleep_hours": 3.0,
                "mood_level": 1,
                "heart_rate_bpm": 110,
                "activity_level": "none"
            }
        })))
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["member_id"], "crew-ortiz");
    assert_eq!(body["result"]["score"], 100);
    assert_eq!(body["result"]["level"], "high");
    assert_eq!(
        body["recommendations"].as_array().map(Vec::len),
        Some(4)
    );
    assert_eq!(body["recommendations"][0]["kind"], "breathing_exercise");
    assert_eq!(body["alert_raised"], true);
    assert!(body["check_id"]
        .as_str()
        .is_some_and(|id| id.starts_with("chk-")));
    assert_eq!(alerts.events().len(), 1);
}

#[tokio::test]
async fn analyze_endpoint_rejects_unknown_activity() {
    let (service, history, _, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(post_check(json!({
            "member_id": "crew-ortiz",
            "signals": {
                "sleep_hours": 7.5,
                "mood_level": 6,
                "heart_rate_bpm": 72,
                "activity_level": "marathon"
            }
        })))
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(history.records.lock().expect("history").is_empty());
}

#[tokio::test]
async fn history_endpoint_applies_limit_newest_first() {
    let (service, history, _, _) = build_service();
    history
        .records
        .lock()
        .expect("history")
        .extend([
            record(1, rested_signals()),
            record(2, strained_signals()),
            record(3, overloaded_signals()),
        ]);
    let router = router_with_service(service);

    let response = router
        .oneshot(get("/api/v1/stress/checks/crew-ortiz?limit=2"))
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let checks = body.as_array().expect("array of checks");
    assert_eq!(checks.len(), 2);
    assert_eq!(checks[0]["check_id"], "chk-test-3");
    assert_eq!(checks[1]["check_id"], "chk-test-2");
}

#[tokio::test]
async fn history_endpoint_returns_empty_list_for_unknown_member() {
    let (service, _, _, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(get("/api/v1/stress/checks/crew-nobody"))
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json_body(response).await, json!([]));
}

#[tokio::test]
async fn summary_endpoint_rolls_up_history() {
    let (service, history, _, _) = build_service();
    history
        .records
        .lock()
        .expect("history")
        .extend([record(1, strained_signals()), record(2, overloaded_signals())]);
    let router = router_with_service(service);

    let response = router
        .oneshot(get("/api/v1/stress/checks/crew-ortiz/summary"))
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["checks"], 2);
    assert_eq!(body["average_score"], 65);
    assert_eq!(body["latest_level"], "high");
    assert_eq!(body["level_counts"]["medium"], 1);
}

#[tokio::test]
async fn history_handler_maps_store_failure_to_server_error() {
    let service = Arc::new(StressCheckService::new(
        Arc::new(OfflineHistory),
        Arc::new(MemoryLog::default()),
        Arc::new(MemoryAlerts::default()),
        HistoryConfig::default(),
    ));

    let response = history_handler(
        State(service),
        Path("crew-ortiz".to_string()),
        Query(HistoryQuery::default()),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = read_json_body(response).await;
    assert_eq!(
        body["error"],
        "stress check error: history store unavailable: document store offline"
    );
}

#[tokio::test]
async fn duplicate_check_is_reported_as_conflict() {
    let service = StressCheckService::new(
        Arc::new(ConflictingHistory),
        Arc::new(MemoryLog::default()),
        Arc::new(MemoryAlerts::default()),
        HistoryConfig::default(),
    );
    let router = stress_check_router(Arc::new(service));

    let response = router
        .oneshot(post_check(json!({
            "member_id": "crew-ortiz",
            "signals": {
                "sleep_hours": 7.5,
                "mood_level": 6,
                "heart_rate_bpm": 72,
                "activity_level": "light"
            }
        })))
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = read_json_body(response).await;
    assert_eq!(body["error"], "stress check error: check already recorded");
}
