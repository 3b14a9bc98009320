use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{Local, NaiveDate};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::engines::pricing::{PricedRoom, PricingEngine, RoomDraft};
use crate::engines::scoring::{Application, CategoryScore, ConcernFlag, ScoringEngine};

/// Process-level state for the operational endpoints.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Shared engine instances handed to the API endpoints. Both engines are
/// stateless, so a single instance serves every request.
#[derive(Clone)]
pub(crate) struct EngineContext {
    pub(crate) pricing: Arc<PricingEngine>,
    pub(crate) scoring: Arc<ScoringEngine>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AllocationRequest {
    pub(crate) rooms: Vec<RoomDraft>,
    pub(crate) total_price: f64,
}

#[derive(Debug, Serialize)]
pub(crate) struct AllocationResponse {
    pub(crate) total_points: u32,
    pub(crate) price_per_point: f64,
    pub(crate) service_fee_rate: f64,
    pub(crate) rooms: Vec<PricedRoom>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoreResponse {
    pub(crate) raw_score: u8,
    pub(crate) label: &'static str,
    pub(crate) scored_on: NaiveDate,
    pub(crate) components: Vec<CategoryScore>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) concerns: Vec<ConcernView>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ConcernView {
    pub(crate) flag: ConcernFlag,
    pub(crate) summary: &'static str,
}

pub(crate) fn app_router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/pricing/allocate", post(allocate_endpoint))
        .route("/api/v1/applications/score", post(score_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn allocate_endpoint(
    Extension(engines): Extension<EngineContext>,
    Json(payload): Json<AllocationRequest>,
) -> Json<AllocationResponse> {
    let allocation = engines.pricing.allocate(&payload.rooms, payload.total_price);

    Json(AllocationResponse {
        total_points: allocation.total_points,
        price_per_point: allocation.price_per_point,
        service_fee_rate: engines.pricing.service_fee_rate(),
        rooms: allocation.rooms,
    })
}

pub(crate) async fn score_endpoint(
    Extension(engines): Extension<EngineContext>,
    Json(application): Json<Application>,
) -> Json<ScoreResponse> {
    let outcome = engines.scoring.score(&application);

    Json(ScoreResponse {
        raw_score: outcome.score.raw_score,
        label: outcome.score.label.label(),
        scored_on: Local::now().date_naive(),
        components: outcome.components,
        concerns: outcome
            .concerns
            .into_iter()
            .map(|flag| ConcernView {
                flag,
                summary: flag.summary(),
            })
            .collect(),
    })
}
