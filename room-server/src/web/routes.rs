//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use crate::domain::SlotRange;
use crate::planner::SolveConfig;
use crate::sweep::{PlanQuery, sweep};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/areas", get(list_areas))
        .route("/plan", post(plan))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List the loaded areas.
async fn list_areas(State(state): State<AppState>) -> Json<AreasResponse> {
    let areas = state
        .catalog
        .areas()
        .into_iter()
        .map(AreaResult::from_info)
        .collect();
    Json(AreasResponse { areas })
}

/// Plan room changes across the requested areas.
async fn plan(
    State(state): State<AppState>,
    Json(req): Json<PlanRequest>,
) -> Result<Json<PlanResponse>, AppError> {
    let range =
        SlotRange::new(req.start_slot, req.end_slot).map_err(|e| AppError::BadRequest {
            message: format!("invalid slot range: {e}"),
        })?;

    if req.area_ids.is_empty() {
        return Err(AppError::BadRequest {
            message: "area_ids must not be empty".to_string(),
        });
    }

    let query = PlanQuery {
        range,
        required_facilities: req.required_facilities,
        forbidden_facilities: req.forbidden_facilities,
        require_area_names: req.require_area_names,
        forbid_area_names: req.forbid_area_names,
    };
    let config = SolveConfig::new(req.allow_three_changes, req.top_k_zero_change);

    let reports = sweep(Arc::clone(&state.catalog), req.area_ids, query, config).await;

    Ok(Json(PlanResponse {
        areas: reports.into_iter().map(AreaSummary::from_report).collect(),
    }))
}

/// Application-level errors for the web layer.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        tracing::warn!(%status, "request failed: {message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
