//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::{Distance, Line, PathError, Section, StationId};
use crate::network::{LineCatalog, NetworkError};
use crate::path::PathService;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations).post(create_station))
        .route("/lines", get(list_lines).post(create_line))
        .route("/paths", get(find_path))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List all registered stations.
async fn list_stations(State(state): State<AppState>) -> Json<StationListResponse> {
    let stations = state
        .store
        .stations()
        .iter()
        .map(StationSummary::from_station)
        .collect();

    Json(StationListResponse { stations })
}

/// Register a new station.
async fn create_station(
    State(state): State<AppState>,
    Json(req): Json<CreateStationRequest>,
) -> Result<Response, AppError> {
    let station = state.store.add_station(&req.name)?;

    Ok((
        StatusCode::CREATED,
        Json(StationSummary::from_station(&station)),
    )
        .into_response())
}

/// List all registered lines.
async fn list_lines(State(state): State<AppState>) -> Json<LineListResponse> {
    let lines = state
        .store
        .lines()
        .iter()
        .map(LineSummary::from_line)
        .collect();

    Json(LineListResponse { lines })
}

/// Register a new line with its sections.
async fn create_line(
    State(state): State<AppState>,
    Json(req): Json<CreateLineRequest>,
) -> Result<Response, AppError> {
    let mut sections = Vec::with_capacity(req.sections.len());
    for body in &req.sections {
        sections.push(parse_section(body)?);
    }

    let line = Line::new(req.name, req.color, sections);
    let summary = LineSummary::from_line(&line);
    state.store.add_line(line)?;

    Ok((StatusCode::CREATED, Json(summary)).into_response())
}

/// Validate a section body into a domain section.
fn parse_section(body: &SectionBody) -> Result<Section, AppError> {
    let up = StationId::new(body.up).map_err(AppError::bad_request)?;
    let down = StationId::new(body.down).map_err(AppError::bad_request)?;
    let distance = Distance::new(body.distance).map_err(AppError::bad_request)?;

    Section::new(up, down, distance).map_err(AppError::bad_request)
}

/// Find the shortest path between two stations.
async fn find_path(
    State(state): State<AppState>,
    Query(query): Query<PathQuery>,
) -> Result<Json<PathResponse>, AppError> {
    let source = StationId::new(query.source).map_err(AppError::bad_request)?;
    let target = StationId::new(query.target).map_err(AppError::bad_request)?;

    let service = PathService::new(state.store.as_ref(), state.store.as_ref());
    let path = service.find_path(source, target)?;

    Ok(Json(PathResponse::from_path(&path)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl AppError {
    fn bad_request(err: impl std::fmt::Display) -> Self {
        AppError::BadRequest {
            message: err.to_string(),
        }
    }
}

impl From<PathError> for AppError {
    fn from(e: PathError) -> Self {
        match &e {
            PathError::DuplicateStation(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            PathError::StationNotFound(_) | PathError::NoPathFound { .. } => AppError::NotFound {
                message: e.to_string(),
            },
        }
    }
}

impl From<NetworkError> for AppError {
    fn from(e: NetworkError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "request failed");

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
