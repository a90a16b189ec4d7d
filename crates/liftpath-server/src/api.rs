//! HTTP routes over a shared [`Building`].
//!
//! | Route | Response |
//! |-------|----------|
//! | `GET /floors` | `[1, 2, ...]` |
//! | `GET /rooms/{floor}` | `["R101", ...]` |
//! | `GET /floorgrid/{floor}` | rows of cell labels |
//! | `GET /floorplan/{floor}?destination=R101` | ASCII plan, route overlaid |
//! | `POST /path` | `{"path": [[r, c], ...], "labels": [...], "steps": n}` |
//! | `GET /health` | `ok` |
//!
//! Failures answer `{"error": "..."}`: 400 for a bad floor or room, 404 when
//! no elevator reaches the room. Malformed request bodies and path segments
//! answer the same JSON shape.

use std::fmt;
use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use liftpath_logic::cell::normalize_room_label;
use liftpath_logic::render::render_floor;
use liftpath_logic::{Building, Route, RouteError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};

type SharedBuilding = State<Arc<Building>>;

/// Build the router. Any origin may call it.
pub fn build_router(building: Arc<Building>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/floors", get(floors))
        .route("/rooms/{floor}", get(rooms))
        .route("/floorgrid/{floor}", get(floor_grid))
        .route("/floorplan/{floor}", get(floor_plan))
        .route("/path", post(path))
        .layer(cors)
        .with_state(building)
}

// ============ Errors ============

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// A rejected request: status plus the message sent as `{"error": ...}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

const INVALID_FLOOR: &str = "Invalid floor";

impl ApiError {
    /// A floor value that is not a `u32` at all, so never a configured floor.
    fn invalid_floor(raw: impl fmt::Display) -> Self {
        log::warn!("Rejected request: floor {} is not a floor number", raw);
        Self {
            status: StatusCode::BAD_REQUEST,
            message: INVALID_FLOOR.to_string(),
        }
    }
}

impl From<RouteError> for ApiError {
    fn from(err: RouteError) -> Self {
        let status = match err {
            RouteError::InvalidFloor(_) | RouteError::InvalidDestination { .. } => {
                StatusCode::BAD_REQUEST
            }
            RouteError::NoPathFound { .. } => StatusCode::NOT_FOUND,
        };
        log::warn!("Rejected request: {:?}", err);
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        log::warn!("Rejected request body: {}", rejection.body_text());
        Self {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// The only path parameter is the floor, so any path rejection is a bad floor.
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::invalid_floor(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

/// Floor numbers arrive as signed path integers; negative or oversized
/// values can never be a configured floor.
fn floor_index(raw: i64) -> Result<u32, ApiError> {
    u32::try_from(raw).map_err(|_| ApiError::invalid_floor(raw))
}

/// The `floor` field of a JSON body: only a non-negative integer that fits
/// a `u32` names a floor. Strings, fractions, and missing values do not.
fn body_floor(raw: Option<&Value>) -> Result<u32, ApiError> {
    let Some(raw) = raw else {
        return Err(ApiError::invalid_floor("(missing)"));
    };
    raw.as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| ApiError::invalid_floor(raw))
}

// ============ Handlers ============

async fn health() -> &'static str {
    "ok"
}

async fn floors(State(building): SharedBuilding) -> Json<Vec<u32>> {
    Json(building.list_floors())
}

async fn rooms(
    State(building): SharedBuilding,
    floor: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<String>>, ApiError> {
    let Path(floor) = floor?;
    let rooms = building.list_rooms(floor_index(floor)?)?;
    Ok(Json(rooms))
}

async fn floor_grid(
    State(building): SharedBuilding,
    floor: Result<Path<i64>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(floor) = floor?;
    let grid = building.floor(floor_index(floor)?)?;
    Ok(Json(grid).into_response())
}

#[derive(Debug, Deserialize)]
struct PlanQuery {
    destination: Option<String>,
}

async fn floor_plan(
    State(building): SharedBuilding,
    floor: Result<Path<i64>, PathRejection>,
    Query(query): Query<PlanQuery>,
) -> Result<String, ApiError> {
    let Path(floor) = floor?;
    let index = floor_index(floor)?;
    let grid = building.floor(index)?;
    let route = match query.destination {
        Some(dest) => Some(resolve(&building, index, Some(dest.as_str()))?),
        None => None,
    };
    Ok(render_floor(grid, route.as_ref()))
}

/// Body of `POST /path`. Fields are taken as raw JSON so a missing or
/// mistyped field is reported as the matching invalid-floor /
/// invalid-destination error rather than a decode failure.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PathRequest {
    pub floor: Option<Value>,
    pub destination: Option<Value>,
}

async fn path(
    State(building): SharedBuilding,
    request: Result<Json<PathRequest>, JsonRejection>,
) -> Result<Json<Route>, ApiError> {
    let Json(request) = request?;
    let floor = body_floor(request.floor.as_ref())?;
    let destination = request.destination.as_ref().and_then(Value::as_str);
    let route = resolve(&building, floor, destination)?;
    Ok(Json(route))
}

/// Resolve a route for user-typed room input (`"r105"`, `"5"`, `"R105"`).
/// `None` is a destination that was missing or not a string.
fn resolve(building: &Building, floor: u32, input: Option<&str>) -> Result<Route, RouteError> {
    // Validate the floor before interpreting the room against it.
    building.floor(floor)?;
    let label = input
        .and_then(|input| normalize_room_label(floor, input))
        .ok_or_else(|| RouteError::InvalidDestination {
            floor,
            label: input.unwrap_or_default().to_string(),
        })?;
    building.resolve_path(floor, &label)
}
