//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::{StopId, TimeError, parse_arrival_time};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stops", get(list_stops))
        .route("/stops/search", get(search_stops))
        .route("/stops/:id", get(get_stop))
        .route("/trips", get(trips_by_arrival))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// All stops, ordered by ID.
async fn list_stops(State(state): State<AppState>) -> Json<Vec<StopResult>> {
    let stops = state
        .registry
        .all()
        .into_iter()
        .map(StopResult::from_stop)
        .collect();

    Json(stops)
}

/// A single stop by ID.
async fn get_stop(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<StopResult>, AppError> {
    state
        .registry
        .get(StopId(id))
        .map(|stop| Json(StopResult::from_stop(stop)))
        .ok_or_else(|| AppError::NotFound {
            message: format!("No stop with ID {id}"),
        })
}

/// Search stops by name.
///
/// A missing or empty query returns an empty list.
async fn search_stops(
    State(state): State<AppState>,
    Query(req): Query<StopSearchRequest>,
) -> Json<Vec<StopResult>> {
    let stops = match req.q.as_deref() {
        Some(q) => state
            .registry
            .search(q)
            .into_iter()
            .map(StopResult::from_stop)
            .collect(),
        None => Vec::new(),
    };

    Json(stops)
}

/// Trips arriving at an exact time, ordered by trip ID.
async fn trips_by_arrival(
    State(state): State<AppState>,
    Query(req): Query<TripsRequest>,
) -> Result<Json<Vec<TripResult>>, AppError> {
    let time = parse_arrival_time(&req.arrival)?;

    let trips = state
        .registry
        .trips_with_arrival_time(time)
        .into_iter()
        .map(TripResult::from_trip)
        .collect();

    Ok(Json(trips))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<TimeError> for AppError {
    fn from(e: TimeError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Stop, Trip, TripId};
    use crate::registry::StopRegistry;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use chrono::NaiveTime;
    use serde_json::Value;
    use tower::ServiceExt;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn test_router() -> Router {
        let registry = StopRegistry::from_stops([
            Stop::new(StopId(1), "NB MAIN ST")
                .with_trips(vec![Trip::new(TripId(7), hm(9, 15)), Trip::new(TripId(5), hm(9, 20))]),
            Stop::new(StopId(2), "SB MAIN ST"),
            Stop::new(StopId(3), "ELM ST").with_trips(vec![Trip::new(TripId(3), hm(9, 15))]),
        ]);
        create_router(AppState::new(registry))
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = test_router()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    fn ids(json: &Value) -> Vec<u64> {
        let mut ids: Vec<u64> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["id"].as_u64().unwrap())
            .collect();
        ids.sort_unstable();
        ids
    }

    #[tokio::test]
    async fn health_ok() {
        let response = test_router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn list_all_stops() {
        let (status, json) = get_json("/stops").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&json), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn get_known_stop() {
        let (status, json) = get_json("/stops/1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["name"], "NB MAIN ST");
        assert_eq!(json["normalized_name"], "MAIN ST NB");
    }

    #[tokio::test]
    async fn get_unknown_stop_is_404() {
        let (status, json) = get_json("/stops/99").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "No stop with ID 99");
    }

    #[tokio::test]
    async fn get_non_numeric_stop_is_400() {
        let (status, _) = get_json("/stops/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn search_by_prefix() {
        let (status, json) = get_json("/stops/search?q=MAIN").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&json), vec![1, 2]);
    }

    #[tokio::test]
    async fn search_query_with_spaces() {
        let (_, json) = get_json("/stops/search?q=MAIN%20ST%20NB").await;
        assert_eq!(ids(&json), vec![1]);
    }

    #[tokio::test]
    async fn search_without_query_is_empty() {
        let (status, json) = get_json("/stops/search").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!([]));

        let (_, json) = get_json("/stops/search?q=").await;
        assert_eq!(json, serde_json::json!([]));
    }

    #[tokio::test]
    async fn trips_by_exact_arrival() {
        let (status, json) = get_json("/trips?arrival=09:15").await;
        assert_eq!(status, StatusCode::OK);

        let trip_ids: Vec<u64> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["id"].as_u64().unwrap())
            .collect();
        assert_eq!(trip_ids, vec![3, 7]);
        assert_eq!(json[0]["arrival_time"], "09:15:00");
    }

    #[tokio::test]
    async fn trips_with_bad_time_is_400() {
        let (status, json) = get_json("/trips?arrival=9am").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json["error"],
            "invalid arrival time: expected HH:MM or HH:MM:SS format"
        );
    }

    #[tokio::test]
    async fn trips_without_time_is_400() {
        let (status, _) = get_json("/trips").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
