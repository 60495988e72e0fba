use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use bson::oid::ObjectId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// Fixed cap for the landing-page listing endpoint.
const LATEST_LIMIT: i64 = 6;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_vehicles))
        .route("/latest", get(latest_vehicles))
        .route("/:id", get(get_vehicle))
}

pub async fn latest_vehicles(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.vehicles.latest(LATEST_LIMIT).await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_vehicle(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match ObjectId::parse_str(&id) {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid vehicle id"),
    };

    match services.vehicles.find_by_id(id).await {
        // An absent id serializes as `null`, the store's own not-found shape.
        Ok(found) => (StatusCode::OK, Json(found)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn list_vehicles(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ListVehiclesQuery>,
) -> axum::response::Response {
    let (filter, sort) = query.into_parts();

    match services.vehicles.search(&filter, sort).await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
