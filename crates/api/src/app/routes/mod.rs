use axum::Router;

pub mod bookings;
pub mod system;
pub mod vehicles;

/// Router for everything under `/api`.
pub fn router() -> Router {
    Router::new()
        .nest("/vehicles", vehicles::router())
        .nest("/bookings", bookings::router())
}
