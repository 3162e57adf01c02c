use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/visits", post(handlers::record_visit_form))
        .route("/api/visits", post(handlers::record_visit))
        .route("/api/visits/today", get(handlers::get_today))
        .route("/api/visits/weekly", get(handlers::get_weekly))
        .route("/api/readings", post(handlers::record_reading))
        .route("/api/readings/recent", get(handlers::get_readings))
        .with_state(state)
}
