use crate::handlers;
use crate::state::AppState;
use axum::{routing::{delete, get}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/login", get(handlers::login))
        .route("/api/health", get(handlers::health))
        .route("/api/journal", get(handlers::list_entries).post(handlers::submit_entry))
        .route("/api/journal/:id", delete(handlers::delete_entry))
        .route("/api/monthly-summary", get(handlers::monthly_summary))
        .with_state(state)
}
