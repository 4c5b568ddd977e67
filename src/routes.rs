use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::models::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::users::root_get))
        .route("/healthz", get(handlers::users::healthz))
        .route("/users", get(handlers::users::users_list))
        .route("/users.json", get(handlers::users::users_json))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
