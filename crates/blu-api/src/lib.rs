#![allow(non_snake_case)]

pub mod error;
pub mod middleware;
pub mod routes;

use axum::Router;

use crate::middleware::auth::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes(state.clone()))
        .with_state(state)
}
