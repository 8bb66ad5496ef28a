use axum::{
    Router,
    routing::{get, post},
};

pub mod calculate;
pub mod system;

/// Router for the `/api` surface.
pub fn router() -> Router {
    Router::new()
        .route("/hello", get(system::hello))
        .route("/calculate", post(calculate::calculate))
}
