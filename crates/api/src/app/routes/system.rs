use axum::{Json, http::StatusCode};

use crate::app::dto::Greeting;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn hello() -> Json<Greeting> {
    Json(Greeting::default())
}
