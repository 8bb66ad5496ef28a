use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use holdup_core::CalcError;

use crate::app::dto::ErrorBody;

pub const SERVER_ERROR: &str = "Server error";
pub const INVALID_BODY: &str = "Invalid request body";

pub fn calc_error_to_response(err: CalcError) -> axum::response::Response {
    match err {
        CalcError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, msg, None),
        CalcError::Fault(details) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR, Some(details))
        }
    }
}

/// Bodies that are not JSON objects of the expected shape never reach the calculator.
pub fn rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    json_error(
        StatusCode::BAD_REQUEST,
        INVALID_BODY,
        Some(rejection.body_text()),
    )
}

pub fn json_error(
    status: StatusCode,
    error: impl Into<String>,
    details: Option<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(ErrorBody {
            error: error.into(),
            details,
        }),
    )
        .into_response()
}
