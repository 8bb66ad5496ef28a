use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use holdup_core::{CalcError, CalculationRequest};

use crate::app::errors;

/// `POST /api/calculate`: derive vessel volume and inventories from a sizing request.
pub async fn calculate(payload: Result<Json<CalculationRequest>, JsonRejection>) -> Response {
    let Json(request) = match payload {
        Ok(body) => body,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "rejected calculation body");
            return errors::rejection_to_response(rejection);
        }
    };

    match holdup_core::compute(&request) {
        Ok(result) => {
            tracing::debug!(
                volume = result.volume,
                liquid = ?result.liquid_inventory,
                vapor = ?result.vapor_inventory,
                "calculation complete"
            );
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(err) => {
            match &err {
                CalcError::Validation(msg) => tracing::warn!(%msg, "calculation input rejected"),
                CalcError::Fault(msg) => tracing::error!(%msg, "calculation failed"),
            }
            errors::calc_error_to_response(err)
        }
    }
}
