use super::{
    extract::ValidatedJson,
    types::{ErrorResponse, StatusResponse},
};
use crate::calculator::{self, CalculationError, CalculationRequest, CalculationResponse};
use axum::{http::StatusCode, response::Json};
use tracing::warn;

pub const STATUS_MESSAGE: &str = "Calculator API is running";

pub async fn root() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: STATUS_MESSAGE.to_string(),
    })
}

pub async fn calculate(
    ValidatedJson(request): ValidatedJson<CalculationRequest>,
) -> Result<Json<CalculationResponse>, (StatusCode, Json<ErrorResponse>)> {
    match calculator::calculate(request) {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            warn!("Calculation rejected: {}", e);
            Err((
                status_for(&e),
                Json(ErrorResponse {
                    detail: e.to_string(),
                }),
            ))
        }
    }
}

fn status_for(error: &CalculationError) -> StatusCode {
    match error {
        CalculationError::DivisionByZero | CalculationError::UnknownOperation => {
            StatusCode::BAD_REQUEST
        }
    }
}
