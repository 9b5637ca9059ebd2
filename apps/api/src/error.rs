use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use larder_core::AppError;
use serde::Serialize;
use ts_rs::TS;

/// API error payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/error-response.ts"
)]
pub struct ErrorResponse {
    message: String,
}

/// HTTP API error wrapper around core application errors.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            AppError::Validation(_) | AppError::NumberFormat(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AppError> for ApiError {
    fn from(value: AppError) -> Self {
        Self(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self.0, "request failed");
        }

        let payload = Json(ErrorResponse {
            message: self.0.message().to_owned(),
        });

        (status, payload).into_response()
    }
}

/// Standard API result type.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use larder_core::AppError;

    use super::ApiError;

    #[test]
    fn maps_error_categories_to_statuses() {
        let cases = [
            (
                AppError::Validation("-Name is null.".to_owned()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::NumberFormat("'x' is not a valid number".to_owned()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::NotFound("Product not found.".to_owned()),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::Conflict("Product with matching name already exists.".to_owned()),
                StatusCode::CONFLICT,
            ),
            (
                AppError::Internal("pool closed".to_owned()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(ApiError(error).into_response().status(), expected);
        }
    }
}
