use crate::application::rental::RentalApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub struct ApiError(RentalApplicationError);

impl From<RentalApplicationError> for ApiError {
    fn from(err: RentalApplicationError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.0.to_string();

        let (status, error_type, message) = match self.0 {
            // 404 Not Found
            RentalApplicationError::RentalNotFound => {
                (StatusCode::NOT_FOUND, "RENTAL_NOT_FOUND", message)
            }

            // 422 Unprocessable Entity - 入力不備・ビジネスルール違反
            RentalApplicationError::MissingMovie => {
                (StatusCode::UNPROCESSABLE_ENTITY, "MISSING_MOVIE", message)
            }
            RentalApplicationError::MissingCustomer => {
                (StatusCode::UNPROCESSABLE_ENTITY, "MISSING_CUSTOMER", message)
            }
            RentalApplicationError::OutOfStock { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "OUT_OF_STOCK", message)
            }
            RentalApplicationError::PriceOutOfRange => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "PRICE_OUT_OF_RANGE",
                message,
            ),
            RentalApplicationError::CustomerBlacklisted => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "CUSTOMER_BLACKLISTED",
                message,
            ),
            RentalApplicationError::InvalidRentalState(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_RENTAL_STATE",
                message,
            ),

            // 503 Service Unavailable - 外部サービス障害（再試行可能）
            RentalApplicationError::CreditCheckUnavailable(ref e) => {
                tracing::error!("Credit check error: {}", e);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "CREDIT_CHECK_UNAVAILABLE",
                    message,
                )
            }

            // 500 Internal Server Error - 詳細はログのみ
            RentalApplicationError::Store(ref e) => {
                tracing::error!("Rental store error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RENTAL_STORE_ERROR",
                    "Failed to access rental store".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
