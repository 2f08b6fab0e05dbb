use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::handlers::contact_dtos::{ContactFailed, ContactRejected, FieldViolation, MSG_SERVER_ERROR, MSG_VALIDATION};
use crate::utils::mailer::DeliveryError;

#[derive(Debug, Error)]
pub enum AppError {
    /// User input problem. Answered with 400 and the violation list, never logged as a fault.
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldViolation>),
    #[error("delivery failed: {0}")]
    Delivery(#[from] DeliveryError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ContactRejected {
                    success: false,
                    message: MSG_VALIDATION.to_string(),
                    errors,
                }),
            )
                .into_response(),
            AppError::Delivery(e) => {
                tracing::error!("Error processing contact form: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ContactFailed {
                        success: false,
                        message: MSG_SERVER_ERROR.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
