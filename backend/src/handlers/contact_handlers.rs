use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::{Map, Value};
use tracing::info;
use uuid::Uuid;

use crate::error::AppError;
use crate::handlers::contact_dtos::{
    ContactAccepted, ContactRequest, FieldViolation, ViolationCode, MSG_RECEIVED,
};
use crate::AppState;

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<ContactAccepted>, AppError> {
    let Json(body) = payload.map_err(|rejection| {
        info!("Rejected contact body: {}", rejection.body_text());
        AppError::Validation(vec![FieldViolation::new(
            "body",
            ViolationCode::InvalidType,
            "Corpo da requisição inválido",
        )])
    })?;

    let contact = ContactRequest::from(body).validate().map_err(|errors| {
        info!("Contact form validation failed on {} field(s)", errors.len());
        AppError::Validation(errors)
    })?;

    let reference = Uuid::new_v4().to_string();
    let outcome = state.delivery.deliver(&reference, &contact).await?;
    info!(reference = %reference, ?outcome, "Contact form submission from {}", contact.email);

    Ok(Json(ContactAccepted {
        success: true,
        message: MSG_RECEIVED.to_string(),
        reference,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::mailer::{ContactDelivery, DeliveryError};
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        response::IntoResponse,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> axum::Router {
        crate::app(Arc::new(AppState {
            delivery: ContactDelivery::LogOnly,
        }))
    }

    async fn post_contact(body: String) -> (StatusCode, Value) {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/contact")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn empty_name_is_rejected_with_name_violation() {
        let (status, body) = post_contact(
            json!({"name": "", "email": "a@b.com", "subject": "x", "message": "y"}).to_string(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Erro de validação");
        assert_eq!(body["errors"][0]["path"][0], "name");
        assert_eq!(body["errors"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn bad_email_is_rejected_with_email_violation() {
        let (status, body) = post_contact(
            json!({"name": "A", "email": "not-an-email", "subject": "x", "message": "y"}).to_string(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["field"], "email");
        assert_eq!(body["errors"][0]["code"], "invalid_string");
    }

    #[tokio::test]
    async fn valid_submission_is_acknowledged() {
        let (status, body) = post_contact(
            json!({"name": "A", "email": "a@b.com", "subject": "x", "message": "y"}).to_string(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], MSG_RECEIVED);
        assert!(Uuid::parse_str(body["reference"].as_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn duplicate_submissions_get_distinct_references() {
        let payload = json!({"name": "A", "email": "a@b.com", "subject": "x", "message": "y"}).to_string();
        let (_, first) = post_contact(payload.clone()).await;
        let (_, second) = post_contact(payload).await;
        assert_eq!(first["success"], true);
        assert_eq!(second["success"], true);
        assert_ne!(first["reference"], second["reference"]);
    }

    #[tokio::test]
    async fn missing_fields_are_reported_not_rejected_by_extractor() {
        let (status, body) = post_contact(json!({"name": "A"}).to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let fields: Vec<&str> = body["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, vec!["email", "subject", "message"]);
    }

    #[tokio::test]
    async fn wrongly_typed_field_is_reported_on_that_field() {
        let (status, body) = post_contact(
            json!({"name": 5, "email": "a@b.com", "subject": "x", "message": "y"}).to_string(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"].as_array().unwrap().len(), 1);
        assert_eq!(body["errors"][0]["field"], "name");
        assert_eq!(body["errors"][0]["path"][0], "name");
        assert_eq!(body["errors"][0]["code"], "invalid_type");
    }

    #[tokio::test]
    async fn non_object_body_is_a_body_violation() {
        let (status, body) = post_contact(json!(["A", "a@b.com", "x", "y"]).to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["field"], "body");
    }

    #[tokio::test]
    async fn malformed_json_is_a_body_violation() {
        let (status, body) = post_contact("{not json".to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["field"], "body");
    }

    #[tokio::test]
    async fn delivery_failure_maps_to_generic_500() {
        let address_err = "no-at-sign".parse::<lettre::Address>().unwrap_err();
        let response = AppError::Delivery(DeliveryError::Address(address_err)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert!(body.get("errors").is_none());
    }

    #[tokio::test]
    async fn health_check_responds_ok() {
        let response = app()
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
