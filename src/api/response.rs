use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::error;
use serde::Serialize;
use serde_json::json;

use crate::shared::errors::AppError;

/// Success envelope: `{"status": "success", "data": <payload>}`.
pub fn success_response<T: Serialize>(status: StatusCode, data: T) -> Response {
    (status, Json(json!({ "status": "success", "data": data }))).into_response()
}

/// 204 No Content for delete operations.
pub fn empty_response() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Unexpected failures are logged with context and surfaced without
        // internal details.
        let message = if status.is_server_error() {
            error!("Unhandled failure: {}", self);
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        let body = Json(json!({
            "status": "failure",
            "error": { "code": status.as_u16(), "message": message }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn success_envelope_wraps_the_payload() {
        let response = success_response(StatusCode::CREATED, json!({"id": 1}));
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["data"]["id"], 1);
    }

    #[tokio::test]
    async fn domain_errors_render_the_failure_envelope() {
        let response = AppError::MovieNotFound { movie_id: 42 }.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["status"], "failure");
        assert_eq!(body["error"]["code"], 404);
        assert_eq!(body["error"]["message"], "Movie not found");
    }

    #[tokio::test]
    async fn validation_errors_carry_the_field_path() {
        let response =
            AppError::Validation("query.page_size: must be between 1 and 100".into())
                .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], 422);
        assert_eq!(
            body["error"]["message"],
            "query.page_size: must be between 1 and 100"
        );
    }

    #[tokio::test]
    async fn unexpected_failures_do_not_leak_details() {
        let response = AppError::Database("connection refused on 10.0.0.3".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"]["message"], "Internal server error");
    }

    #[tokio::test]
    async fn delete_success_is_an_empty_204() {
        let response = empty_response();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(bytes.is_empty());
    }
}
