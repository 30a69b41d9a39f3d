// --- File: crates/contactbook_common/src/http.rs ---
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::{ContactbookError, HttpStatusCode};

/// Extension trait for ContactbookError to convert it to an Axum HTTP response.
pub trait IntoHttpResponse {
    /// Converts the error into an Axum HTTP response.
    fn into_http_response(self) -> Response;
}

impl IntoHttpResponse for ContactbookError {
    fn into_http_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let error_message = self.to_string();

        let body = match self {
            ContactbookError::InvalidFields(fields) => Json(json!({
                "error": {
                    "message": error_message,
                    "code": status_code.as_u16(),
                    "fields": fields,
                }
            })),
            _ => Json(json!({
                "error": {
                    "message": error_message,
                    "code": status_code.as_u16(),
                }
            })),
        };

        (status_code, body).into_response()
    }
}

/// Implement IntoResponse for ContactbookError to make it easier to use in Axum handlers.
impl IntoResponse for ContactbookError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldMessages;

    #[test]
    fn test_invalid_fields_status() {
        let mut fields = FieldMessages::new();
        fields.insert("name".to_string(), vec!["too short".to_string()]);
        let response = ContactbookError::InvalidFields(fields).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_parse_error_body_has_no_fields() {
        let response = ContactbookError::ParseError("EOF while parsing".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], 400);
        assert_eq!(body["error"]["message"], "Failed to parse data: EOF while parsing");
        assert!(body["error"].get("fields").is_none());
    }
}
