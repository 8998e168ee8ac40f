//! Error handling for the K2N backend
//!
//! Provides consistent error responses in English and French

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::reporting::ReportError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Report errors
    #[error(transparent)]
    InvalidReport(#[from] ReportError),

    // Validation errors
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_fr: String,
    },

    #[error("Validation error: {0}")]
    ValidationErrors(#[from] validator::ValidationErrors),

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Database errors
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidReport(ReportError::invalid(rejection.body_text()))
    }
}

impl AppError {
    /// Validation failure on a single field
    pub fn validation(field: &str, message: &str, message_fr: &str) -> Self {
        AppError::Validation {
            field: field.to_string(),
            message: message.to_string(),
            message_fr: message_fr.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidReport(ReportError::Overflow) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InvalidReport(_)
            | AppError::Validation { .. }
            | AppError::ValidationErrors(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_fr: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_detail = match &self {
            AppError::InvalidReport(ReportError::InvalidRequest(msg)) => ErrorDetail {
                code: "INVALID_REPORT_REQUEST".to_string(),
                message_en: msg.clone(),
                message_fr: format!("Paramètres invalides pour le type de rapport : {}", msg),
                field: None,
            },
            AppError::InvalidReport(ReportError::Overflow) => ErrorDetail {
                code: "AMOUNT_OVERFLOW".to_string(),
                message_en: "Report totals exceed the supported amount range".to_string(),
                message_fr: "Les totaux du rapport dépassent la plage de montants prise en charge"
                    .to_string(),
                field: None,
            },
            AppError::Validation {
                field,
                message,
                message_fr,
            } => ErrorDetail {
                code: "VALIDATION_ERROR".to_string(),
                message_en: message.clone(),
                message_fr: message_fr.clone(),
                field: Some(field.clone()),
            },
            AppError::ValidationErrors(errors) => {
                let field = errors.field_errors().keys().next().map(|f| f.to_string());
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message_en: errors.to_string(),
                    message_fr: format!("Données invalides : {}", errors),
                    field,
                }
            }
            AppError::NotFound(resource) => ErrorDetail {
                code: "NOT_FOUND".to_string(),
                message_en: format!("{} not found", resource),
                message_fr: format!("{} introuvable", resource),
                field: None,
            },
            AppError::DatabaseError(_) => ErrorDetail {
                code: "DATABASE_ERROR".to_string(),
                message_en: "A database error occurred".to_string(),
                message_fr: "Une erreur de base de données est survenue".to_string(),
                field: None,
            },
            AppError::Internal(_) => ErrorDetail {
                code: "INTERNAL_ERROR".to_string(),
                message_en: "An internal server error occurred".to_string(),
                message_fr: "Erreur interne du serveur".to_string(),
                field: None,
            },
        };

        // server faults at error level, client rejections at debug
        if status.is_server_error() {
            tracing::error!("Error: {:?}", self);
        } else {
            tracing::debug!("Rejected request: {}", self);
        }

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::from(ReportError::invalid("bad")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::validation("quantite", "Quantity must be positive", "La quantité doit être positive").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::NotFound("Sale".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Internal("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_internal_detail_is_not_rendered() {
        let response = AppError::Internal("sale 42: unknown payment mode 9".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
        assert_eq!(body["error"]["message_en"], "An internal server error occurred");
        assert!(!bytes.windows(7).any(|w| w == b"payment"));
    }

    #[test]
    fn test_report_overflow_is_unprocessable() {
        let response = AppError::from(ReportError::Overflow).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_invalid_report_renders_bad_request() {
        let response = AppError::from(ReportError::invalid("missing parameter 'date'")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
