use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{error, warn};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation {
        message: String,
        fields: Vec<String>,
    },
    #[error("Server configuration error: {0}")]
    Configuration(String),
    #[error("{0}")]
    Upstream(String),
    #[error("Contract call failed: {0}")]
    Contract(String),
    #[error("Cache error: {0}")]
    Cache(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation {
            message: message.into(),
            fields: Vec::new(),
        }
    }

    pub fn missing_fields(fields: Vec<String>) -> Self {
        AppError::Validation {
            message: format!("Missing required fields: {}", fields.join(", ")),
            fields,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) | AppError::Upstream(_) | AppError::Cache(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Contract(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Validation { .. } => warn!("Rejected request: {}", self),
            _ => error!("Request failed: {}", self),
        }
        let body = match &self {
            AppError::Validation { fields, .. } if !fields.is_empty() => json!({
                "success": false,
                "error": self.to_string(),
                "fields": fields,
            }),
            _ => json!({ "success": false, "error": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_lists_every_field() {
        let err = AppError::missing_fields(vec!["upper".to_string(), "lower".to_string()]);
        assert_eq!(err.to_string(), "Missing required fields: upper, lower");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn maps_categories_to_status_codes() {
        assert_eq!(
            AppError::Configuration("DASHSCOPE_API_KEY is not set".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Upstream("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(AppError::Contract("rpc".into()).status(), StatusCode::BAD_GATEWAY);
    }
}
