use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::validation::{FormErrors, ValidationErrors};
use thiserror::Error;

/// Ошибки уровня API с единым форматом тела `{message, details}`
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed")]
    Validation(ValidationErrors),

    /// Ссылочная целостность: запись используется другими записями
    #[error("{0}")]
    Conflict(String),

    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Ошибка валидации по одному полю
    pub fn field(field: &str, message: &str) -> Self {
        let mut errors = ValidationErrors::new();
        errors.add(field, message);
        ApiError::Validation(errors)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                let body: FormErrors = errors.into();
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            ApiError::Conflict(message) => (
                StatusCode::CONFLICT,
                Json(FormErrors::message_only(message)),
            )
                .into_response(),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(FormErrors::message_only("Запись не найдена")),
            )
                .into_response(),
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(FormErrors::message_only(message)),
            )
                .into_response(),
            ApiError::Internal(err) => {
                // Детали остаются в логе, клиент получает нейтральное сообщение
                tracing::error!("Internal error: {err:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(FormErrors::message_only("Внутренняя ошибка сервера")),
                )
                    .into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_form_errors_envelope() {
        let mut errors = ValidationErrors::new();
        errors.add("name", "too short");
        let body: FormErrors = errors.into();

        assert_eq!(body.message, "Validation failed");
        assert_eq!(body.details["name"], vec!["too short".to_string()]);
    }

    #[test]
    fn conflict_keeps_server_message_verbatim() {
        let body = FormErrors::message_only("Единица измерения используется в товарах");
        assert!(body.details.is_empty());
        assert_eq!(body.message, "Единица измерения используется в товарах");
    }
}
