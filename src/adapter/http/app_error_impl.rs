use crate::application::app_error::AppError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    fn status_and_message(&self) -> (StatusCode, Option<String>) {
        match self {
            AppError::InvalidId(_) => (StatusCode::BAD_REQUEST, Some("Invalid id".to_string())),
            AppError::InvalidPagination(msg) => (StatusCode::BAD_REQUEST, Some(msg.clone())),
            AppError::ValidationError(errors) => (StatusCode::BAD_REQUEST, Some(errors.to_string())),
            AppError::JsonRejection(rejection) => (rejection.status(), Some(rejection.body_text())),
            AppError::QueryRejection(rejection) => (rejection.status(), Some(rejection.body_text())),
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, Some("Invalid Credentials".to_string())),
            AppError::AccessDenied => (
                StatusCode::FORBIDDEN,
                Some("You do not have permission to perform this action.".to_string()),
            ),
            AppError::ProfileNotFound => (StatusCode::NOT_FOUND, Some("Not found.".to_string())),
            AppError::UserAlreadyExists => (
                StatusCode::CONFLICT,
                Some("A user with that username already exists.".to_string()),
            ),
            AppError::PasswordHashError | AppError::InvalidHeaderValue(_) | AppError::DatabaseError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let message = match message {
            Some(msg) => msg,
            None => status.canonical_reason().unwrap_or("Unknown error").to_string(),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use http_body_util::BodyExt;
    use rstest::rstest;

    use crate::adapter::http::app_error_impl::ErrorResponse;
    use crate::application::app_error::AppError;

    #[rstest]
    #[case(AppError::InvalidId("x".to_string()), StatusCode::BAD_REQUEST)]
    #[case(AppError::InvalidPagination("page".to_string()), StatusCode::BAD_REQUEST)]
    #[case(AppError::InvalidCredentials, StatusCode::UNAUTHORIZED)]
    #[case(AppError::AccessDenied, StatusCode::FORBIDDEN)]
    #[case(AppError::ProfileNotFound, StatusCode::NOT_FOUND)]
    #[case(AppError::UserAlreadyExists, StatusCode::CONFLICT)]
    #[case(AppError::PasswordHashError, StatusCode::INTERNAL_SERVER_ERROR)]
    #[case(AppError::DatabaseError(sqlx::Error::PoolClosed), StatusCode::INTERNAL_SERVER_ERROR)]
    fn test_error_status(#[case] error: AppError, #[case] expected: StatusCode) {
        assert_eq!(error.into_response().status(), expected);
    }

    #[tokio::test]
    async fn test_not_found_body() {
        let response = AppError::ProfileNotFound.into_response();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, "Not found.");
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let response = AppError::DatabaseError(sqlx::Error::PoolClosed).into_response();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, "Internal Server Error");
    }
}
