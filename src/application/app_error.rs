use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::header::InvalidHeaderValue;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Invalid pagination: {0}")]
    InvalidPagination(String),

    #[error("Validation failed: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Malformed JSON body: {0}")]
    JsonRejection(#[from] JsonRejection),

    #[error("Malformed query string: {0}")]
    QueryRejection(#[from] QueryRejection),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Access denied")]
    AccessDenied,

    #[error("Profile not found")]
    ProfileNotFound,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Failed to hash password")]
    PasswordHashError,

    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] InvalidHeaderValue),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

pub type AppResult<T> = Result<T, AppError>;
