use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::IntoResponse;

use crate::adapter::http::app_error_impl::ErrorResponse;
use crate::adapter::http::middleware::auth::{build_logout_cookie, build_session_cookie};
use crate::adapter::http::middleware::extractor::AuthUser;
use crate::adapter::http::schema::auth::{LoginRequest, MessageResponse};
use crate::application::app_error::AppResult;
use crate::application::dto::auth::LoginDTO;
use crate::application::dto::id::IdDTO;
use crate::application::interactors::auth::{LoginInteractor, LogoutInteractor};
use crate::infra::config::AppConfig;

#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Auth",
    request_body(
        content = LoginRequest,
        example = json!(
            {
                "username": "adam",
                "password": "Password123!",
                "remember_me": true
            }
        )
    ),
    responses(
        (
            status = 200,
            description = "Login successful",
            body = MessageResponse,
            example = json!(
                {
                    "message": "Login successful"
                }
            )
        ),
        (
            status = 401,
            description = "Invalid username or password",
            body = ErrorResponse,
            example = json!(
                {
                    "error": "Invalid Credentials"
                }
            )
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!(
                {
                    "error": "Internal Server Error"
                }
            )
        )
    )
)]
pub async fn login(
    interactor: LoginInteractor,
    State(config): State<Arc<AppConfig>>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = LoginDTO {
        username: payload.username,
        password: payload.password,
        remember_me: payload.remember_me,
    };
    let result = interactor.execute(dto).await?;
    let cookie = build_session_cookie(&result.session_id, result.remember_me, &config.session);
    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, HeaderValue::from_str(&cookie)?);
    Ok((
        StatusCode::OK,
        headers,
        Json(MessageResponse {
            message: "Login successful".to_string(),
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = "Auth",
    responses(
        (
            status = 200,
            description = "Logged out successfully",
            body = MessageResponse,
            example = json!(
                {
                    "message": "Logged out successfully"
                }
            )
        ),
        (
            status = 401,
            description = "Missing or invalid session",
            body = ErrorResponse,
            example = json!(
                {
                    "error": "Invalid Credentials"
                }
            )
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!(
                {
                    "error": "Internal Server Error"
                }
            )
        )
    ),
    security(("cookieAuth" = []))
)]
pub async fn logout(
    auth_user: AuthUser,
    interactor: LogoutInteractor,
    State(config): State<Arc<AppConfig>>,
) -> AppResult<impl IntoResponse> {
    let cookie = build_logout_cookie(&config.session);
    let dto = IdDTO {
        id: auth_user.user_id.value,
    };
    interactor.execute(dto).await?;
    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, HeaderValue::from_str(&cookie)?);
    Ok((
        StatusCode::OK,
        headers,
        Json(MessageResponse {
            message: "Logged out successfully".to_string(),
        }),
    ))
}
