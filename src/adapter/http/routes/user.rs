use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::{
    adapter::http::{
        app_error_impl::ErrorResponse,
        schema::{id::IdResponse, user::CreateUserRequest},
        validation::ValidJson,
    },
    application::{app_error::AppResult, dto::user::CreateUserDTO, interactors::users::CreateUserInteractor},
};

#[utoipa::path(
    post,
    path = "/users/register",
    tag = "Users",
    request_body(
        content = CreateUserRequest,
        example = json!(
            {
                "username": "adam",
                "password": "Password123!"
            }
        )
    ),
    responses(
        (
            status = 201,
            description = "User and profile created",
            body = IdResponse,
            example = json!(
                {
                    "id": 1
                }
            )
        ),
        (
            status = 400,
            description = "Validation error",
            body = ErrorResponse
        ),
        (
            status = 409,
            description = "Username already taken",
            body = ErrorResponse,
            example = json!(
                {
                    "error": "A user with that username already exists."
                }
            )
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse
        )
    )
)]
pub async fn register(
    interactor: CreateUserInteractor,
    ValidJson(payload): ValidJson<CreateUserRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = CreateUserDTO {
        username: payload.username,
        password: payload.password.value().to_string(),
    };
    let user_id = interactor.execute(dto).await?;
    let response = IdResponse { id: user_id.id };
    Ok((StatusCode::CREATED, Json(response)))
}
