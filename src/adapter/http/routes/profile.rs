use axum::Json;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapter::http::app_error_impl::ErrorResponse;
use crate::adapter::http::middleware::extractor::AuthUser;
use crate::adapter::http::schema::pagination::PaginationQuery;
use crate::adapter::http::schema::profile::{GetProfileResponse, ProfileListResponse, UpdateProfileRequest};
use crate::adapter::http::validation::{ValidJson, ValidQuery};
use crate::application::app_error::AppResult;
use crate::application::dto::profile::{GetProfileDTO, GetProfileListDTO, UpdateProfileDTO};
use crate::application::interactors::profile::{
    GetProfileInteractor, GetProfileListInteractor, UpdateProfileInteractor,
};
use crate::infra::constants::{DEFAULT_PAGE, DEFAULT_PER_PAGE};

#[utoipa::path(
    get,
    path = "/profiles/",
    tag = "Profiles",
    params(PaginationQuery),
    responses(
        (
            status = 200,
            description = "Page of profiles, newest first",
            body = ProfileListResponse,
            example = json!(
                {
                    "items": [
                        {
                            "id": 1,
                            "owner": "adam",
                            "name": "",
                            "content": "",
                            "image": "../default_profile_qdjgyp",
                            "is_owner": false,
                            "created_at": "2024-03-01T12:00:00Z",
                            "updated_at": "2024-03-01T12:00:00Z"
                        }
                    ],
                    "total": 1,
                    "page": 1,
                    "per_page": 10
                }
            )
        ),
        (
            status = 400,
            description = "Invalid pagination parameters",
            body = ErrorResponse,
            example = json!(
                {
                    "error": "per_page must be between 1 and 100"
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
pub async fn list_profiles(
    auth_user: Option<AuthUser>,
    interactor: GetProfileListInteractor,
    ValidQuery(query): ValidQuery<PaginationQuery>,
) -> AppResult<impl IntoResponse> {
    let dto = GetProfileListDTO {
        viewer_id: auth_user.map(|user| user.user_id.value),
        page: query.page.unwrap_or(DEFAULT_PAGE),
        per_page: query.per_page.unwrap_or(DEFAULT_PER_PAGE),
    };
    let profiles = interactor.execute(dto).await?;
    let response = ProfileListResponse {
        items: profiles.items.into_iter().map(GetProfileResponse::from).collect(),
        total: profiles.total,
        page: profiles.page,
        per_page: profiles.per_page,
    };
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/profiles/{id}/",
    tag = "Profiles",
    params(
        ("id" = i64, Path, description = "Profile id")
    ),
    responses(
        (
            status = 200,
            description = "Profile details",
            body = GetProfileResponse
        ),
        (
            status = 400,
            description = "Malformed profile id",
            body = ErrorResponse,
            example = json!(
                {
                    "error": "Invalid id"
                }
            )
        ),
        (
            status = 404,
            description = "Profile not found",
            body = ErrorResponse,
            example = json!(
                {
                    "error": "Not found."
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
pub async fn get_profile(
    auth_user: Option<AuthUser>,
    interactor: GetProfileInteractor,
    Path(profile_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let dto = GetProfileDTO {
        profile_id,
        viewer_id: auth_user.map(|user| user.user_id.value),
    };
    let profile = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(GetProfileResponse::from(profile))))
}

#[utoipa::path(
    put,
    path = "/profiles/{id}/",
    tag = "Profiles",
    params(
        ("id" = i64, Path, description = "Profile id")
    ),
    request_body(
        content = UpdateProfileRequest,
        example = json!(
            {
                "name": "Adam",
                "content": "Hello there"
            }
        )
    ),
    responses(
        (
            status = 200,
            description = "Updated profile",
            body = GetProfileResponse
        ),
        (
            status = 400,
            description = "Validation error",
            body = ErrorResponse
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
            status = 403,
            description = "Profile belongs to another user",
            body = ErrorResponse,
            example = json!(
                {
                    "error": "You do not have permission to perform this action."
                }
            )
        ),
        (
            status = 404,
            description = "Profile not found",
            body = ErrorResponse
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse
        )
    ),
    security(("cookieAuth" = []))
)]
pub async fn update_profile(
    auth_user: AuthUser,
    interactor: UpdateProfileInteractor,
    Path(profile_id): Path<String>,
    ValidJson(payload): ValidJson<UpdateProfileRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = UpdateProfileDTO {
        profile_id,
        user_id: auth_user.user_id.value,
        name: payload.name,
        content: payload.content,
        image: payload.image,
    };
    let profile = interactor.execute(dto).await?;
    Ok((StatusCode::OK, Json(GetProfileResponse::from(profile))))
}
