use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::dto::profile::ProfileDTO;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetProfileResponse {
    pub id: i64,
    /// Username of the profile's owner.
    pub owner: String,
    pub name: String,
    pub content: String,
    pub image: String,
    /// Whether the requesting user owns this profile.
    pub is_owner: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProfileDTO> for GetProfileResponse {
    fn from(profile: ProfileDTO) -> Self {
        Self {
            id: profile.id,
            owner: profile.owner,
            name: profile.name,
            content: profile.content,
            image: profile.image,
            is_owner: profile.is_owner,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProfileListResponse {
    pub items: Vec<GetProfileResponse>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: Option<String>,
    pub content: Option<String>,
    #[validate(length(max = 255, message = "Image must be at most 255 characters"))]
    pub image: Option<String>,
}
