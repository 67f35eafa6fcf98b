use chrono::{DateTime, Utc};

use crate::domain::entities::id::Id;
use crate::domain::entities::profile::Profile;
use crate::domain::entities::user::User;

#[derive(Debug, Clone)]
pub struct GetProfileDTO {
    pub profile_id: String,
    pub viewer_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct GetProfileListDTO {
    pub viewer_id: Option<i64>,
    pub page: i64,
    pub per_page: i64,
}

#[derive(Debug, Clone)]
pub struct UpdateProfileDTO {
    pub profile_id: String,
    pub user_id: i64,
    pub name: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ProfileDTO {
    pub id: i64,
    pub owner: String,
    pub name: String,
    pub content: String,
    pub image: String,
    pub is_owner: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProfileDTO {
    pub fn from_profile(profile: Profile, viewer_id: Option<&Id<User>>) -> Self {
        let is_owner = viewer_id.is_some_and(|viewer_id| profile.is_owned_by(viewer_id));
        Self {
            id: profile.id.value,
            owner: profile.owner.username,
            name: profile.name,
            content: profile.content,
            image: profile.image,
            is_owner,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProfileListDTO {
    pub items: Vec<ProfileDTO>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
}
