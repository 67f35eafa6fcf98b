use crate::{
    application::app_error::AppResult,
    domain::entities::{
        id::Id,
        profile::{NewProfile, Profile},
        user::User,
    },
};
use async_trait::async_trait;

#[async_trait]
pub trait ProfileWriter: Send + Sync {
    async fn insert(&self, profile: NewProfile) -> AppResult<Id<Profile>>;
    async fn update(&self, profile: Profile) -> AppResult<()>;
}

#[async_trait]
pub trait ProfileReader: Send + Sync {
    async fn find_by_id(&self, profile_id: &Id<Profile>) -> AppResult<Option<Profile>>;
    async fn find_by_owner(&self, owner_id: &Id<User>) -> AppResult<Option<Profile>>;
    /// Newest profiles first.
    async fn list(&self, limit: i64, offset: i64) -> AppResult<Vec<Profile>>;
    async fn count(&self) -> AppResult<i64>;
}
