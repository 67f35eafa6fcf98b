use crate::{
    application::app_error::AppResult,
    domain::entities::{
        id::Id,
        user::{NewUser, User},
    },
};
use async_trait::async_trait;

#[async_trait]
pub trait UserWriter: Send + Sync {
    async fn insert(&self, user: NewUser) -> AppResult<Id<User>>;
}

#[async_trait]
pub trait UserReader: Send + Sync {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
    async fn find_by_id(&self, user_id: &Id<User>) -> AppResult<Option<User>>;
    async fn is_user(&self, username: &str) -> AppResult<bool>;
}
