use crate::{
    application::app_error::AppResult,
    domain::entities::{
        id::Id,
        session::{Session, SessionId},
        user::User,
    },
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait SessionWriter: Send + Sync {
    async fn insert(&self, session: Session) -> AppResult<SessionId>;
    async fn update_activity(&self, session_id: &SessionId, now: DateTime<Utc>) -> AppResult<()>;
    async fn rotate(&self, old_session_id: &SessionId, new_session: Session) -> AppResult<SessionId>;
    async fn delete(&self, session_id: &SessionId) -> AppResult<()>;
    async fn delete_by_user_id(&self, user_id: &Id<User>) -> AppResult<()>;
}

#[async_trait]
pub trait SessionReader: Send + Sync {
    async fn find_by_id(&self, session_id: &SessionId) -> AppResult<Option<Session>>;
}
