use crate::application::app_error::AppError;
use crate::domain::entities::{id::Id, user::User};
use chrono::{DateTime, Utc};
use std::str::FromStr;
use uuid::Uuid;

/// Opaque session token; random so it can be handed out in a cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionId {
    pub value: Uuid,
}

impl SessionId {
    pub fn new(value: Uuid) -> Self {
        Self { value }
    }

    pub fn generate() -> Self {
        Self::new(Uuid::now_v7())
    }
}

impl TryFrom<String> for SessionId {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let uuid = Uuid::from_str(&value).map_err(|e| AppError::InvalidId(format!("Invalid UUID: {}", e)))?;
        Ok(SessionId::new(uuid))
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    pub user_id: Id<User>,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
    pub last_rotation: DateTime<Utc>,
    pub remember_me: bool,
}

impl Session {
    pub fn start(user_id: Id<User>, remember_me: bool) -> Self {
        let now = Utc::now();
        Self {
            id: SessionId::generate(),
            user_id,
            created_at: now,
            last_activity: now,
            last_rotation: now,
            remember_me,
        }
    }
}
