use chrono::{DateTime, Utc};

use crate::domain::entities::id::Id;

#[derive(Debug, Clone)]
pub struct User {
    pub id: Id<User>,
    pub username: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User account that has not been stored yet; the id comes from the database.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(username: String, password: String) -> Self {
        let now = Utc::now();
        Self {
            username,
            password,
            created_at: now,
            updated_at: now,
        }
    }
}
