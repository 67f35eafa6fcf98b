use chrono::{DateTime, Utc};

use crate::domain::entities::{id::Id, user::User};

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileOwner {
    pub id: Id<User>,
    pub username: String,
}

/// Public profile, one per user account.
#[derive(Debug, Clone)]
pub struct Profile {
    pub id: Id<Profile>,
    pub owner: ProfileOwner,
    pub name: String,
    pub content: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn is_owned_by(&self, user_id: &Id<User>) -> bool {
        self.owner.id == *user_id
    }

    /// Applies the given fields, leaving absent ones untouched.
    pub fn apply_changes(&mut self, name: Option<String>, content: Option<String>, image: Option<String>) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(content) = content {
            self.content = content;
        }
        if let Some(image) = image {
            self.image = image;
        }
        self.updated_at = Utc::now();
    }
}

#[derive(Debug, Clone)]
pub struct NewProfile {
    pub owner_id: Id<User>,
    pub name: String,
    pub content: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewProfile {
    pub fn for_owner(owner_id: Id<User>, default_image: String) -> Self {
        let now = Utc::now();
        Self {
            owner_id,
            name: String::new(),
            content: String::new(),
            image: default_image,
            created_at: now,
            updated_at: now,
        }
    }
}
