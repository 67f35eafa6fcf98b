use std::sync::Arc;

use tracing::{info, warn};

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::id::IdDTO;
use crate::application::dto::user::CreateUserDTO;
use crate::application::interface::crypto::CredentialsHasher;
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::profile::ProfileWriter;
use crate::application::interface::gateway::user::{UserReader, UserWriter};
use crate::domain::entities::profile::NewProfile;
use crate::domain::entities::user::NewUser;

/// Registers a user account together with its profile.
#[derive(Clone)]
pub struct CreateUserInteractor {
    db_session: Arc<dyn DBSession>,
    user_reader: Arc<dyn UserReader>,
    user_writer: Arc<dyn UserWriter>,
    profile_writer: Arc<dyn ProfileWriter>,
    hasher: Arc<dyn CredentialsHasher>,
    default_image: String,
}

impl CreateUserInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        user_reader: Arc<dyn UserReader>,
        user_writer: Arc<dyn UserWriter>,
        profile_writer: Arc<dyn ProfileWriter>,
        hasher: Arc<dyn CredentialsHasher>,
        default_image: String,
    ) -> Self {
        Self {
            db_session,
            user_reader,
            user_writer,
            profile_writer,
            hasher,
            default_image,
        }
    }

    pub async fn execute(&self, dto: CreateUserDTO) -> AppResult<IdDTO> {
        if self.user_reader.is_user(&dto.username).await? {
            warn!("Registration attempt with taken username: {}", dto.username);
            return Err(AppError::UserAlreadyExists);
        }
        let hashed_password = self.hasher.hash_password(&dto.password).await?;
        let user_id = self
            .user_writer
            .insert(NewUser::new(dto.username.clone(), hashed_password))
            .await?;
        let profile_id = self
            .profile_writer
            .insert(NewProfile::for_owner(user_id, self.default_image.clone()))
            .await?;
        self.db_session.commit().await?;
        info!("User {} registered with profile {}", dto.username, profile_id);
        Ok(IdDTO { id: user_id.value })
    }
}
