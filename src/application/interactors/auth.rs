use std::sync::Arc;

use tracing::{info, warn};

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::auth::{GetSessionIdDTO, LoginDTO};
use crate::application::dto::id::IdDTO;
use crate::application::interface::crypto::CredentialsHasher;
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::session::SessionWriter;
use crate::application::interface::gateway::user::UserReader;
use crate::domain::entities::id::Id;
use crate::domain::entities::session::Session;
use crate::domain::entities::user::User;

#[derive(Clone)]
pub struct LoginInteractor {
    db_session: Arc<dyn DBSession>,
    user_reader: Arc<dyn UserReader>,
    session_writer: Arc<dyn SessionWriter>,
    hasher: Arc<dyn CredentialsHasher>,
}

impl LoginInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        user_reader: Arc<dyn UserReader>,
        session_writer: Arc<dyn SessionWriter>,
        hasher: Arc<dyn CredentialsHasher>,
    ) -> Self {
        Self {
            db_session,
            user_reader,
            session_writer,
            hasher,
        }
    }

    pub async fn execute(&self, dto: LoginDTO) -> AppResult<GetSessionIdDTO> {
        let user = self
            .user_reader
            .find_by_username(&dto.username)
            .await?
            .ok_or_else(|| {
                warn!("Login attempt with non-existent username: {}", dto.username);
                AppError::InvalidCredentials
            })?;
        let is_valid = self.hasher.verify_password(&dto.password, &user.password).await?;
        if !is_valid {
            warn!("Invalid password for user: {}", user.username);
            return Err(AppError::InvalidCredentials);
        }
        let session_id = self
            .session_writer
            .insert(Session::start(user.id, dto.remember_me))
            .await?;
        self.db_session.commit().await?;
        info!("User {} logged in successfully", user.username);
        Ok(GetSessionIdDTO {
            session_id: session_id.value.to_string(),
            remember_me: dto.remember_me,
        })
    }
}

#[derive(Clone)]
pub struct LogoutInteractor {
    db_session: Arc<dyn DBSession>,
    session_writer: Arc<dyn SessionWriter>,
}

impl LogoutInteractor {
    pub fn new(db_session: Arc<dyn DBSession>, session_writer: Arc<dyn SessionWriter>) -> Self {
        Self {
            db_session,
            session_writer,
        }
    }

    pub async fn execute(&self, user_id: IdDTO) -> AppResult<()> {
        let user_id: Id<User> = Id::new(user_id.id);
        self.session_writer.delete_by_user_id(&user_id).await?;
        self.db_session.commit().await?;
        info!("User {} logged out", user_id);
        Ok(())
    }
}
