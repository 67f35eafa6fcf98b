use crate::{
    application::{
        app_error::AppResult,
        dto::session::{GetSessionStatusDTO, SessionDTO, SessionValidationResult},
        interface::{
            db::DBSession,
            gateway::session::{SessionReader, SessionWriter},
        },
    },
    domain::entities::session::{Session, SessionId},
};
use chrono::{Duration, Utc};
use std::sync::Arc;

#[derive(Debug, Clone)]
struct SessionTimeouts {
    pub default_max_lifetime: i64,
    pub default_idle_timeout: i64,
    pub remembered_max_lifetime: i64,
    pub remembered_idle_timeout: i64,
}

impl SessionTimeouts {
    fn for_session(&self, remember_me: bool) -> (Duration, Duration) {
        if remember_me {
            return (
                Duration::seconds(self.remembered_max_lifetime),
                Duration::seconds(self.remembered_idle_timeout),
            );
        }
        (
            Duration::seconds(self.default_max_lifetime),
            Duration::seconds(self.default_idle_timeout),
        )
    }
}

#[derive(Clone)]
pub struct ValidateSessionInteractor {
    db_session: Arc<dyn DBSession>,
    session_reader: Arc<dyn SessionReader>,
    session_writer: Arc<dyn SessionWriter>,
}

impl ValidateSessionInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        session_reader: Arc<dyn SessionReader>,
        session_writer: Arc<dyn SessionWriter>,
    ) -> Self {
        Self {
            db_session,
            session_reader,
            session_writer,
        }
    }

    /// Every path that touched the store ends with a commit or a rollback,
    /// so the connection is released before the request goes on.
    pub async fn execute(&self, dto: SessionDTO) -> AppResult<GetSessionStatusDTO> {
        let Ok(session_id) = SessionId::try_from(dto.id) else {
            return Ok(GetSessionStatusDTO {
                status: SessionValidationResult::Invalid,
            });
        };
        let session = match self.session_reader.find_by_id(&session_id).await? {
            Some(s) => s,
            None => {
                self.db_session.rollback().await?;
                return Ok(GetSessionStatusDTO {
                    status: SessionValidationResult::Invalid,
                });
            }
        };
        let now = Utc::now();
        let timeouts = SessionTimeouts {
            default_max_lifetime: dto.default_max_lifetime,
            default_idle_timeout: dto.default_idle_timeout,
            remembered_max_lifetime: dto.remembered_max_lifetime,
            remembered_idle_timeout: dto.remembered_idle_timeout,
        };
        let (max_lifetime, idle_timeout) = timeouts.for_session(session.remember_me);

        if now - session.created_at > max_lifetime || now - session.last_activity > idle_timeout {
            self.session_writer.delete(&session_id).await?;
            self.db_session.commit().await?;
            return Ok(GetSessionStatusDTO {
                status: SessionValidationResult::Expired,
            });
        }

        let rotation_interval = Duration::seconds(dto.rotation_interval);
        if now - session.last_rotation > rotation_interval {
            let new_session = Session {
                id: SessionId::generate(),
                user_id: session.user_id,
                created_at: session.created_at,
                last_activity: now,
                last_rotation: now,
                remember_me: session.remember_me,
            };
            let new_session_id = self.session_writer.rotate(&session_id, new_session).await?;
            self.db_session.commit().await?;
            return Ok(GetSessionStatusDTO {
                status: SessionValidationResult::Rotated {
                    user_id: session.user_id,
                    new_session_id,
                    remember_me: session.remember_me,
                },
            });
        }
        self.session_writer.update_activity(&session_id, now).await?;
        self.db_session.commit().await?;
        Ok(GetSessionStatusDTO {
            status: SessionValidationResult::Valid(session.user_id),
        })
    }
}
