use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::FutureExt;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::{AppError, AppResult};
use crate::application::interface::gateway::session::{SessionReader, SessionWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::session::{Session, SessionId};
use crate::domain::entities::user::User;

const SESSION_COLUMNS: &str = "id, user_id, created_at, last_activity, last_rotation, remember_me";

pub struct SessionGateway {
    session: SqlxSession,
}

impl SessionGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }

    fn map_session(row: &SqliteRow) -> AppResult<Session> {
        Ok(Session {
            id: SessionId::new(row.try_get("id")?),
            user_id: Id::new(row.try_get("user_id")?),
            created_at: row.try_get("created_at")?,
            last_activity: row.try_get("last_activity")?,
            last_rotation: row.try_get("last_rotation")?,
            remember_me: row.try_get("remember_me")?,
        })
    }
}

#[async_trait]
impl SessionWriter for SessionGateway {
    async fn insert(&self, session: Session) -> AppResult<SessionId> {
        self.session
            .write(|conn| {
                async move {
                    let query = format!(
                        "INSERT INTO sessions ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6) RETURNING {}",
                        SESSION_COLUMNS, SESSION_COLUMNS
                    );
                    let row = sqlx::query(&query)
                        .bind(session.id.value)
                        .bind(session.user_id.value)
                        .bind(session.created_at)
                        .bind(session.last_activity)
                        .bind(session.last_rotation)
                        .bind(session.remember_me)
                        .fetch_one(conn)
                        .await?;
                    Ok(Self::map_session(&row)?.id)
                }
                .boxed()
            })
            .await
    }

    async fn update_activity(&self, session_id: &SessionId, now: DateTime<Utc>) -> AppResult<()> {
        let session_id = session_id.value;
        self.session
            .write(|conn| {
                async move {
                    sqlx::query("UPDATE sessions SET last_activity = ?2 WHERE id = ?1")
                        .bind(session_id)
                        .bind(now)
                        .execute(conn)
                        .await?;
                    Ok(())
                }
                .boxed()
            })
            .await
    }

    /// Re-keys the stored row in place. Fails with `InvalidCredentials` when
    /// the old id is already gone, e.g. rotated by a concurrent request.
    async fn rotate(&self, old_session_id: &SessionId, new_session: Session) -> AppResult<SessionId> {
        let old_id = old_session_id.value;
        self.session
            .write(|conn| {
                async move {
                    let query = format!(
                        "UPDATE sessions SET id = ?2, last_activity = ?3, last_rotation = ?4 \
                         WHERE id = ?1 RETURNING {}",
                        SESSION_COLUMNS
                    );
                    let row = sqlx::query(&query)
                        .bind(old_id)
                        .bind(new_session.id.value)
                        .bind(new_session.last_activity)
                        .bind(new_session.last_rotation)
                        .fetch_optional(conn)
                        .await?
                        .ok_or(AppError::InvalidCredentials)?;
                    Ok(Self::map_session(&row)?.id)
                }
                .boxed()
            })
            .await
    }

    async fn delete(&self, session_id: &SessionId) -> AppResult<()> {
        let session_id = session_id.value;
        self.session
            .write(|conn| {
                async move {
                    sqlx::query("DELETE FROM sessions WHERE id = ?1")
                        .bind(session_id)
                        .execute(conn)
                        .await?;
                    Ok(())
                }
                .boxed()
            })
            .await
    }

    async fn delete_by_user_id(&self, user_id: &Id<User>) -> AppResult<()> {
        let user_id = user_id.value;
        self.session
            .write(|conn| {
                async move {
                    sqlx::query("DELETE FROM sessions WHERE user_id = ?1")
                        .bind(user_id)
                        .execute(conn)
                        .await?;
                    Ok(())
                }
                .boxed()
            })
            .await
    }
}

#[async_trait]
impl SessionReader for SessionGateway {
    async fn find_by_id(&self, session_id: &SessionId) -> AppResult<Option<Session>> {
        let session_id = session_id.value;
        self.session
            .read(|conn| {
                async move {
                    let query = format!("SELECT {} FROM sessions WHERE id = ?1", SESSION_COLUMNS);
                    let row = sqlx::query(&query).bind(session_id).fetch_optional(conn).await?;
                    row.as_ref().map(Self::map_session).transpose()
                }
                .boxed()
            })
            .await
    }
}
