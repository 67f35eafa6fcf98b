use async_trait::async_trait;
use futures::FutureExt;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::{AppError, AppResult};
use crate::application::interface::gateway::user::{UserReader, UserWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::user::{NewUser, User};

#[derive(Clone)]
pub struct UserGateway {
    session: SqlxSession,
}

impl UserGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }

    // Two registrations can pass the `is_user` check at once; the UNIQUE
    // index on `users.username` settles which one wins.
    fn map_insert_error(err: sqlx::Error) -> AppError {
        let is_unique_violation = err
            .as_database_error()
            .is_some_and(|db_err| db_err.is_unique_violation());
        if is_unique_violation {
            return AppError::UserAlreadyExists;
        }
        AppError::DatabaseError(err)
    }

    fn find_user(result: Option<SqliteRow>) -> AppResult<Option<User>> {
        match result {
            Some(row) => Ok(Some(User {
                id: Id::new(row.try_get("id")?),
                username: row.try_get("username")?,
                password: row.try_get("password")?,
                created_at: row.try_get("created_at")?,
                updated_at: row.try_get("updated_at")?,
            })),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl UserWriter for UserGateway {
    async fn insert(&self, user: NewUser) -> AppResult<Id<User>> {
        self.session
            .write(|conn| {
                let user = user.clone();
                async move {
                    let result = sqlx::query(
                        r#"
                            INSERT INTO users
                                (username, password, created_at, updated_at)
                            VALUES
                                (?1, ?2, ?3, ?4)
                            RETURNING
                                id
                        "#,
                    )
                    .bind(&user.username)
                    .bind(&user.password)
                    .bind(user.created_at)
                    .bind(user.updated_at)
                    .fetch_one(conn)
                    .await
                    .map_err(Self::map_insert_error)?;
                    let id: i64 = result.try_get("id")?;
                    Ok(Id::new(id))
                }
                .boxed()
            })
            .await
    }
}

#[async_trait]
impl UserReader for UserGateway {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.session
            .read(|conn| {
                let username = username.to_owned();
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT
                                id, username, password, created_at, updated_at
                            FROM
                                users
                            WHERE username = ?1
                        "#,
                    )
                    .bind(&username)
                    .fetch_optional(conn)
                    .await?;

                    Self::find_user(result)
                }
                .boxed()
            })
            .await
    }

    async fn find_by_id(&self, user_id: &Id<User>) -> AppResult<Option<User>> {
        self.session
            .read(|conn| {
                let user_id = user_id.value;
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT
                                id, username, password, created_at, updated_at
                            FROM
                                users
                            WHERE id = ?1
                        "#,
                    )
                    .bind(user_id)
                    .fetch_optional(conn)
                    .await?;

                    Self::find_user(result)
                }
                .boxed()
            })
            .await
    }

    async fn is_user(&self, username: &str) -> AppResult<bool> {
        self.session
            .read(|conn| {
                let username = username.to_owned();
                async move {
                    let result = sqlx::query(
                        r#"
                            SELECT EXISTS(
                                SELECT
                                    id
                                FROM
                                    users
                                WHERE username = ?1
                            ) AS is_user
                        "#,
                    )
                    .bind(&username)
                    .fetch_one(conn)
                    .await?;
                    let is_user: bool = result.try_get("is_user")?;
                    Ok(is_user)
                }
                .boxed()
            })
            .await
    }
}
