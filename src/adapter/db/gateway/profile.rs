use async_trait::async_trait;
use futures::FutureExt;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::AppResult;
use crate::application::interface::gateway::profile::{ProfileReader, ProfileWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{NewProfile, Profile, ProfileOwner};
use crate::domain::entities::user::User;

const SELECT_PROFILE: &str = r#"
    SELECT
        profiles.id,
        profiles.owner_id,
        users.username AS owner_username,
        profiles.name,
        profiles.content,
        profiles.image,
        profiles.created_at,
        profiles.updated_at
    FROM
        profiles
        INNER JOIN users ON users.id = profiles.owner_id
"#;

#[derive(Clone)]
pub struct ProfileGateway {
    session: SqlxSession,
}

impl ProfileGateway {
    pub fn new(session: SqlxSession) -> Self {
        Self { session }
    }

    fn map_profile(row: &SqliteRow) -> AppResult<Profile> {
        Ok(Profile {
            id: Id::new(row.try_get("id")?),
            owner: ProfileOwner {
                id: Id::new(row.try_get("owner_id")?),
                username: row.try_get("owner_username")?,
            },
            name: row.try_get("name")?,
            content: row.try_get("content")?,
            image: row.try_get("image")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl ProfileWriter for ProfileGateway {
    async fn insert(&self, profile: NewProfile) -> AppResult<Id<Profile>> {
        self.session
            .write(|conn| {
                let profile = profile.clone();
                async move {
                    let row = sqlx::query(
                        r#"
                            INSERT INTO profiles
                                (owner_id, name, content, image, created_at, updated_at)
                            VALUES
                                (?1, ?2, ?3, ?4, ?5, ?6)
                            RETURNING id
                        "#,
                    )
                    .bind(profile.owner_id.value)
                    .bind(profile.name)
                    .bind(profile.content)
                    .bind(profile.image)
                    .bind(profile.created_at)
                    .bind(profile.updated_at)
                    .fetch_one(conn)
                    .await?;

                    let id: i64 = row.try_get("id")?;
                    Ok(Id::new(id))
                }
                .boxed()
            })
            .await
    }

    async fn update(&self, profile: Profile) -> AppResult<()> {
        self.session
            .write(|conn| {
                let profile = profile.clone();
                async move {
                    sqlx::query(
                        r#"
                            UPDATE
                                profiles
                            SET
                                name = ?2, content = ?3, image = ?4, updated_at = ?5
                            WHERE
                                id = ?1
                        "#,
                    )
                    .bind(profile.id.value)
                    .bind(profile.name)
                    .bind(profile.content)
                    .bind(profile.image)
                    .bind(profile.updated_at)
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
impl ProfileReader for ProfileGateway {
    async fn find_by_id(&self, profile_id: &Id<Profile>) -> AppResult<Option<Profile>> {
        self.session
            .read(|conn| {
                let profile_id = profile_id.value;
                async move {
                    let query = format!("{} WHERE profiles.id = ?1", SELECT_PROFILE);
                    let row = sqlx::query(&query)
                        .bind(profile_id)
                        .fetch_optional(conn)
                        .await?;
                    row.as_ref().map(Self::map_profile).transpose()
                }
                .boxed()
            })
            .await
    }

    async fn find_by_owner(&self, owner_id: &Id<User>) -> AppResult<Option<Profile>> {
        self.session
            .read(|conn| {
                let owner_id = owner_id.value;
                async move {
                    let query = format!("{} WHERE profiles.owner_id = ?1", SELECT_PROFILE);
                    let row = sqlx::query(&query)
                        .bind(owner_id)
                        .fetch_optional(conn)
                        .await?;
                    row.as_ref().map(Self::map_profile).transpose()
                }
                .boxed()
            })
            .await
    }

    async fn list(&self, limit: i64, offset: i64) -> AppResult<Vec<Profile>> {
        self.session
            .read(|conn| {
                async move {
                    let query = format!(
                        "{} ORDER BY profiles.created_at DESC, profiles.id DESC LIMIT ?1 OFFSET ?2",
                        SELECT_PROFILE
                    );
                    let rows = sqlx::query(&query)
                        .bind(limit)
                        .bind(offset)
                        .fetch_all(conn)
                        .await?;
                    rows.iter().map(Self::map_profile).collect()
                }
                .boxed()
            })
            .await
    }

    async fn count(&self) -> AppResult<i64> {
        self.session
            .read(|conn| {
                async move {
                    let row = sqlx::query("SELECT COUNT(*) AS total FROM profiles")
                        .fetch_one(conn)
                        .await?;
                    Ok(row.try_get("total")?)
                }
                .boxed()
            })
            .await
    }
}
