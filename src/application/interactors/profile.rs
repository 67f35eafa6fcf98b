use std::sync::Arc;

use tracing::{info, warn};

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::profile::{
    GetProfileDTO, GetProfileListDTO, ProfileDTO, ProfileListDTO, UpdateProfileDTO,
};
use crate::application::interface::db::DBSession;
use crate::application::interface::gateway::profile::{ProfileReader, ProfileWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::Profile;
use crate::domain::entities::user::User;
use crate::infra::constants::MAX_PER_PAGE;

#[derive(Clone)]
pub struct GetProfileInteractor {
    profile_reader: Arc<dyn ProfileReader>,
}

impl GetProfileInteractor {
    pub fn new(profile_reader: Arc<dyn ProfileReader>) -> Self {
        Self { profile_reader }
    }

    pub async fn execute(&self, dto: GetProfileDTO) -> AppResult<ProfileDTO> {
        let profile_id: Id<Profile> = dto.profile_id.try_into()?;
        let viewer_id = dto.viewer_id.map(Id::<User>::new);
        let profile = self
            .profile_reader
            .find_by_id(&profile_id)
            .await?
            .ok_or(AppError::ProfileNotFound)?;
        Ok(ProfileDTO::from_profile(profile, viewer_id.as_ref()))
    }
}

#[derive(Clone)]
pub struct GetProfileListInteractor {
    profile_reader: Arc<dyn ProfileReader>,
}

impl GetProfileListInteractor {
    pub fn new(profile_reader: Arc<dyn ProfileReader>) -> Self {
        Self { profile_reader }
    }

    pub async fn execute(&self, dto: GetProfileListDTO) -> AppResult<ProfileListDTO> {
        if dto.page < 1 {
            return Err(AppError::InvalidPagination(format!("page must be at least 1, got {}", dto.page)));
        }
        if !(1..=MAX_PER_PAGE).contains(&dto.per_page) {
            return Err(AppError::InvalidPagination(format!(
                "per_page must be between 1 and {}, got {}",
                MAX_PER_PAGE, dto.per_page
            )));
        }
        let viewer_id = dto.viewer_id.map(Id::<User>::new);
        let offset = (dto.page - 1).saturating_mul(dto.per_page);

        let total = self.profile_reader.count().await?;
        let profiles = self.profile_reader.list(dto.per_page, offset).await?;

        Ok(ProfileListDTO {
            items: profiles
                .into_iter()
                .map(|profile| ProfileDTO::from_profile(profile, viewer_id.as_ref()))
                .collect(),
            total,
            page: dto.page,
            per_page: dto.per_page,
        })
    }
}

#[derive(Clone)]
pub struct UpdateProfileInteractor {
    db_session: Arc<dyn DBSession>,
    profile_reader: Arc<dyn ProfileReader>,
    profile_writer: Arc<dyn ProfileWriter>,
}

impl UpdateProfileInteractor {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_reader: Arc<dyn ProfileReader>,
        profile_writer: Arc<dyn ProfileWriter>,
    ) -> Self {
        Self {
            db_session,
            profile_reader,
            profile_writer,
        }
    }

    pub async fn execute(&self, dto: UpdateProfileDTO) -> AppResult<ProfileDTO> {
        let profile_id: Id<Profile> = dto.profile_id.try_into()?;
        let user_id: Id<User> = Id::new(dto.user_id);
        let mut profile = self
            .profile_reader
            .find_by_id(&profile_id)
            .await?
            .ok_or(AppError::ProfileNotFound)?;
        if !profile.is_owned_by(&user_id) {
            warn!("User {} tried to update profile {} owned by {}", user_id, profile_id, profile.owner.id);
            return Err(AppError::AccessDenied);
        }
        profile.apply_changes(dto.name, dto.content, dto.image);
        self.profile_writer.update(profile.clone()).await?;
        self.db_session.commit().await?;
        info!("Profile {} updated", profile_id);
        Ok(ProfileDTO::from_profile(profile, Some(&user_id)))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::{Duration, Utc};
    use mockall::mock;
    use rstest::{fixture, rstest};

    use crate::application::app_error::{AppError, AppResult};
    use crate::application::dto::profile::{GetProfileDTO, GetProfileListDTO, UpdateProfileDTO};
    use crate::application::interactors::profile::{
        GetProfileInteractor, GetProfileListInteractor, UpdateProfileInteractor,
    };
    use crate::application::interface::db::DBSession;
    use crate::application::interface::gateway::profile::{ProfileReader, ProfileWriter};
    use crate::domain::entities::id::Id;
    use crate::domain::entities::profile::{NewProfile, Profile, ProfileOwner};
    use crate::domain::entities::user::User;

    mock! {
        pub DBSessionMock {}
        #[async_trait]
        impl DBSession for DBSessionMock {
            async fn commit(&self) -> AppResult<()>;
            async fn rollback(&self) -> AppResult<()>;
        }
    }

    mock! {
        pub ProfileReaderMock {}
        #[async_trait]
        impl ProfileReader for ProfileReaderMock {
            async fn find_by_id(&self, profile_id: &Id<Profile>) -> AppResult<Option<Profile>>;
            async fn find_by_owner(&self, owner_id: &Id<User>) -> AppResult<Option<Profile>>;
            async fn list(&self, limit: i64, offset: i64) -> AppResult<Vec<Profile>>;
            async fn count(&self) -> AppResult<i64>;
        }
    }

    mock! {
        pub ProfileWriterMock {}
        #[async_trait]
        impl ProfileWriter for ProfileWriterMock {
            async fn insert(&self, profile: NewProfile) -> AppResult<Id<Profile>>;
            async fn update(&self, profile: Profile) -> AppResult<()>;
        }
    }

    const OWNER_ID: i64 = 1;
    const OTHER_USER_ID: i64 = 2;

    #[fixture]
    fn adam_profile() -> Profile {
        let created = Utc::now() - Duration::days(1);
        Profile {
            id: Id::new(1),
            owner: ProfileOwner {
                id: Id::new(OWNER_ID),
                username: "adam".to_string(),
            },
            name: String::new(),
            content: String::new(),
            image: "../default_profile_qdjgyp".to_string(),
            created_at: created,
            updated_at: created,
        }
    }

    // GetProfileInteractor
    #[rstest]
    #[tokio::test]
    async fn test_get_profile_found(adam_profile: Profile) {
        let mut profile_reader = MockProfileReaderMock::new();
        profile_reader
            .expect_find_by_id()
            .withf(|id| id.value == 1)
            .returning(move |_| Ok(Some(adam_profile.clone())));

        let interactor = GetProfileInteractor::new(Arc::new(profile_reader));
        let dto = GetProfileDTO {
            profile_id: "1".to_string(),
            viewer_id: None,
        };
        let result = interactor.execute(dto).await.unwrap();
        assert_eq!(result.id, 1);
        assert_eq!(result.owner, "adam");
        assert!(!result.is_owner);
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_profile_not_found() {
        let mut profile_reader = MockProfileReaderMock::new();
        profile_reader.expect_find_by_id().returning(|_| Ok(None));

        let interactor = GetProfileInteractor::new(Arc::new(profile_reader));
        let dto = GetProfileDTO {
            profile_id: "2".to_string(),
            viewer_id: None,
        };
        let result = interactor.execute(dto).await;
        assert!(matches!(result, Err(AppError::ProfileNotFound)));
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_profile_invalid_id_skips_lookup() {
        let profile_reader = MockProfileReaderMock::new();

        let interactor = GetProfileInteractor::new(Arc::new(profile_reader));
        let dto = GetProfileDTO {
            profile_id: "adam".to_string(),
            viewer_id: None,
        };
        let result = interactor.execute(dto).await;
        assert!(matches!(result, Err(AppError::InvalidId(_))));
    }

    #[rstest]
    #[case(Some(OWNER_ID), true)]
    #[case(Some(OTHER_USER_ID), false)]
    #[case(None, false)]
    #[tokio::test]
    async fn test_get_profile_is_owner(adam_profile: Profile, #[case] viewer_id: Option<i64>, #[case] expected: bool) {
        let mut profile_reader = MockProfileReaderMock::new();
        profile_reader
            .expect_find_by_id()
            .returning(move |_| Ok(Some(adam_profile.clone())));

        let interactor = GetProfileInteractor::new(Arc::new(profile_reader));
        let dto = GetProfileDTO {
            profile_id: "1".to_string(),
            viewer_id,
        };
        let result = interactor.execute(dto).await.unwrap();
        assert_eq!(result.is_owner, expected);
    }

    // GetProfileListInteractor
    #[rstest]
    #[tokio::test]
    async fn test_get_profile_list_paginates(adam_profile: Profile) {
        let mut profile_reader = MockProfileReaderMock::new();
        profile_reader.expect_count().returning(|| Ok(21));
        profile_reader
            .expect_list()
            .withf(|limit, offset| *limit == 10 && *offset == 20)
            .returning(move |_, _| Ok(vec![adam_profile.clone()]));

        let interactor = GetProfileListInteractor::new(Arc::new(profile_reader));
        let dto = GetProfileListDTO {
            viewer_id: Some(OWNER_ID),
            page: 3,
            per_page: 10,
        };
        let result = interactor.execute(dto).await.unwrap();
        assert_eq!(result.total, 21);
        assert_eq!(result.page, 3);
        assert_eq!(result.items.len(), 1);
        assert!(result.items[0].is_owner);
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_profile_list_empty() {
        let mut profile_reader = MockProfileReaderMock::new();
        profile_reader.expect_count().returning(|| Ok(0));
        profile_reader.expect_list().returning(|_, _| Ok(vec![]));

        let interactor = GetProfileListInteractor::new(Arc::new(profile_reader));
        let dto = GetProfileListDTO {
            viewer_id: None,
            page: 1,
            per_page: 10,
        };
        let result = interactor.execute(dto).await.unwrap();
        assert_eq!(result.total, 0);
        assert!(result.items.is_empty());
    }

    #[rstest]
    #[case(0, 10)]
    #[case(1, 0)]
    #[case(1, 101)]
    #[tokio::test]
    async fn test_get_profile_list_invalid_pagination(#[case] page: i64, #[case] per_page: i64) {
        let profile_reader = MockProfileReaderMock::new();

        let interactor = GetProfileListInteractor::new(Arc::new(profile_reader));
        let dto = GetProfileListDTO {
            viewer_id: None,
            page,
            per_page,
        };
        let result = interactor.execute(dto).await;
        assert!(matches!(result, Err(AppError::InvalidPagination(_))));
    }

    // UpdateProfileInteractor
    fn update_dto(user_id: i64) -> UpdateProfileDTO {
        UpdateProfileDTO {
            profile_id: "1".to_string(),
            user_id,
            name: Some("Adam".to_string()),
            content: None,
            image: None,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn test_update_profile_by_owner(adam_profile: Profile) {
        let mut db = MockDBSessionMock::new();
        let mut profile_reader = MockProfileReaderMock::new();
        let mut profile_writer = MockProfileWriterMock::new();

        profile_reader
            .expect_find_by_id()
            .returning(move |_| Ok(Some(adam_profile.clone())));
        profile_writer
            .expect_update()
            .withf(|profile| profile.name == "Adam" && profile.content.is_empty())
            .times(1)
            .returning(|_| Ok(()));
        db.expect_commit().times(1).returning(|| Ok(()));

        let interactor =
            UpdateProfileInteractor::new(Arc::new(db), Arc::new(profile_reader), Arc::new(profile_writer));
        let result = interactor.execute(update_dto(OWNER_ID)).await.unwrap();
        assert_eq!(result.name, "Adam");
        assert!(result.is_owner);
        assert!(result.updated_at > result.created_at);
    }

    #[rstest]
    #[tokio::test]
    async fn test_update_profile_by_other_user_is_denied(adam_profile: Profile) {
        let db = MockDBSessionMock::new();
        let mut profile_reader = MockProfileReaderMock::new();
        let mut profile_writer = MockProfileWriterMock::new();

        profile_reader
            .expect_find_by_id()
            .returning(move |_| Ok(Some(adam_profile.clone())));
        profile_writer.expect_update().never();

        let interactor =
            UpdateProfileInteractor::new(Arc::new(db), Arc::new(profile_reader), Arc::new(profile_writer));
        let result = interactor.execute(update_dto(OTHER_USER_ID)).await;
        assert!(matches!(result, Err(AppError::AccessDenied)));
    }

    #[rstest]
    #[tokio::test]
    async fn test_update_missing_profile() {
        let db = MockDBSessionMock::new();
        let mut profile_reader = MockProfileReaderMock::new();
        let profile_writer = MockProfileWriterMock::new();

        profile_reader.expect_find_by_id().returning(|_| Ok(None));

        let interactor =
            UpdateProfileInteractor::new(Arc::new(db), Arc::new(profile_reader), Arc::new(profile_writer));
        let result = interactor.execute(update_dto(OWNER_ID)).await;
        assert!(matches!(result, Err(AppError::ProfileNotFound)));
    }
}
