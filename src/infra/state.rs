use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use sqlx::{Pool, Sqlite};

use crate::adapter::db::gateway::profile::ProfileGateway;
use crate::adapter::db::gateway::session::SessionGateway;
use crate::adapter::db::gateway::user::UserGateway;
use crate::adapter::db::session::SqlxSession;
use crate::application::app_error::{AppError, AppResult};
use crate::application::interactors::auth::{LoginInteractor, LogoutInteractor};
use crate::application::interactors::profile::{
    GetProfileInteractor, GetProfileListInteractor, UpdateProfileInteractor,
};
use crate::application::interactors::session::ValidateSessionInteractor;
use crate::application::interactors::users::CreateUserInteractor;
use crate::application::interface::crypto::CredentialsHasher;
use crate::infra::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: Pool<Sqlite>,
    pub hasher: Arc<dyn CredentialsHasher>,
    pub config: Arc<AppConfig>,
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

/// Builds a use case over a fresh lazily opened transaction.
#[async_trait]
pub trait FromAppState: Sized {
    async fn from_app_state(state: &AppState) -> AppResult<Self>;
}

// CreateUserInteractor
#[async_trait]
impl FromAppState for CreateUserInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let user_gateway = UserGateway::new(session.clone());
        let profile_gateway = ProfileGateway::new(session.clone());

        Ok(CreateUserInteractor::new(
            Arc::new(session),
            Arc::new(user_gateway.clone()),
            Arc::new(user_gateway),
            Arc::new(profile_gateway),
            state.hasher.clone(),
            state.config.profiles.default_image.clone(),
        ))
    }
}

impl<S> FromRequestParts<S> for CreateUserInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        CreateUserInteractor::from_app_state(&app_state).await
    }
}

// LoginInteractor
#[async_trait]
impl FromAppState for LoginInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let user_gateway = UserGateway::new(session.clone());
        let session_gateway = SessionGateway::new(session.clone());

        Ok(LoginInteractor::new(
            Arc::new(session),
            Arc::new(user_gateway),
            Arc::new(session_gateway),
            state.hasher.clone(),
        ))
    }
}

impl<S> FromRequestParts<S> for LoginInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        LoginInteractor::from_app_state(&app_state).await
    }
}

// LogoutInteractor
#[async_trait]
impl FromAppState for LogoutInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let session_gateway = Arc::new(SessionGateway::new(session.clone()));

        Ok(LogoutInteractor::new(Arc::new(session), session_gateway))
    }
}

impl<S> FromRequestParts<S> for LogoutInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        LogoutInteractor::from_app_state(&app_state).await
    }
}

// ValidateSessionInteractor
#[async_trait]
impl FromAppState for ValidateSessionInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let session_reader = Arc::new(SessionGateway::new(session.clone()));
        let session_writer = Arc::new(SessionGateway::new(session.clone()));

        Ok(ValidateSessionInteractor::new(
            Arc::new(session),
            session_reader,
            session_writer,
        ))
    }
}

impl<S> FromRequestParts<S> for ValidateSessionInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        ValidateSessionInteractor::from_app_state(&app_state).await
    }
}

// GetProfileInteractor
#[async_trait]
impl FromAppState for GetProfileInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = Arc::new(ProfileGateway::new(session));

        Ok(GetProfileInteractor::new(profile_gateway))
    }
}

impl<S> FromRequestParts<S> for GetProfileInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        GetProfileInteractor::from_app_state(&app_state).await
    }
}

// GetProfileListInteractor
#[async_trait]
impl FromAppState for GetProfileListInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = Arc::new(ProfileGateway::new(session));

        Ok(GetProfileListInteractor::new(profile_gateway))
    }
}

impl<S> FromRequestParts<S> for GetProfileListInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        GetProfileListInteractor::from_app_state(&app_state).await
    }
}

// UpdateProfileInteractor
#[async_trait]
impl FromAppState for UpdateProfileInteractor {
    async fn from_app_state(state: &AppState) -> AppResult<Self> {
        let session = SqlxSession::new_lazy(state.pool.clone());
        let profile_gateway = ProfileGateway::new(session.clone());

        Ok(UpdateProfileInteractor::new(
            Arc::new(session),
            Arc::new(profile_gateway.clone()),
            Arc::new(profile_gateway),
        ))
    }
}

impl<S> FromRequestParts<S> for UpdateProfileInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        UpdateProfileInteractor::from_app_state(&app_state).await
    }
}
