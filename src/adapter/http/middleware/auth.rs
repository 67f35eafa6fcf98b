use crate::{
    adapter::http::middleware::extractor::AuthUser,
    application::{
        app_error::{AppError, AppResult},
        dto::session::{SessionDTO, SessionValidationResult},
        interactors::session::ValidateSessionInteractor,
    },
    infra::config::{AppConfig, SessionConfig},
};
use axum::{
    extract::{Request, State},
    http::header::{COOKIE, SET_COOKIE},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub struct SessionRotation {
    pub new_session_id: String,
    pub remember_me: bool,
}

/// Rejects the request with 401 unless it carries a valid session cookie.
pub async fn auth_middleware(
    State(config): State<Arc<AppConfig>>,
    interactor: ValidateSessionInteractor,
    mut request: Request,
    next: Next,
) -> AppResult<Response> {
    let session_id = extract_session_id(&request, &config.session.cookie_name).ok_or(AppError::InvalidCredentials)?;
    let status = validate_session(interactor, session_id, &config.session).await?;
    if !attach_auth_user(&mut request, status) {
        return Err(AppError::InvalidCredentials);
    }

    Ok(next.run(request).await)
}

/// Identifies the caller when a valid session cookie is present and lets
/// the request through anonymously otherwise.
pub async fn optional_auth_middleware(
    State(config): State<Arc<AppConfig>>,
    interactor: ValidateSessionInteractor,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(session_id) = extract_session_id(&request, &config.session.cookie_name) {
        match validate_session(interactor, session_id, &config.session).await {
            Ok(status) => {
                if !attach_auth_user(&mut request, status) {
                    debug!("Ignoring invalid or expired session cookie");
                }
            }
            Err(e) => debug!("Session cookie rejected: {}", e),
        }
    }

    next.run(request).await
}

// Takes the interactor by value so its store connection is released before
// the handler runs.
async fn validate_session(
    interactor: ValidateSessionInteractor,
    session_id: String,
    config_session: &SessionConfig,
) -> AppResult<SessionValidationResult> {
    let dto = SessionDTO {
        id: session_id,
        default_max_lifetime: config_session.default_max_lifetime,
        default_idle_timeout: config_session.default_idle_timeout,
        remembered_max_lifetime: config_session.remembered_max_lifetime,
        remembered_idle_timeout: config_session.remembered_idle_timeout,
        rotation_interval: config_session.rotation_interval,
    };
    let result = interactor.execute(dto).await?;
    Ok(result.status)
}

fn attach_auth_user(request: &mut Request, status: SessionValidationResult) -> bool {
    match status {
        SessionValidationResult::Valid(user_id) => {
            request.extensions_mut().insert(AuthUser { user_id });
            true
        }
        SessionValidationResult::Rotated {
            user_id,
            new_session_id,
            remember_me,
        } => {
            request.extensions_mut().insert(AuthUser { user_id });
            request.extensions_mut().insert(SessionRotation {
                new_session_id: new_session_id.value.to_string(),
                remember_me,
            });
            true
        }
        SessionValidationResult::Expired | SessionValidationResult::Invalid => false,
    }
}

fn extract_session_id(request: &Request, cookie_name: &str) -> Option<String> {
    let cookie_header = request.headers().get(COOKIE).and_then(|v| v.to_str().ok())?;
    let prefix = format!("{}=", cookie_name);

    cookie_header
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(prefix.as_str()))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Sends the rotated session id back to the client.
pub async fn session_cookie_middleware(
    State(config): State<Arc<AppConfig>>,
    request: Request,
    next: Next,
) -> Response {
    let rotated = request.extensions().get::<SessionRotation>().cloned();
    let mut response = next.run(request).await;
    if let Some(rotated) = rotated {
        let cookie = build_session_cookie(&rotated.new_session_id, rotated.remember_me, &config.session);

        if let Ok(value) = cookie.parse() {
            response.headers_mut().insert(SET_COOKIE, value);
        }
    }
    response
}

pub fn build_session_cookie(session_id: &str, remember_me: bool, config: &SessionConfig) -> String {
    let max_age = if remember_me {
        config.remembered_max_lifetime
    } else {
        config.default_max_lifetime
    };

    let secure = if config.cookie_secure { "; Secure" } else { "" };
    let http_only = if config.cookie_http_only { "; HttpOnly" } else { "" };
    format!(
        "{}={}; Path=/; Max-Age={}; SameSite=Lax{}{}",
        config.cookie_name, session_id, max_age, secure, http_only
    )
}

pub fn build_logout_cookie(config: &SessionConfig) -> String {
    format!("{}=; Path=/; Max-Age=0; SameSite=Lax", config.cookie_name)
}
