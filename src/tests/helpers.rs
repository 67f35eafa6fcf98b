#![cfg(test)]

use axum::Router;
use axum::body::Body;
use axum::http::header::SET_COOKIE;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use crate::application::dto::user::CreateUserDTO;
use crate::application::interactors::users::CreateUserInteractor;
use crate::domain::entities::id::Id;
use crate::domain::entities::user::User;
use crate::infra::state::{AppState, FromAppState};

/// Registers a user the way the registration endpoint does, skipping
/// request validation so short passwords are accepted.
pub async fn create_user(state: &AppState, username: &str, password: &str) -> Id<User> {
    let interactor = CreateUserInteractor::from_app_state(state)
        .await
        .expect("build create user interactor");
    let created = interactor
        .execute(CreateUserDTO {
            username: username.to_string(),
            password: password.to_string(),
        })
        .await
        .expect("create user");
    Id::new(created.id)
}

/// Logs in through the HTTP endpoint and returns a `Cookie` header value.
pub async fn login(app: &Router, username: &str, password: &str) -> String {
    let body = serde_json::json!({ "username": username, "password": password, "remember_me": false });
    let request = Request::builder()
        .method("POST")
        .uri("/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK, "login failed for {}", username);

    let set_cookie = response
        .headers()
        .get(SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("session cookie");
    set_cookie
        .split(';')
        .next()
        .expect("cookie pair")
        .to_string()
}

pub async fn json_body<T: DeserializeOwned>(response: Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("decode json body")
}

pub async fn count_sessions(state: &AppState) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM sessions")
        .fetch_one(&state.pool)
        .await
        .expect("count sessions")
}
