use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{self, Uri};
use axum::response::Redirect;
use axum::routing::{get, post};
use axum::{Router, middleware};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use uuid::Uuid;

use crate::adapter::http::docs::{docs_ui, openapi_json};
use crate::adapter::http::middleware::auth::{auth_middleware, optional_auth_middleware, session_cookie_middleware};
use crate::adapter::http::routes::auth::{login, logout};
use crate::adapter::http::routes::profile::{get_profile, list_profiles, update_profile};
use crate::adapter::http::routes::user::register;
use crate::infra::config::AppConfig;
use crate::infra::state::AppState;

const ALLOWED_METHODS: [http::Method; 3] = [http::Method::GET, http::Method::POST, http::Method::PUT];

fn build_cors(config: &AppConfig) -> CorsLayer {
    let has_wildcard = config.application.allow_origins.iter().any(|s| s == "*");

    if has_wildcard {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(ALLOWED_METHODS)
            .allow_headers([CONTENT_TYPE, AUTHORIZATION]);
    }
    let origins: Vec<http::HeaderValue> = config
        .application
        .allow_origins
        .iter()
        .filter_map(|s| {
            s.parse::<http::HeaderValue>()
                .map_err(|e| {
                    tracing::warn!("Failed to parse origin '{}': {}", s, e);
                })
                .ok()
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
}

pub fn user_router() -> Router<AppState> {
    Router::new().route("/register", post(register))
}

pub fn auth_router(state: AppState) -> Router<AppState> {
    let public_routes = Router::new().route("/login", post(login));

    let protected_routes = Router::new()
        .route("/logout", post(logout))
        .route_layer(middleware::from_fn_with_state(state.clone(), session_cookie_middleware))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));
    Router::new().merge(public_routes).merge(protected_routes)
}

/// Anonymous callers may read; `update_profile` demands an `AuthUser` itself.
pub fn profile_router(state: AppState) -> Router<AppState> {
    let routes = Router::new()
        .route("/profiles/", get(list_profiles))
        .route("/profiles/{id}/", get(get_profile).put(update_profile))
        .route_layer(middleware::from_fn_with_state(state.clone(), session_cookie_middleware))
        .route_layer(middleware::from_fn_with_state(state.clone(), optional_auth_middleware));

    Router::new()
        .merge(routes)
        .route("/profiles", get(append_slash))
        .route("/profiles/{id}", get(append_slash))
}

async fn append_slash(uri: Uri) -> Redirect {
    let location = match uri.query() {
        Some(query) => format!("{}/?{}", uri.path(), query),
        None => format!("{}/", uri.path()),
    };
    Redirect::permanent(&location)
}

pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(profile_router(state.clone()))
        .nest("/users", user_router())
        .nest("/auth", auth_router(state.clone()))
        .route("/openapi.json", get(openapi_json))
        .route("/docs", get(docs_ui))
}

pub fn create_app(config: &AppConfig, state: AppState) -> Router {
    let cors = build_cors(config);
    Router::new()
        .merge(router(state.clone()))
        .with_state(state.clone())
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &http::Request<_>| {
                    let request_id = Uuid::now_v7();
                    tracing::info_span!(
                        "http-request",
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                        request_id = %request_id
                    )
                })
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::header::LOCATION;
    use axum::http::{Request, StatusCode};
    use rstest::rstest;
    use tower::ServiceExt;

    use crate::infra::app::create_app;
    use crate::infra::config::AppConfig;
    use crate::infra::state::AppState;
    use crate::tests::fixtures::{init_test_app_state, test_config};
    use crate::tests::helpers::json_body;

    #[rstest]
    #[tokio::test]
    async fn test_redirect_keeps_query(#[future] init_test_app_state: anyhow::Result<AppState>) {
        let state = init_test_app_state.await.expect("init app state");
        let app = create_app(state.config.as_ref(), state.clone());

        let request = Request::builder().uri("/profiles?page=2").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/profiles/?page=2");
    }

    #[rstest]
    #[tokio::test]
    async fn test_openapi_json_served(#[future] init_test_app_state: anyhow::Result<AppState>) {
        let state = init_test_app_state.await.expect("init app state");
        let app = create_app(state.config.as_ref(), state.clone());

        let request = Request::builder().uri("/openapi.json").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[rstest]
    #[tokio::test]
    async fn test_unknown_route(#[future] init_test_app_state: anyhow::Result<AppState>) {
        let state = init_test_app_state.await.expect("init app state");
        let app = create_app(state.config.as_ref(), state.clone());

        let request = Request::builder().uri("/posts/").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[rstest]
    #[tokio::test]
    async fn test_openapi_json_names_session_cookie(test_config: AppConfig) {
        let mut config = test_config;
        config.session.cookie_name = "profiles_sid".to_string();
        let state = init_test_app_state(config).await.expect("init app state");
        let app = create_app(state.config.as_ref(), state.clone());

        let request = Request::builder().uri("/openapi.json").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let doc: serde_json::Value = json_body(response).await;

        assert_eq!(doc["components"]["securitySchemes"]["cookieAuth"]["name"], "profiles_sid");
    }
}
