use std::sync::Arc;

use axum::{Json, extract::State, response::Html};
use utoipa::{
    Modify, OpenApi,
    openapi::{
        OpenApi as OpenApiDoc,
        security::{ApiKey, ApiKeyValue, SecurityScheme},
    },
};

use crate::adapter::http::{
    app_error_impl::ErrorResponse,
    routes::{auth, profile, user},
    schema::{
        ValidPassword,
        auth::{LoginRequest, MessageResponse},
        id::IdResponse,
        profile::{GetProfileResponse, ProfileListResponse, UpdateProfileRequest},
        user::CreateUserRequest,
    },
};
use crate::infra::config::AppConfig;

/// Documents the session cookie under the name the server actually sets.
struct SessionCookieScheme<'a> {
    cookie_name: &'a str,
}

impl Modify for SessionCookieScheme<'_> {
    fn modify(&self, openapi: &mut OpenApiDoc) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "cookieAuth",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(self.cookie_name))),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        user::register,
        auth::login,
        auth::logout,
        profile::list_profiles,
        profile::get_profile,
        profile::update_profile
    ),
    components(
        schemas(
            ErrorResponse,
            LoginRequest,
            MessageResponse,
            IdResponse,
            CreateUserRequest,
            ValidPassword,
            GetProfileResponse,
            ProfileListResponse,
            UpdateProfileRequest
        )
    )
)]
pub struct ApiDoc;

pub fn api_doc(cookie_name: &str) -> OpenApiDoc {
    let mut doc = ApiDoc::openapi();
    SessionCookieScheme { cookie_name }.modify(&mut doc);
    doc
}

pub async fn openapi_json(State(config): State<Arc<AppConfig>>) -> Json<OpenApiDoc> {
    Json(api_doc(&config.session.cookie_name))
}

pub async fn docs_ui() -> Html<&'static str> {
    Html(
        r#"
            <!doctype html>
            <html>
              <head>
                <title>Profiles API docs</title>
                <meta charset="utf-8">
                <meta name="viewport" content="width=device-width, initial-scale=1">
                <script src="https://unpkg.com/@stoplight/elements/web-components.min.js"></script>
                <link rel="stylesheet" href="https://unpkg.com/@stoplight/elements/styles.min.css">
              </head>
              <body style="height: 100%; margin: 0;">
                <elements-api
                  apiDescriptionUrl="openapi.json"
                  basePath="/"
                  router="hash"
                />
              </body>
            </html>
        "#,
    )
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::api_doc;

    #[test]
    fn test_openapi_lists_profile_routes() {
        let doc = api_doc("session_id");
        assert!(doc.paths.paths.contains_key("/profiles/"));
        assert!(doc.paths.paths.contains_key("/profiles/{id}/"));
        assert!(doc.paths.paths.contains_key("/users/register"));
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("cookieAuth"));
    }

    #[rstest]
    #[case("session_id")]
    #[case("profiles_sid")]
    fn test_cookie_scheme_uses_configured_name(#[case] cookie_name: &str) {
        let doc = serde_json::to_value(api_doc(cookie_name)).unwrap();
        let scheme = &doc["components"]["securitySchemes"]["cookieAuth"];

        assert_eq!(scheme["in"], "cookie");
        assert_eq!(scheme["name"], cookie_name);
    }
}
