use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Json, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::application::app_error::AppError;

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidJson(value))
    }
}

/// Query-string counterpart of [`ValidJson`]. Rejections go through
/// `AppError` so they carry the JSON error body.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Query<T>: FromRequestParts<S, Rejection = QueryRejection>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        value.validate()?;
        Ok(ValidQuery(value))
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use rstest::rstest;
    use serde::Deserialize;
    use tower::ServiceExt;
    use validator::Validate;

    use super::{ValidJson, ValidQuery};
    use crate::adapter::http::app_error_impl::ErrorResponse;
    use crate::tests::helpers::json_body;

    #[derive(Debug, Deserialize, Validate)]
    struct Payload {
        #[validate(length(min = 3))]
        name: String,
    }

    async fn echo(ValidJson(payload): ValidJson<Payload>) -> Json<String> {
        Json(payload.name)
    }

    fn request(body: &'static str, content_type: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", content_type)
            .body(Body::from(body))
            .unwrap()
    }

    #[rstest]
    #[case(r#"{"name":"adam"}"#, "application/json", StatusCode::OK)]
    #[case(r#"{"name":"ad"}"#, "application/json", StatusCode::BAD_REQUEST)]
    #[case(r#"{"name":"#, "application/json", StatusCode::BAD_REQUEST)]
    #[case(r#"{"other":"adam"}"#, "application/json", StatusCode::UNPROCESSABLE_ENTITY)]
    #[case(r#"{"name":"adam"}"#, "text/plain", StatusCode::UNSUPPORTED_MEDIA_TYPE)]
    #[tokio::test]
    async fn test_valid_json_rejections(
        #[case] body: &'static str,
        #[case] content_type: &str,
        #[case] expected: StatusCode,
    ) {
        let app = Router::new().route("/", post(echo));

        let response = app.oneshot(request(body, content_type)).await.unwrap();

        assert_eq!(response.status(), expected);
    }

    #[derive(Debug, Deserialize, Validate)]
    struct Filter {
        #[validate(range(min = 1))]
        limit: Option<i64>,
    }

    async fn limit(ValidQuery(filter): ValidQuery<Filter>) -> Json<Option<i64>> {
        Json(filter.limit)
    }

    #[rstest]
    #[case("/", StatusCode::OK)]
    #[case("/?limit=5", StatusCode::OK)]
    #[case("/?limit=0", StatusCode::BAD_REQUEST)]
    #[case("/?limit=abc", StatusCode::BAD_REQUEST)]
    #[tokio::test]
    async fn test_valid_query_rejections(#[case] uri: &str, #[case] expected: StatusCode) {
        let app = Router::new().route("/", get(limit));
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), expected);
    }

    #[tokio::test]
    async fn test_malformed_query_has_json_error() {
        let app = Router::new().route("/", get(limit));
        let request = Request::builder().uri("/?limit=abc").body(Body::empty()).unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = json_body(response).await;
        assert!(body.error.contains("limit"));
    }
}
