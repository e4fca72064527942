use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// Query-string extractor that deserializes and then runs `validator` rules.
///
/// Both malformed input (missing or non-numeric fields) and rule violations
/// are rejected with 422 before the handler body runs.
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::InvalidParams(anyhow::anyhow!(rejection.body_text())))?;

        value.validate()?;

        Ok(ValidatedQuery(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Debug, Deserialize, Validate)]
    struct Params {
        #[validate(length(min = 2))]
        name: String,
        #[validate(range(min = 1, max = 10))]
        #[serde(default = "default_count")]
        count: i64,
    }

    fn default_count() -> i64 {
        5
    }

    async fn handler(ValidatedQuery(params): ValidatedQuery<Params>) -> String {
        format!("{}:{}", params.name, params.count)
    }

    async fn status_for(uri: &str) -> StatusCode {
        Router::new()
            .route("/", get(handler))
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn accepts_valid_params_and_applies_defaults() {
        assert_eq!(status_for("/?name=ab").await, StatusCode::OK);
        assert_eq!(status_for("/?name=ab&count=10").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn rule_violations_are_unprocessable() {
        assert_eq!(status_for("/?name=a").await, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            status_for("/?name=ab&count=11").await,
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[tokio::test]
    async fn malformed_params_are_unprocessable() {
        assert_eq!(status_for("/").await, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            status_for("/?name=ab&count=many").await,
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
