//! Request extractors that report failures through [`ApiError`].

use axum::extract::path::ErrorKind;
use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequestParts, MatchedPath, Path};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::error::QueryError;

use super::response::ApiError;
use super::state::AppState;

/// Province names captured from the request path.
///
/// A segment that does not decode to UTF-8 cannot name a province, so it is
/// answered like any other unknown province.
#[derive(Debug)]
pub struct ProvinceSegments<T>(pub T);

impl<T> FromRequestParts<AppState> for ProvinceSegments<T>
where
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, ApiError> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(path_error(parts, rejection, state)),
        }
    }
}

fn path_error(parts: &Parts, rejection: PathRejection, state: &AppState) -> ApiError {
    if let PathRejection::FailedToDeserializePathParams(err) = &rejection {
        if let ErrorKind::InvalidUtf8InPathParam { key } = err.kind() {
            let input = raw_segment(parts, key).unwrap_or(key).to_string();
            return ApiError::NotFound(QueryError::ProvinceNotFound { input }.to_string());
        }
    }
    ApiError::Internal {
        detail: rejection.body_text(),
        expose: state.config().expose_internal_errors,
    }
}

/// The still-encoded URI segment matched by `{key}` in the route template.
fn raw_segment<'a>(parts: &'a Parts, key: &str) -> Option<&'a str> {
    let template = parts.extensions.get::<MatchedPath>()?.as_str();
    let placeholder = format!("{{{key}}}");
    template
        .split('/')
        .zip(parts.uri.path().split('/'))
        .find(|(segment, _)| *segment == placeholder)
        .map(|(_, raw)| raw)
}
