//! Error types for route queries and route table loading.

use thiserror::Error;

use crate::province::Province;

/// Result type for route queries.
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors returned by [`crate::query::RouteQueryService`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Input did not resolve to a canonical, Dari or Pashto province name.
    #[error("Province '{input}' not found")]
    ProvinceNotFound { input: String },

    /// Hop bound outside `1..=max`.
    #[error("invalid hop bound {requested} (expected 1..={max})")]
    InvalidHopBound { requested: usize, max: usize },
}

/// Reasons a stored route table entry is rejected at load time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    /// Key is not `<province>-<province>` with two distinct provinces.
    #[error("malformed route key {key:?}")]
    MalformedKey { key: String },

    /// A path segment is empty or not a canonical province.
    #[error("route {key:?}: unknown province {segment:?}")]
    UnknownProvince { key: String, segment: String },

    /// Path has fewer than two provinces.
    #[error("route {key:?}: path {path:?} is too short")]
    TooShort { key: String, path: String },

    /// Path does not start and end at the provinces named by the key.
    #[error("route {key:?}: path runs {start} to {end}")]
    EndpointMismatch {
        key: String,
        start: Province,
        end: Province,
    },

    /// A province is visited twice.
    #[error("route {key:?}: {province} appears more than once")]
    RepeatedProvince { key: String, province: Province },
}

impl RouteTableError {
    /// Key of the rejected entry.
    pub fn key(&self) -> &str {
        match self {
            RouteTableError::MalformedKey { key }
            | RouteTableError::UnknownProvince { key, .. }
            | RouteTableError::TooShort { key, .. }
            | RouteTableError::EndpointMismatch { key, .. }
            | RouteTableError::RepeatedProvince { key, .. } => key,
        }
    }
}
