//! JSON response bodies and error mapping.

use std::any::Any;
use std::collections::BTreeMap;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::{error, warn};

use crate::error::QueryError;
use crate::path::{LocalizedName, LocalizedText, ProvincePath};
use crate::province::{Language, Province};

const GENERIC_INTERNAL_MESSAGE: &str = "Internal server error";

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
}

/// Failure outcome of a handler.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Internal { detail: String, expose: bool },
}

impl ApiError {
    /// Maps a query error. Unresolved provinces are 404s; anything else
    /// means the handler passed inputs the service rejects.
    pub fn from_query(err: QueryError, expose: bool) -> Self {
        match err {
            QueryError::ProvinceNotFound { .. } => ApiError::NotFound(err.to_string()),
            QueryError::InvalidHopBound { .. } => ApiError::Internal {
                detail: err.to_string(),
                expose,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(message) => {
                warn!(%message, "not found");
                (StatusCode::NOT_FOUND, message)
            }
            ApiError::Internal { detail, expose } => {
                error!(%detail, "internal error");
                let message = if expose {
                    detail
                } else {
                    GENERIC_INTERNAL_MESSAGE.to_string()
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };
        (
            status,
            Json(ErrorBody {
                success: false,
                message,
            }),
        )
            .into_response()
    }
}

/// Turns a handler panic into the standard 500 body.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>, expose: bool) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "handler panicked".to_string()
    };
    ApiError::Internal { detail, expose }.into_response()
}

#[derive(Debug, Serialize)]
pub struct ConnectionsResponse {
    pub success: bool,
    pub connections: BTreeMap<Province, &'static [Province]>,
}

#[derive(Debug, Serialize)]
pub struct ProvinceConnectionsResponse {
    pub success: bool,
    pub province: Province,
    pub connections: &'static [Province],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRouteResponse {
    pub success: bool,
    pub connected: bool,
    pub route: LocalizedText,
    pub route_details: Vec<LocalizedName>,
    pub hops: usize,
    pub message: String,
}

/// Rendered routes, one string per route in each language.
#[derive(Debug, Default, Serialize)]
pub struct LocalizedRoutes {
    pub en: Vec<String>,
    pub prs: Vec<String>,
    pub pbt: Vec<String>,
}

impl LocalizedRoutes {
    pub fn from_paths(paths: &[ProvincePath]) -> Self {
        let render = |language: Language| -> Vec<String> {
            paths.iter().map(|p| p.render(language)).collect()
        };
        Self {
            en: render(Language::En),
            prs: render(Language::Prs),
            pbt: render(Language::Pbt),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindRoutesResponse {
    pub success: bool,
    pub routes: LocalizedRoutes,
    pub route_details: Vec<Vec<LocalizedName>>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortestRouteResponse {
    pub success: bool,
    pub route: LocalizedText,
    pub route_details: Vec<LocalizedName>,
    pub hops: usize,
}
