//! Provincial connection handlers.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::debug;

use crate::error::QueryError;
use crate::path::{LocalizedText, ProvincePath};
use crate::query::RouteStatus;

use super::extract::ProvinceSegments;
use super::response::{
    ApiError, CheckRouteResponse, ConnectionsResponse, FindRoutesResponse, LocalizedRoutes,
    ProvinceConnectionsResponse, ShortestRouteResponse,
};
use super::state::AppState;

type ApiResult<T> = Result<Json<T>, ApiError>;

fn query_error(state: &AppState) -> impl Fn(QueryError) -> ApiError + '_ {
    move |err| ApiError::from_query(err, state.config().expose_internal_errors)
}

/// Full adjacency map.
pub async fn list_connections(State(state): State<AppState>) -> Json<ConnectionsResponse> {
    let connections = state.service().graph().connections().collect();
    Json(ConnectionsResponse {
        success: true,
        connections,
    })
}

/// Direct neighbours of one province.
pub async fn province_connections(
    State(state): State<AppState>,
    ProvinceSegments(province): ProvinceSegments<String>,
) -> ApiResult<ProvinceConnectionsResponse> {
    let (province, connections) = state
        .service()
        .neighbors(&province)
        .map_err(query_error(&state))?;
    Ok(Json(ProvinceConnectionsResponse {
        success: true,
        province,
        connections,
    }))
}

pub async fn check_route(
    State(state): State<AppState>,
    ProvinceSegments((from, to)): ProvinceSegments<(String, String)>,
) -> ApiResult<CheckRouteResponse> {
    let check = state
        .service()
        .check_route(&from, &to)
        .map_err(query_error(&state))?;

    let message = match check.status {
        RouteStatus::TableRoute => format!(
            "Route found from {} to {} with {} hops",
            check.from,
            check.to,
            check.hops()
        ),
        RouteStatus::DirectOnly => {
            "Direct connection exists, but no detailed route available".to_string()
        }
        RouteStatus::NotConnected => {
            format!("No route found between {} and {}", check.from, check.to)
        }
    };

    Ok(Json(CheckRouteResponse {
        success: true,
        connected: check.connected(),
        route: check.localized(),
        route_details: check
            .path
            .as_ref()
            .map(ProvincePath::details)
            .unwrap_or_default(),
        hops: check.hops(),
        message,
    }))
}

#[derive(Debug, Deserialize)]
pub struct FindRoutesParams {
    #[serde(rename = "maxHops")]
    max_hops: Option<String>,
}

pub async fn find_routes(
    State(state): State<AppState>,
    ProvinceSegments((from, to)): ProvinceSegments<(String, String)>,
    params: Result<Query<FindRoutesParams>, QueryRejection>,
) -> ApiResult<FindRoutesResponse> {
    // An unreadable query string counts as no bound at all.
    let requested = match params {
        Ok(Query(params)) => params.max_hops,
        Err(rejection) => {
            debug!(%rejection, "ignoring query string");
            None
        }
    };
    let service = state.service();
    let max_hops = service.options().effective_max_hops(requested.as_deref());
    let routes = service
        .find_routes(&from, &to, max_hops)
        .map_err(query_error(&state))?;

    Ok(Json(FindRoutesResponse {
        success: true,
        routes: LocalizedRoutes::from_paths(&routes),
        route_details: routes.iter().map(ProvincePath::details).collect(),
        count: routes.len(),
    }))
}

pub async fn shortest_route(
    State(state): State<AppState>,
    ProvinceSegments((from, to)): ProvinceSegments<(String, String)>,
) -> ApiResult<ShortestRouteResponse> {
    let route = state
        .service()
        .shortest_route(&from, &to)
        .map_err(query_error(&state))?
        .ok_or_else(|| ApiError::NotFound(format!("No route found between {from} and {to}")))?;

    Ok(Json(ShortestRouteResponse {
        success: true,
        route: LocalizedText::for_path(Some(&route)),
        route_details: route.details(),
        hops: route.hops(),
    }))
}
