//! Route queries over the province tables.
//!
//! `check_route` prefers the curated route table and only falls back to a
//! direct-adjacency check. `find_routes` and `shortest_route` search the
//! adjacency graph alone. The two models are never merged.

use serde::Serialize;
use tracing::debug;

use crate::error::{QueryError, QueryResult};
use crate::graph::ConnectivityGraph;
use crate::path::{LocalizedText, ProvincePath};
use crate::province::Province;
use crate::route_table::RouteTable;
use crate::search;
use crate::traits::{AdjacencyProvider, RouteTableProvider};
use crate::translator::to_canonical;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// Hop bound used by callers that do not supply a valid one.
    pub default_max_hops: usize,
    /// Largest hop bound accepted by `find_routes`.
    pub max_hops_cap: usize,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            default_max_hops: 3,
            max_hops_cap: 8,
        }
    }
}

impl QueryOptions {
    /// Lenient hop bound: missing, unparsable or zero values use the
    /// default, large values are clamped to the cap.
    pub fn effective_max_hops(&self, requested: Option<&str>) -> usize {
        match requested.and_then(|raw| raw.trim().parse::<usize>().ok()) {
            Some(0) | None => self.default_max_hops.min(self.max_hops_cap),
            Some(hops) => hops.min(self.max_hops_cap),
        }
    }
}

/// How `check_route` established connectivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteStatus {
    /// A curated route exists.
    TableRoute,
    /// Provinces are direct neighbours but no curated route is stored.
    DirectOnly,
    NotConnected,
}

/// Outcome of `check_route`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteCheck {
    pub from: Province,
    pub to: Province,
    pub status: RouteStatus,
    pub path: Option<ProvincePath>,
}

impl RouteCheck {
    pub fn connected(&self) -> bool {
        self.status != RouteStatus::NotConnected
    }

    /// `len - 1` for a curated route, otherwise 0.
    pub fn hops(&self) -> usize {
        self.path.as_ref().map_or(0, ProvincePath::hops)
    }

    pub fn localized(&self) -> LocalizedText {
        LocalizedText::for_path(self.path.as_ref())
    }
}

/// Resolves localized input and answers route questions.
#[derive(Debug, Clone, Copy)]
pub struct RouteQueryService<'a> {
    graph: &'a ConnectivityGraph,
    table: &'a RouteTable,
    options: QueryOptions,
}

impl RouteQueryService<'static> {
    /// Service over the compiled-in graph and route table.
    pub fn builtin() -> Self {
        Self::new(ConnectivityGraph::builtin(), RouteTable::builtin())
    }
}

impl<'a> RouteQueryService<'a> {
    pub fn new(graph: &'a ConnectivityGraph, table: &'a RouteTable) -> Self {
        Self {
            graph,
            table,
            options: QueryOptions::default(),
        }
    }

    pub fn with_options(mut self, options: QueryOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &QueryOptions {
        &self.options
    }

    pub fn graph(&self) -> &'a ConnectivityGraph {
        self.graph
    }

    pub fn table(&self) -> &'a RouteTable {
        self.table
    }

    /// Canonical province for a canonical, Dari or Pashto name.
    pub fn resolve(&self, name: &str) -> QueryResult<Province> {
        to_canonical(name).ok_or_else(|| QueryError::ProvinceNotFound {
            input: name.to_string(),
        })
    }

    /// Resolves `name` and returns its direct neighbours.
    pub fn neighbors(&self, name: &str) -> QueryResult<(Province, &'a [Province])> {
        let province = self.resolve(name)?;
        Ok((province, self.graph.neighbors(province)))
    }

    /// Curated route first, then a direct-adjacency check.
    pub fn check_route(&self, from: &str, to: &str) -> QueryResult<RouteCheck> {
        let from = self.resolve(from)?;
        let to = self.resolve(to)?;

        let check = if let Some(path) = self.table.lookup(from, to) {
            RouteCheck {
                from,
                to,
                status: RouteStatus::TableRoute,
                path: Some(path),
            }
        } else if self.graph.is_directly_connected(from, to) {
            RouteCheck {
                from,
                to,
                status: RouteStatus::DirectOnly,
                path: None,
            }
        } else {
            RouteCheck {
                from,
                to,
                status: RouteStatus::NotConnected,
                path: None,
            }
        };

        debug!(%from, %to, status = ?check.status, hops = check.hops(), "route check");
        Ok(check)
    }

    /// Simple paths over the adjacency graph with at most `max_hops` edges.
    pub fn find_routes(
        &self,
        from: &str,
        to: &str,
        max_hops: usize,
    ) -> QueryResult<Vec<ProvincePath>> {
        let from = self.resolve(from)?;
        let to = self.resolve(to)?;
        if max_hops == 0 || max_hops > self.options.max_hops_cap {
            return Err(QueryError::InvalidHopBound {
                requested: max_hops,
                max: self.options.max_hops_cap,
            });
        }

        let routes = search::all_paths(self.graph, from, to, max_hops);
        debug!(%from, %to, max_hops, count = routes.len(), "route search");
        Ok(routes)
    }

    /// Fewest-hop path over the adjacency graph, `None` when unreachable.
    pub fn shortest_route(&self, from: &str, to: &str) -> QueryResult<Option<ProvincePath>> {
        let from = self.resolve(from)?;
        let to = self.resolve(to)?;

        let route = search::shortest_path(self.graph, from, to);
        debug!(%from, %to, found = route.is_some(), "shortest route");
        Ok(route)
    }
}
