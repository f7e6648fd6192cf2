//! Provincial connectivity and routing for Afghan provinces.
//!
//! Two independent connectivity sources: a sparse direct-adjacency graph
//! and a curated route table. Province names are accepted in English, Dari
//! or Pashto and rendered back in all three.

pub mod audit;
pub mod client;
pub mod config;
pub mod error;
pub mod graph;
pub mod path;
pub mod province;
pub mod query;
pub mod route_table;
pub mod search;
pub mod server;
pub mod traits;
pub mod translator;

pub use error::{QueryError, RouteTableError};
pub use graph::ConnectivityGraph;
pub use path::ProvincePath;
pub use province::{Language, Province};
pub use query::{RouteQueryService, RouteStatus};
pub use route_table::RouteTable;
