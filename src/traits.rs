//! Core traits for the two connectivity sources.
//!
//! The direct-adjacency graph and the curated route table are separate
//! data sources. Search code only sees [`AdjacencyProvider`]; the table
//! is only consulted through [`RouteTableProvider`].

use crate::path::ProvincePath;
use crate::province::Province;

/// Direct province-to-province links.
pub trait AdjacencyProvider {
    /// Directly connected provinces, in stored order. Empty when none.
    fn neighbors(&self, province: Province) -> &[Province];

    fn is_directly_connected(&self, from: Province, to: Province) -> bool {
        self.neighbors(from).contains(&to)
    }
}

/// Precomputed routes between ordered province pairs.
pub trait RouteTableProvider {
    /// Route starting at `from` and ending at `to`, if one is stored in
    /// either direction.
    fn lookup(&self, from: Province, to: Province) -> Option<ProvincePath>;
}
