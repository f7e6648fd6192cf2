//! Consistency report between the route table and the adjacency graph.
//!
//! The two models are independent data sources. The audit only measures
//! where they disagree; it never repairs or merges either one.

use rayon::prelude::*;
use serde::Serialize;

use crate::graph::ConnectivityGraph;
use crate::province::Province;
use crate::route_table::RouteTable;
use crate::search::shortest_path;
use crate::traits::{AdjacencyProvider, RouteTableProvider};

/// A curated leg that is not a direct edge in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnlinkedLeg {
    pub from: Province,
    pub to: Province,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    /// Ordered pairs of distinct provinces considered.
    pub pairs: usize,
    /// Pairs answered by the route table (either direction).
    pub table_pairs: usize,
    /// Pairs reachable by searching the graph.
    pub graph_pairs: usize,
    /// Pairs connected by the table but not reachable in the graph.
    pub table_only: usize,
    /// Pairs reachable in the graph but absent from the table.
    pub graph_only: usize,
    /// Distinct curated legs that the graph does not record as edges.
    pub unlinked_legs: Vec<UnlinkedLeg>,
    /// Graph edges recorded in one direction only.
    pub one_way_edges: usize,
    /// Entries dropped while loading the table.
    pub rejected_entries: usize,
}

#[derive(Default)]
struct PairCounts {
    pairs: usize,
    table: usize,
    graph: usize,
    table_only: usize,
    graph_only: usize,
}

impl PairCounts {
    fn merge(self, other: Self) -> Self {
        Self {
            pairs: self.pairs + other.pairs,
            table: self.table + other.table,
            graph: self.graph + other.graph,
            table_only: self.table_only + other.table_only,
            graph_only: self.graph_only + other.graph_only,
        }
    }
}

/// Compares both models for every ordered pair of distinct provinces.
pub fn audit(graph: &ConnectivityGraph, table: &RouteTable) -> AuditReport {
    let counts = Province::ALL
        .par_iter()
        .map(|&from| {
            let mut counts = PairCounts::default();
            for &to in Province::ALL.iter().filter(|&&to| to != from) {
                let in_table = table.lookup(from, to).is_some();
                let in_graph = shortest_path(graph, from, to).is_some();
                counts.pairs += 1;
                counts.table += usize::from(in_table);
                counts.graph += usize::from(in_graph);
                counts.table_only += usize::from(in_table && !in_graph);
                counts.graph_only += usize::from(in_graph && !in_table);
            }
            counts
        })
        .reduce(PairCounts::default, PairCounts::merge);

    let mut unlinked_legs: Vec<UnlinkedLeg> = table
        .routes()
        .flat_map(|route| route.legs().collect::<Vec<_>>())
        .filter(|&(from, to)| !graph.is_directly_connected(from, to))
        .map(|(from, to)| UnlinkedLeg { from, to })
        .collect();
    unlinked_legs.sort_by_key(|leg| (leg.from, leg.to));
    unlinked_legs.dedup();

    AuditReport {
        pairs: counts.pairs,
        table_pairs: counts.table,
        graph_pairs: counts.graph,
        table_only: counts.table_only,
        graph_only: counts.graph_only,
        unlinked_legs,
        one_way_edges: graph.one_way_edges().len(),
        rejected_entries: table.rejected().len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::province::Province::*;

    #[test]
    fn test_small_models() {
        let graph = ConnectivityGraph::from_edges(&[(Kabul, Parwan), (Parwan, Baghlan)]);
        let table = RouteTable::from_entries(&[
            ("Kabul-Parwan", "Kabul → Parwan"),
            ("Herat-Kabul", "Herat → Ghor → Bamyan → Parwan → Kabul"),
            ("Badghis-Baghlan", "Badghis →"),
        ]);
        let report = audit(&graph, &table);

        assert_eq!(report.pairs, 34 * 33);
        assert_eq!(report.table_pairs, 4);
        // Kabul, Parwan and Baghlan are mutually reachable.
        assert_eq!(report.graph_pairs, 6);
        assert_eq!(report.table_only, 2);
        assert_eq!(report.graph_only, 4);
        assert_eq!(report.rejected_entries, 1);
        assert_eq!(report.one_way_edges, 0);
        assert_eq!(report.unlinked_legs.len(), 3);
        assert!(report.unlinked_legs.contains(&UnlinkedLeg { from: Herat, to: Ghor }));
    }

    #[test]
    fn test_counts_one_way_edges() {
        let graph = ConnectivityGraph::from_adjacency(&[(Khost, &[Paktia]), (Paktia, &[Logar])]);
        let table = RouteTable::from_entries(&[]);
        let report = audit(&graph, &table);
        assert_eq!(report.one_way_edges, 2);
        // Khost reaches Paktia and Logar; Paktia reaches Logar.
        assert_eq!(report.graph_pairs, 3);
    }

    #[test]
    fn test_builtin_models_disagree() {
        let report = audit(ConnectivityGraph::builtin(), RouteTable::builtin());
        assert_eq!(report.rejected_entries, 2);
        assert!(report.table_only > 0);
        assert!(report.graph_only > 0);
        assert!(!report.unlinked_legs.is_empty());
    }
}
