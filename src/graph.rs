//! Direct-adjacency graph between provinces.
//!
//! This is the sparse connectivity model: several provinces have no
//! recorded direct neighbours and are only reachable through the route
//! table. The graph is built once and never mutated.

use std::sync::LazyLock;

use crate::province::Province;
use crate::traits::AdjacencyProvider;

use Province::*;

/// Direct neighbours as recorded, in stored order.
const ADJACENCY: &[(Province, &[Province])] = &[
    (Badakhshan, &[Takhar, Panjshir, Nuristan]),
    (Badghis, &[]),
    (Baghlan, &[Kunduz, Parwan, Bamyan, Takhar, Panjshir]),
    (Balkh, &[Kunduz]),
    (Bamyan, &[Parwan, MaidanWardak, Baghlan]),
    (Daykundi, &[]),
    (Farah, &[]),
    (Faryab, &[]),
    (Ghazni, &[MaidanWardak, Logar, Paktika, Paktia]),
    (Ghor, &[]),
    (Helmand, &[]),
    (Herat, &[]),
    (Jowzjan, &[]),
    (Kabul, &[Parwan, MaidanWardak, Logar, Laghman, Nangarhar, Kapisa]),
    (Kandahar, &[]),
    (Kapisa, &[Kabul, Parwan, Panjshir, Laghman]),
    (Khost, &[Paktia, Paktika]),
    (Kunar, &[Nangarhar, Laghman, Nuristan]),
    (Kunduz, &[Baghlan, Takhar, Balkh]),
    (Laghman, &[Kabul, Nangarhar, Kapisa, Kunar, Nuristan, Panjshir]),
    (Logar, &[Kabul, Ghazni, Paktia, MaidanWardak, Nangarhar]),
    (MaidanWardak, &[Kabul, Ghazni, Bamyan, Parwan, Logar]),
    (Nangarhar, &[Kabul, Laghman, Kunar, Logar, Paktia]),
    (Nimruz, &[]),
    (Nuristan, &[Kunar, Laghman, Panjshir, Badakhshan]),
    (Paktia, &[Logar, Khost, Ghazni, Paktika, Nangarhar]),
    (Paktika, &[Ghazni, Paktia, Khost]),
    (Panjshir, &[Parwan, Kapisa, Laghman, Nuristan, Badakhshan, Takhar, Baghlan]),
    (Parwan, &[Kabul, Baghlan, Kapisa, Panjshir, Bamyan, MaidanWardak]),
    (Samangan, &[]),
    (SarePol, &[]),
    (Takhar, &[Kunduz, Badakhshan, Baghlan, Panjshir]),
    (Uruzgan, &[]),
    (Zabul, &[]),
];

static BUILTIN: LazyLock<ConnectivityGraph> =
    LazyLock::new(|| ConnectivityGraph::from_adjacency(ADJACENCY));

/// Adjacency lists indexed by [`Province::index`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectivityGraph {
    neighbors: Vec<Vec<Province>>,
}

impl ConnectivityGraph {
    /// The compiled-in graph.
    pub fn builtin() -> &'static ConnectivityGraph {
        &BUILTIN
    }

    /// Builds a graph from `(province, neighbours)` rows. Provinces without
    /// a row get an empty neighbour list; a repeated row extends the earlier
    /// one.
    pub fn from_adjacency(rows: &[(Province, &[Province])]) -> Self {
        let mut neighbors = vec![Vec::new(); Province::ALL.len()];
        for (province, adjacent) in rows {
            let list: &mut Vec<Province> = &mut neighbors[province.index()];
            for next in adjacent.iter() {
                if !list.contains(next) && next != province {
                    list.push(*next);
                }
            }
        }
        Self { neighbors }
    }

    /// Builds a graph from undirected edges, recording both directions.
    pub fn from_edges(edges: &[(Province, Province)]) -> Self {
        let mut graph = Self::from_adjacency(&[]);
        for &(a, b) in edges {
            graph.link(a, b);
            graph.link(b, a);
        }
        graph
    }

    fn link(&mut self, from: Province, to: Province) {
        let list = &mut self.neighbors[from.index()];
        if from != to && !list.contains(&to) {
            list.push(to);
        }
    }

    /// Every province with its neighbours, in canonical order.
    pub fn connections(&self) -> impl Iterator<Item = (Province, &[Province])> + '_ {
        Province::ALL
            .iter()
            .map(move |province| (*province, self.neighbors[province.index()].as_slice()))
    }

    /// Provinces with no recorded direct neighbour.
    pub fn isolated(&self) -> Vec<Province> {
        self.connections()
            .filter(|(_, adjacent)| adjacent.is_empty())
            .map(|(province, _)| province)
            .collect()
    }

    /// Recorded edges whose reverse is not recorded. Such rows are kept as
    /// stored; search follows them in the recorded direction only.
    pub fn one_way_edges(&self) -> Vec<(Province, Province)> {
        self.connections()
            .flat_map(|(from, adjacent)| adjacent.iter().map(move |&to| (from, to)))
            .filter(|&(from, to)| !self.is_directly_connected(to, from))
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum()
    }
}

impl AdjacencyProvider for ConnectivityGraph {
    fn neighbors(&self, province: Province) -> &[Province] {
        &self.neighbors[province.index()]
    }
}
