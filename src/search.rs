//! Graph search over the direct-adjacency model.
//!
//! Neither search consults the route table. Results follow neighbour
//! iteration order as stored; nothing is sorted or weighted.

use std::collections::VecDeque;

use crate::path::ProvincePath;
use crate::province::Province;
use crate::traits::AdjacencyProvider;

/// Breadth-first search from `from` to `to`.
///
/// Returns the first path discovered, which is shortest in hops with ties
/// broken by neighbour order. `from == to` yields a single-province path.
pub fn shortest_path<G>(graph: &G, from: Province, to: Province) -> Option<ProvincePath>
where
    G: AdjacencyProvider + ?Sized,
{
    if from == to {
        return Some(ProvincePath::new(vec![from]));
    }

    let mut parent: [Option<Province>; Province::ALL.len()] = [None; Province::ALL.len()];
    let mut visited = [false; Province::ALL.len()];
    let mut queue = VecDeque::new();

    visited[from.index()] = true;
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        for &next in graph.neighbors(current) {
            if visited[next.index()] {
                continue;
            }
            visited[next.index()] = true;
            parent[next.index()] = Some(current);

            if next == to {
                return Some(rebuild(&parent, from, to));
            }
            queue.push_back(next);
        }
    }

    None
}

fn rebuild(
    parent: &[Option<Province>; Province::ALL.len()],
    from: Province,
    to: Province,
) -> ProvincePath {
    let mut provinces = vec![to];
    let mut node = to;
    while node != from {
        match parent[node.index()] {
            Some(prev) => {
                provinces.push(prev);
                node = prev;
            }
            None => break,
        }
    }
    provinces.reverse();
    ProvincePath::new(provinces)
}

/// Enumerates simple paths from `from` to `to` with at most `max_hops`
/// edges, in depth-first discovery order.
///
/// A path ends as soon as it reaches `to`; it is never extended through the
/// destination. `from == to` or `max_hops == 0` yields no paths.
pub fn all_paths<G>(graph: &G, from: Province, to: Province, max_hops: usize) -> Vec<ProvincePath>
where
    G: AdjacencyProvider + ?Sized,
{
    let mut found = Vec::new();
    if from == to || max_hops == 0 {
        return found;
    }

    let mut on_path = [false; Province::ALL.len()];
    let mut stack = vec![from];
    on_path[from.index()] = true;
    walk(graph, to, max_hops, &mut stack, &mut on_path, &mut found);
    found
}

fn walk<G>(
    graph: &G,
    to: Province,
    max_hops: usize,
    stack: &mut Vec<Province>,
    on_path: &mut [bool; Province::ALL.len()],
    found: &mut Vec<ProvincePath>,
) where
    G: AdjacencyProvider + ?Sized,
{
    let Some(&current) = stack.last() else {
        return;
    };
    if current == to {
        found.push(ProvincePath::new(stack.clone()));
        return;
    }
    // Hops used so far is stack.len() - 1.
    if stack.len() > max_hops {
        return;
    }

    for &next in graph.neighbors(current) {
        if on_path[next.index()] {
            continue;
        }
        on_path[next.index()] = true;
        stack.push(next);
        walk(graph, to, max_hops, stack, on_path, found);
        stack.pop();
        on_path[next.index()] = false;
    }
}
