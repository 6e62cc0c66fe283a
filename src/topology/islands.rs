//! Topological islands: maximal connected pieces of the adjacency graph.
//!
//! Attribute values play no part here. Island ids are dense and numbered in
//! order of each island's smallest point id.

use crate::algs::adjacency_graph::AdjacencyGraph;
use crate::algs::union_find::DisjointSet;

/// Island id per point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IslandMap {
    island_of: Vec<usize>,
    island_count: usize,
}

impl IslandMap {
    pub fn from_graph(graph: &AdjacencyGraph) -> Self {
        let n = graph.point_count();
        let mut sets = DisjointSet::new(n);
        for a in 0..n {
            for &b in graph.neighbors(a) {
                if a < b {
                    sets.union(a, b);
                }
            }
        }

        let mut root_to_island = vec![usize::MAX; n];
        let mut island_of = Vec::with_capacity(n);
        let mut island_count = 0;
        for p in 0..n {
            let root = sets.find(p);
            if root_to_island[root] == usize::MAX {
                root_to_island[root] = island_count;
                island_count += 1;
            }
            island_of.push(root_to_island[root]);
        }
        log::debug!("{island_count} islands over {n} points");

        Self {
            island_of,
            island_count,
        }
    }

    #[inline]
    pub fn island_of(&self, point: usize) -> usize {
        self.island_of[point]
    }

    pub fn island_count(&self) -> usize {
        self.island_count
    }

    pub fn point_count(&self) -> usize {
        self.island_of.len()
    }

    /// Ascending point ids of `island`.
    pub fn members(&self, island: usize) -> Vec<usize> {
        self.island_of
            .iter()
            .enumerate()
            .filter_map(|(p, &i)| (i == island).then_some(p))
            .collect()
    }
}
