//! Build point-to-point adjacency graphs from mesh faces.
//!
//! Two points are adjacent when they share a face boundary edge
//! ([`AdjacencyMode::FaceEdges`]) or, in the looser host rule, when they
//! appear on a common face at all ([`AdjacencyMode::SharedFace`]).
//!
//! Determinism:
//! - Neighbor lists are always sorted and deduplicated, so the graph does not
//!   depend on the order in which faces are visited.

use itertools::Itertools;
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::connectivity_error::ConnectivityError;
use crate::debug_invariants::DebugInvariants;
use crate::diagnostics::{ConnectivityWarning, Diagnostics};
use crate::topology::mesh::Mesh;

/// Which point pairs of a face become graph edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjacencyMode {
    /// Consecutive loop points, including the closing last→first pair.
    #[default]
    FaceEdges,
    /// Every pair of points on the same face (quad diagonals included).
    SharedFace,
}

/// Options for building point adjacency graphs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyOpts {
    pub mode: AdjacencyMode,
}

/// CSR-style undirected adjacency graph over mesh point ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph {
    /// CSR offsets into `adjncy` for each point.
    pub xadj: Vec<usize>,
    /// CSR adjacency list (point ids).
    pub adjncy: Vec<usize>,
}

impl AdjacencyGraph {
    /// Graph with `n` isolated points.
    pub fn isolated(n: usize) -> Self {
        Self {
            xadj: vec![0; n + 1],
            adjncy: Vec::new(),
        }
    }

    /// Return the neighbor slice for point `i`.
    #[inline]
    pub fn neighbors(&self, i: usize) -> &[usize] {
        &self.adjncy[self.xadj[i]..self.xadj[i + 1]]
    }

    #[inline]
    pub fn degree(&self, i: usize) -> usize {
        self.xadj[i + 1] - self.xadj[i]
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.xadj.len().saturating_sub(1)
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjncy.len() / 2
    }

    pub fn is_adjacent(&self, a: usize, b: usize) -> bool {
        a < self.point_count() && self.neighbors(a).binary_search(&b).is_ok()
    }
}

impl DebugInvariants for AdjacencyGraph {
    fn validate_invariants(&self) -> Result<(), ConnectivityError> {
        let invariant = |msg: String| Err(ConnectivityError::Invariant(msg));

        // 1) offsets are a monotone prefix sum ending at adjncy.len()
        if self.xadj.first() != Some(&0) {
            return invariant("xadj must start at 0".into());
        }
        if self.xadj.windows(2).any(|w| w[0] > w[1]) {
            return invariant("xadj must be non-decreasing".into());
        }
        if self.xadj.last() != Some(&self.adjncy.len()) {
            return invariant("xadj must end at adjncy.len()".into());
        }

        // 2) sorted, self-free, in-range, symmetric
        let n = self.point_count();
        for i in 0..n {
            let list = self.neighbors(i);
            if list.windows(2).any(|w| w[0] >= w[1]) {
                return invariant(format!("neighbors of {i} not strictly ascending"));
            }
            for &j in list {
                if j == i {
                    return invariant(format!("self-loop at {i}"));
                }
                if j >= n {
                    return invariant(format!("neighbor {j} of {i} out of range"));
                }
                if self.neighbors(j).binary_search(&i).is_err() {
                    return invariant(format!("edge {i}->{j} has no reverse"));
                }
            }
        }
        Ok(())
    }
}

/// Build the point adjacency graph of `mesh`.
///
/// Faces with fewer than two distinct points contribute no edges and are
/// reported to `diag` as [`ConnectivityWarning::DegenerateFace`].
pub fn build_point_adjacency_graph(
    mesh: &Mesh,
    opts: AdjacencyOpts,
    diag: &mut Diagnostics,
) -> AdjacencyGraph {
    let n = mesh.point_count();
    if n == 0 {
        return AdjacencyGraph::isolated(0);
    }

    let mut neigh: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (face, loop_points) in mesh.faces().iter().enumerate() {
        let distinct = loop_points.iter().unique().count();
        if distinct < 2 {
            diag.warn(ConnectivityWarning::DegenerateFace { face, distinct });
            continue;
        }
        match opts.mode {
            AdjacencyMode::FaceEdges => {
                for (a, b) in loop_points.iter().copied().circular_tuple_windows() {
                    if a != b {
                        neigh[a].push(b);
                        neigh[b].push(a);
                    }
                }
            }
            AdjacencyMode::SharedFace => {
                for (a, b) in loop_points.iter().copied().tuple_combinations() {
                    if a != b {
                        neigh[a].push(b);
                        neigh[b].push(a);
                    }
                }
            }
        }
    }

    normalize_neighbor_lists(&mut neigh);

    let total_edges = neigh.iter().map(Vec::len).sum();
    let mut xadj = Vec::with_capacity(n + 1);
    let mut adjncy = Vec::with_capacity(total_edges);
    xadj.push(0);
    for list in &neigh {
        adjncy.extend(list.iter().copied());
        xadj.push(adjncy.len());
    }

    let graph = AdjacencyGraph { xadj, adjncy };
    log::debug!(
        "adjacency graph: {} points, {} edges ({:?})",
        n,
        graph.edge_count(),
        opts.mode
    );
    graph.debug_assert_invariants();
    graph
}

#[cfg(feature = "rayon")]
fn normalize_neighbor_lists(neigh: &mut [Vec<usize>]) {
    neigh.par_iter_mut().for_each(|list| {
        list.sort_unstable();
        list.dedup();
    });
}

#[cfg(not(feature = "rayon"))]
fn normalize_neighbor_lists(neigh: &mut [Vec<usize>]) {
    for list in neigh.iter_mut() {
        list.sort_unstable();
        list.dedup();
    }
}
