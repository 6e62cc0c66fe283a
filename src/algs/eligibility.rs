//! Working point set for a labeling pass.
//!
//! Without island expansion the eligible set is the group itself. With it,
//! every topological island touched by the group joins in whole.

use crate::algs::adjacency_graph::AdjacencyGraph;
use crate::topology::group::PointGroup;
use crate::topology::islands::IslandMap;

/// Dense membership mask over mesh points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EligibleSet {
    mask: Vec<bool>,
    len: usize,
}

impl EligibleSet {
    pub fn none(point_count: usize) -> Self {
        Self {
            mask: vec![false; point_count],
            len: 0,
        }
    }

    /// Group members below `point_count`; larger ids are ignored.
    pub fn from_group(group: &PointGroup, point_count: usize) -> Self {
        let mut set = Self::none(point_count);
        for &p in group.points() {
            set.insert(p);
        }
        set
    }

    fn insert(&mut self, point: usize) {
        if let Some(slot) = self.mask.get_mut(point) {
            if !*slot {
                *slot = true;
                self.len += 1;
            }
        }
    }

    #[inline]
    pub fn contains(&self, point: usize) -> bool {
        self.mask.get(point).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn point_count(&self) -> usize {
        self.mask.len()
    }

    /// Eligible point ids, ascending.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.mask
            .iter()
            .enumerate()
            .filter_map(|(p, &on)| on.then_some(p))
    }
}

/// Compute the eligible set from `group`, expanding to whole islands when
/// `include_whole_island` is set.
pub fn eligible_points(
    graph: &AdjacencyGraph,
    group: &PointGroup,
    include_whole_island: bool,
) -> EligibleSet {
    let n = graph.point_count();
    if !include_whole_island {
        return EligibleSet::from_group(group, n);
    }
    let islands = IslandMap::from_graph(graph);
    expand_to_islands(&islands, group)
}

/// Union of every island holding at least one group member.
pub fn expand_to_islands(islands: &IslandMap, group: &PointGroup) -> EligibleSet {
    let mut touched = vec![false; islands.island_count()];
    for &p in group.points().iter().filter(|&&p| p < islands.point_count()) {
        touched[islands.island_of(p)] = true;
    }
    let mut set = EligibleSet::none(islands.point_count());
    for p in 0..islands.point_count() {
        if touched[islands.island_of(p)] {
            set.insert(p);
        }
    }
    set
}
