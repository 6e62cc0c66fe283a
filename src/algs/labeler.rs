//! Component labeling over the eligible points of an adjacency graph.
//!
//! Seeds are taken in ascending point id and each seed grows a component by
//! breadth-first search over edges whose endpoints are both eligible and
//! accepted by the [`AttributePredicate`]. Components are numbered `1..=K` in
//! discovery order; label 0 marks points outside every numbered component.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::algs::adjacency_graph::AdjacencyGraph;
use crate::algs::eligibility::EligibleSet;
use crate::algs::predicate::AttributePredicate;
use crate::connectivity_error::ConnectivityError;
use crate::debug_invariants::DebugInvariants;

/// Label given to an eligible point with no merging neighbor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SingletonPolicy {
    /// A singleton is a component of size one and gets its own label.
    #[default]
    Label,
    /// Singletons get 0 and do not consume a label number.
    Zero,
}

/// Options for [`label_components`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LabelOpts {
    pub singletons: SingletonPolicy,
}

/// Per-point component labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelTable {
    labels: Vec<u32>,
    component_count: u32,
}

impl LabelTable {
    /// All-zero table for `point_count` points.
    pub fn zeros(point_count: usize) -> Self {
        Self {
            labels: vec![0; point_count],
            component_count: 0,
        }
    }

    pub fn labels(&self) -> &[u32] {
        &self.labels
    }

    #[inline]
    pub fn label_of(&self, point: usize) -> u32 {
        self.labels[point]
    }

    /// Number of positive labels, `K`.
    pub fn component_count(&self) -> u32 {
        self.component_count
    }

    pub fn point_count(&self) -> usize {
        self.labels.len()
    }

    /// Ascending points carrying `label`.
    pub fn component(&self, label: u32) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter_map(|(p, &l)| (l == label).then_some(p))
            .collect()
    }

    /// Ascending points with a positive label.
    pub fn positive_points(&self) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter_map(|(p, &l)| (l > 0).then_some(p))
            .collect()
    }
}

impl DebugInvariants for LabelTable {
    fn validate_invariants(&self) -> Result<(), ConnectivityError> {
        let k = self.component_count as usize;
        let mut seen = vec![false; k + 1];
        for (p, &l) in self.labels.iter().enumerate() {
            let slot = seen.get_mut(l as usize).ok_or_else(|| {
                ConnectivityError::Invariant(format!("point {p} has label {l} > {k}"))
            })?;
            *slot = true;
        }
        if let Some(gap) = (1..=k).find(|&l| !seen[l]) {
            return Err(ConnectivityError::Invariant(format!(
                "label {gap} unused in 1..={k}"
            )));
        }
        Ok(())
    }
}

/// Label the components of `graph` restricted to `eligible` and `predicate`.
///
/// `values` and `eligible` must both cover exactly the points of `graph`.
pub fn label_components(
    graph: &AdjacencyGraph,
    values: &[f64],
    eligible: &EligibleSet,
    predicate: &AttributePredicate,
    opts: LabelOpts,
) -> Result<LabelTable, ConnectivityError> {
    let n = graph.point_count();
    if values.len() != n {
        return Err(ConnectivityError::Invariant(format!(
            "{} attribute values for a graph of {n} points",
            values.len()
        )));
    }
    if eligible.point_count() != n {
        return Err(ConnectivityError::Invariant(format!(
            "eligible set covers {} points, graph has {n}",
            eligible.point_count()
        )));
    }

    let mut table = LabelTable::zeros(n);
    let mut visited = vec![false; n];
    let mut queue = VecDeque::new();
    let mut members = Vec::new();

    for seed in eligible.iter() {
        if visited[seed] || !predicate.admits(values[seed]) {
            continue;
        }
        visited[seed] = true;
        queue.push_back(seed);
        members.clear();

        while let Some(p) = queue.pop_front() {
            members.push(p);
            for &q in graph.neighbors(p) {
                if visited[q] || !eligible.contains(q) || !predicate.merges(values[p], values[q]) {
                    continue;
                }
                visited[q] = true;
                queue.push_back(q);
            }
        }

        if members.len() == 1 && opts.singletons == SingletonPolicy::Zero {
            continue;
        }
        table.component_count += 1;
        for &p in &members {
            table.labels[p] = table.component_count;
        }
    }

    log::debug!(
        "labeled {} components over {} eligible points",
        table.component_count,
        eligible.len()
    );
    table.debug_assert_invariants();
    Ok(table)
}
