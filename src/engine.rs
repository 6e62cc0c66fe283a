//! The connectivity-labeling pipeline.
//!
//! graph builder → eligibility filter + attribute predicate → labeler.
//! Every check that can fail runs before any graph work starts; warnings
//! gathered along the way are returned next to the labels.

use std::borrow::Cow;

use crate::algs::adjacency_graph::{AdjacencyGraph, AdjacencyOpts, build_point_adjacency_graph};
use crate::algs::eligibility::eligible_points;
use crate::algs::labeler::{LabelOpts, LabelTable, label_components};
use crate::algs::predicate::AttributePredicate;
use crate::connectivity_error::ConnectivityError;
use crate::diagnostics::{ConnectivityWarning, Diagnostics};
use crate::topology::group::PointGroup;
use crate::topology::mesh::Mesh;

/// Borrowed snapshot of everything one labeling pass reads.
#[derive(Clone, Copy, Debug)]
pub struct ConnectivityInput<'a> {
    pub mesh: &'a Mesh,
    /// Source attribute name, used in diagnostics only.
    pub attribute: &'a str,
    /// One value per mesh point.
    pub values: &'a [f64],
    pub group: &'a PointGroup,
    pub predicate: AttributePredicate,
    pub include_whole_island: bool,
    pub adjacency: AdjacencyOpts,
    pub labels: LabelOpts,
}

impl<'a> ConnectivityInput<'a> {
    /// Input with default predicate, options, and no island expansion.
    pub fn new(
        mesh: &'a Mesh,
        attribute: &'a str,
        values: &'a [f64],
        group: &'a PointGroup,
    ) -> Self {
        Self {
            mesh,
            attribute,
            values,
            group,
            predicate: AttributePredicate::default(),
            include_whole_island: false,
            adjacency: AdjacencyOpts::default(),
            labels: LabelOpts::default(),
        }
    }
}

/// Labels plus the warnings raised while computing them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectivityOutput {
    pub labels: LabelTable,
    pub warnings: Vec<ConnectivityWarning>,
}

/// Run the whole pipeline, building the adjacency graph from `input.mesh`.
pub fn run(input: &ConnectivityInput<'_>) -> Result<ConnectivityOutput, ConnectivityError> {
    check_input(input)?;
    let mut diag = Diagnostics::new();
    let graph = build_point_adjacency_graph(input.mesh, input.adjacency, &mut diag);
    label_with_graph(input, &graph, diag)
}

/// Run the pipeline against a graph built earlier for the same mesh.
pub fn run_with_graph(
    input: &ConnectivityInput<'_>,
    graph: &AdjacencyGraph,
) -> Result<ConnectivityOutput, ConnectivityError> {
    check_input(input)?;
    if graph.point_count() != input.mesh.point_count() {
        return Err(ConnectivityError::Invariant(format!(
            "graph has {} points, mesh has {}",
            graph.point_count(),
            input.mesh.point_count()
        )));
    }
    label_with_graph(input, graph, Diagnostics::new())
}

fn check_input(input: &ConnectivityInput<'_>) -> Result<(), ConnectivityError> {
    let n = input.mesh.point_count();
    if input.values.len() != n {
        return Err(ConnectivityError::AttributeLengthMismatch {
            name: input.attribute.to_string(),
            expected: n,
            found: input.values.len(),
        });
    }
    if !input.predicate.threshold.is_finite() {
        return Err(ConnectivityError::InvalidThreshold(
            input.predicate.threshold.to_string(),
        ));
    }
    Ok(())
}

fn label_with_graph(
    input: &ConnectivityInput<'_>,
    graph: &AdjacencyGraph,
    mut diag: Diagnostics,
) -> Result<ConnectivityOutput, ConnectivityError> {
    let n = graph.point_count();

    // A group resolved against another mesh may hold stale ids.
    let group = match input.group.points().last() {
        Some(&last) if last >= n => Cow::Owned(PointGroup::from_ids(
            input.group.points().iter().copied(),
            n,
            &mut diag,
        )),
        _ => Cow::Borrowed(input.group),
    };

    let eligible = eligible_points(graph, &group, input.include_whole_island);
    let labels = label_components(graph, input.values, &eligible, &input.predicate, input.labels)?;
    log::debug!(
        "connectivity on `{}`: {} of {} points eligible, {} components",
        input.attribute,
        eligible.len(),
        n,
        labels.component_count()
    );

    Ok(ConnectivityOutput {
        labels,
        warnings: diag.into_warnings(),
    })
}
