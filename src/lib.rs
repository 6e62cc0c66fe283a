//! # attrib-connectivity
//!
//! attrib-connectivity labels groups of mesh points as connected when they are
//! topologically adjacent and agree, within a tolerance, on a scalar point
//! attribute. It is the engine behind an "attribute connectivity" geometry
//! operator: the host hands in a mesh snapshot plus parameters and receives one
//! integer label per point.
//!
//! ## Pipeline
//! - [`algs::adjacency_graph`] turns face loops into a CSR point graph
//! - [`algs::eligibility`] picks the working point set from a group, optionally
//!   grown to whole [`topology::islands`]
//! - [`algs::predicate`] decides which neighbors merge
//! - [`algs::labeler`] numbers the components `1..=K`; 0 marks everything else
//! - [`operator`] validates host parameters and writes the output attribute
//!
//! ## Determinism
//!
//! Neighbor lists are sorted and components are discovered from seeds in
//! ascending point id, so identical inputs always produce identical labels.
//! Enabling the `rayon` feature parallelizes graph normalization without
//! changing the result.
//!
//! ## Usage
//!
//! ```rust
//! use attrib_connectivity::prelude::*;
//!
//! let mut geo = Geometry::new(Mesh::grid(4, 4));
//! geo.set_float_attribute("density", vec![1.0; 16]).unwrap();
//! let op = AttributeConnectivity::new(ConnectivityParams::for_attribute("density"));
//! let out = op.cook(&[&geo]).unwrap();
//! assert_eq!(out.labels.component_count(), 1);
//! ```

pub mod algs;
pub mod connectivity_error;
pub mod debug_invariants;
pub mod diagnostics;
pub mod engine;
pub mod operator;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::adjacency_graph::{
        AdjacencyGraph, AdjacencyMode, AdjacencyOpts, build_point_adjacency_graph,
    };
    pub use crate::algs::eligibility::{EligibleSet, eligible_points};
    pub use crate::algs::labeler::{LabelOpts, LabelTable, SingletonPolicy, label_components};
    pub use crate::algs::predicate::{AttributePredicate, MergeRule};
    pub use crate::connectivity_error::ConnectivityError;
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::diagnostics::{ConnectivityWarning, Diagnostics};
    pub use crate::engine::{ConnectivityInput, ConnectivityOutput, run, run_with_graph};
    pub use crate::operator::{AttributeConnectivity, ConnectivityParams, CookResult};
    pub use crate::topology::attributes::{AttributeValues, Geometry, PointAttributes};
    pub use crate::topology::group::{PointGroup, parse_group};
    pub use crate::topology::islands::IslandMap;
    pub use crate::topology::mesh::Mesh;
}
