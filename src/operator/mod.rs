//! Host-facing connectivity operator.
//!
//! [`AttributeConnectivity`] takes geometry snapshots plus
//! [`ConnectivityParams`], validates them, runs the labeling pipeline and
//! returns a copy of the input geometry carrying the labels as an integer
//! point attribute. The adjacency graph is memoized per mesh topology and
//! adjacency mode, so re-cooking unchanged topology skips the graph build.

pub mod params;
pub mod validation;

use std::sync::Arc;

use parking_lot::Mutex;

use crate::algs::adjacency_graph::{AdjacencyGraph, AdjacencyMode, build_point_adjacency_graph};
use crate::algs::labeler::LabelTable;
use crate::connectivity_error::ConnectivityError;
use crate::diagnostics::{ConnectivityWarning, Diagnostics};
use crate::engine::{ConnectivityInput, run_with_graph};
use crate::topology::attributes::Geometry;
use crate::topology::group::parse_group;
use crate::topology::mesh::Mesh;

pub use params::{ConnectivityParams, DEFAULT_OUTPUT_NAME};
pub use validation::{is_valid_attribute_name, validate};

/// Result of a successful cook.
#[derive(Clone, Debug, PartialEq)]
pub struct CookResult {
    /// Input geometry plus the output label attribute.
    pub geometry: Geometry,
    pub labels: LabelTable,
    pub warnings: Vec<ConnectivityWarning>,
}

/// Graph memo. The fingerprint rejects most misses cheaply; the stored mesh
/// settles hash collisions.
#[derive(Debug)]
struct CachedGraph {
    fingerprint: u64,
    mesh: Mesh,
    mode: AdjacencyMode,
    graph: Arc<AdjacencyGraph>,
    warnings: Vec<ConnectivityWarning>,
}

impl CachedGraph {
    fn matches(&self, fingerprint: u64, mesh: &Mesh, mode: AdjacencyMode) -> bool {
        self.fingerprint == fingerprint && self.mode == mode && self.mesh == *mesh
    }
}

/// The attribute connectivity operator.
#[derive(Debug, Default)]
pub struct AttributeConnectivity {
    params: ConnectivityParams,
    graph_cache: Mutex<Option<CachedGraph>>,
}

impl AttributeConnectivity {
    pub fn new(params: ConnectivityParams) -> Self {
        Self {
            params,
            graph_cache: Mutex::new(None),
        }
    }

    pub fn params(&self) -> &ConnectivityParams {
        &self.params
    }

    /// Replace the parameters. The graph cache survives: it depends on
    /// topology and adjacency mode only.
    pub fn set_params(&mut self, params: ConnectivityParams) {
        self.params = params;
    }

    /// Validate, label, and write the output attribute.
    ///
    /// Only the first input is read. Fails without output on any
    /// precondition error; recoverable anomalies come back as warnings.
    pub fn cook(&self, inputs: &[&Geometry]) -> Result<CookResult, ConnectivityError> {
        let (source_geo, source) = validate(inputs, &self.params)?;
        let mesh = source_geo.mesh();
        let values = source.as_scalars();

        let mut diag = Diagnostics::new();
        let group = parse_group(&self.params.group, mesh.point_count(), &mut diag);
        let (graph, graph_warnings) = self.graph_for(mesh);

        let input = ConnectivityInput {
            predicate: self.params.predicate(),
            include_whole_island: self.params.include_whole_islands,
            adjacency: self.params.adjacency_opts(),
            labels: self.params.label_opts(),
            ..ConnectivityInput::new(mesh, &self.params.attribute_name, &values, &group)
        };
        let output = run_with_graph(&input, &graph)?;
        let mut warnings = diag.into_warnings();
        warnings.extend(graph_warnings);
        warnings.extend(output.warnings);

        let mut geometry = source_geo.clone();
        geometry.set_int_attribute(
            &self.params.output_name,
            output.labels.labels().iter().map(|&l| i64::from(l)).collect(),
        )?;

        Ok(CookResult {
            geometry,
            labels: output.labels,
            warnings,
        })
    }

    /// Cached graph for `mesh`, rebuilding on topology or mode change.
    ///
    /// Also returns the warnings raised when the graph was built so that
    /// cached cooks report them too.
    fn graph_for(&self, mesh: &Mesh) -> (Arc<AdjacencyGraph>, Vec<ConnectivityWarning>) {
        let fingerprint = mesh.fingerprint();
        let mode = self.params.adjacency;
        let mut cache = self.graph_cache.lock();
        if let Some(hit) = (*cache)
            .as_ref()
            .filter(|c| c.matches(fingerprint, mesh, mode))
        {
            log::debug!("adjacency cache hit ({fingerprint:#x})");
            return (Arc::clone(&hit.graph), hit.warnings.clone());
        }

        let mut build_diag = Diagnostics::new();
        let graph = {
            let opts = self.params.adjacency_opts();
            Arc::new(build_point_adjacency_graph(mesh, opts, &mut build_diag))
        };
        let warnings = build_diag.into_warnings();
        *cache = Some(CachedGraph {
            fingerprint,
            mesh: mesh.clone(),
            mode,
            graph: Arc::clone(&graph),
            warnings: warnings.clone(),
        });
        (graph, warnings)
    }

    /// Drop the memoized graph.
    pub fn clear_cache(&self) {
        *self.graph_cache.lock() = None;
    }

    pub fn is_cached(&self, mesh: &Mesh) -> bool {
        let cache = self.graph_cache.lock();
        (*cache)
            .as_ref()
            .is_some_and(|c| c.matches(mesh.fingerprint(), mesh, self.params.adjacency))
    }
}
