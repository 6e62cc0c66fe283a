//! Non-fatal diagnostics collected while a connectivity pass runs.
//!
//! Warnings never abort the pass. Each one is logged through the `log`
//! facade when recorded and handed back to the caller with the output.

use thiserror::Error;

/// Recoverable anomaly found in the input data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConnectivityWarning {
    /// A group selected a point id the mesh does not have; the id was dropped.
    #[error("Group references point {point}, but the mesh has {point_count} points")]
    GroupPointOutOfRange { point: usize, point_count: usize },
    /// A group token could not be parsed; it was ignored.
    #[error("Unrecognized group token `{0}`")]
    UnrecognizedGroupToken(String),
    /// A face with fewer than two distinct points contributed no edges.
    #[error("Face {face} is degenerate ({distinct} distinct points)")]
    DegenerateFace { face: usize, distinct: usize },
}

/// Ordered warning accumulator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    warnings: Vec<ConnectivityWarning>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `warning` and logs it.
    pub fn warn(&mut self, warning: ConnectivityWarning) {
        log::warn!("{warning}");
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[ConnectivityWarning] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn into_warnings(self) -> Vec<ConnectivityWarning> {
        self.warnings
    }
}
