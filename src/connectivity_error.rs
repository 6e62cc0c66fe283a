//! ConnectivityError: unified error type for attrib-connectivity public APIs
//!
//! Precondition failures of the connectivity operator and invalid mesh data
//! both surface through this enum. Messages that a host shows to users are
//! kept byte-stable.

use thiserror::Error;

/// Message used when the output attribute name is empty.
pub const EMPTY_INDEX_NAME: &str = "Index name cannot be empty";

/// Unified error type for attrib-connectivity operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConnectivityError {
    /// The operator was cooked without any input geometry.
    #[error("Not enough sources specified.")]
    NotEnoughSources,
    /// An attribute parameter is empty, malformed, or names a missing attribute.
    #[error("Invalid attribute specification: \"{0}\".")]
    InvalidAttribute(String),
    /// Threshold parameter is NaN or infinite.
    #[error("Invalid threshold `{0}`: must be a finite number")]
    InvalidThreshold(String),
    /// A face references a point id the mesh does not have.
    #[error("Face {face} references point {point}, but the mesh has {point_count} points")]
    FacePointOutOfRange {
        face: usize,
        point: usize,
        point_count: usize,
    },
    /// Attribute value count does not match the point count.
    #[error("Attribute `{name}` has {found} values, expected {expected}")]
    AttributeLengthMismatch {
        name: String,
        expected: usize,
        found: usize,
    },
    /// Point id outside `0..point_count` passed to a typed API.
    #[error("Point {point} out of range for {point_count} points")]
    PointOutOfRange { point: usize, point_count: usize },
    /// A structure violated its internal invariants.
    #[error("Invariant violated: {0}")]
    Invariant(String),
}

impl ConnectivityError {
    /// Wraps a message into [`ConnectivityError::InvalidAttribute`].
    pub fn invalid_attribute(message: impl Into<String>) -> Self {
        ConnectivityError::InvalidAttribute(message.into())
    }
}
