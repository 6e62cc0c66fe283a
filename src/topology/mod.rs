//! Top-level module for mesh topology data.
//!
//! This module provides the value types a labeling pass reads:
//! - `Mesh`: point count plus ordered face loops
//! - `Geometry` and `PointAttributes`: named per-point values
//! - `PointGroup` and host range-pattern resolution
//! - `IslandMap`: topological islands of an adjacency graph

pub mod attributes;
pub mod group;
pub mod islands;
pub mod mesh;

pub use attributes::{AttributeValues, Geometry, PointAttributes};
pub use group::{PointGroup, parse_group};
pub use islands::IslandMap;
pub use mesh::Mesh;
