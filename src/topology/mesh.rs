//! Polygon mesh topology: a point count plus ordered face loops.
//!
//! Points are addressed by dense ids `0..point_count`. A face is an ordered
//! loop of point ids; the loop closes implicitly (last point connects back to
//! the first). Coordinates are not stored: connectivity here is purely
//! topological.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::connectivity_error::ConnectivityError;

/// Immutable mesh topology snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mesh {
    point_count: usize,
    faces: Vec<Vec<usize>>,
}

impl Mesh {
    /// Builds a mesh, checking that every face references an existing point.
    pub fn new(point_count: usize, faces: Vec<Vec<usize>>) -> Result<Self, ConnectivityError> {
        for (face, loop_points) in faces.iter().enumerate() {
            if let Some(&point) = loop_points.iter().find(|&&p| p >= point_count) {
                return Err(ConnectivityError::FacePointOutOfRange {
                    face,
                    point,
                    point_count,
                });
            }
        }
        Ok(Self { point_count, faces })
    }

    /// A mesh with `point_count` unconnected points.
    pub fn points_only(point_count: usize) -> Self {
        Self {
            point_count,
            faces: Vec::new(),
        }
    }

    /// Regular `rows`×`cols` lattice of points joined by quads.
    ///
    /// Point ids are row-major (`row * cols + col`). Each cell becomes one quad
    /// wound `[v0, v0 + 1, v0 + cols + 1, v0 + cols]`. Fewer than two rows or
    /// columns yields points without faces.
    pub fn grid(rows: usize, cols: usize) -> Self {
        let mut faces = Vec::new();
        if rows >= 2 && cols >= 2 {
            faces.reserve((rows - 1) * (cols - 1));
            for r in 0..rows - 1 {
                for c in 0..cols - 1 {
                    let v0 = r * cols + c;
                    let v1 = v0 + 1;
                    let v3 = v0 + cols;
                    let v2 = v3 + 1;
                    faces.push(vec![v0, v1, v2, v3]);
                }
            }
        }
        Self {
            point_count: rows * cols,
            faces,
        }
    }

    /// Eight-corner box made of six quads.
    ///
    /// Corners 0..=3 form the bottom loop and 4..=7 the top loop, with corner
    /// `i + 4` directly above corner `i`. Corners 0 and 6 are diagonally
    /// opposite and share no face.
    pub fn unit_box() -> Self {
        Self {
            point_count: 8,
            faces: vec![
                vec![0, 1, 2, 3],
                vec![4, 7, 6, 5],
                vec![0, 4, 5, 1],
                vec![1, 5, 6, 2],
                vec![2, 6, 7, 3],
                vec![3, 7, 4, 0],
            ],
        }
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.point_count == 0
    }

    pub fn faces(&self) -> &[Vec<usize>] {
        &self.faces
    }

    pub fn face(&self, i: usize) -> Option<&[usize]> {
        self.faces.get(i).map(Vec::as_slice)
    }

    /// Topology hash, stable within a process.
    ///
    /// Two meshes with equal point counts and identical face loops share a
    /// fingerprint; used to key memoized adjacency graphs.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}
