//! Point groups and resolution of host range strings into point-id sets.
//!
//! The pattern grammar is a whitespace-separated token list:
//! - `N` selects point `N`
//! - `N-M` selects the inclusive range between `N` and `M` (either order)
//! - `*` selects every point
//!
//! An empty pattern selects every point. Bad tokens and out-of-range ids are
//! dropped with a warning rather than failing the resolution.

use itertools::Itertools;

use crate::diagnostics::{ConnectivityWarning, Diagnostics};

/// Sorted, deduplicated set of valid point ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointGroup {
    points: Vec<usize>,
}

impl PointGroup {
    /// Every point of a mesh with `point_count` points.
    pub fn all(point_count: usize) -> Self {
        Self {
            points: (0..point_count).collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a group from arbitrary ids, keeping only ids below `point_count`.
    ///
    /// Each dropped id is reported to `diag`.
    pub fn from_ids(
        ids: impl IntoIterator<Item = usize>,
        point_count: usize,
        diag: &mut Diagnostics,
    ) -> Self {
        let mut points = Vec::new();
        for point in ids.into_iter().sorted_unstable().dedup() {
            if point < point_count {
                points.push(point);
            } else {
                diag.warn(ConnectivityWarning::GroupPointOutOfRange { point, point_count });
            }
        }
        Self { points }
    }

    /// Ascending member ids.
    pub fn points(&self) -> &[usize] {
        &self.points
    }

    pub fn contains(&self, point: usize) -> bool {
        self.points.binary_search(&point).is_ok()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Resolves a range pattern such as `"0 6"` or `"0-3 10-13"` against a mesh
/// with `point_count` points.
pub fn parse_group(pattern: &str, point_count: usize, diag: &mut Diagnostics) -> PointGroup {
    if pattern.trim().is_empty() {
        return PointGroup::all(point_count);
    }

    let mut ids: Vec<usize> = Vec::new();
    for token in pattern.split_whitespace() {
        if token == "*" {
            return PointGroup::all(point_count);
        }
        match parse_token(token) {
            Some((lo, hi)) if hi < point_count || lo == hi => ids.extend(lo..=hi),
            Some((lo, _)) => {
                // Ranges are clipped to the mesh; one warning for the first id past the end.
                ids.extend(lo..point_count);
                diag.warn(ConnectivityWarning::GroupPointOutOfRange {
                    point: lo.max(point_count),
                    point_count,
                });
            }
            None => diag.warn(ConnectivityWarning::UnrecognizedGroupToken(token.to_string())),
        }
    }
    PointGroup::from_ids(ids, point_count, diag)
}

fn parse_token(token: &str) -> Option<(usize, usize)> {
    match token.split_once('-') {
        Some((a, b)) => {
            let a: usize = a.parse().ok()?;
            let b: usize = b.parse().ok()?;
            Some((a.min(b), a.max(b)))
        }
        None => {
            let p: usize = token.parse().ok()?;
            Some((p, p))
        }
    }
}
