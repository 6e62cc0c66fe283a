#![allow(dead_code)]
use attrib_connectivity::operator::CookResult;
use attrib_connectivity::topology::attributes::Geometry;
use attrib_connectivity::topology::mesh::Mesh;

pub const SIDE: usize = 10;

/// Row-major id on the 10×10 lattice.
pub fn at(row: usize, col: usize) -> usize {
    row * SIDE + col
}

/// Ids of the `rows`×`cols` block whose top-left corner is `(row, col)`.
pub fn block(row: usize, col: usize, rows: usize, cols: usize) -> Vec<usize> {
    let mut ids = Vec::with_capacity(rows * cols);
    for r in row..row + rows {
        for c in col..col + cols {
            ids.push(at(r, c));
        }
    }
    ids
}

/// The 4×4 corner patch `{0..=3, 10..=13, 20..=23, 30..=33}`.
pub fn corner_patch() -> Vec<usize> {
    block(0, 0, 4, 4)
}

/// 10×10 lattice whose quads skip the strips between rows 3/4 and
/// columns 3/4, leaving four islands. The corner patch is one of them.
pub fn split_grid() -> Mesh {
    let mut faces = Vec::new();
    for r in 0..SIDE - 1 {
        for c in 0..SIDE - 1 {
            if r == 3 || c == 3 {
                continue;
            }
            let v0 = at(r, c);
            faces.push(vec![v0, v0 + 1, v0 + SIDE + 1, v0 + SIDE]);
        }
    }
    Mesh::new(SIDE * SIDE, faces).unwrap()
}

/// Connected 10×10 grid with `density` 1.0 on the corner patch, 2.0 on the
/// opposite 4×4 corner, and 0.0 elsewhere.
pub fn density_grid() -> Geometry {
    let mut values = vec![0.0; SIDE * SIDE];
    for p in corner_patch() {
        values[p] = 1.0;
    }
    for p in block(6, 6, 4, 4) {
        values[p] = 2.0;
    }
    let mut geo = Geometry::new(Mesh::grid(SIDE, SIDE));
    geo.set_float_attribute("density", values).unwrap();
    geo
}

/// Box with `density` 1.0 on corners 0 and 6, 0.0 elsewhere.
pub fn density_box() -> Geometry {
    let mut geo = Geometry::new(Mesh::unit_box());
    geo.set_float_on_points("density", 0.0, &[0, 6], 1.0).unwrap();
    geo
}

pub fn output_labels(out: &CookResult, name: &str) -> Vec<i64> {
    out.geometry
        .attributes()
        .find(name)
        .and_then(|v| v.as_ints())
        .expect("output attribute")
        .to_vec()
}

pub fn positive(labels: &[i64]) -> Vec<usize> {
    labels
        .iter()
        .enumerate()
        .filter_map(|(p, &l)| (l > 0).then_some(p))
        .collect()
}
