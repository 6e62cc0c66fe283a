//! Named per-point attributes and the geometry snapshot that carries them.
//!
//! Attributes map an attribute name to one value per point, either float or
//! integer valued. Names are kept in a `BTreeMap` so iteration order is
//! deterministic.

use std::borrow::Cow;
use std::collections::BTreeMap;

use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::connectivity_error::ConnectivityError;
use crate::topology::mesh::Mesh;

/// Per-point values of one attribute.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AttributeValues {
    Float(Vec<f64>),
    Int(Vec<i64>),
}

impl AttributeValues {
    pub fn len(&self) -> usize {
        match self {
            AttributeValues::Float(v) => v.len(),
            AttributeValues::Int(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// View the values as `f64` scalars.
    ///
    /// Float attributes are borrowed; integer attributes are converted.
    pub fn as_scalars(&self) -> Cow<'_, [f64]> {
        match self {
            AttributeValues::Float(v) => Cow::Borrowed(v.as_slice()),
            AttributeValues::Int(v) => Cow::Owned(
                v.iter()
                    .map(|x| x.to_f64().unwrap_or(f64::NAN))
                    .collect(),
            ),
        }
    }

    /// Integer values, if this is an integer attribute.
    pub fn as_ints(&self) -> Option<&[i64]> {
        match self {
            AttributeValues::Int(v) => Some(v),
            AttributeValues::Float(_) => None,
        }
    }
}

/// Attribute name → per-point values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointAttributes {
    attributes: BTreeMap<String, AttributeValues>,
}

impl PointAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, name: &str) -> Option<&AttributeValues> {
        self.attributes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Attribute names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    fn insert(&mut self, name: &str, values: AttributeValues) -> Option<AttributeValues> {
        self.attributes.insert(name.to_string(), values)
    }
}

/// Mesh topology plus its point attributes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    mesh: Mesh,
    attributes: PointAttributes,
}

impl Geometry {
    pub fn new(mesh: Mesh) -> Self {
        Self {
            mesh,
            attributes: PointAttributes::new(),
        }
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn attributes(&self) -> &PointAttributes {
        &self.attributes
    }

    pub fn point_count(&self) -> usize {
        self.mesh.point_count()
    }

    /// Adds or replaces a float attribute. Returns the previous values.
    pub fn set_float_attribute(
        &mut self,
        name: &str,
        values: Vec<f64>,
    ) -> Result<Option<AttributeValues>, ConnectivityError> {
        self.set_attribute(name, AttributeValues::Float(values))
    }

    /// Adds or replaces an integer attribute. Returns the previous values.
    pub fn set_int_attribute(
        &mut self,
        name: &str,
        values: Vec<i64>,
    ) -> Result<Option<AttributeValues>, ConnectivityError> {
        self.set_attribute(name, AttributeValues::Int(values))
    }

    /// Float attribute that is `default` everywhere except at `points`, which
    /// get `value`. Mirrors a host "create attribute on group" step.
    pub fn set_float_on_points(
        &mut self,
        name: &str,
        default: f64,
        points: &[usize],
        value: f64,
    ) -> Result<Option<AttributeValues>, ConnectivityError> {
        let point_count = self.point_count();
        let mut values = vec![default; point_count];
        for &p in points {
            let slot = values
                .get_mut(p)
                .ok_or(ConnectivityError::PointOutOfRange { point: p, point_count })?;
            *slot = value;
        }
        self.set_float_attribute(name, values)
    }

    fn set_attribute(
        &mut self,
        name: &str,
        values: AttributeValues,
    ) -> Result<Option<AttributeValues>, ConnectivityError> {
        if values.len() != self.point_count() {
            return Err(ConnectivityError::AttributeLengthMismatch {
                name: name.to_string(),
                expected: self.point_count(),
                found: values.len(),
            });
        }
        Ok(self.attributes.insert(name, values))
    }
}
