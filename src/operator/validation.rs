//! Precondition checks run before any graph work.
//!
//! Checks run in a fixed order and the first failure is returned, so hosts
//! always see the same message for the same broken setup.

use crate::connectivity_error::{ConnectivityError, EMPTY_INDEX_NAME};
use crate::operator::params::ConnectivityParams;
use crate::topology::attributes::{AttributeValues, Geometry};

/// Validate `inputs` and `params`; return the geometry to cook and its source
/// attribute.
pub fn validate<'g>(
    inputs: &[&'g Geometry],
    params: &ConnectivityParams,
) -> Result<(&'g Geometry, &'g AttributeValues), ConnectivityError> {
    let geometry = *inputs.first().ok_or(ConnectivityError::NotEnoughSources)?;

    if params.output_name.is_empty() {
        return Err(ConnectivityError::invalid_attribute(EMPTY_INDEX_NAME));
    }
    if !is_valid_attribute_name(&params.output_name) {
        return Err(ConnectivityError::invalid_attribute(format!(
            "Attribute {} is invalid",
            params.output_name
        )));
    }

    let source = geometry
        .attributes()
        .find(&params.attribute_name)
        .ok_or_else(|| {
            log::debug!(
                "source `{}` not among point attributes [{}]",
                params.attribute_name,
                geometry.attributes().names().collect::<Vec<_>>().join(", ")
            );
            ConnectivityError::invalid_attribute(format!(
                "Attribute {} either not supplied or unrecognized",
                params.attribute_name
            ))
        })?;

    if !params.threshold.is_finite() {
        return Err(ConnectivityError::InvalidThreshold(params.threshold.to_string()));
    }

    Ok((geometry, source))
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_valid_attribute_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
