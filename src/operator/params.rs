//! Operator parameters.
//!
//! Field names on the wire follow the host's parameter names, and every field
//! has a default, so a partial document such as `{"attribname": "density"}`
//! deserializes to a complete configuration.

use serde::{Deserialize, Serialize};

use crate::algs::adjacency_graph::{AdjacencyMode, AdjacencyOpts};
use crate::algs::labeler::{LabelOpts, SingletonPolicy};
use crate::algs::predicate::{AttributePredicate, DEFAULT_THRESHOLD, MergeRule};

/// Default output attribute name.
pub const DEFAULT_OUTPUT_NAME: &str = "index";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectivityParams {
    /// Point group pattern; empty selects every point.
    pub group: String,
    /// Expand the group to every island it touches.
    #[serde(rename = "groupincludewholeisland")]
    pub include_whole_islands: bool,
    pub threshold: f64,
    /// Source attribute compared between neighbors.
    #[serde(rename = "attribname")]
    pub attribute_name: String,
    /// Integer attribute receiving the labels.
    #[serde(rename = "outputindexattrib")]
    pub output_name: String,
    #[serde(rename = "mergerule")]
    pub merge_rule: MergeRule,
    pub singletons: SingletonPolicy,
    pub adjacency: AdjacencyMode,
}

impl Default for ConnectivityParams {
    fn default() -> Self {
        Self {
            group: String::new(),
            include_whole_islands: false,
            threshold: DEFAULT_THRESHOLD,
            attribute_name: String::new(),
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
            merge_rule: MergeRule::default(),
            singletons: SingletonPolicy::default(),
            adjacency: AdjacencyMode::default(),
        }
    }
}

impl ConnectivityParams {
    /// Defaults reading `attribute_name`.
    pub fn for_attribute(attribute_name: impl Into<String>) -> Self {
        Self {
            attribute_name: attribute_name.into(),
            ..Self::default()
        }
    }

    pub fn predicate(&self) -> AttributePredicate {
        AttributePredicate::new(self.merge_rule, self.threshold)
    }

    pub fn adjacency_opts(&self) -> AdjacencyOpts {
        AdjacencyOpts {
            mode: self.adjacency,
        }
    }

    pub fn label_opts(&self) -> LabelOpts {
        LabelOpts {
            singletons: self.singletons,
        }
    }
}
