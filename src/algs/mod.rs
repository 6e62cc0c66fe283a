//! Re-export public algorithms.

pub mod adjacency_graph;
pub mod eligibility;
pub mod labeler;
pub mod predicate;
pub mod union_find;

pub use adjacency_graph::build_point_adjacency_graph;
pub use eligibility::eligible_points;
pub use labeler::label_components;
