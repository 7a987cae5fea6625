//! Five toggleable nodes lighting up four clusters by parity.

mod component;
mod state;

pub use component::RelationshipGraph;
pub use state::{ADJACENCY, CLUSTER_COUNT, ClusterActivation, NODE_COUNT, NodeToggleSet, status_line};
