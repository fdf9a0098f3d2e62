//! Payment graph model.
//!
//! This module contains the directed graph that every network level is
//! assembled into, the tagged node kinds, and the per-level business registry.

pub mod payment_graph;
pub mod registry;
pub mod types;

pub use payment_graph::PaymentGraph;
pub use registry::BusinessRegistry;
pub use types::{GraphError, NodeId, NodeKind};
