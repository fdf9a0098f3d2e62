//! Analysis of generated payment networks.
//!
//! This module summarizes degree distributions and checks that a generated
//! graph holds the structural invariants of the generator.

pub mod network_graph;

pub use network_graph::{summarize, validate_graph, DegreeStats, GraphSummary, GraphValidation};
