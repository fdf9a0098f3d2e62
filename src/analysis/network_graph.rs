//! Payment graph summary.
//!
//! Provides a degree-level summary of a generated network and a structural
//! check of the properties every generated graph should hold:
//! - No self-loops
//! - Reciprocal links between individuals
//! - Businesses that never initiate an edge

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::graph::{NodeKind, PaymentGraph};

/// Summary of a generated payment graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSummary {
    pub node_count: usize,
    pub individual_count: usize,
    pub business_count: usize,
    pub edge_count: usize,
    /// Individuals with no incident edges
    pub isolated_individuals: usize,
    /// Out-degree of individuals
    pub out_degree: DegreeStats,
    /// In-degree of individuals
    pub in_degree: DegreeStats,
    /// Number of customers per business
    pub business_in_degree: DegreeStats,
    /// Customers per business histogram (in-degree -> count of businesses)
    pub business_histogram: BTreeMap<usize, usize>,
    /// Structural findings
    pub validation: GraphValidation,
}

/// Statistical summary of degrees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegreeStats {
    pub min: usize,
    pub max: usize,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
}

/// Structural checks against the generation invariants
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphValidation {
    pub self_loops: usize,
    /// Individual-to-individual edges without a reverse edge
    pub unreciprocated_edges: usize,
    /// Edges whose source is a business
    pub business_out_edges: usize,
    pub findings: Vec<String>,
}

impl GraphValidation {
    pub fn is_valid(&self) -> bool {
        self.self_loops == 0 && self.unreciprocated_edges == 0 && self.business_out_edges == 0
    }
}

/// Summarize a generated graph
pub fn summarize(graph: &PaymentGraph) -> GraphSummary {
    let mut out_values = Vec::new();
    let mut in_values = Vec::new();
    let mut business_values = Vec::new();
    let mut business_histogram: BTreeMap<usize, usize> = BTreeMap::new();
    let mut isolated_individuals = 0;

    for (id, kind) in graph.nodes() {
        match kind {
            NodeKind::Individual => {
                out_values.push(graph.out_degree(id));
                in_values.push(graph.in_degree(id));
                if graph.degree(id) == 0 {
                    isolated_individuals += 1;
                }
            }
            NodeKind::Business => {
                let customers = graph.in_degree(id);
                business_values.push(customers);
                *business_histogram.entry(customers).or_insert(0) += 1;
            }
        }
    }

    GraphSummary {
        node_count: graph.node_count(),
        individual_count: out_values.len(),
        business_count: business_values.len(),
        edge_count: graph.edge_count(),
        isolated_individuals,
        out_degree: calculate_stats(&out_values),
        in_degree: calculate_stats(&in_values),
        business_in_degree: calculate_stats(&business_values),
        business_histogram,
        validation: validate_graph(graph),
    }
}

/// Check a graph against the generation invariants
pub fn validate_graph(graph: &PaymentGraph) -> GraphValidation {
    let mut validation = GraphValidation::default();

    for (from, to) in graph.edges() {
        if from == to {
            validation.self_loops += 1;
            continue;
        }
        match (graph.kind(from), graph.kind(to)) {
            (Some(NodeKind::Business), _) => validation.business_out_edges += 1,
            (Some(NodeKind::Individual), Some(NodeKind::Individual)) => {
                if !graph.contains_edge(to, from) {
                    validation.unreciprocated_edges += 1;
                }
            }
            _ => {}
        }
    }

    if validation.self_loops > 0 {
        validation
            .findings
            .push(format!("{} self-loop edges", validation.self_loops));
    }
    if validation.unreciprocated_edges > 0 {
        validation.findings.push(format!(
            "{} individual edges have no reverse edge",
            validation.unreciprocated_edges
        ));
    }
    if validation.business_out_edges > 0 {
        validation.findings.push(format!(
            "{} edges leave a business node",
            validation.business_out_edges
        ));
    }
    if validation.findings.is_empty() {
        validation
            .findings
            .push("Network structure appears consistent".to_string());
    }

    validation
}

/// Calculate statistical summary
fn calculate_stats(values: &[usize]) -> DegreeStats {
    if values.is_empty() {
        return DegreeStats {
            min: 0,
            max: 0,
            mean: 0.0,
            median: 0.0,
            std_dev: 0.0,
        };
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let min = sorted[0];
    let max = sorted[sorted.len() - 1];
    let sum: usize = sorted.iter().sum();
    let mean = sum as f64 / sorted.len() as f64;

    let median = if sorted.len() % 2 == 0 {
        (sorted[sorted.len() / 2 - 1] + sorted[sorted.len() / 2]) as f64 / 2.0
    } else {
        sorted[sorted.len() / 2] as f64
    };

    let variance: f64 = sorted
        .iter()
        .map(|&v| {
            let diff = v as f64 - mean;
            diff * diff
        })
        .sum::<f64>()
        / sorted.len() as f64;

    DegreeStats {
        min,
        max,
        mean,
        median,
        std_dev: variance.sqrt(),
    }
}
