//! Social sub-networks.
//!
//! A social sub-network is a small, tightly knit group of individuals, such as
//! an extended circle of friends, linked by reciprocal payment connections.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{link, require_positive, GenerationError};
use crate::graph::{NodeId, NodeKind, PaymentGraph};

/// Parameters for a single social sub-network
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SocialParams {
    /// Number of individuals created before isolate pruning
    pub individuals: usize,
    /// Average number of payment connections per person within the group
    pub average_connections_per_person: usize,
}

impl Default for SocialParams {
    fn default() -> Self {
        Self {
            individuals: 30,
            average_connections_per_person: 5,
        }
    }
}

impl SocialParams {
    /// Number of linking draws, capped at the edge count of a complete
    /// simple directed graph on `individuals` nodes
    pub fn target_edge_count(&self) -> usize {
        let n = self.individuals;
        let max_edges = n.saturating_mul(n.saturating_sub(1));
        n.saturating_mul(self.average_connections_per_person).min(max_edges)
    }
}

/// A social sub-network of individuals
#[derive(Debug, Clone)]
pub struct SocialSubNetwork {
    graph: PaymentGraph,
}

impl SocialSubNetwork {
    /// Build a sub-network: create the individuals, link them at random and
    /// prune anyone left without a connection.
    pub fn build<R: Rng + ?Sized>(
        params: &SocialParams,
        rng: &mut R,
    ) -> Result<Self, GenerationError> {
        require_positive("individuals", params.individuals)?;

        let mut graph = PaymentGraph::new();
        for _ in 0..params.individuals {
            graph.add_node(NodeId::random(rng), NodeKind::Individual)?;
        }

        link(&mut graph, params.target_edge_count(), &BTreeSet::new(), rng)?;

        let pruned = graph.remove_isolates();
        debug!(
            "Built social sub-network: {} individuals, {} edges ({} isolates pruned)",
            graph.node_count(),
            graph.edge_count(),
            pruned
        );

        Ok(Self { graph })
    }

    pub fn graph(&self) -> &PaymentGraph {
        &self.graph
    }

    pub fn into_graph(self) -> PaymentGraph {
        self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn params(individuals: usize, average_connections_per_person: usize) -> SocialParams {
        SocialParams {
            individuals,
            average_connections_per_person,
        }
    }

    #[test]
    fn test_target_edge_count_is_capped() {
        assert_eq!(params(10, 3).target_edge_count(), 30);
        assert_eq!(params(4, 50).target_edge_count(), 12);
        assert_eq!(params(1, 5).target_edge_count(), 0);
    }

    #[test]
    fn test_seeded_build_is_reproducible() {
        let a = SocialSubNetwork::build(&params(10, 3), &mut StdRng::seed_from_u64(42)).unwrap();
        let b = SocialSubNetwork::build(&params(10, 3), &mut StdRng::seed_from_u64(42)).unwrap();

        let nodes_a: Vec<_> = a.graph().node_ids().collect();
        let nodes_b: Vec<_> = b.graph().node_ids().collect();
        let edges_a: Vec<_> = a.graph().edges().collect();
        let edges_b: Vec<_> = b.graph().edges().collect();

        assert_eq!(nodes_a, nodes_b);
        assert_eq!(edges_a, edges_b);
    }

    #[test]
    fn test_no_isolates_and_no_businesses() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            let network = SocialSubNetwork::build(&params(12, 1), &mut rng).unwrap();
            let graph = network.graph();

            assert!(graph.isolates().is_empty());
            assert_eq!(graph.businesses().count(), 0);
            assert!(graph.node_count() <= 12);
        }
    }

    #[test]
    fn test_single_individual_is_pruned() {
        let network = SocialSubNetwork::build(&params(1, 5), &mut StdRng::seed_from_u64(1)).unwrap();
        assert!(network.graph().is_empty());
    }

    #[test]
    fn test_independent_builds_are_disjoint() {
        let mut rng = StdRng::seed_from_u64(77);
        let a = SocialSubNetwork::build(&params(30, 5), &mut rng).unwrap();
        let b = SocialSubNetwork::build(&params(30, 5), &mut rng).unwrap();

        assert!(a.graph().node_ids().all(|id| !b.graph().contains_node(id)));
    }

    #[test]
    fn test_zero_individuals_is_rejected() {
        let err = SocialSubNetwork::build(&params(0, 5), &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidParameter(_)));
    }
}
