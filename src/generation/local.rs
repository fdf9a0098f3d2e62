//! Local networks.
//!
//! A local network is a community: many social sub-networks whose members
//! rarely pay each other across groups, tied together by a handful of random
//! cross-links and by the local businesses they share.

use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{
    build_children, inject_businesses, link, require_positive, GenerationContext,
    GenerationError, SocialParams, SocialSubNetwork,
};
use crate::graph::{BusinessRegistry, NodeId, PaymentGraph};

/// Parameters for a local network
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalParams {
    /// Number of social sub-networks
    pub social_networks: usize,
    /// Number of local businesses to inject
    pub businesses: usize,
    /// Random cross-links per social sub-network
    pub connections_per_social_network: usize,
    /// Parameters shared by every social sub-network
    pub social: SocialParams,
}

impl Default for LocalParams {
    fn default() -> Self {
        Self {
            social_networks: 50,
            businesses: 200,
            connections_per_social_network: 5,
            social: SocialParams::default(),
        }
    }
}

impl LocalParams {
    pub fn cross_link_count(&self) -> usize {
        self.connections_per_social_network
            .saturating_mul(self.social_networks)
    }
}

/// A local community network and its businesses
#[derive(Debug, Clone)]
pub struct LocalNetwork {
    graph: PaymentGraph,
    businesses: BusinessRegistry,
}

impl LocalNetwork {
    /// Build a local network from `params.social_networks` social
    /// sub-networks, cross-link them and inject the local businesses.
    pub fn build<R: Rng + ?Sized>(
        params: &LocalParams,
        ctx: &GenerationContext,
        rng: &mut R,
    ) -> Result<Self, GenerationError> {
        require_positive("social_networks", params.social_networks)?;
        require_positive("local businesses", params.businesses)?;

        let social = params.social;
        let groups = build_children(params.social_networks, ctx.parallel, rng, |child_rng| {
            SocialSubNetwork::build(&social, child_rng).map(SocialSubNetwork::into_graph)
        })?;
        let mut graph = PaymentGraph::union_all(groups)?;

        let outcome = link(&mut graph, params.cross_link_count(), &BTreeSet::new(), rng)?;

        // No businesses exist yet, so every node is a potential customer
        let customers: Vec<NodeId> = graph.individuals().copied().collect();
        let mut businesses = BusinessRegistry::new();
        let customer_edges = inject_businesses(
            &mut graph,
            &customers,
            params.businesses,
            &ctx.popularity,
            &mut businesses,
            rng,
        )?;

        info!(
            "Built local network: {} individuals, {} businesses, {} cross-links, {} customer edges",
            customers.len(),
            businesses.len(),
            outcome.linked_pairs,
            customer_edges
        );

        Ok(Self { graph, businesses })
    }

    pub fn graph(&self) -> &PaymentGraph {
        &self.graph
    }

    pub fn businesses(&self) -> &BusinessRegistry {
        &self.businesses
    }

    /// Transfer ownership of the graph and business set
    pub fn into_parts(self) -> (PaymentGraph, BusinessRegistry) {
        (self.graph, self.businesses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::PopularityDistribution;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ctx() -> GenerationContext {
        GenerationContext::new(PopularityDistribution::new(0.2, 0.05, 0.05, 0.5).unwrap())
    }

    fn small_params() -> LocalParams {
        LocalParams {
            social_networks: 3,
            businesses: 5,
            connections_per_social_network: 2,
            social: SocialParams {
                individuals: 10,
                average_connections_per_person: 3,
            },
        }
    }

    #[test]
    fn test_exactly_the_requested_businesses_are_sinks() {
        let network = LocalNetwork::build(&small_params(), &ctx(), &mut StdRng::seed_from_u64(5)).unwrap();
        let graph = network.graph();

        assert_eq!(network.businesses().len(), 5);
        assert_eq!(graph.businesses().count(), 5);
        for business in network.businesses() {
            assert_eq!(graph.out_degree(business), 0);
            for customer in graph.predecessors(business) {
                assert!(!network.businesses().contains(customer));
            }
        }
    }

    #[test]
    fn test_individual_links_are_reciprocal() {
        let network = LocalNetwork::build(&small_params(), &ctx(), &mut StdRng::seed_from_u64(6)).unwrap();
        let graph = network.graph();

        for (from, to) in graph.edges() {
            assert_ne!(from, to);
            if !network.businesses().contains(to) {
                assert!(graph.contains_edge(to, from));
            }
        }
    }

    #[test]
    fn test_parallel_and_sequential_builds_match() {
        let parallel = LocalNetwork::build(&small_params(), &ctx(), &mut StdRng::seed_from_u64(8)).unwrap();
        let sequential =
            LocalNetwork::build(&small_params(), &ctx().sequential(), &mut StdRng::seed_from_u64(8)).unwrap();

        assert_eq!(
            parallel.graph().edges().collect::<Vec<_>>(),
            sequential.graph().edges().collect::<Vec<_>>()
        );
        assert_eq!(parallel.businesses(), sequential.businesses());
    }

    #[test]
    fn test_zero_counts_are_rejected() {
        let mut params = small_params();
        params.businesses = 0;
        let err = LocalNetwork::build(&params, &ctx(), &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidParameter(_)));

        let mut params = small_params();
        params.social_networks = 0;
        let err = LocalNetwork::build(&params, &ctx(), &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidParameter(_)));
    }
}
