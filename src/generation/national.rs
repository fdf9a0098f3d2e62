//! National networks.
//!
//! A national network joins many local networks. Cross-links at this tier only
//! ever connect individuals, and a second tier of larger businesses draws its
//! customers from the whole national population.

use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{
    build_children, inject_businesses, link, require_positive, GenerationContext,
    GenerationError, LocalNetwork, LocalParams,
};
use crate::graph::{BusinessRegistry, NodeId, PaymentGraph};

/// Parameters for a national network
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NationalParams {
    /// Number of local networks
    pub local_networks: usize,
    /// Number of national businesses to inject
    pub businesses: usize,
    /// Random cross-links per local network
    pub connections_per_local_network: usize,
    /// Parameters shared by every local network
    pub local: LocalParams,
}

impl Default for NationalParams {
    fn default() -> Self {
        Self {
            local_networks: 50,
            businesses: 600,
            connections_per_local_network: 20,
            local: LocalParams::default(),
        }
    }
}

impl NationalParams {
    pub fn cross_link_count(&self) -> usize {
        self.connections_per_local_network
            .saturating_mul(self.local_networks)
    }
}

/// A national network: local networks, their businesses and the national
/// businesses
#[derive(Debug, Clone)]
pub struct NationalNetwork {
    graph: PaymentGraph,
    businesses: BusinessRegistry,
}

impl NationalNetwork {
    pub fn build<R: Rng + ?Sized>(
        params: &NationalParams,
        ctx: &GenerationContext,
        rng: &mut R,
    ) -> Result<Self, GenerationError> {
        require_positive("local_networks", params.local_networks)?;
        require_positive("national businesses", params.businesses)?;

        let local = params.local;
        let locals = build_children(params.local_networks, ctx.parallel, rng, |child_rng| {
            LocalNetwork::build(&local, ctx, child_rng).map(LocalNetwork::into_parts)
        })?;

        let mut businesses = BusinessRegistry::new();
        let mut graphs = Vec::with_capacity(locals.len());
        for (graph, local_businesses) in locals {
            businesses.absorb(local_businesses);
            graphs.push(graph);
        }
        let mut graph = PaymentGraph::union_all(graphs)?;
        let local_business_count = businesses.len();

        let outcome = link(&mut graph, params.cross_link_count(), businesses.as_set(), rng)?;

        let customers: Vec<NodeId> = graph
            .node_ids()
            .filter(|id| !businesses.contains(id))
            .copied()
            .collect();
        let customer_edges = inject_businesses(
            &mut graph,
            &customers,
            params.businesses,
            &ctx.popularity,
            &mut businesses,
            rng,
        )?;

        info!(
            "Built national network: {} local networks, {} individuals, {} local + {} national businesses, {} cross-links, {} customer edges",
            params.local_networks,
            customers.len(),
            local_business_count,
            businesses.len() - local_business_count,
            outcome.linked_pairs,
            customer_edges
        );

        Ok(Self { graph, businesses })
    }

    pub fn graph(&self) -> &PaymentGraph {
        &self.graph
    }

    /// All businesses: every local network's plus the national tier
    pub fn businesses(&self) -> &BusinessRegistry {
        &self.businesses
    }

    pub fn into_parts(self) -> (PaymentGraph, BusinessRegistry) {
        (self.graph, self.businesses)
    }
}
