//! Random bidirectional linking.
//!
//! Each of the `edge_count` draws picks two pool indices uniformly and with
//! replacement. A draw that lands on the same node twice is skipped, not
//! retried, so the number of linked pairs is `edge_count * (1 - 1/pool_size)`
//! in expectation. This undershoot is expected behaviour.

use log::debug;
use rand::Rng;
use std::collections::BTreeSet;

use super::GenerationError;
use crate::graph::{NodeId, PaymentGraph};

/// Result of a linking pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinkOutcome {
    /// Number of draws requested
    pub requested: usize,
    /// Draws that produced a pair of distinct nodes (both directions added)
    pub linked_pairs: usize,
    /// Draws that picked the same node twice
    pub skipped_self_pairs: usize,
}

/// Add `edge_count` random reciprocal links between nodes of `graph`.
///
/// Nodes in `exclude` are never chosen as endpoints. The eligible pool is
/// computed once per call. Requesting links on a pool with fewer than two
/// nodes fails with [`GenerationError::InsufficientNodes`]; a request for zero
/// links always succeeds.
pub fn link<R: Rng + ?Sized>(
    graph: &mut PaymentGraph,
    edge_count: usize,
    exclude: &BTreeSet<NodeId>,
    rng: &mut R,
) -> Result<LinkOutcome, GenerationError> {
    let mut outcome = LinkOutcome {
        requested: edge_count,
        ..Default::default()
    };
    if edge_count == 0 {
        return Ok(outcome);
    }

    let pool: Vec<NodeId> = graph
        .node_ids()
        .filter(|id| !exclude.contains(*id))
        .copied()
        .collect();
    if pool.len() < 2 {
        return Err(GenerationError::InsufficientNodes {
            requested: edge_count,
            available: pool.len(),
        });
    }

    for _ in 0..edge_count {
        let a = rng.gen_range(0..pool.len());
        let b = rng.gen_range(0..pool.len());
        if a == b {
            outcome.skipped_self_pairs += 1;
            continue;
        }
        graph.add_edge(pool[a], pool[b])?;
        graph.add_edge(pool[b], pool[a])?;
        outcome.linked_pairs += 1;
    }

    debug!(
        "Linked {} of {} requested pairs over {} eligible nodes ({} self-pairs skipped)",
        outcome.linked_pairs,
        outcome.requested,
        pool.len(),
        outcome.skipped_self_pairs
    );

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn graph_with(rng: &mut StdRng, count: usize) -> (PaymentGraph, Vec<NodeId>) {
        let mut graph = PaymentGraph::new();
        let ids: Vec<NodeId> = (0..count).map(|_| NodeId::random(rng)).collect();
        for id in &ids {
            graph.add_node(*id, NodeKind::Individual).unwrap();
        }
        (graph, ids)
    }

    #[test]
    fn test_two_node_pool_links_only_that_pair() {
        let mut rng = StdRng::seed_from_u64(100);
        let (mut graph, ids) = graph_with(&mut rng, 2);

        let outcome = link(&mut graph, 100, &BTreeSet::new(), &mut rng).unwrap();

        assert_eq!(outcome.requested, 100);
        assert_eq!(outcome.linked_pairs + outcome.skipped_self_pairs, 100);
        assert!(outcome.linked_pairs <= 100);
        assert!(outcome.linked_pairs > 0);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.contains_edge(&ids[0], &ids[1]));
        assert!(graph.contains_edge(&ids[1], &ids[0]));
    }

    #[test]
    fn test_links_are_reciprocal_and_loop_free() {
        let mut rng = StdRng::seed_from_u64(101);
        let (mut graph, _) = graph_with(&mut rng, 25);

        link(&mut graph, 200, &BTreeSet::new(), &mut rng).unwrap();

        for (from, to) in graph.edges() {
            assert_ne!(from, to);
            assert!(graph.contains_edge(to, from));
        }
    }

    #[test]
    fn test_excluded_nodes_are_never_endpoints() {
        let mut rng = StdRng::seed_from_u64(102);
        let (mut graph, ids) = graph_with(&mut rng, 10);
        let exclude: BTreeSet<NodeId> = ids[..4].iter().copied().collect();

        link(&mut graph, 300, &exclude, &mut rng).unwrap();

        for id in &exclude {
            assert_eq!(graph.degree(id), 0);
        }
        assert!(graph.edge_count() > 0);
    }

    #[test]
    fn test_insufficient_pool() {
        let mut rng = StdRng::seed_from_u64(103);
        let (mut graph, ids) = graph_with(&mut rng, 3);
        let exclude: BTreeSet<NodeId> = ids[..2].iter().copied().collect();

        let err = link(&mut graph, 5, &exclude, &mut rng).unwrap_err();
        assert_eq!(
            err,
            GenerationError::InsufficientNodes {
                requested: 5,
                available: 1
            }
        );
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_zero_edges_on_empty_graph_is_a_noop() {
        let mut rng = StdRng::seed_from_u64(104);
        let mut graph = PaymentGraph::new();

        let outcome = link(&mut graph, 0, &BTreeSet::new(), &mut rng).unwrap();
        assert_eq!(outcome, LinkOutcome::default());
    }
}
