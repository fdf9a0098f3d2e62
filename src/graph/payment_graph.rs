//! Directed payment graph.
//!
//! Nodes are kept in identifier order, so iteration (and therefore every
//! sampling step that indexes into a node list) is deterministic for a given
//! set of identifiers. Edges are deduplicated: inserting an existing edge is a
//! no-op.

use std::collections::{BTreeMap, BTreeSet};

use super::types::{GraphError, NodeId, NodeKind};

#[derive(Debug, Clone)]
struct NodeEntry {
    kind: NodeKind,
    successors: BTreeSet<NodeId>,
    predecessors: BTreeSet<NodeId>,
}

impl NodeEntry {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            successors: BTreeSet::new(),
            predecessors: BTreeSet::new(),
        }
    }

    fn degree(&self) -> usize {
        self.successors.len() + self.predecessors.len()
    }
}

/// A directed graph of individuals and businesses
#[derive(Debug, Clone, Default)]
pub struct PaymentGraph {
    nodes: BTreeMap<NodeId, NodeEntry>,
    edge_count: usize,
}

impl PaymentGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node of the given kind
    pub fn add_node(&mut self, id: NodeId, kind: NodeKind) -> Result<(), GraphError> {
        if self.nodes.contains_key(&id) {
            return Err(GraphError::DuplicateNode(id));
        }
        self.nodes.insert(id, NodeEntry::new(kind));
        Ok(())
    }

    /// Add a directed edge `from -> to`.
    ///
    /// Returns `Ok(true)` if the edge is new and `Ok(false)` if it already
    /// existed. Self-loops and edges leaving a business node are rejected.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> Result<bool, GraphError> {
        if from == to {
            return Err(GraphError::SelfLoop(from));
        }
        if !self.nodes.contains_key(&to) {
            return Err(GraphError::UnknownNode(to));
        }
        let source = self.nodes.get_mut(&from).ok_or(GraphError::UnknownNode(from))?;
        if !source.kind.can_initiate() {
            return Err(GraphError::BusinessSource(from));
        }
        if !source.successors.insert(to) {
            return Ok(false);
        }
        if let Some(target) = self.nodes.get_mut(&to) {
            target.predecessors.insert(from);
        }
        self.edge_count += 1;
        Ok(true)
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn contains_edge(&self, from: &NodeId, to: &NodeId) -> bool {
        self.nodes
            .get(from)
            .map_or(false, |entry| entry.successors.contains(to))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn kind(&self, id: &NodeId) -> Option<NodeKind> {
        self.nodes.get(id).map(|entry| entry.kind)
    }

    /// Iterate over all nodes with their kind, in identifier order
    pub fn nodes(&self) -> impl Iterator<Item = (&NodeId, NodeKind)> + '_ {
        self.nodes.iter().map(|(id, entry)| (id, entry.kind))
    }

    /// Iterate over all node identifiers, in identifier order
    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> + '_ {
        self.nodes.keys()
    }

    /// Iterate over individual node identifiers
    pub fn individuals(&self) -> impl Iterator<Item = &NodeId> + '_ {
        self.nodes_of_kind(NodeKind::Individual)
    }

    /// Iterate over business node identifiers
    pub fn businesses(&self) -> impl Iterator<Item = &NodeId> + '_ {
        self.nodes_of_kind(NodeKind::Business)
    }

    fn nodes_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = &NodeId> + '_ {
        self.nodes
            .iter()
            .filter(move |(_, entry)| entry.kind == kind)
            .map(|(id, _)| id)
    }

    /// Iterate over all edges as `(source, target)` pairs
    pub fn edges(&self) -> impl Iterator<Item = (&NodeId, &NodeId)> + '_ {
        self.nodes
            .iter()
            .flat_map(|(from, entry)| entry.successors.iter().map(move |to| (from, to)))
    }

    pub fn successors(&self, id: &NodeId) -> impl Iterator<Item = &NodeId> + '_ {
        self.nodes.get(id).into_iter().flat_map(|entry| entry.successors.iter())
    }

    pub fn predecessors(&self, id: &NodeId) -> impl Iterator<Item = &NodeId> + '_ {
        self.nodes.get(id).into_iter().flat_map(|entry| entry.predecessors.iter())
    }

    pub fn out_degree(&self, id: &NodeId) -> usize {
        self.nodes.get(id).map_or(0, |entry| entry.successors.len())
    }

    pub fn in_degree(&self, id: &NodeId) -> usize {
        self.nodes.get(id).map_or(0, |entry| entry.predecessors.len())
    }

    /// Total degree (in + out)
    pub fn degree(&self, id: &NodeId) -> usize {
        self.nodes.get(id).map_or(0, NodeEntry::degree)
    }

    /// Nodes with no incident edges
    pub fn isolates(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|(_, entry)| entry.degree() == 0)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Remove a node together with all of its incident edges.
    ///
    /// Returns false if the node was not present.
    pub fn remove_node(&mut self, id: &NodeId) -> bool {
        let Some(entry) = self.nodes.remove(id) else {
            return false;
        };
        for successor in &entry.successors {
            if let Some(target) = self.nodes.get_mut(successor) {
                target.predecessors.remove(id);
            }
        }
        for predecessor in &entry.predecessors {
            if let Some(source) = self.nodes.get_mut(predecessor) {
                source.successors.remove(id);
            }
        }
        self.edge_count -= entry.successors.len() + entry.predecessors.len();
        true
    }

    /// Remove every node in `ids`, returning how many were present
    pub fn remove_nodes<'a, I>(&mut self, ids: I) -> usize
    where
        I: IntoIterator<Item = &'a NodeId>,
    {
        let mut removed = 0;
        for id in ids {
            if self.remove_node(id) {
                removed += 1;
            }
        }
        removed
    }

    /// Remove all isolated nodes, returning how many were removed
    pub fn remove_isolates(&mut self) -> usize {
        let isolates = self.isolates();
        self.remove_nodes(&isolates)
    }

    /// Disjoint union of two graphs.
    ///
    /// Fails with [`GraphError::DuplicateNode`] if the graphs share an
    /// identifier; neither input is partially merged in that case.
    pub fn union(self, other: PaymentGraph) -> Result<PaymentGraph, GraphError> {
        let (mut larger, smaller) = if self.nodes.len() >= other.nodes.len() {
            (self, other)
        } else {
            (other, self)
        };

        if let Some(shared) = smaller.nodes.keys().find(|id| larger.nodes.contains_key(*id)) {
            return Err(GraphError::DuplicateNode(*shared));
        }

        larger.edge_count += smaller.edge_count;
        larger.nodes.extend(smaller.nodes);
        Ok(larger)
    }

    /// Union of many graphs, in order
    pub fn union_all<I>(graphs: I) -> Result<PaymentGraph, GraphError>
    where
        I: IntoIterator<Item = PaymentGraph>,
    {
        graphs
            .into_iter()
            .try_fold(PaymentGraph::new(), PaymentGraph::union)
    }
}
