//! Graph type definitions.
//!
//! Node identifiers, node kinds and the errors raised by graph mutation.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::{Builder, Uuid};

/// Opaque, globally unique node identifier.
///
/// Rendered as a hyphenated UUID v4 string. Identifiers are derived from the
/// caller's random source so that seeded runs reproduce the same identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Generate a fresh random (version 4) identifier from `rng`
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let bytes: [u8; 16] = rng.gen();
        NodeId(Builder::from_random_bytes(bytes).into_uuid())
    }

    /// Borrow the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for NodeId {
    fn from(uuid: Uuid) -> Self {
        NodeId(uuid)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Kind of a node in a payment network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A person with reciprocal payment connections to peers
    Individual,
    /// A commercial entity; receives edges from customers, never initiates one
    Business,
}

impl NodeKind {
    /// Returns true if this node kind may be the source of an edge
    pub fn can_initiate(&self) -> bool {
        matches!(self, Self::Individual)
    }

    /// Lowercase label used by the exporters
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Business => "business",
        }
    }
}

/// Errors raised when mutating a [`PaymentGraph`](super::PaymentGraph)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("Node {0} already exists in the graph")]
    DuplicateNode(NodeId),

    #[error("Node {0} does not exist in the graph")]
    UnknownNode(NodeId),

    #[error("Self-loop on node {0} is not allowed")]
    SelfLoop(NodeId),

    #[error("Business node {0} cannot be the source of an edge")]
    BusinessSource(NodeId),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_node_id_is_reproducible_under_seed() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);

        assert_eq!(NodeId::random(&mut a), NodeId::random(&mut b));
    }

    #[test]
    fn test_node_id_renders_as_v4_uuid() {
        let mut rng = StdRng::seed_from_u64(1);
        let id = NodeId::random(&mut rng);
        let rendered = id.to_string();

        assert_eq!(rendered.len(), 36);
        assert_eq!(id.as_uuid().get_version_num(), 4);
        assert_eq!(rendered.parse::<Uuid>().unwrap(), *id.as_uuid());
    }

    #[test]
    fn test_node_kind_initiation() {
        assert!(NodeKind::Individual.can_initiate());
        assert!(!NodeKind::Business.can_initiate());
        assert_eq!(NodeKind::Business.as_str(), "business");
    }
}
