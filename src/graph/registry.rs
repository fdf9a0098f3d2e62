//! Business registry.
//!
//! Tracks the business identifiers owned by one level of the network
//! hierarchy. Registries only grow: a composer absorbs the registries of its
//! children and then adds its own businesses.

use serde::Serialize;
use std::collections::btree_set::{self, BTreeSet};

use super::types::NodeId;

/// Set of business node identifiers for a network level
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BusinessRegistry {
    names: BTreeSet<NodeId>,
}

impl BusinessRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a business, returning false if it was already registered
    pub fn insert(&mut self, id: NodeId) -> bool {
        self.names.insert(id)
    }

    /// Union another registry into this one
    pub fn absorb(&mut self, other: BusinessRegistry) {
        self.names.extend(other.names);
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.names.contains(id)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, NodeId> {
        self.names.iter()
    }

    /// True if every business in `other` is also registered here
    pub fn is_superset(&self, other: &BusinessRegistry) -> bool {
        self.names.is_superset(&other.names)
    }

    pub fn as_set(&self) -> &BTreeSet<NodeId> {
        &self.names
    }
}

impl<'a> IntoIterator for &'a BusinessRegistry {
    type Item = &'a NodeId;
    type IntoIter = btree_set::Iter<'a, NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

impl FromIterator<NodeId> for BusinessRegistry {
    fn from_iter<T: IntoIterator<Item = NodeId>>(iter: T) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_absorb_is_union() {
        let mut rng = StdRng::seed_from_u64(11);
        let a = NodeId::random(&mut rng);
        let b = NodeId::random(&mut rng);
        let c = NodeId::random(&mut rng);

        let mut parent: BusinessRegistry = [a, b].into_iter().collect();
        let child: BusinessRegistry = [b, c].into_iter().collect();
        parent.absorb(child.clone());

        assert_eq!(parent.len(), 3);
        assert!(parent.is_superset(&child));
        assert!(!child.is_superset(&parent));
        assert!(!parent.insert(a));
    }
}
