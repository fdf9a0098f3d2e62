//! Hierarchical payment network generation.
//!
//! Networks are built bottom-up:
//!
//! - [`SocialSubNetwork`]: a small, densely linked group of individuals
//! - [`LocalNetwork`]: many social sub-networks, sparsely cross-linked, plus
//!   local businesses
//! - [`NationalNetwork`]: many local networks, cross-linked between
//!   individuals only, plus national businesses
//!
//! Every build takes an explicit random source. Composers draw one seed per
//! child from that source before building any child, so a seeded build is
//! identical whether children are built sequentially or on the rayon pool.

pub mod business;
pub mod linker;
pub mod local;
pub mod national;
pub mod social;

pub use business::{inject_businesses, PopularityDistribution};
pub use linker::{link, LinkOutcome};
pub use local::{LocalNetwork, LocalParams};
pub use national::{NationalNetwork, NationalParams};
pub use social::{SocialParams, SocialSubNetwork};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::graph::GraphError;

/// Errors that abort a network build
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerationError {
    #[error("Random linking needs at least 2 eligible nodes, found {available} ({requested} edges requested)")]
    InsufficientNodes { requested: usize, available: usize },

    #[error("Cannot sample {requested} distinct users from a pool of {available}")]
    SampleSizeExceeded { requested: usize, available: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Settings shared by every level of a build
#[derive(Debug, Clone)]
pub struct GenerationContext {
    /// Popularity sampler used for business injection
    pub popularity: PopularityDistribution,
    /// Build child networks on the rayon thread pool
    pub parallel: bool,
}

impl GenerationContext {
    pub fn new(popularity: PopularityDistribution) -> Self {
        Self {
            popularity,
            parallel: true,
        }
    }

    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

/// Reject a zero count for a named parameter
pub(crate) fn require_positive(name: &str, value: usize) -> Result<(), GenerationError> {
    if value == 0 {
        return Err(GenerationError::InvalidParameter(format!(
            "{} must be greater than zero",
            name
        )));
    }
    Ok(())
}

/// Build `count` children, each from its own seeded random source.
///
/// Seeds are drawn from `rng` in index order up front and the results are
/// returned in the same order, so the output does not depend on `parallel`.
pub(crate) fn build_children<T, R, F>(
    count: usize,
    parallel: bool,
    rng: &mut R,
    build: F,
) -> Result<Vec<T>, GenerationError>
where
    T: Send,
    R: Rng + ?Sized,
    F: Fn(&mut StdRng) -> Result<T, GenerationError> + Send + Sync,
{
    let seeds: Vec<u64> = (0..count).map(|_| rng.gen()).collect();

    if parallel {
        seeds
            .into_par_iter()
            .map(|seed| build(&mut StdRng::seed_from_u64(seed)))
            .collect()
    } else {
        seeds
            .into_iter()
            .map(|seed| build(&mut StdRng::seed_from_u64(seed)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_children_order_is_independent_of_parallelism() {
        let draw = |rng: &mut StdRng| -> Result<u64, GenerationError> { Ok(rng.gen()) };

        let sequential = build_children(16, false, &mut StdRng::seed_from_u64(3), draw).unwrap();
        let parallel = build_children(16, true, &mut StdRng::seed_from_u64(3), draw).unwrap();

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_build_children_propagates_errors() {
        let result: Result<Vec<()>, _> = build_children(4, true, &mut StdRng::seed_from_u64(0), |_| {
            Err(GenerationError::InvalidParameter("boom".to_string()))
        });

        assert!(matches!(result, Err(GenerationError::InvalidParameter(_))));
    }

    #[test]
    fn test_require_positive() {
        assert!(require_positive("individuals", 1).is_ok());
        assert_eq!(
            require_positive("individuals", 0),
            Err(GenerationError::InvalidParameter(
                "individuals must be greater than zero".to_string()
            ))
        );
    }
}
