//! Business hub injection.
//!
//! Each business draws a popularity fraction from a clipped normal
//! distribution, samples that share of the eligible customers without
//! replacement and receives one `customer -> business` edge from each of
//! them. Businesses never link back.

use log::debug;
use rand::seq::index;
use rand::Rng;
use rand_distr::{Distribution, Normal};

use super::GenerationError;
use crate::graph::{BusinessRegistry, NodeId, NodeKind, PaymentGraph};

/// Clipped normal distribution of business popularity
#[derive(Debug, Clone, Copy)]
pub struct PopularityDistribution {
    normal: Normal<f64>,
    min: f64,
    max: f64,
}

impl PopularityDistribution {
    /// `variance` is used as the spread (scale) of the normal distribution.
    /// Samples are clipped into `[min, max]`.
    pub fn new(mean: f64, variance: f64, min: f64, max: f64) -> Result<Self, GenerationError> {
        if !(min.is_finite() && max.is_finite()) || min < 0.0 || min > max {
            return Err(GenerationError::InvalidParameter(format!(
                "popularity bounds must satisfy 0 <= min <= max, got [{}, {}]",
                min, max
            )));
        }
        if !mean.is_finite() {
            return Err(GenerationError::InvalidParameter(format!(
                "popularity mean must be finite, got {}",
                mean
            )));
        }
        if !variance.is_finite() || variance < 0.0 {
            return Err(GenerationError::InvalidParameter(format!(
                "popularity variance must be finite and non-negative, got {}",
                variance
            )));
        }
        let normal = Normal::new(mean, variance).map_err(|e| {
            GenerationError::InvalidParameter(format!(
                "popularity variance {} is invalid: {}",
                variance, e
            ))
        })?;

        Ok(Self { normal, min, max })
    }

    /// A distribution that always yields `fraction`
    pub fn fixed(fraction: f64) -> Result<Self, GenerationError> {
        Self::new(fraction, 0.0, fraction, fraction)
    }

    /// Draw one popularity fraction
    pub fn sample_fraction<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.normal.sample(rng).clamp(self.min, self.max)
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.min, self.max)
    }
}

/// Add `count` businesses to `graph`, each with customers drawn from
/// `customers`.
///
/// New businesses are recorded in `registry`. Returns the number of customer
/// edges added. Fails with [`GenerationError::SampleSizeExceeded`] if a
/// sampled fraction asks for more customers than the pool holds.
pub fn inject_businesses<R: Rng + ?Sized>(
    graph: &mut PaymentGraph,
    customers: &[NodeId],
    count: usize,
    popularity: &PopularityDistribution,
    registry: &mut BusinessRegistry,
    rng: &mut R,
) -> Result<usize, GenerationError> {
    let mut customer_edges = 0;

    for _ in 0..count {
        let fraction = popularity.sample_fraction(rng);
        let num_users = (fraction * customers.len() as f64).round() as usize;
        if num_users > customers.len() {
            return Err(GenerationError::SampleSizeExceeded {
                requested: num_users,
                available: customers.len(),
            });
        }
        let users = index::sample(rng, customers.len(), num_users);

        let business = NodeId::random(rng);
        graph.add_node(business, NodeKind::Business)?;
        for user in users.iter() {
            graph.add_edge(customers[user], business)?;
        }
        registry.insert(business);
        customer_edges += num_users;
    }

    debug!(
        "Injected {} businesses with {} customer edges from a pool of {}",
        count,
        customer_edges,
        customers.len()
    );

    Ok(customer_edges)
}
