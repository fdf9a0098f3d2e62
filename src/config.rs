use serde::{Deserialize, Serialize};

use crate::generation::{
    GenerationContext, GenerationError, LocalParams, NationalParams, PopularityDistribution,
    SocialParams,
};

/// Top-level generation configuration.
///
/// Every section is optional in YAML and falls back to its defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub popularity: PopularityConfig,
    #[serde(default)]
    pub social_network: SocialNetworkConfig,
    #[serde(default)]
    pub local_network: LocalNetworkConfig,
    #[serde(default)]
    pub national_network: NationalNetworkConfig,
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(level) = &self.general.log_level {
            if level.parse::<log::LevelFilter>().is_err() {
                return Err(ValidationError::InvalidGeneral(format!(
                    "unknown log_level '{}'",
                    level
                )));
            }
        }

        self.popularity.validate()?;

        if self.social_network.individuals == 0 {
            return Err(ValidationError::InvalidNetwork(
                "social_network.individuals must be greater than zero".to_string(),
            ));
        }
        if self.local_network.social_networks == 0 {
            return Err(ValidationError::InvalidNetwork(
                "local_network.social_networks must be greater than zero".to_string(),
            ));
        }
        if self.local_network.businesses == 0 {
            return Err(ValidationError::InvalidNetwork(
                "local_network.businesses must be greater than zero".to_string(),
            ));
        }
        if self.national_network.local_networks == 0 {
            return Err(ValidationError::InvalidNetwork(
                "national_network.local_networks must be greater than zero".to_string(),
            ));
        }
        if self.national_network.businesses == 0 {
            return Err(ValidationError::InvalidNetwork(
                "national_network.businesses must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn social_params(&self) -> SocialParams {
        SocialParams {
            individuals: self.social_network.individuals,
            average_connections_per_person: self.social_network.average_connections_per_person,
        }
    }

    pub fn local_params(&self) -> LocalParams {
        LocalParams {
            social_networks: self.local_network.social_networks,
            businesses: self.local_network.businesses,
            connections_per_social_network: self.local_network.connections_per_social_network,
            social: self.social_params(),
        }
    }

    pub fn national_params(&self) -> NationalParams {
        NationalParams {
            local_networks: self.national_network.local_networks,
            businesses: self.national_network.businesses,
            connections_per_local_network: self.national_network.connections_per_local_network,
            local: self.local_params(),
        }
    }

    /// Build the shared generation context from this configuration
    pub fn generation_context(&self) -> Result<GenerationContext, GenerationError> {
        let popularity = PopularityDistribution::new(
            self.popularity.mean,
            self.popularity.variance,
            self.popularity.min,
            self.popularity.max,
        )?;
        let mut ctx = GenerationContext::new(popularity);
        ctx.parallel = self.general.parallel;
        Ok(ctx)
    }
}

/// General run settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Seed for reproducible runs; OS entropy when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

fn default_parallel() -> bool {
    true
}

/// Business popularity distribution.
///
/// `variance` is passed to the normal distribution as its scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopularityConfig {
    pub mean: f64,
    pub variance: f64,
    pub min: f64,
    pub max: f64,
}

impl PopularityConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        let values = [self.mean, self.variance, self.min, self.max];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ValidationError::InvalidPopularity(
                "all values must be finite".to_string(),
            ));
        }
        if self.variance < 0.0 {
            return Err(ValidationError::InvalidPopularity(format!(
                "variance cannot be negative, got {}",
                self.variance
            )));
        }
        if self.min < 0.0 || self.max > 1.0 || self.min > self.max {
            return Err(ValidationError::InvalidPopularity(format!(
                "bounds must satisfy 0 <= min <= max <= 1, got [{}, {}]",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Social sub-network section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialNetworkConfig {
    pub individuals: usize,
    pub average_connections_per_person: usize,
}

/// Local network section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalNetworkConfig {
    pub social_networks: usize,
    pub businesses: usize,
    pub connections_per_social_network: usize,
}

/// National network section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NationalNetworkConfig {
    pub local_networks: usize,
    pub businesses: usize,
    pub connections_per_local_network: usize,
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid general configuration: {0}")]
    InvalidGeneral(String),
    #[error("Invalid popularity configuration: {0}")]
    InvalidPopularity(String),
    #[error("Invalid network configuration: {0}")]
    InvalidNetwork(String),
}

/// Default implementations
impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_level: Some("info".to_string()),
            parallel: true,
        }
    }
}

impl Default for PopularityConfig {
    fn default() -> Self {
        Self {
            mean: 0.05,
            variance: 0.03,
            min: 0.005,
            max: 0.25,
        }
    }
}

impl Default for SocialNetworkConfig {
    fn default() -> Self {
        let params = SocialParams::default();
        Self {
            individuals: params.individuals,
            average_connections_per_person: params.average_connections_per_person,
        }
    }
}

impl Default for LocalNetworkConfig {
    fn default() -> Self {
        let params = LocalParams::default();
        Self {
            social_networks: params.social_networks,
            businesses: params.businesses,
            connections_per_social_network: params.connections_per_social_network,
        }
    }
}

impl Default for NationalNetworkConfig {
    fn default() -> Self {
        let params = NationalParams::default();
        Self {
            local_networks: params.local_networks,
            businesses: params.businesses,
            connections_per_local_network: params.connections_per_local_network,
        }
    }
}
