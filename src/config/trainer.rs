use super::traits::ConfigSection;
use crate::error::DicetownError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerConfig {
    /// Number of organisms per generation; each plays every other once.
    pub population_size: usize,
    pub generations: usize,
    /// Chance that a gene comes from one parent versus the other.
    pub recombination_probability: f64,
    /// Probability that a child experiences mutation at all.
    pub mutation_probability: f64,
    /// Standard deviation of the Gaussian noise applied to a mutated gene.
    pub mutation_sigma: f64,
    /// Master seed for reproducible runs; fresh entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 1000,
            recombination_probability: 0.5,
            mutation_probability: 0.25,
            mutation_sigma: 0.01,
            seed: None,
        }
    }
}

impl ConfigSection for TrainerConfig {
    fn section_name() -> &'static str {
        "trainer"
    }

    fn validate(&self) -> Result<(), DicetownError> {
        if self.population_size < 2 {
            return Err(DicetownError::Configuration(
                "Population size must be at least 2".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.recombination_probability) {
            return Err(DicetownError::Configuration(
                "Recombination probability must be between 0 and 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(DicetownError::Configuration(
                "Mutation probability must be between 0 and 1".to_string(),
            ));
        }
        if !self.mutation_sigma.is_finite() || self.mutation_sigma < 0.0 {
            return Err(DicetownError::Configuration(
                "Mutation sigma must be a non-negative number".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(TrainerConfig::default().validate().is_ok());
    }

    #[test]
    fn single_organism_population_is_rejected() {
        let config = TrainerConfig {
            population_size: 1,
            ..TrainerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn out_of_range_probabilities_are_rejected() {
        let config = TrainerConfig {
            mutation_probability: 1.5,
            ..TrainerConfig::default()
        };
        assert!(config.validate().is_err());

        let config = TrainerConfig {
            recombination_probability: -0.1,
            ..TrainerConfig::default()
        };
        assert!(config.validate().is_err());

        let config = TrainerConfig {
            mutation_sigma: -1.0,
            ..TrainerConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
