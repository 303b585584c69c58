//! Configuration parameters for the MDVRP genetic algorithm.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration settings for the evolutionary loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Number of chromosomes per generation
    pub population_size: usize,
    /// Number of generations to run
    pub generations: usize,
    /// Per-position swap probability passed to the mutation operator
    pub mutation_rate: f64,
    /// Seed for the random source; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Refill every generation to `population_size` even when it is odd
    pub refill_population: bool,
    /// Floor applied to costs before inverse weighting in selection
    pub min_cost: f64,
    /// Optional time limit, checked between generations
    pub time_limit: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            population_size: 50,
            generations: 100,
            mutation_rate: 0.1,
            seed: None,
            refill_population: false,
            min_cost: 1e-9,
            time_limit: None,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Set the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Set the number of generations.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Set the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Refill odd-sized populations back to full size each generation.
    pub fn with_refill_population(mut self, refill: bool) -> Self {
        self.refill_population = refill;
        self
    }

    /// Set the cost floor used by selection.
    pub fn with_min_cost(mut self, min_cost: f64) -> Self {
        self.min_cost = min_cost;
        self
    }

    /// Set the time limit.
    pub fn with_time_limit(mut self, duration: Duration) -> Self {
        self.time_limit = Some(duration);
        self
    }

    /// Check that every parameter is in range.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(Error::invalid_input(format!(
                "population_size must be at least 2, got {}",
                self.population_size
            )));
        }
        if self.generations == 0 {
            return Err(Error::invalid_input("generations must be positive"));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(Error::invalid_input(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if !(self.min_cost > 0.0 && self.min_cost.is_finite()) {
            return Err(Error::invalid_input(format!(
                "min_cost must be positive and finite, got {}",
                self.min_cost
            )));
        }
        Ok(())
    }
}
