//! Population management for the genetic algorithm.

use crate::assignment::DepotAssignment;
use crate::chromosome::Chromosome;
use crate::config::Config;
use crate::error::Result;
use crate::fitness;
use crate::genetic::Genetic;
use crate::problem::{CustomerId, Problem};
use rand::Rng;

/// A chromosome paired with its cost for one generation.
#[derive(Debug, Clone, PartialEq)]
pub struct FitnessRecord {
    pub chromosome: Chromosome,
    pub cost: f64,
}

/// One generation of chromosomes.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    pub individuals: Vec<Chromosome>,
}

impl Population {
    /// Create a population from existing chromosomes.
    pub fn new(individuals: Vec<Chromosome>) -> Self {
        Population { individuals }
    }

    /// Initialize the population with independent random permutations.
    pub fn initialize<R: Rng + ?Sized>(size: usize, customers: &[CustomerId], rng: &mut R) -> Self {
        let individuals = (0..size)
            .map(|_| Chromosome::random(customers, rng))
            .collect();
        Population { individuals }
    }

    /// Get the population size.
    pub fn get_pop_size(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Compute the cost of every individual, in population order.
    #[cfg(not(feature = "parallel"))]
    pub fn evaluate(&self, assignment: &DepotAssignment, problem: &Problem) -> Result<Vec<f64>> {
        self.individuals
            .iter()
            .map(|chromosome| fitness::evaluate(chromosome, assignment, problem))
            .collect()
    }

    /// Compute the cost of every individual, in population order.
    #[cfg(feature = "parallel")]
    pub fn evaluate(&self, assignment: &DepotAssignment, problem: &Problem) -> Result<Vec<f64>> {
        use rayon::prelude::*;

        self.individuals
            .par_iter()
            .map(|chromosome| fitness::evaluate(chromosome, assignment, problem))
            .collect()
    }

    /// The cheapest individual; ties go to the earliest in population order.
    pub fn best(&self, fitnesses: &[f64]) -> Option<FitnessRecord> {
        self.individuals
            .iter()
            .zip(fitnesses)
            .fold(None, |best: Option<(&Chromosome, f64)>, (chromosome, &cost)| match best {
                Some((_, best_cost)) if best_cost <= cost => best,
                _ => Some((chromosome, cost)),
            })
            .map(|(chromosome, cost)| FitnessRecord {
                chromosome: chromosome.clone(),
                cost,
            })
    }

    /// Breed the next generation.
    ///
    /// Runs `population_size / 2` rounds of select, crossover and mutate,
    /// each appending two children. With an odd size the next generation is
    /// one short unless `refill_population` is set, in which case one extra
    /// round is run and the surplus child is dropped.
    pub fn reproduce<R: Rng + ?Sized>(
        &self,
        fitnesses: &[f64],
        config: &Config,
        genetic: &Genetic,
        rng: &mut R,
    ) -> Result<Population> {
        let target = config.population_size;
        let rounds = if config.refill_population {
            (target + 1) / 2
        } else {
            target / 2
        };

        let mut next = Vec::with_capacity(rounds * 2);
        for _ in 0..rounds {
            let (parent1, parent2) =
                genetic.select(&self.individuals, fitnesses, config.min_cost, rng)?;
            let (child1, child2) = genetic.crossover(parent1, parent2, rng)?;
            next.push(genetic.mutate(child1, config.mutation_rate, rng)?);
            next.push(genetic.mutate(child2, config.mutation_rate, rng)?);
        }

        if config.refill_population {
            next.truncate(target);
        }

        Ok(Population { individuals: next })
    }
}
