//! Genetic operators for the MDVRP genetic algorithm.

use crate::chromosome::Chromosome;
use crate::error::{Error, Result};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use std::collections::HashSet;

/// Mutation rate used when the operator is called on its own.
/// The evolutionary loop passes its configured rate instead.
pub const DEFAULT_OPERATOR_MUTATION_RATE: f64 = 0.05;

/// Implements the genetic operators (selection, crossover, mutation).
pub struct Genetic;

impl Genetic {
    /// Fitness-proportionate selection of two parents, with replacement.
    ///
    /// Each individual is weighted by `1 / max(cost, min_cost)`, so cheaper
    /// routes are drawn more often and a zero cost never divides by zero.
    pub fn select<'a, R: Rng + ?Sized>(
        &self,
        population: &'a [Chromosome],
        fitnesses: &[f64],
        min_cost: f64,
        rng: &mut R,
    ) -> Result<(&'a Chromosome, &'a Chromosome)> {
        if population.is_empty() {
            return Err(Error::invalid_input("cannot select from an empty population"));
        }
        if population.len() != fitnesses.len() {
            return Err(Error::invalid_input(format!(
                "population has {} individuals but {} fitness values",
                population.len(),
                fitnesses.len()
            )));
        }
        if !(min_cost > 0.0 && min_cost.is_finite()) {
            return Err(Error::invalid_input("min_cost must be positive and finite"));
        }

        let weights = fitnesses
            .iter()
            .map(|&cost| {
                if cost.is_nan() || cost < 0.0 {
                    Err(Error::invalid_input(format!("invalid cost {}", cost)))
                } else {
                    Ok(1.0 / cost.max(min_cost))
                }
            })
            .collect::<Result<Vec<f64>>>()?;

        let distribution = WeightedIndex::new(&weights)
            .map_err(|err| Error::invalid_input(format!("cannot weight population: {}", err)))?;

        let first = &population[distribution.sample(rng)];
        let second = &population[distribution.sample(rng)];

        Ok((first, second))
    }

    /// Single-point order crossover with a cut drawn uniformly from `[1, len - 2]`.
    pub fn crossover<R: Rng + ?Sized>(
        &self,
        parent1: &Chromosome,
        parent2: &Chromosome,
        rng: &mut R,
    ) -> Result<(Chromosome, Chromosome)> {
        Self::check_parents(parent1, parent2)?;

        let cut = rng.gen_range(1..=parent1.len() - 2);
        self.crossover_at(parent1, parent2, cut)
    }

    /// Order crossover at a fixed cut.
    ///
    /// The first child keeps `parent1[..cut]` and is completed with the
    /// remaining ids in `parent2`'s order; the second child is symmetric.
    pub fn crossover_at(
        &self,
        parent1: &Chromosome,
        parent2: &Chromosome,
        cut: usize,
    ) -> Result<(Chromosome, Chromosome)> {
        Self::check_parents(parent1, parent2)?;

        if cut < 1 || cut > parent1.len() - 2 {
            return Err(Error::invalid_input(format!(
                "cut {} outside [1, {}]",
                cut,
                parent1.len() - 2
            )));
        }

        let child1 = Self::order_child(parent1.genes(), parent2.genes(), cut);
        let child2 = Self::order_child(parent2.genes(), parent1.genes(), cut);

        Ok((child1, child2))
    }

    fn check_parents(parent1: &Chromosome, parent2: &Chromosome) -> Result<()> {
        if parent1.len() < 3 || parent2.len() < 3 {
            return Err(Error::invalid_input(format!(
                "crossover needs parents of length >= 3, got {} and {}",
                parent1.len(),
                parent2.len()
            )));
        }
        if parent1.len() != parent2.len() {
            return Err(Error::invalid_input(format!(
                "parents differ in length: {} and {}",
                parent1.len(),
                parent2.len()
            )));
        }
        Ok(())
    }

    fn order_child(head: &[usize], fill: &[usize], cut: usize) -> Chromosome {
        let prefix = &head[..cut];
        let used: HashSet<usize> = prefix.iter().copied().collect();

        let mut genes = Vec::with_capacity(head.len());
        genes.extend_from_slice(prefix);
        genes.extend(fill.iter().copied().filter(|id| !used.contains(id)));

        Chromosome::new(genes)
    }

    /// Swap mutation.
    ///
    /// Every position is, with probability `mutation_rate`, swapped with a
    /// uniformly random position (possibly itself).
    pub fn mutate<R: Rng + ?Sized>(
        &self,
        mut chromosome: Chromosome,
        mutation_rate: f64,
        rng: &mut R,
    ) -> Result<Chromosome> {
        if !(0.0..=1.0).contains(&mutation_rate) {
            return Err(Error::invalid_input(format!(
                "mutation rate {} outside [0, 1]",
                mutation_rate
            )));
        }

        let tour_size = chromosome.len();
        let genes = chromosome.genes_mut();

        for i in 0..tour_size {
            if rng.gen::<f64>() < mutation_rate {
                let j = rng.gen_range(0..tour_size);
                genes.swap(i, j);
            }
        }

        Ok(chromosome)
    }
}
