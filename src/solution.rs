//! Run results and decoded routes.

use crate::assignment::DepotAssignment;
use crate::chromosome::Chromosome;
use crate::error::Result;
use crate::fitness;
use crate::problem::{CustomerId, Problem};
use serde::Serialize;
use std::fmt;

/// The implicit route of one depot's vehicle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepotRoute {
    /// Index of the depot in the problem's depot sequence
    pub depot_index: usize,
    /// Visiting order, excluding the depot at both ends
    pub customers: Vec<CustomerId>,
    /// Closed route length, zero for an empty route
    pub distance: f64,
}

impl DepotRoute {
    /// Check if the route visits no customers.
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

/// Outcome of an evolutionary run.
#[derive(Clone, Serialize)]
pub struct RunResult {
    /// Best chromosome observed; `None` only if the run stopped before any generation
    pub best_solution: Option<Chromosome>,
    /// Cost of `best_solution`, `+inf` if none
    pub best_fitness: f64,
    /// Running best cost after each generation, non-increasing
    pub history: Vec<f64>,
    /// Number of generations completed
    pub generations_run: usize,
}

impl RunResult {
    /// Decode the best chromosome into per-depot routes.
    pub fn decode_routes(
        &self,
        problem: &Problem,
        assignment: &DepotAssignment,
    ) -> Result<Vec<DepotRoute>> {
        match &self.best_solution {
            Some(chromosome) => fitness::decode_routes(chromosome, assignment, problem),
            None => Ok(Vec::new()),
        }
    }
}

impl fmt::Debug for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RunResult:")?;
        writeln!(f, "  Best Fitness: {:.2}", self.best_fitness)?;
        writeln!(f, "  Generations: {}", self.generations_run)?;
        match &self.best_solution {
            Some(chromosome) => writeln!(f, "  Best Solution: {:?}", chromosome.genes()),
            None => writeln!(f, "  Best Solution: none"),
        }
    }
}
