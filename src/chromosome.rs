//! Chromosome representation: a permutation of every customer identifier.
//!
//! A chromosome carries no depot boundaries. Each depot's visiting order is
//! recovered at evaluation time by filtering the permutation with the
//! [`DepotAssignment`](crate::assignment::DepotAssignment).

use crate::assignment::DepotAssignment;
use crate::error::{Error, Result};
use crate::problem::CustomerId;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A candidate global solution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chromosome(Vec<CustomerId>);

impl Chromosome {
    /// Wrap a sequence of customer ids. No validation is performed.
    pub fn new(genes: Vec<CustomerId>) -> Self {
        Chromosome(genes)
    }

    /// Build an independent random permutation of the given customer ids.
    pub fn random<R: Rng + ?Sized>(customers: &[CustomerId], rng: &mut R) -> Self {
        let mut genes = customers.to_vec();
        genes.shuffle(rng);
        Chromosome(genes)
    }

    /// The customer sequence.
    pub fn genes(&self) -> &[CustomerId] {
        &self.0
    }

    pub(crate) fn genes_mut(&mut self) -> &mut [CustomerId] {
        &mut self.0
    }

    pub fn into_genes(self) -> Vec<CustomerId> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The visiting order for one depot: the chromosome filtered to that
    /// depot's customers, preserving relative order.
    pub fn subroute(&self, assignment: &DepotAssignment, depot_index: usize) -> Vec<CustomerId> {
        self.0
            .iter()
            .copied()
            .filter(|&id| assignment.depot_of(id) == Some(depot_index))
            .collect()
    }

    /// Check that this is a permutation of the assignment's customer universe.
    pub fn validate(&self, assignment: &DepotAssignment) -> Result<()> {
        let expected = assignment.customer_count();
        if self.0.len() != expected {
            return Err(Error::invalid_chromosome(format!(
                "expected {} customers, found {}",
                expected,
                self.0.len()
            )));
        }

        let mut seen = HashSet::with_capacity(expected);
        for &id in &self.0 {
            if assignment.depot_of(id).is_none() {
                return Err(Error::invalid_chromosome(format!("unknown customer {}", id)));
            }
            if !seen.insert(id) {
                return Err(Error::invalid_chromosome(format!("duplicate customer {}", id)));
            }
        }

        Ok(())
    }
}

impl From<Vec<CustomerId>> for Chromosome {
    fn from(genes: Vec<CustomerId>) -> Self {
        Chromosome(genes)
    }
}
