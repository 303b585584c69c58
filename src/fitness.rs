//! Fitness evaluation: total route distance decomposed per depot.

use crate::assignment::DepotAssignment;
use crate::chromosome::Chromosome;
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::problem::{CustomerId, Problem};
use crate::solution::DepotRoute;
use itertools::Itertools;
use std::iter;

/// Calculate the cost of a chromosome.
///
/// For each depot, in index order, the chromosome is filtered to the depot's
/// customers and the closed route depot -> customers -> depot is measured.
/// Depots without customers contribute zero.
pub fn evaluate(
    chromosome: &Chromosome,
    assignment: &DepotAssignment,
    problem: &Problem,
) -> Result<f64> {
    chromosome.validate(assignment)?;

    let mut total_distance = 0.0;
    for (depot_index, _) in assignment.iter() {
        let subroute = chromosome.subroute(assignment, depot_index);
        total_distance += route_distance(problem, depot_index, &subroute)?;
    }

    Ok(total_distance)
}

/// Decode a chromosome into one route per depot, including empty ones.
pub fn decode_routes(
    chromosome: &Chromosome,
    assignment: &DepotAssignment,
    problem: &Problem,
) -> Result<Vec<DepotRoute>> {
    chromosome.validate(assignment)?;

    assignment
        .iter()
        .map(|(depot_index, _)| {
            let customers = chromosome.subroute(assignment, depot_index);
            let distance = route_distance(problem, depot_index, &customers)?;
            Ok(DepotRoute {
                depot_index,
                customers,
                distance,
            })
        })
        .collect()
}

/// Length of the closed route from a depot through the given customers and back.
pub fn route_distance(problem: &Problem, depot_index: usize, customers: &[CustomerId]) -> Result<f64> {
    if customers.is_empty() {
        return Ok(0.0);
    }

    let depot = problem
        .depots
        .get(depot_index)
        .ok_or_else(|| Error::invalid_input(format!("unknown depot {}", depot_index)))?
        .location;

    let stops = customers
        .iter()
        .map(|&id| {
            problem
                .customer(id)
                .map(|c| c.location)
                .ok_or_else(|| Error::invalid_chromosome(format!("unknown customer {}", id)))
        })
        .collect::<Result<Vec<Point>>>()?;

    Ok(iter::once(depot)
        .chain(stops)
        .chain(iter::once(depot))
        .tuple_windows()
        .map(|(from, to)| from.distance(&to))
        .sum())
}
