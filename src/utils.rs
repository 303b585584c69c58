//! Utility functions and structures for reporting on a run.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use crate::error::Result;
use crate::problem::Problem;
use crate::solution::{DepotRoute, RunResult};

/// Format a duration as hours, minutes, and seconds.
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}h {:02}m {:02}s", hours, minutes, seconds)
}

/// Write a plain-text route report.
pub fn write_solution<W: Write>(
    out: &mut W,
    result: &RunResult,
    routes: &[DepotRoute],
    problem: &Problem,
) -> std::io::Result<()> {
    writeln!(out, "MDVRP Solution for instance: {}", problem.name)?;
    writeln!(out, "Total Distance: {:.2}", result.best_fitness)?;
    writeln!(out, "Generations: {}", result.generations_run)?;
    writeln!(out, "Number of Depots: {}", routes.len())?;
    writeln!(out)?;

    for route in routes {
        write!(out, "Depot #{}: ", route.depot_index)?;

        if route.is_empty() {
            writeln!(out, "Empty")?;
            continue;
        }

        write!(out, "D{}", route.depot_index)?;
        for &customer in &route.customers {
            write!(out, " -> {}", customer)?;
        }
        writeln!(out, " -> D{}", route.depot_index)?;

        writeln!(out, "  Distance: {:.2}", route.distance)?;
        writeln!(out, "  Customers: {}", route.customers.len())?;
        writeln!(out)?;
    }

    Ok(())
}

/// Save a route report to a file.
pub fn save_solution<P: AsRef<Path>>(
    result: &RunResult,
    routes: &[DepotRoute],
    problem: &Problem,
    path: P,
) -> Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    write_solution(&mut file, result, routes, problem)?;
    file.flush()?;
    Ok(())
}

/// Save a run result, including the convergence history, as JSON.
pub fn save_result_json<P: AsRef<Path>>(result: &RunResult, path: P) -> Result<()> {
    let file = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(file, result)?;
    Ok(())
}

/// Statistics about the search process.
pub struct SearchStatistics {
    pub generations: usize,
    pub runtime: Duration,
    pub best_solution_distance: f64,
    pub initial_best_distance: f64,
    pub non_empty_routes: usize,
}

impl SearchStatistics {
    /// Collect statistics from a finished run.
    pub fn from_run(result: &RunResult, routes: &[DepotRoute], runtime: Duration) -> Self {
        SearchStatistics {
            generations: result.generations_run,
            runtime,
            best_solution_distance: result.best_fitness,
            initial_best_distance: result.history.first().copied().unwrap_or(f64::INFINITY),
            non_empty_routes: routes.iter().filter(|r| !r.is_empty()).count(),
        }
    }

    /// Relative improvement of the best distance over the first generation.
    pub fn improvement(&self) -> f64 {
        if self.initial_best_distance.is_finite() && self.initial_best_distance > 0.0 {
            (self.initial_best_distance - self.best_solution_distance) / self.initial_best_distance
        } else {
            0.0
        }
    }

    /// Format the statistics as a string.
    pub fn format(&self) -> String {
        format!(
            "Search Statistics:
- Generations: {}
- Runtime: {}
- First Generation Best: {:.2}
- Best Solution Distance: {:.2}
- Improvement: {:.1}%
- Non-empty Routes: {}",
            self.generations,
            format_duration(self.runtime),
            self.initial_best_distance,
            self.best_solution_distance,
            self.improvement() * 100.0,
            self.non_empty_routes
        )
    }
}
