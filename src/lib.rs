//! # MDVRP-GA
//!
//! A genetic algorithm for a simplified Multi-Depot Vehicle Routing Problem:
//! one vehicle per depot, no capacities, no time windows, straight-line
//! distances.
//!
//! Customers are assigned once to their nearest depot. The search then
//! evolves permutations of all customers; each depot's visiting order is the
//! permutation filtered to that depot's customers, and the cost of a
//! permutation is the summed length of all closed depot routes.

pub mod assignment;
pub mod chromosome;
pub mod config;
pub mod error;
pub mod fitness;
pub mod genetic;
pub mod geometry;
pub mod population;
pub mod problem;
pub mod solution;
pub mod utils;

use crate::assignment::DepotAssignment;
use crate::chromosome::Chromosome;
use crate::config::Config;
use crate::error::Result;
use crate::genetic::Genetic;
use crate::population::Population;
use crate::problem::Problem;
use crate::solution::RunResult;

use log::{debug, info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Phase of the evolutionary loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Initialized,
    Evaluating,
    Reproducing,
    Terminated,
}

/// The main algorithm structure that runs the evolutionary loop.
pub struct GaAlgorithm {
    pub problem: Problem,
    pub assignment: DepotAssignment,
    pub config: Config,
    pub best_solution: Option<Chromosome>,
    pub best_fitness: f64,
    pub history: Vec<f64>,
    pub generations_run: usize,
    pub run_time: Duration,
    pub state: SearchState,
    pub genetic: Genetic,
    rng: ChaCha8Rng,
    stop_flag: Option<Arc<AtomicBool>>,
    start_time: Instant,
}

impl GaAlgorithm {
    /// Create a new instance for the given problem and configuration.
    ///
    /// Validates the configuration and computes the depot assignment.
    pub fn new(problem: Problem, config: Config) -> Result<Self> {
        config.validate()?;
        let assignment = assignment::assign(&problem.customers, &problem.depots)?;

        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        Ok(GaAlgorithm {
            problem,
            assignment,
            config,
            best_solution: None,
            best_fitness: f64::INFINITY,
            history: Vec::new(),
            generations_run: 0,
            run_time: Duration::from_secs(0),
            state: SearchState::Initialized,
            genetic: Genetic,
            rng,
            stop_flag: None,
            start_time: Instant::now(),
        })
    }

    /// Install a cooperative stop flag, checked once per generation boundary.
    pub fn with_stop_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.stop_flag = Some(flag);
        self
    }

    /// Run the algorithm until the generation budget is spent or the search is stopped.
    pub fn run(&mut self) -> Result<RunResult> {
        self.start_time = Instant::now();
        self.best_solution = None;
        self.best_fitness = f64::INFINITY;
        self.history = Vec::with_capacity(self.config.generations);
        self.generations_run = 0;

        info!(
            "starting search: {} customers, {} depots, population {}, {} generations",
            self.problem.get_customer_count(),
            self.problem.get_depot_count(),
            self.config.population_size,
            self.config.generations
        );
        if self.config.population_size % 2 == 1 && !self.config.refill_population {
            warn!(
                "odd population size {}: generations after the first hold {} individuals",
                self.config.population_size,
                self.config.population_size - 1
            );
        }

        let customers = self.problem.customer_ids();
        let mut population =
            Population::initialize(self.config.population_size, &customers, &mut self.rng);
        self.state = SearchState::Initialized;

        while !self.should_terminate() {
            self.state = SearchState::Evaluating;
            let fitnesses = population.evaluate(&self.assignment, &self.problem)?;

            if fitnesses.iter().any(|&cost| cost < self.config.min_cost) {
                warn!(
                    "generation {}: cost below {} floored for selection",
                    self.generations_run, self.config.min_cost
                );
            }

            self.state = SearchState::Reproducing;
            let next = population.reproduce(&fitnesses, &self.config, &self.genetic, &mut self.rng)?;

            let generation_best = population.best(&fitnesses);
            if let Some(record) = &generation_best {
                if record.cost < self.best_fitness {
                    self.best_fitness = record.cost;
                    self.best_solution = Some(record.chromosome.clone());
                }
            }
            self.history.push(self.best_fitness);

            debug!(
                "generation {}: best {:.4}, running best {:.4}",
                self.generations_run,
                generation_best.map_or(f64::INFINITY, |r| r.cost),
                self.best_fitness
            );

            self.generations_run += 1;
            population = next;
        }

        self.state = SearchState::Terminated;
        self.run_time = self.start_time.elapsed();

        info!(
            "search finished after {} generations in {:?}: best distance {:.4}",
            self.generations_run, self.run_time, self.best_fitness
        );

        Ok(self.result())
    }

    /// Snapshot of the current best solution and convergence history.
    pub fn result(&self) -> RunResult {
        RunResult {
            best_solution: self.best_solution.clone(),
            best_fitness: self.best_fitness,
            history: self.history.clone(),
            generations_run: self.generations_run,
        }
    }

    /// Check if the termination criteria are met.
    fn should_terminate(&self) -> bool {
        if self.generations_run >= self.config.generations {
            return true;
        }

        if let Some(time_limit) = self.config.time_limit {
            if self.start_time.elapsed() >= time_limit {
                info!("time limit reached after {} generations", self.generations_run);
                return true;
            }
        }

        if let Some(flag) = &self.stop_flag {
            if flag.load(Ordering::Relaxed) {
                info!("stop requested after {} generations", self.generations_run);
                return true;
            }
        }

        false
    }
}

/// Assign customers to depots and run the genetic algorithm once.
pub fn solve(problem: Problem, config: Config) -> Result<RunResult> {
    GaAlgorithm::new(problem, config)?.run()
}
