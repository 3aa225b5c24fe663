//! NSGA-II generational loop.
//!
//! # Algorithm
//!
//! 1. **Init**: `pop_size` uniform-random schedules, evaluated, then ranked
//!    and crowded so the first tournament has something to compare.
//! 2. **Generation**: fill an offspring pool of exactly `pop_size` by
//!    tournament → crossover → mutation, evaluate it, merge with the
//!    parents, and keep the best `pop_size` by front, then by crowding.
//! 3. **Termination**: stop after the configured generation budget.
//!
//! All randomness comes from the single RNG owned by the optimizer, so a
//! fixed seed reproduces a run exactly.
//!
//! # Reference
//! Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm:
//! NSGA-II", IEEE TEC 6(2)

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Nsga2Config;
use super::crowding::{assign_crowding_distance, sort_by_crowding_desc};
use super::dominance::fast_non_dominated_sort;
use super::evaluate::evaluate_all;
use super::operators::{random_candidate, reassign_mutation, single_point_crossover};
use super::selection::binary_tournament;
use crate::error::Result;
use crate::models::{Candidate, Task, Vm};
use crate::validation::{validate_config, validate_input};

/// NSGA-II optimizer over task→VM assignments.
///
/// Owns its population and random source. Inputs are validated on
/// construction; once built, the loop cannot fail.
///
/// # Example
///
/// ```
/// use cloud_nsga::models::{Task, Vm};
/// use cloud_nsga::nsga::{Nsga2Config, Nsga2Optimizer, extract_front};
///
/// let tasks: Vec<Task> = (0..5).map(|i| Task::new(i, 100)).collect();
/// let vms: Vec<Vm> = (0..2).map(|j| Vm::new(j, 4, 4, 100, 0.005)).collect();
/// let config = Nsga2Config::default().with_pop_size(10).with_generations(5);
///
/// let mut optimizer = Nsga2Optimizer::new(&tasks, &vms, config).unwrap();
/// let population = optimizer.run();
/// assert_eq!(population.len(), 10);
/// assert!(!extract_front(population).is_empty());
/// ```
pub struct Nsga2Optimizer<'a, R: Rng = StdRng> {
    tasks: &'a [Task],
    vms: &'a [Vm],
    config: Nsga2Config,
    rng: R,
    population: Vec<Candidate>,
    generation: usize,
    initialized: bool,
}

impl<'a> Nsga2Optimizer<'a, StdRng> {
    /// Creates an optimizer seeded from `config.seed`.
    pub fn new(tasks: &'a [Task], vms: &'a [Vm], config: Nsga2Config) -> Result<Self> {
        let rng = StdRng::seed_from_u64(config.seed);
        Self::with_rng(tasks, vms, config, rng)
    }
}

impl<'a, R: Rng> Nsga2Optimizer<'a, R> {
    /// Creates an optimizer drawing from the given random source.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(tasks: &'a [Task], vms: &'a [Vm], config: Nsga2Config, rng: R) -> Result<Self> {
        let mut errors = Vec::new();
        if let Err(e) = validate_input(tasks, vms) {
            errors.extend(e);
        }
        if let Err(e) = validate_config(&config) {
            errors.extend(e);
        }
        if !errors.is_empty() {
            return Err(errors.into());
        }

        Ok(Self {
            tasks,
            vms,
            config,
            rng,
            population: Vec::new(),
            generation: 0,
            initialized: false,
        })
    }

    /// Run parameters.
    pub fn config(&self) -> &Nsga2Config {
        &self.config
    }

    /// Number of generations completed.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Whether the generation budget has been spent.
    pub fn is_converged(&self) -> bool {
        self.initialized && self.generation >= self.config.generations
    }

    /// Current population (empty before [`Self::initialize`]).
    pub fn population(&self) -> &[Candidate] {
        &self.population
    }

    /// Consumes the optimizer, returning its population.
    pub fn into_population(self) -> Vec<Candidate> {
        self.population
    }

    /// Creates and evaluates generation 0.
    ///
    /// Replaces any existing population and resets the generation counter.
    pub fn initialize(&mut self) {
        let num_tasks = self.tasks.len();
        let num_vms = self.vms.len();

        let mut population: Vec<Candidate> = (0..self.config.pop_size)
            .map(|_| random_candidate(num_tasks, num_vms, &mut self.rng))
            .collect();
        evaluate_all(&mut population, self.tasks, self.vms);

        let fronts = fast_non_dominated_sort(&mut population);
        for front in &fronts {
            assign_crowding_distance(&mut population, front);
        }

        info!(
            "NSGA-II initialized: {} tasks, {} VMs, population {}, {} generations",
            num_tasks, num_vms, self.config.pop_size, self.config.generations
        );

        self.population = population;
        self.generation = 0;
        self.initialized = true;
    }

    /// Runs one generation. Initializes first if needed.
    pub fn step(&mut self) {
        if !self.initialized {
            self.initialize();
        }
        if self.generation % 10 == 0 {
            info!("Generation {}", self.generation);
        }

        let offspring = self.make_offspring();
        let mut combined = std::mem::take(&mut self.population);
        combined.extend(offspring);

        self.population = select_survivors(combined, self.config.pop_size);
        self.generation += 1;

        debug_assert_eq!(self.population.len(), self.config.pop_size);
        if log::log_enabled!(log::Level::Debug) {
            let front_size = self.population.iter().filter(|c| c.rank == Some(0)).count();
            let best_makespan = self
                .population
                .iter()
                .filter_map(|c| c.objectives.map(|o| o.makespan))
                .fold(f64::INFINITY, f64::min);
            debug!(
                "generation {}: front 0 holds {} candidates, best makespan {}",
                self.generation, front_size, best_makespan
            );
        }
    }

    /// Runs the remaining generations and returns the final population.
    pub fn run(&mut self) -> &[Candidate] {
        if !self.initialized {
            self.initialize();
        }
        while self.generation < self.config.generations {
            self.step();
        }
        info!("NSGA-II finished after {} generations", self.generation);
        &self.population
    }

    /// Builds an evaluated offspring pool of exactly `pop_size`.
    ///
    /// When `pop_size` is odd, the second child of the last pair is dropped
    /// before mutation and never evaluated.
    fn make_offspring(&mut self) -> Vec<Candidate> {
        let pop_size = self.config.pop_size;
        let num_vms = self.vms.len();
        let crossover_prob = self.config.crossover_prob;
        let mutation_prob = self.config.mutation_prob;

        let mut offspring = Vec::with_capacity(pop_size);
        while offspring.len() < pop_size {
            let p1 = binary_tournament(&self.population, &mut self.rng);
            let p2 = binary_tournament(&self.population, &mut self.rng);
            let (c1, c2) = single_point_crossover(p1, p2, crossover_prob, &mut self.rng);

            offspring.push(reassign_mutation(c1, num_vms, mutation_prob, &mut self.rng));
            if offspring.len() < pop_size {
                offspring.push(reassign_mutation(c2, num_vms, mutation_prob, &mut self.rng));
            }
        }

        evaluate_all(&mut offspring, self.tasks, self.vms);
        offspring
    }
}

/// Elitist truncation of a merged parent+offspring pool.
///
/// Admits whole fronts in rank order while they fit; the first front that
/// would overflow is crowded, sorted by descending crowding distance and
/// cut to fill exactly `pop_size`. Survivors keep the rank and crowding
/// distance computed here.
pub fn select_survivors(mut combined: Vec<Candidate>, pop_size: usize) -> Vec<Candidate> {
    let fronts = fast_non_dominated_sort(&mut combined);
    let mut chosen: Vec<usize> = Vec::with_capacity(pop_size);

    for mut front in fronts {
        if chosen.len() >= pop_size {
            break;
        }
        assign_crowding_distance(&mut combined, &front);
        if chosen.len() + front.len() <= pop_size {
            chosen.extend(front);
        } else {
            sort_by_crowding_desc(&combined, &mut front);
            let remaining = pop_size - chosen.len();
            chosen.extend_from_slice(&front[..remaining]);
        }
    }

    let mut slots: Vec<Option<Candidate>> = combined.into_iter().map(Some).collect();
    chosen.into_iter().filter_map(|i| slots[i].take()).collect()
}

/// Validates inputs, runs NSGA-II to its generation budget and returns the
/// final population.
///
/// # Example
///
/// ```
/// use cloud_nsga::models::{Task, Vm};
/// use cloud_nsga::nsga::{Nsga2Config, optimize};
///
/// let tasks = vec![Task::new(0, 100), Task::new(1, 300)];
/// let vms = vec![Vm::new(0, 4, 4, 100, 0.005), Vm::new(1, 8, 8, 200, 0.007)];
/// let config = Nsga2Config::default().with_pop_size(8).with_generations(3);
///
/// let population = optimize(&tasks, &vms, &config).unwrap();
/// assert_eq!(population.len(), 8);
/// ```
pub fn optimize(tasks: &[Task], vms: &[Vm], config: &Nsga2Config) -> Result<Vec<Candidate>> {
    let mut optimizer = Nsga2Optimizer::new(tasks, vms, config.clone())?;
    optimizer.run();
    Ok(optimizer.into_population())
}
