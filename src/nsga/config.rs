//! NSGA-II run parameters.

use serde::{Deserialize, Serialize};

/// Algorithm parameters for one optimizer run.
///
/// Builder setters clamp probabilities into `[0, 1]`. Values written
/// directly or deserialized are checked by
/// [`crate::validation::validate_config`] instead.
///
/// # Example
///
/// ```
/// use cloud_nsga::nsga::Nsga2Config;
///
/// let config = Nsga2Config::default()
///     .with_pop_size(40)
///     .with_generations(25)
///     .with_mutation_prob(1.7);
/// assert_eq!(config.pop_size, 40);
/// assert_eq!(config.mutation_prob, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Nsga2Config {
    /// Number of candidates kept between generations (>= 2).
    pub pop_size: usize,
    /// Number of generations to run (>= 1).
    pub generations: usize,
    /// Probability that a parent pair is recombined.
    pub crossover_prob: f64,
    /// Per-gene reassignment probability.
    pub mutation_prob: f64,
    /// Seed for the optimizer's random source.
    pub seed: u64,
}

impl Default for Nsga2Config {
    fn default() -> Self {
        Self {
            pop_size: 100,
            generations: 100,
            crossover_prob: 0.9,
            mutation_prob: 0.1,
            seed: 42,
        }
    }
}

impl Nsga2Config {
    /// Sets the population size.
    pub fn with_pop_size(mut self, pop_size: usize) -> Self {
        self.pop_size = pop_size;
        self
    }

    /// Sets the generation budget.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the crossover probability, clamped to `[0, 1]`.
    pub fn with_crossover_prob(mut self, prob: f64) -> Self {
        self.crossover_prob = clamp_prob(prob);
        self
    }

    /// Sets the mutation probability, clamped to `[0, 1]`.
    pub fn with_mutation_prob(mut self, prob: f64) -> Self {
        self.mutation_prob = clamp_prob(prob);
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

fn clamp_prob(prob: f64) -> f64 {
    if prob.is_nan() {
        0.0
    } else {
        prob.clamp(0.0, 1.0)
    }
}
