#[cfg(test)]
#[path = "../../../tests/unit/algorithms/aco/search_test.rs"]
mod search_test;

use super::*;
use crate::models::{DistanceMatrix, Tour, tour_length};
use crate::solver::{Optimizer, Solution, Telemetry};
use crate::utils::*;
use rand::RngCore;
use std::sync::Arc;

/// An ant colony search loop: it owns pheromone trails for the duration of a run and tracks the
/// best-known tour.
///
/// Ants of one iteration are independent and constructed in parallel, each with its own random
/// generator seeded from the environment random, so a run is reproducible regardless of thread
/// scheduling. The pheromone update starts only when all tours of the iteration are evaluated.
pub struct AntColony {
    config: AcoConfig,
    environment: Arc<Environment>,
}

impl AntColony {
    /// Creates a new instance of `AntColony`.
    pub fn new(config: AcoConfig, environment: Arc<Environment>) -> GenericResult<Self> {
        config.validate()?;

        Ok(Self { config, environment })
    }

    /// Returns algorithm parameters.
    pub fn config(&self) -> &AcoConfig {
        &self.config
    }

    fn construct_tours(&self, pheromones: &PheromoneMatrix, matrix: &DistanceMatrix) -> Vec<Tour> {
        let constructor = TourConstructor::new(pheromones, matrix, self.config.alpha, self.config.beta);

        let mut rng = self.environment.random.get_rng();
        let seeds = (0..self.config.ants).map(|_| rng.next_u64()).collect::<Vec<_>>();

        self.environment.parallelism.execute(|| {
            parallel_into_collect(seeds, |seed| constructor.construct(&DefaultRandom::new_repeatable(seed)))
        })
    }
}

impl Optimizer for AntColony {
    fn optimize(&self, matrix: &DistanceMatrix) -> GenericResult<Solution> {
        let config = &self.config;

        let mut pheromones = PheromoneMatrix::new(matrix.size(), config.initial_pheromone);
        let updater = PheromoneUpdater::new(config.rho, config.q);
        let mut telemetry = Telemetry::new(self.environment.logger.clone());

        telemetry.on_start(
            "ant colony",
            matrix.size(),
            format!(
                "iterations={}, ants={}, alpha={}, beta={}, rho={}, q={}",
                config.iterations, config.ants, config.alpha, config.beta, config.rho, config.q
            )
            .as_str(),
        );

        let mut iterations = 0;
        for iteration in 1..=config.iterations {
            let tours = self.construct_tours(&pheromones, matrix);
            let lengths = tours.iter().map(|tour| tour_length(tour.cities(), matrix)).collect::<Vec<_>>();

            // NOTE min_by returns the first of equal elements
            if let Some((idx, length)) = lengths.iter().copied().enumerate().min_by(|(_, a), (_, b)| compare_floats(*a, *b))
            {
                telemetry.on_candidate(iteration, tours[idx].cities(), length);
            }

            updater.update(&mut pheromones, tours.as_slice(), lengths.as_slice());
            iterations = iteration;

            if iteration < config.iterations && self.environment.is_quota_reached() {
                telemetry.on_message(format!("quota is reached after {iteration} iterations").as_str());
                break;
            }
        }

        telemetry.on_result(iterations)
    }
}
