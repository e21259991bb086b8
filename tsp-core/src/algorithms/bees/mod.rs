//! A bee colony algorithm: a hive of agents with fixed roles performs local search around their
//! own tours (active bees) or samples random tours (scouts).

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/bees/bees_test.rs"]
mod bees_test;

use crate::models::{DistanceMatrix, tour_length};
use crate::solver::{Optimizer, Solution, Telemetry};
use crate::utils::*;
use rand::seq::SliceRandom;
use std::sync::Arc;

/// Bee colony algorithm parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct BeeConfig {
    /// Amount of bees in the hive. Default is 50.
    pub bees: usize,
    /// Amount of epochs. Default is 700.
    pub epochs: usize,
    /// A share of active bees. Default is 0.5.
    pub active_ratio: Float,
    /// A share of scout bees. Default is 0.25.
    pub scout_ratio: Float,
    /// A probability to accept a non improving neighbour by an active bee. Default is 0.05.
    pub acceptance_probability: Float,
}

impl Default for BeeConfig {
    fn default() -> Self {
        Self { bees: 50, epochs: 700, active_ratio: 0.5, scout_ratio: 0.25, acceptance_probability: 0.05 }
    }
}

impl BeeConfig {
    /// Checks that all parameters are in their domains.
    pub fn validate(&self) -> GenericResult<()> {
        let is_probability = |value: Float| (0. ..=1.).contains(&value);

        if self.bees == 0 || self.epochs == 0 {
            return Err(GenericError::invalid_config("amount of bees and epochs should be positive"));
        }

        if !is_probability(self.active_ratio)
            || !is_probability(self.scout_ratio)
            || self.active_ratio + self.scout_ratio > 1.
        {
            return Err(GenericError::invalid_config(format!(
                "active and scout ratios should be in [0, 1] with sum not greater than 1, got: {} and {}",
                self.active_ratio, self.scout_ratio
            )));
        }

        if !is_probability(self.acceptance_probability) {
            return Err(GenericError::invalid_config(format!(
                "acceptance probability should be in [0, 1], got: {}",
                self.acceptance_probability
            )));
        }

        Ok(())
    }

    /// Returns amount of bees per role: inactive, scout and active.
    pub fn roles(&self) -> (usize, usize, usize) {
        let active = (self.bees as Float * self.active_ratio) as usize;
        let scouts = (self.bees as Float * self.scout_ratio) as usize;

        (self.bees - active - scouts, scouts, active)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BeeRole {
    Inactive,
    Active,
    Scout,
}

struct Bee {
    role: BeeRole,
    path: Vec<CityIdx>,
    length: Float,
}

/// A bee colony optimizer.
pub struct BeeColony {
    config: BeeConfig,
    environment: Arc<Environment>,
}

impl BeeColony {
    /// Creates a new instance of `BeeColony`.
    pub fn new(config: BeeConfig, environment: Arc<Environment>) -> GenericResult<Self> {
        config.validate()?;

        Ok(Self { config, environment })
    }

    fn create_hive(&self, matrix: &DistanceMatrix) -> Vec<Bee> {
        let (inactive, scouts, _) = self.config.roles();

        (0..self.config.bees)
            .map(|idx| {
                let role = if idx < inactive {
                    BeeRole::Inactive
                } else if idx < inactive + scouts {
                    BeeRole::Scout
                } else {
                    BeeRole::Active
                };

                let path = self.random_path(matrix.size());
                let length = tour_length(path.as_slice(), matrix);

                Bee { role, path, length }
            })
            .collect()
    }

    fn random_path(&self, size: usize) -> Vec<CityIdx> {
        let mut path = (0..size).collect::<Vec<_>>();
        path.shuffle(&mut self.environment.random.get_rng());

        path
    }

    /// Swaps two distinct random positions of the path.
    fn neighbour(&self, path: &[CityIdx]) -> Vec<CityIdx> {
        let random = self.environment.random.as_ref();
        let last = path.len() as i32 - 1;

        let first = random.uniform_int(0, last) as usize;
        let mut second = random.uniform_int(0, last - 1) as usize;
        if second >= first {
            second += 1;
        }

        let mut neighbour = path.to_vec();
        neighbour.swap(first, second);

        neighbour
    }

    fn visit(&self, bee: &mut Bee, matrix: &DistanceMatrix) -> bool {
        let candidate = match bee.role {
            BeeRole::Inactive => return false,
            BeeRole::Active => self.neighbour(bee.path.as_slice()),
            BeeRole::Scout => self.random_path(bee.path.len()),
        };
        let length = tour_length(candidate.as_slice(), matrix);

        let is_accepted = length < bee.length
            || (bee.role == BeeRole::Active && self.environment.random.is_hit(self.config.acceptance_probability));

        if is_accepted {
            bee.path = candidate;
            bee.length = length;
        }

        is_accepted
    }
}

impl Optimizer for BeeColony {
    fn optimize(&self, matrix: &DistanceMatrix) -> GenericResult<Solution> {
        let (inactive, scouts, active) = self.config.roles();
        let mut telemetry = Telemetry::new(self.environment.logger.clone());

        telemetry.on_start(
            "bee colony",
            matrix.size(),
            format!(
                "epochs={}, bees={} (inactive={inactive}, scouts={scouts}, active={active})",
                self.config.epochs, self.config.bees
            )
            .as_str(),
        );

        let mut hive = self.create_hive(matrix);
        if let Some(bee) = hive.iter().min_by(|a, b| compare_floats(a.length, b.length)) {
            telemetry.on_candidate(0, bee.path.as_slice(), bee.length);
        }

        let mut epochs = 0;
        for epoch in 1..=self.config.epochs {
            hive.iter_mut().for_each(|bee| {
                if self.visit(bee, matrix) {
                    telemetry.on_candidate(epoch, bee.path.as_slice(), bee.length);
                }
            });

            epochs = epoch;

            if epoch < self.config.epochs && self.environment.is_quota_reached() {
                telemetry.on_message(format!("quota is reached after {epoch} epochs").as_str());
                break;
            }
        }

        telemetry.on_result(epochs)
    }
}
