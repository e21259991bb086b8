//! This module reimports commonly used types.

pub use crate::algorithms::aco::{AcoConfig, AntColony};
pub use crate::algorithms::bees::{BeeColony, BeeConfig};
pub use crate::algorithms::genetic::{GeneticAlgorithm, GeneticConfig};

pub use crate::models::{DistanceMatrix, Tour, tour_length};

pub use crate::solver::{Optimizer, Progress, Solution};

pub use crate::utils::{
    CityIdx, DefaultRandom, Environment, Float, GenericError, GenericResult, InfoLogger, Parallelism, Quota, Random,
    TimeQuota,
};
