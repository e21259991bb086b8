//! Solver configuration.

#![allow(missing_docs)]

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

extern crate serde_json;

use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;
use tsp_core::prelude::*;

/// Names of supported algorithms.
pub const ALGORITHM_NAMES: &[&str] = &["aco", "bees", "genetic"];

/// An algorithm configuration.
#[derive(Clone, Deserialize, Debug, Default)]
pub struct Config {
    /// Specifies ant colony parameters.
    pub aco: Option<AcoSection>,
    /// Specifies bee colony parameters.
    pub bees: Option<BeesSection>,
    /// Specifies genetic algorithm parameters.
    pub genetic: Option<GeneticSection>,
    /// Specifies algorithm termination configuration.
    pub termination: Option<TerminationConfig>,
    /// Specifies environment configuration.
    pub environment: Option<EnvironmentConfig>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
}

/// Ant colony parameters, unspecified ones are taken from defaults.
#[derive(Clone, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct AcoSection {
    /// Amount of ants per iteration. Default is 50.
    pub ants: Option<usize>,
    /// Pheromone influence. Default is 2.
    pub alpha: Option<Float>,
    /// Distance influence. Default is 5.
    pub beta: Option<Float>,
    /// Evaporation rate. Default is 0.3.
    pub rho: Option<Float>,
    /// Deposit scale. Default is 500.
    pub q: Option<Float>,
    /// Initial trail on every edge. Default is 0.1.
    pub initial_pheromone: Option<Float>,
}

/// Bee colony parameters, unspecified ones are taken from defaults.
#[derive(Clone, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct BeesSection {
    /// Hive size. Default is 50.
    pub bees: Option<usize>,
    /// A share of active bees. Default is 0.5.
    pub active_ratio: Option<Float>,
    /// A share of scouts. Default is 0.25.
    pub scout_ratio: Option<Float>,
    /// A probability of active bee to accept a worse neighbour. Default is 0.05.
    pub acceptance_probability: Option<Float>,
}

/// Genetic algorithm parameters, unspecified ones are taken from defaults.
#[derive(Clone, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GeneticSection {
    /// Population size. Default is 50.
    pub population: Option<usize>,
    /// Default is 0.8.
    pub crossover_probability: Option<Float>,
    /// Default is 0.3.
    pub mutation_probability: Option<Float>,
    /// Default is 0.3.
    pub gene_swap_probability: Option<Float>,
    /// Default is 5.
    pub tournament_size: Option<usize>,
}

#[derive(Clone, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct TerminationConfig {
    /// Max amount of iterations (epochs, generations). Default is 700.
    pub max_iterations: Option<usize>,
    /// Max running time in seconds, checked between iterations.
    pub max_time: Option<usize>,
}

#[derive(Clone, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentConfig {
    /// A random seed which makes runs repeatable.
    pub seed: Option<u64>,
    /// Amount of worker threads. Default is amount of cpus.
    pub threads: Option<usize>,
}

#[derive(Clone, Deserialize, Debug, Default)]
pub struct TelemetryConfig {
    pub logging: Option<LoggingConfig>,
}

#[derive(Clone, Deserialize, Debug, Default)]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled. Default is false.
    pub enabled: bool,
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))
}

/// Creates an optimizer of the given algorithm from config file.
pub fn create_optimizer_from_config_file<R: Read>(
    algorithm: &str,
    reader: BufReader<R>,
) -> Result<Box<dyn Optimizer>, String> {
    read_config(reader).and_then(|config| create_optimizer_from_config(algorithm, &config))
}

/// Creates an optimizer of the given algorithm from config.
pub fn create_optimizer_from_config(algorithm: &str, config: &Config) -> Result<Box<dyn Optimizer>, String> {
    let environment = create_environment(config)?;
    let max_iterations = config.termination.as_ref().and_then(|termination| termination.max_iterations);

    let optimizer: GenericResult<Box<dyn Optimizer>> = match algorithm {
        "aco" => AntColony::new(create_aco_config(config.aco.as_ref(), max_iterations), environment)
            .map(|optimizer| Box::new(optimizer) as Box<dyn Optimizer>),
        "bees" => BeeColony::new(create_bee_config(config.bees.as_ref(), max_iterations), environment)
            .map(|optimizer| Box::new(optimizer) as Box<dyn Optimizer>),
        "genetic" => GeneticAlgorithm::new(create_genetic_config(config.genetic.as_ref(), max_iterations), environment)
            .map(|optimizer| Box::new(optimizer) as Box<dyn Optimizer>),
        _ => return Err(format!("unknown algorithm: '{algorithm}', expected one of: {}", ALGORITHM_NAMES.join(", "))),
    };

    optimizer.map_err(|err| err.to_string())
}

/// Creates an environment from config: random seed, thread pool, time quota and logger.
pub fn create_environment(config: &Config) -> Result<Arc<Environment>, String> {
    let environment_config = config.environment.clone().unwrap_or_default();
    let max_time = config.termination.as_ref().and_then(|termination| termination.max_time);
    let is_logging_enabled = config
        .telemetry
        .as_ref()
        .and_then(|telemetry| telemetry.logging.as_ref())
        .is_some_and(|logging| logging.enabled);

    let random: Arc<dyn Random> = match environment_config.seed {
        Some(seed) => Arc::new(DefaultRandom::new_repeatable(seed)),
        None => Arc::new(DefaultRandom::default()),
    };

    let parallelism = environment_config
        .threads
        .map_or_else(|| Ok(Parallelism::default()), Parallelism::new)
        .map_err(|err| err.to_string())?;

    let logger: InfoLogger = if is_logging_enabled { Arc::new(|msg: &str| println!("{msg}")) } else { Arc::new(|_| {}) };

    Ok(Arc::new(Environment {
        quota: Environment::new_with_time_quota(max_time).quota,
        parallelism,
        logger,
        ..Environment::new(random)
    }))
}

fn create_aco_config(section: Option<&AcoSection>, max_iterations: Option<usize>) -> AcoConfig {
    let default = AcoConfig::default();
    let section = section.cloned().unwrap_or_default();

    AcoConfig {
        iterations: max_iterations.unwrap_or(default.iterations),
        ants: section.ants.unwrap_or(default.ants),
        alpha: section.alpha.unwrap_or(default.alpha),
        beta: section.beta.unwrap_or(default.beta),
        rho: section.rho.unwrap_or(default.rho),
        q: section.q.unwrap_or(default.q),
        initial_pheromone: section.initial_pheromone.unwrap_or(default.initial_pheromone),
    }
}

fn create_bee_config(section: Option<&BeesSection>, max_iterations: Option<usize>) -> BeeConfig {
    let default = BeeConfig::default();
    let section = section.cloned().unwrap_or_default();

    BeeConfig {
        bees: section.bees.unwrap_or(default.bees),
        epochs: max_iterations.unwrap_or(default.epochs),
        active_ratio: section.active_ratio.unwrap_or(default.active_ratio),
        scout_ratio: section.scout_ratio.unwrap_or(default.scout_ratio),
        acceptance_probability: section.acceptance_probability.unwrap_or(default.acceptance_probability),
    }
}

fn create_genetic_config(section: Option<&GeneticSection>, max_iterations: Option<usize>) -> GeneticConfig {
    let default = GeneticConfig::default();
    let section = section.cloned().unwrap_or_default();

    GeneticConfig {
        population: section.population.unwrap_or(default.population),
        generations: max_iterations.unwrap_or(default.generations),
        crossover_probability: section.crossover_probability.unwrap_or(default.crossover_probability),
        mutation_probability: section.mutation_probability.unwrap_or(default.mutation_probability),
        gene_swap_probability: section.gene_swap_probability.unwrap_or(default.gene_swap_probability),
        tournament_size: section.tournament_size.unwrap_or(default.tournament_size),
    }
}
