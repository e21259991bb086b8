//! A genetic algorithm over permutations: tournament selection, ordered crossover and shuffle
//! indexes mutation, with a hall of fame keeping the best individual ever found.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/genetic/genetic_test.rs"]
mod genetic_test;

mod operators;
pub use self::operators::*;

use crate::models::{DistanceMatrix, tour_length};
use crate::solver::{Optimizer, Solution, Telemetry};
use crate::utils::*;
use rand::seq::SliceRandom;
use std::sync::Arc;

/// Genetic algorithm parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneticConfig {
    /// Population size. Default is 50.
    pub population: usize,
    /// Amount of generations. Default is 700.
    pub generations: usize,
    /// A probability to mate two consecutive individuals. Default is 0.8.
    pub crossover_probability: Float,
    /// A probability to mutate an individual. Default is 0.3.
    pub mutation_probability: Float,
    /// A probability to swap each position of a mutated individual. Default is 0.3.
    pub gene_swap_probability: Float,
    /// Amount of individuals competing in one tournament. Default is 5.
    pub tournament_size: usize,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population: 50,
            generations: 700,
            crossover_probability: 0.8,
            mutation_probability: 0.3,
            gene_swap_probability: 0.3,
            tournament_size: 5,
        }
    }
}

impl GeneticConfig {
    /// Checks that all parameters are in their domains.
    pub fn validate(&self) -> GenericResult<()> {
        let is_probability = |value: Float| (0. ..=1.).contains(&value);

        if self.population == 0 || self.generations == 0 || self.tournament_size == 0 {
            return Err(GenericError::invalid_config(
                "population, generations and tournament size should be positive",
            ));
        }

        if !is_probability(self.crossover_probability)
            || !is_probability(self.mutation_probability)
            || !is_probability(self.gene_swap_probability)
        {
            return Err(GenericError::invalid_config(format!(
                "probabilities should be in [0, 1], got: crossover={}, mutation={}, gene swap={}",
                self.crossover_probability, self.mutation_probability, self.gene_swap_probability
            )));
        }

        Ok(())
    }
}

/// A genetic algorithm optimizer.
pub struct GeneticAlgorithm {
    config: GeneticConfig,
    environment: Arc<Environment>,
}

impl GeneticAlgorithm {
    /// Creates a new instance of `GeneticAlgorithm`.
    pub fn new(config: GeneticConfig, environment: Arc<Environment>) -> GenericResult<Self> {
        config.validate()?;

        Ok(Self { config, environment })
    }

    fn create_population(&self, matrix: &DistanceMatrix) -> Vec<Individual> {
        let mut rng = self.environment.random.get_rng();
        let permutations = (0..self.config.population)
            .map(|_| {
                let mut cities = (0..matrix.size()).collect::<Vec<_>>();
                cities.shuffle(&mut rng);
                cities
            })
            .collect();

        self.evaluate(permutations, matrix)
    }

    fn evaluate(&self, permutations: Vec<Vec<CityIdx>>, matrix: &DistanceMatrix) -> Vec<Individual> {
        self.environment.parallelism.execute(|| {
            parallel_into_collect(permutations, |cities| {
                let length = tour_length(cities.as_slice(), matrix);
                Individual { cities, length }
            })
        })
    }

    fn breed(&self, population: &[Individual]) -> Vec<Vec<CityIdx>> {
        let random = self.environment.random.as_ref();
        let config = &self.config;

        let mut offspring = select_tournament(population, population.len(), config.tournament_size, random)
            .into_iter()
            .map(|individual| individual.cities)
            .collect::<Vec<_>>();

        offspring.chunks_exact_mut(2).for_each(|pair| {
            if random.is_hit(config.crossover_probability) {
                let (first, second) = pair.split_at_mut(1);
                crossover_ordered(first[0].as_mut_slice(), second[0].as_mut_slice(), random);
            }
        });

        offspring.iter_mut().for_each(|cities| {
            if random.is_hit(config.mutation_probability) {
                mutate_shuffle_indexes(cities.as_mut_slice(), config.gene_swap_probability, random);
            }
        });

        offspring
    }
}

impl Optimizer for GeneticAlgorithm {
    fn optimize(&self, matrix: &DistanceMatrix) -> GenericResult<Solution> {
        let config = &self.config;
        let mut telemetry = Telemetry::new(self.environment.logger.clone());

        telemetry.on_start(
            "genetic algorithm",
            matrix.size(),
            format!(
                "generations={}, population={}, crossover={}, mutation={}, tournament={}",
                config.generations,
                config.population,
                config.crossover_probability,
                config.mutation_probability,
                config.tournament_size
            )
            .as_str(),
        );

        let mut population = self.create_population(matrix);
        update_hall_of_fame(&mut telemetry, 0, population.as_slice());

        let mut generations = 0;
        for generation in 1..=config.generations {
            let offspring = self.breed(population.as_slice());
            population = self.evaluate(offspring, matrix);
            update_hall_of_fame(&mut telemetry, generation, population.as_slice());

            generations = generation;

            if generation < config.generations && self.environment.is_quota_reached() {
                telemetry.on_message(format!("quota is reached after {generation} generations").as_str());
                break;
            }
        }

        telemetry.on_result(generations)
    }
}

fn update_hall_of_fame(telemetry: &mut Telemetry, generation: usize, population: &[Individual]) {
    if let Some(best) = population.iter().min_by(|a, b| compare_floats(a.length, b.length)) {
        telemetry.on_candidate(generation, best.cities.as_slice(), best.length);
    }
}
