#[cfg(test)]
#[path = "../../../tests/unit/algorithms/aco/construction_test.rs"]
mod construction_test;

use super::PheromoneMatrix;
use crate::models::{DistanceMatrix, Tour};
use crate::utils::{CityIdx, Float, Random};

/// Builds tours of individual ants from a snapshot of pheromone trails.
///
/// Desirability of every edge is computed once on creation as `tau^alpha * (1/d)^beta`, so all
/// ants of the same iteration observe exactly the same pheromone state. An edge of zero length
/// between distinct cities has infinite desirability.
pub struct TourConstructor<'a> {
    distances: &'a DistanceMatrix,
    desirability: Vec<Float>,
}

impl<'a> TourConstructor<'a> {
    /// Creates a new instance of `TourConstructor`.
    pub fn new(pheromones: &PheromoneMatrix, distances: &'a DistanceMatrix, alpha: Float, beta: Float) -> Self {
        assert_eq!(pheromones.size(), distances.size());

        let size = distances.size();
        let desirability = (0..size)
            .flat_map(|from| (0..size).map(move |to| (from, to)))
            .map(|(from, to)| {
                if from == to {
                    return 0.;
                }

                let tau = pheromones.get(from, to).powf(alpha);
                let distance = distances.distance(from, to);

                if distance == 0. { Float::INFINITY } else { tau * (1. / distance).powf(beta) }
            })
            .collect();

        Self { distances, desirability }
    }

    /// Returns desirability score of moving from one city to another.
    pub fn desirability(&self, from: CityIdx, to: CityIdx) -> Float {
        self.desirability[from * self.distances.size() + to]
    }

    /// Returns a probability distribution of moving from the current city to each of candidates.
    ///
    /// Candidates with infinite desirability share the whole probability mass equally. When all
    /// scores underflow to zero, candidates are equally likely.
    pub fn probabilities(&self, current: CityIdx, candidates: &[CityIdx]) -> Vec<Float> {
        let scores = candidates.iter().map(|&city| self.desirability(current, city)).collect::<Vec<_>>();

        let infinite = scores.iter().filter(|score| score.is_infinite()).count();
        if infinite > 0 {
            let share = 1. / infinite as Float;
            return scores.iter().map(|score| if score.is_infinite() { share } else { 0. }).collect();
        }

        // NOTE scale by maximum first to avoid overflow of the sum
        let max = scores.iter().copied().fold(0., Float::max);
        if max <= 0. {
            let share = 1. / candidates.len() as Float;
            return vec![share; candidates.len()];
        }

        let scaled = scores.iter().map(|score| score / max).collect::<Vec<_>>();
        let total = scaled.iter().sum::<Float>();

        scaled.into_iter().map(|score| score / total).collect()
    }

    /// Constructs a complete tour for one ant starting from a uniformly chosen city.
    pub fn construct(&self, random: &dyn Random) -> Tour {
        let size = self.distances.size();
        let start = random.uniform_int(0, size as i32 - 1) as CityIdx;

        let mut cities = Vec::with_capacity(size);
        cities.push(start);

        let mut unvisited = (0..size).filter(|&city| city != start).collect::<Vec<_>>();
        let mut current = start;

        while !unvisited.is_empty() {
            let probabilities = self.probabilities(current, unvisited.as_slice());
            let next = unvisited.remove(random.weighted(probabilities.as_slice()));

            cities.push(next);
            current = next;
        }

        Tour::new(cities)
    }
}
