#[cfg(test)]
#[path = "../../../tests/unit/algorithms/aco/pheromone_test.rs"]
mod pheromone_test;

use crate::utils::{CityIdx, Float};

/// A minimal pheromone level. Trails never decay below it, so selection probabilities never
/// collapse to zero.
pub const PHEROMONE_FLOOR: Float = 1E-10;

/// A square matrix of trail strengths between cities.
#[derive(Clone, Debug, PartialEq)]
pub struct PheromoneMatrix {
    size: usize,
    values: Vec<Float>,
}

impl PheromoneMatrix {
    /// Creates a new matrix with all trails set to the same initial level.
    pub fn new(size: usize, initial: Float) -> Self {
        Self { size, values: vec![initial.max(PHEROMONE_FLOOR); size * size] }
    }

    /// Returns amount of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns a trail strength between two cities.
    #[inline]
    pub fn get(&self, from: CityIdx, to: CityIdx) -> Float {
        self.values[from * self.size + to]
    }

    /// Multiplies all trails by `1 - rho`.
    pub fn evaporate(&mut self, rho: Float) {
        let factor = 1. - rho;
        self.values.iter_mut().for_each(|value| *value = (*value * factor).max(PHEROMONE_FLOOR));
    }

    /// Adds the amount to the trail of an undirected edge: both directions get the same amount.
    pub fn deposit(&mut self, from: CityIdx, to: CityIdx, amount: Float) {
        self.values[from * self.size + to] += amount;

        if from != to {
            self.values[to * self.size + from] += amount;
        }
    }

    /// Returns true if trail strength does not depend on the direction.
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|from| (from + 1..self.size).all(|to| self.get(from, to) == self.get(to, from)))
    }
}
