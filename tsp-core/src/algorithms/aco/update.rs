#[cfg(test)]
#[path = "../../../tests/unit/algorithms/aco/update_test.rs"]
mod update_test;

use super::PheromoneMatrix;
use crate::models::Tour;
use crate::utils::Float;

/// Evaporates and reinforces pheromone trails after all ants of an iteration are done.
pub struct PheromoneUpdater {
    rho: Float,
    q: Float,
}

impl PheromoneUpdater {
    /// Creates a new instance of `PheromoneUpdater`.
    pub fn new(rho: Float, q: Float) -> Self {
        Self { rho, q }
    }

    /// Evaporates all trails and then reinforces every edge of every tour, including the closing
    /// one, by `q / length`. Tours of zero length do not deposit anything.
    pub fn update(&self, pheromones: &mut PheromoneMatrix, tours: &[Tour], lengths: &[Float]) {
        assert_eq!(tours.len(), lengths.len());

        pheromones.evaporate(self.rho);

        tours.iter().zip(lengths.iter()).filter(|(_, length)| **length > 0.).for_each(|(tour, &length)| {
            let amount = self.q / length;
            tour.edges().for_each(|(from, to)| pheromones.deposit(from, to, amount));
        });
    }
}
