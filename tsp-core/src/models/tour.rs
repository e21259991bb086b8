#[cfg(test)]
#[path = "../../tests/unit/models/tour_test.rs"]
mod tour_test;

use crate::models::DistanceMatrix;
use crate::utils::{CityIdx, Float};

/// Calculates a total cycle length of the tour: the sum of distances between consecutive
/// cities plus the closing edge from the last city back to the first one.
///
/// This is the only tour evaluation used by the optimizers of this crate.
pub fn tour_length(cities: &[CityIdx], matrix: &DistanceMatrix) -> Float {
    edges(cities).map(|(from, to)| matrix.distance(from, to)).sum()
}

/// An order in which all cities are visited. The edge from the last city to the first one is
/// implicit.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tour {
    cities: Vec<CityIdx>,
}

impl Tour {
    /// Creates a new tour from visiting order.
    pub fn new(cities: Vec<CityIdx>) -> Self {
        Self { cities }
    }

    /// Returns cities in visiting order.
    pub fn cities(&self) -> &[CityIdx] {
        self.cities.as_slice()
    }

    /// Returns amount of cities in the tour.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns true if the tour has no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Returns all edges of the tour including the closing one.
    pub fn edges(&self) -> impl Iterator<Item = (CityIdx, CityIdx)> + '_ {
        edges(self.cities.as_slice())
    }

    /// Returns a total cycle length of the tour.
    pub fn length(&self, matrix: &DistanceMatrix) -> Float {
        tour_length(self.cities.as_slice(), matrix)
    }

    /// Checks whether the tour visits each of `size` cities exactly once.
    pub fn is_permutation(&self, size: usize) -> bool {
        let mut visited = vec![false; size];

        self.cities.len() == size
            && self.cities.iter().all(|&city| city < size && !std::mem::replace(&mut visited[city], true))
    }
}

impl From<Tour> for Vec<CityIdx> {
    fn from(tour: Tour) -> Self {
        tour.cities
    }
}

fn edges(cities: &[CityIdx]) -> impl Iterator<Item = (CityIdx, CityIdx)> + '_ {
    let closing = match (cities.last(), cities.first()) {
        (Some(&last), Some(&first)) if cities.len() > 1 => Some((last, first)),
        _ => None,
    };

    cities.windows(2).map(|pair| (pair[0], pair[1])).chain(closing)
}
