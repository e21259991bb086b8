#[cfg(test)]
#[path = "../../../tests/unit/algorithms/genetic/operators_test.rs"]
mod operators_test;

use crate::utils::{CityIdx, Float, Random};

/// An individual of the genetic population: a permutation of cities with its tour length.
#[derive(Clone, Debug)]
pub struct Individual {
    /// Cities in visiting order.
    pub cities: Vec<CityIdx>,
    /// A total cycle length.
    pub length: Float,
}

/// Selects `amount` individuals, each one is the shortest of `tournament_size` individuals
/// drawn with replacement. The first drawn wins ties.
pub fn select_tournament(
    population: &[Individual],
    amount: usize,
    tournament_size: usize,
    random: &dyn Random,
) -> Vec<Individual> {
    let last = population.len() as i32 - 1;
    let draw = || &population[random.uniform_int(0, last) as usize];

    (0..amount)
        .map(|_| {
            (1..tournament_size)
                .map(|_| draw())
                .fold(draw(), |best, aspirant| if aspirant.length < best.length { aspirant } else { best })
                .clone()
        })
        .collect()
}

/// Applies ordered crossover to both parents: each child keeps a random segment of the other
/// parent in place and fills the rest with own cities in their order, starting after the segment.
pub fn crossover_ordered(first: &mut [CityIdx], second: &mut [CityIdx], random: &dyn Random) {
    assert_eq!(first.len(), second.len());

    let size = first.len();
    if size < 2 {
        return;
    }

    let (start, end) = {
        let a = random.uniform_int(0, size as i32 - 1) as usize;
        let mut b = random.uniform_int(0, size as i32 - 2) as usize;
        if b >= a {
            b += 1;
        }
        (a.min(b), a.max(b))
    };

    let first_child = create_ordered_child(second, first, start, end);
    let second_child = create_ordered_child(first, second, start, end);

    first.copy_from_slice(first_child.as_slice());
    second.copy_from_slice(second_child.as_slice());
}

/// Swaps each position with another random position with given probability.
pub fn mutate_shuffle_indexes(cities: &mut [CityIdx], probability: Float, random: &dyn Random) {
    let size = cities.len();
    if size < 2 {
        return;
    }

    (0..size).for_each(|idx| {
        if random.is_hit(probability) {
            let mut other = random.uniform_int(0, size as i32 - 2) as usize;
            if other >= idx {
                other += 1;
            }

            cities.swap(idx, other);
        }
    });
}

fn create_ordered_child(segment: &[CityIdx], order: &[CityIdx], start: usize, end: usize) -> Vec<CityIdx> {
    let size = order.len();
    let mut child = segment.to_vec();
    let mut in_segment = vec![false; size];

    segment[start..=end].iter().for_each(|&city| in_segment[city] = true);

    let mut position = (end + 1) % size;
    (0..size).map(|offset| order[(end + 1 + offset) % size]).filter(|&city| !in_segment[city]).for_each(|city| {
        child[position] = city;
        position = (position + 1) % size;
    });

    child
}
