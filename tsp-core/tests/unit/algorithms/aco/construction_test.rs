use super::*;
use crate::helpers::models::*;
use crate::helpers::utils::FakeRandom;
use crate::utils::DefaultRandom;

fn assert_probabilities(actual: Vec<Float>, expected: Vec<Float>) {
    assert_eq!(actual.len(), expected.len());
    actual.iter().zip(expected.iter()).for_each(|(actual, expected)| {
        assert!((actual - expected).abs() < 1E-9, "{actual} != {expected}");
    });
}

#[test]
fn can_construct_permutation() {
    let matrix = create_circle_matrix(12);
    let pheromones = PheromoneMatrix::new(12, 0.1);
    let constructor = TourConstructor::new(&pheromones, &matrix, 2., 5.);

    (0..100).for_each(|seed| {
        let tour = constructor.construct(&DefaultRandom::new_repeatable(seed));

        assert!(tour.is_permutation(12), "not a permutation: {tour:?}");
    });
}

#[test]
fn can_calculate_probabilities_from_pheromone_and_distance() {
    let matrix = create_triangle_matrix();
    let pheromones = PheromoneMatrix::new(3, 0.1);
    let constructor = TourConstructor::new(&pheromones, &matrix, 2., 5.);

    let probabilities = constructor.probabilities(0, &[1, 2]);

    let (near, far) = (3125., 243.);
    assert_probabilities(probabilities, vec![near / (near + far), far / (near + far)]);
}

#[test]
fn can_prefer_stronger_trail_when_distances_are_equal() {
    let matrix = create_matrix(vec![vec![0., 1., 1.], vec![1., 0., 1.], vec![1., 1., 0.]]);
    let mut pheromones = PheromoneMatrix::new(3, 1.);
    pheromones.deposit(0, 2, 1.);
    let constructor = TourConstructor::new(&pheromones, &matrix, 2., 5.);

    let probabilities = constructor.probabilities(0, &[1, 2]);

    assert_probabilities(probabilities, vec![0.2, 0.8]);
}

#[test]
fn can_give_maximum_probability_to_degenerate_edge() {
    let matrix = create_euclidean_matrix(&[(0., 0.), (0., 0.), (3., 4.), (6., 0.)]);
    let pheromones = PheromoneMatrix::new(4, 0.1);
    let constructor = TourConstructor::new(&pheromones, &matrix, 2., 5.);

    assert_eq!(constructor.desirability(0, 1), Float::INFINITY);
    assert_probabilities(constructor.probabilities(0, &[1, 2, 3]), vec![1., 0., 0.]);

    (0..20).for_each(|seed| {
        let tour = constructor.construct(&DefaultRandom::new_repeatable(seed));
        assert!(tour.is_permutation(4));
    });
}

#[test]
fn can_share_probability_between_many_degenerate_edges() {
    let matrix = create_euclidean_matrix(&[(0., 0.), (0., 0.), (0., 0.), (5., 0.)]);
    let pheromones = PheromoneMatrix::new(4, 0.1);
    let constructor = TourConstructor::new(&pheromones, &matrix, 2., 5.);

    assert_probabilities(constructor.probabilities(0, &[3, 1, 2]), vec![0., 0.5, 0.5]);
}

#[test]
fn can_fallback_to_uniform_probabilities_on_underflow() {
    let matrix = create_matrix(vec![vec![0., 1E100, 1E100], vec![1E100, 0., 1E100], vec![1E100, 1E100, 0.]]);
    let pheromones = PheromoneMatrix::new(3, 0.1);
    let constructor = TourConstructor::new(&pheromones, &matrix, 2., 5.);

    assert_probabilities(constructor.probabilities(0, &[1, 2]), vec![0.5, 0.5]);
}

#[test]
fn can_use_injected_random_for_start_and_sampling() {
    let matrix = create_triangle_matrix();
    let pheromones = PheromoneMatrix::new(3, 0.1);
    let constructor = TourConstructor::new(&pheromones, &matrix, 2., 5.);
    // start from city 1, then skip the nearest city 0 (p ~ 0.808) with 0.9 threshold
    let random = FakeRandom::new(vec![1], vec![0.9, 0.5]);

    let tour = constructor.construct(&random);

    assert_eq!(tour.cities(), &[1, 2, 0]);
}
