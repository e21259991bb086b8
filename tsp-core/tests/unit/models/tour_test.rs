use super::*;
use crate::helpers::models::{create_matrix, create_triangle_matrix};

#[test]
fn can_calculate_tour_length_with_closing_edge() {
    let matrix = create_triangle_matrix();

    assert_eq!(tour_length(&[0, 1, 2], &matrix), 12.);
    assert_eq!(Tour::new(vec![2, 0, 1]).length(&matrix), 12.);
}

#[test]
fn can_calculate_length_of_two_cities_tour() {
    let matrix = create_matrix(vec![vec![0., 7.], vec![7., 0.]]);

    assert_eq!(tour_length(&[1, 0], &matrix), 14.);
}

#[test]
fn can_calculate_length_of_asymmetric_visiting_order() {
    let matrix = create_matrix(vec![
        vec![0., 1., 10., 1.],
        vec![1., 0., 1., 10.],
        vec![10., 1., 0., 1.],
        vec![1., 10., 1., 0.],
    ]);

    assert_eq!(tour_length(&[0, 1, 2, 3], &matrix), 4.);
    assert_eq!(tour_length(&[0, 2, 1, 3], &matrix), 22.);
}

#[test]
fn can_return_edges_including_closing_one() {
    let tour = Tour::new(vec![3, 1, 0, 2]);

    let edges = tour.edges().collect::<Vec<_>>();

    assert_eq!(edges, vec![(3, 1), (1, 0), (0, 2), (2, 3)]);
}

parameterized_test! {can_detect_permutation, (cities, size, expected), {
    assert_eq!(Tour::new(cities).is_permutation(size), expected);
}}

can_detect_permutation! {
    case_01_valid: (vec![2, 0, 1], 3, true),
    case_02_repeated: (vec![0, 0, 1], 3, false),
    case_03_missing: (vec![0, 1], 3, false),
    case_04_out_of_range: (vec![0, 1, 3], 3, false),
    case_05_too_long: (vec![0, 1, 2, 0], 3, false),
}
