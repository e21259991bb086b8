use super::*;
use crate::helpers::models::*;
use crate::helpers::utils::create_test_environment;

#[test]
fn can_validate_default_config() {
    assert_eq!(GeneticConfig::default().validate(), Ok(()));
}

parameterized_test! {can_reject_invalid_config, config, {
    assert!(GeneticAlgorithm::new(config, create_test_environment(0)).is_err());
}}

can_reject_invalid_config! {
    case_01_population: GeneticConfig { population: 0, ..GeneticConfig::default() },
    case_02_tournament: GeneticConfig { tournament_size: 0, ..GeneticConfig::default() },
    case_03_crossover: GeneticConfig { crossover_probability: -0.1, ..GeneticConfig::default() },
    case_04_gene_swap: GeneticConfig { gene_swap_probability: 1.1, ..GeneticConfig::default() },
}

#[test]
fn can_breed_permutations_of_same_size() {
    let matrix = create_circle_matrix(6);
    let algorithm = GeneticAlgorithm::new(GeneticConfig { population: 9, ..GeneticConfig::default() }, create_test_environment(2))
        .unwrap();
    let population = algorithm.create_population(&matrix);

    let offspring = algorithm.breed(population.as_slice());

    assert_eq!(offspring.len(), 9);
    offspring.iter().for_each(|cities| {
        assert!(crate::models::Tour::new(cities.clone()).is_permutation(6));
    });
}

#[test]
fn can_find_good_tour_with_monotonic_progress() {
    let matrix = create_circle_matrix(7);
    let config = GeneticConfig { population: 30, generations: 200, ..GeneticConfig::default() };

    let solution = GeneticAlgorithm::new(config, create_test_environment(5)).unwrap().optimize(&matrix).unwrap();

    assert!(solution.tour.is_permutation(7));
    assert!((solution.tour.length(&matrix) - solution.length).abs() < 1E-9);
    assert_eq!(solution.iterations, 200);
    solution.progress.windows(2).for_each(|pair| {
        assert!(pair[0].iteration < pair[1].iteration);
        assert!(pair[0].length > pair[1].length);
    });
}

#[test]
fn can_reproduce_run_with_same_seed() {
    let matrix = create_circle_matrix(8);
    let config = GeneticConfig { population: 12, generations: 40, ..GeneticConfig::default() };
    let run = || GeneticAlgorithm::new(config.clone(), create_test_environment(9)).unwrap().optimize(&matrix).unwrap();

    let (first, second) = (run(), run());

    assert_eq!(first.tour, second.tour);
    assert_eq!(first.length, second.length);
    assert_eq!(first.progress, second.progress);
}
