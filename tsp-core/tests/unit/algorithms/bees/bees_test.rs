use super::*;
use crate::helpers::models::*;
use crate::helpers::utils::{EchoRandom, FakeRandom, create_test_environment, create_test_environment_with_random};

#[test]
fn can_assign_roles_by_ratio() {
    assert_eq!(BeeConfig::default().roles(), (13, 12, 25));
    assert_eq!(BeeConfig { bees: 4, active_ratio: 1., scout_ratio: 0., ..BeeConfig::default() }.roles(), (0, 0, 4));
}

parameterized_test! {can_reject_invalid_config, config, {
    assert!(config.validate().is_err());
}}

can_reject_invalid_config! {
    case_01_no_bees: BeeConfig { bees: 0, ..BeeConfig::default() },
    case_02_no_epochs: BeeConfig { epochs: 0, ..BeeConfig::default() },
    case_03_ratio_sum: BeeConfig { active_ratio: 0.8, scout_ratio: 0.3, ..BeeConfig::default() },
    case_04_acceptance: BeeConfig { acceptance_probability: 1.5, ..BeeConfig::default() },
}

#[test]
fn can_swap_two_distinct_positions() {
    let environment = create_test_environment_with_random(Arc::new(FakeRandom::new(vec![2, 2], vec![])));
    let colony = BeeColony::new(BeeConfig::default(), environment).unwrap();

    let neighbour = colony.neighbour(&[0, 1, 2, 3]);

    assert_eq!(neighbour, vec![0, 1, 3, 2]);
}

#[test]
fn can_keep_inactive_bee_untouched() {
    let matrix = create_circle_matrix(5);
    let environment = create_test_environment_with_random(Arc::new(EchoRandom::new(true)));
    let colony = BeeColony::new(BeeConfig::default(), environment).unwrap();
    let mut bee = Bee { role: BeeRole::Inactive, path: vec![0, 2, 4, 1, 3], length: 1000. };

    assert!(!colony.visit(&mut bee, &matrix));
    assert_eq!(bee.path, vec![0, 2, 4, 1, 3]);
}

#[test]
fn can_accept_improving_neighbour_only_for_scout() {
    let matrix = create_circle_matrix(5);
    let environment = create_test_environment(0);
    let colony = BeeColony::new(BeeConfig::default(), environment).unwrap();
    let optimal = vec![0, 1, 2, 3, 4];
    let mut bee = Bee { role: BeeRole::Scout, path: optimal.clone(), length: tour_length(optimal.as_slice(), &matrix) };

    (0..50).for_each(|_| {
        colony.visit(&mut bee, &matrix);
    });

    assert!((bee.length - get_circle_optimal_length(5)).abs() < 1E-9);
}

#[test]
fn can_find_good_tour_with_monotonic_progress() {
    let matrix = create_circle_matrix(7);
    let config = BeeConfig { bees: 20, epochs: 300, ..BeeConfig::default() };

    let solution = BeeColony::new(config, create_test_environment(4)).unwrap().optimize(&matrix).unwrap();

    assert!(solution.tour.is_permutation(7));
    assert!((solution.tour.length(&matrix) - solution.length).abs() < 1E-9);
    assert_eq!(solution.iterations, 300);
    assert_eq!(solution.progress.first().map(|progress| progress.iteration), Some(0));
    solution.progress.windows(2).for_each(|pair| assert!(pair[0].length > pair[1].length));
}

#[test]
fn can_reproduce_run_with_same_seed() {
    let matrix = create_circle_matrix(9);
    let config = BeeConfig { bees: 10, epochs: 50, ..BeeConfig::default() };
    let run = || BeeColony::new(config.clone(), create_test_environment(11)).unwrap().optimize(&matrix).unwrap();

    let (first, second) = (run(), run());

    assert_eq!(first.tour, second.tour);
    assert_eq!(first.progress, second.progress);
}
