use super::*;
use crate::helpers::{create_rect8_instance, get_test_resource};
use std::io::Read;

fn get_example_problem_string() -> String {
    let mut buffer = "".to_string();

    get_test_resource("../../data/tsplib/rect8.tsp")
        .expect("cannot open file")
        .read_to_string(&mut buffer)
        .expect("cannot read file");

    buffer
}

#[test]
fn can_read_problem() {
    let instance = create_rect8_instance();

    assert_eq!(instance.name, Some("rect8".to_string()));
    assert_eq!(instance.size(), 8);
    assert_eq!(instance.coordinates[0], (0., 0.));
    assert_eq!(instance.coordinates[3], (40., 15.));
    assert_eq!(instance.coordinates[7], (0., 15.));
}

#[test]
fn can_create_matrix_from_problem() {
    let matrix = create_rect8_instance().create_matrix(true).expect("cannot create matrix");

    assert_eq!(matrix.size(), 8);
    assert_eq!(matrix.distance(0, 2), 40.);
    assert_eq!(matrix.distance(0, 4), 50.);
    assert_eq!(matrix.distance(4, 0), 50.);
}

parameterized_test! {can_read_meta_errors, (from, to, error), {
    let content = get_example_problem_string().replace(from, to);

    let result = content.read_tsplib();

    assert_eq!(result, Err(error.into()));
}}

can_read_meta_errors! {
    case_01_type: ("TYPE : TSP", "TYPE : ATSP", "expecting 'TSP' as TYPE, got 'ATSP'"),
    case_02_edge_type: ("EUC_2D", "GEO", "expecting 'EUC_2D' as EDGE_WEIGHT_TYPE, got 'GEO'"),
    case_03_dimension: ("DIMENSION : 8", "DIMENSION : asd", "cannot parse DIMENSION: 'invalid digit found in string'"),
    case_04_no_colon: ("DIMENSION : 8", "DIMENSION 8", "expected colon separated string, got: 'DIMENSION 8'"),
    case_05_no_section: ("NODE_COORD_SECTION\n", "EOF\n", "expecting NODE_COORD_SECTION, got: 'EOF'"),
}

parameterized_test! {can_read_coordinate_errors, (from, to, error), {
    let content = get_example_problem_string().replace(from, to);

    let result = content.read_tsplib();

    assert_eq!(result, Err(error.into()));
}}

can_read_coordinate_errors! {
    case_01_arity: ("3 40 0\n", "3 40\n", "unexpected coord data: '3 40'"),
    case_02_coord: ("3 40 0\n", "3 forty 0\n", "cannot parse coord.0: 'invalid float literal'"),
    case_03_duplicate: ("3 40 0\n", "2 40 0\n", "duplicate city id: '2'"),
    case_04_dimension: ("8 0 15\n", "", "expecting 8 cities as DIMENSION, got 7 coordinates"),
    case_05_gap: ("8 0 15\n", "9 0 15\n", "cannot find coordinate for id: '8'"),
}

#[test]
fn can_read_problem_without_optional_headers() {
    let content = "NODE_COORD_SECTION\n1 1.5 2.5\n2 3.5 2.5\n\n3 1.5 4\n".to_string();

    let instance = content.read_tsplib().expect("cannot read problem");

    assert_eq!(instance.name, None);
    assert_eq!(instance.coordinates, vec![(1.5, 2.5), (3.5, 2.5), (1.5, 4.)]);
}

#[test]
fn can_ignore_unknown_headers() {
    let content = get_example_problem_string().replace("TYPE : TSP", "TYPE : TSP\nCAPACITY : 30");

    let instance = content.read_tsplib().expect("cannot read problem");

    assert_eq!(instance.size(), 8);
}

#[test]
fn can_report_missing_section_on_empty_input() {
    let result = String::new().read_tsplib();

    assert_eq!(result, Err("expecting NODE_COORD_SECTION, got end of input".into()));
}
