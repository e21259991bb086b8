use super::*;
use tsp_core::models::Tour;
use tsp_core::solver::Progress;

#[test]
fn can_write_tour_with_one_based_ids() {
    let solution = Solution {
        tour: Tour::new(vec![2, 0, 1]),
        length: 12.,
        iterations: 10,
        progress: vec![Progress { iteration: 1, length: 12. }],
    };
    let mut buffer = Vec::new();

    (&solution, "triangle").write_tsplib(BufWriter::new(&mut buffer)).expect("cannot write solution");

    assert_eq!(
        String::from_utf8(buffer).unwrap(),
        "NAME : triangle.tour\nTYPE : TOUR\nCOMMENT : Length 12.000\nDIMENSION : 3\nTOUR_SECTION\n3\n1\n2\n-1\nEOF\n"
    );
}
