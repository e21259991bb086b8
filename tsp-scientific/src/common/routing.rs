#[cfg(test)]
#[path = "../../tests/unit/common/routing_test.rs"]
mod routing_test;

use tsp_core::models::DistanceMatrix;
use tsp_core::utils::{Float, GenericResult};

/// A city location on a plane.
pub type Coordinate = (Float, Float);

/// Creates a symmetric matrix of euclidean distances between given coordinates. When `is_rounded`
/// is set, every distance is rounded to the nearest integer as TSPLIB's `nint` function does.
pub fn create_euclidean_matrix(coordinates: &[Coordinate], is_rounded: bool) -> GenericResult<DistanceMatrix> {
    let values = coordinates
        .iter()
        .flat_map(|&(x1, y1)| {
            coordinates.iter().map(move |&(x2, y2)| {
                let x = x1 - x2;
                let y = y1 - y2;
                let value = (x * x + y * y).sqrt();

                if is_rounded { value.round() } else { value }
            })
        })
        .collect::<Vec<Float>>();

    DistanceMatrix::from_flat(coordinates.len(), values)
}
