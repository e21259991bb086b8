use crate::models::DistanceMatrix;
use crate::utils::Float;

/// Creates a matrix from rows, panics if it is invalid.
pub fn create_matrix(rows: Vec<Vec<Float>>) -> DistanceMatrix {
    DistanceMatrix::new(rows).expect("cannot create matrix")
}

/// Creates a matrix of euclidean distances between given points.
pub fn create_euclidean_matrix(points: &[(Float, Float)]) -> DistanceMatrix {
    create_matrix(
        points
            .iter()
            .map(|&(x1, y1)| points.iter().map(|&(x2, y2)| ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt()).collect())
            .collect(),
    )
}

/// Creates a triangle instance with sides 3, 4 and 5.
pub fn create_triangle_matrix() -> DistanceMatrix {
    create_matrix(vec![vec![0., 3., 5.], vec![3., 0., 4.], vec![5., 4., 0.]])
}

/// Creates an instance where cities are placed evenly on a circle, the optimal tour visits them
/// in index order.
pub fn create_circle_matrix(size: usize) -> DistanceMatrix {
    let points = (0..size)
        .map(|idx| {
            let angle = 2. * std::f64::consts::PI * idx as Float / size as Float;
            (100. * angle.cos(), 100. * angle.sin())
        })
        .collect::<Vec<_>>();

    create_euclidean_matrix(points.as_slice())
}

/// Returns a length of the optimal tour on the circle instance.
pub fn get_circle_optimal_length(size: usize) -> Float {
    let side = 2. * 100. * (std::f64::consts::PI / size as Float).sin();
    side * size as Float
}
