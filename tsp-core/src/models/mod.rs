//! Contains the problem and solution models shared by all optimizers.

mod matrix;
pub use self::matrix::DistanceMatrix;

mod tour;
pub use self::tour::{Tour, tour_length};
