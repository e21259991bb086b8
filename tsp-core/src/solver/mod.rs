//! Contains common abstractions of the optimizers: the optimizer trait, the solution type and
//! telemetry which tracks the best-known tour.

use crate::models::{DistanceMatrix, Tour};
use crate::utils::{Float, GenericResult};

mod telemetry;
pub use self::telemetry::Telemetry;

/// Represents an improvement of the best-known tour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Progress {
    /// An iteration sequence number, starting from 1. Zero is used for improvements found by the
    /// initial population.
    pub iteration: usize,
    /// A new best-known tour length.
    pub length: Float,
}

/// A terminal result of an optimizer run.
#[derive(Clone, Debug)]
pub struct Solution {
    /// The best-known tour.
    pub tour: Tour,
    /// A length of the best-known tour.
    pub length: Float,
    /// Amount of iterations done.
    pub iterations: usize,
    /// Improvements of the best-known tour in the order they were found. Lengths are strictly decreasing.
    pub progress: Vec<Progress>,
}

/// A metaheuristic which searches for a short tour visiting all cities.
pub trait Optimizer {
    /// Runs the search on the given instance.
    fn optimize(&self, matrix: &DistanceMatrix) -> GenericResult<Solution>;
}
