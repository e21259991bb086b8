#[cfg(test)]
#[path = "../../tests/unit/models/matrix_test.rs"]
mod matrix_test;

use crate::utils::{CityIdx, Float, GenericError, GenericResult};

/// An immutable square matrix of pairwise distances between cities.
///
/// The matrix is guaranteed to have at least two cities, to be symmetric with zero diagonal and
/// to contain finite non-negative values only. Zero distance between two distinct cities is
/// allowed: it models coincident coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    size: usize,
    values: Vec<Float>,
}

impl DistanceMatrix {
    /// Creates a new distance matrix from rows, validating it.
    pub fn new(rows: Vec<Vec<Float>>) -> GenericResult<Self> {
        let size = rows.len();

        if size < 2 {
            return Err(GenericError::invalid_instance(format!("expected at least 2 cities, got {size}")));
        }

        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != size) {
            return Err(GenericError::invalid_instance(format!(
                "matrix is not square: row {idx} has {} values, expected {size}",
                row.len()
            )));
        }

        Self::from_flat(size, rows.into_iter().flatten().collect())
    }

    /// Creates a new distance matrix from row-major values, validating it.
    pub fn from_flat(size: usize, values: Vec<Float>) -> GenericResult<Self> {
        if size < 2 {
            return Err(GenericError::invalid_instance(format!("expected at least 2 cities, got {size}")));
        }

        if values.len() != size * size {
            return Err(GenericError::invalid_instance(format!(
                "matrix is not square: expected {} values, got {}",
                size * size,
                values.len()
            )));
        }

        let matrix = Self { size, values };
        matrix.validate()?;

        Ok(matrix)
    }

    /// Returns amount of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns distance between two cities.
    #[inline]
    pub fn distance(&self, from: CityIdx, to: CityIdx) -> Float {
        self.values[from * self.size + to]
    }

    /// Returns all distances from given city.
    pub fn row(&self, from: CityIdx) -> &[Float] {
        &self.values[from * self.size..(from + 1) * self.size]
    }

    fn validate(&self) -> GenericResult<()> {
        (0..self.size).try_for_each(|from| {
            (0..self.size).try_for_each(|to| {
                let value = self.distance(from, to);

                if !value.is_finite() {
                    return Err(GenericError::invalid_instance(format!(
                        "distance between {from} and {to} is not finite: {value}"
                    )));
                }

                if value < 0. {
                    return Err(GenericError::invalid_instance(format!(
                        "distance between {from} and {to} is negative: {value}"
                    )));
                }

                if from == to && value != 0. {
                    return Err(GenericError::invalid_instance(format!(
                        "distance from {from} to itself is not zero: {value}"
                    )));
                }

                let reverse = self.distance(to, from);
                if from < to && value != reverse {
                    return Err(GenericError::invalid_instance(format!(
                        "matrix is asymmetric: distance({from}, {to}) = {value}, distance({to}, {from}) = {reverse}"
                    )));
                }

                Ok(())
            })
        })
    }
}
