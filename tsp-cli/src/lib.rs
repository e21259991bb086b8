//! A TSP solver library public API: reads TSPLIB instances, configures one of the metaheuristics
//! and writes found tours.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
mod helpers;

#[cfg(test)]
#[path = "../tests/features/solve.rs"]
mod solve_feature_test;

pub use tsp_core as core;
pub use tsp_scientific as scientific;

pub mod extensions;

use std::io::{BufReader, Read};
use tsp_core::models::DistanceMatrix;
use tsp_scientific::tsplib::TsplibProblem;

/// Reads a TSPLIB instance and creates its distance matrix. Returns the instance name as well.
pub fn read_tsplib_matrix<R: Read>(reader: BufReader<R>, is_rounded: bool) -> Result<(String, DistanceMatrix), String> {
    let instance = reader.read_tsplib().map_err(|err| err.to_string())?;
    let matrix = instance.create_matrix(is_rounded).map_err(|err| err.to_string())?;

    Ok((instance.name.unwrap_or_else(|| "unknown".to_string()), matrix))
}
