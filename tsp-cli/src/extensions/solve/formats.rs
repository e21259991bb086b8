//! Contains writers of the found solution.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/formats_test.rs"]
mod formats_test;

use serde::Serialize;
use std::io::{BufWriter, Write};
use tsp_core::solver::Solution;
use tsp_core::utils::Float;
use tsp_scientific::tsplib::TsplibSolution;

/// Names of supported output formats.
pub const OUTPUT_FORMAT_NAMES: &[&str] = &["tour", "json"];

/// A serializable representation of the found solution.
#[derive(Clone, Debug, Serialize)]
pub struct SolutionOutput {
    /// Visiting order of 0-based city indices.
    pub tour: Vec<usize>,
    /// A tour length, the closing edge included.
    pub length: Float,
    /// Amount of iterations done.
    pub iterations: usize,
    /// Improvements of the best-known tour.
    pub progress: Vec<ProgressOutput>,
}

/// A serializable improvement record.
#[derive(Clone, Debug, Serialize)]
pub struct ProgressOutput {
    /// An iteration when the improvement was found.
    pub iteration: usize,
    /// A new best-known tour length.
    pub length: Float,
}

impl From<&Solution> for SolutionOutput {
    fn from(solution: &Solution) -> Self {
        Self {
            tour: solution.tour.cities().to_vec(),
            length: solution.length,
            iterations: solution.iterations,
            progress: solution
                .progress
                .iter()
                .map(|progress| ProgressOutput { iteration: progress.iteration, length: progress.length })
                .collect(),
        }
    }
}

/// Writes solution in the given format.
pub fn write_solution<W: Write>(
    format: &str,
    name: &str,
    solution: &Solution,
    writer: BufWriter<W>,
) -> Result<(), String> {
    match format {
        "tour" => (solution, name).write_tsplib(writer).map_err(|err| err.to_string()),
        "json" => write_json_solution(solution, writer),
        _ => Err(format!("unknown output format: '{format}'")),
    }
}

fn write_json_solution<W: Write>(solution: &Solution, writer: BufWriter<W>) -> Result<(), String> {
    let mut writer = writer;

    serde_json::to_writer_pretty(&mut writer, &SolutionOutput::from(solution))
        .map_err(|err| format!("cannot serialize solution: '{err}'"))?;
    writer.flush().map_err(|err| err.to_string())
}
