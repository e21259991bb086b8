#[cfg(test)]
#[path = "../../tests/unit/tsplib/writer_test.rs"]
mod writer_test;

use std::io::{BufWriter, Write};
use tsp_core::solver::Solution;
use tsp_core::utils::GenericError;

/// A trait to write tsplib95 solution as a `TOUR` file.
pub trait TsplibSolution<W: Write> {
    /// Writes tsplib95 solution, city ids are written 1-based.
    fn write_tsplib(&self, writer: BufWriter<W>) -> Result<(), GenericError>;
}

impl<W: Write> TsplibSolution<W> for (&Solution, &str) {
    fn write_tsplib(&self, writer: BufWriter<W>) -> Result<(), GenericError> {
        let (solution, name) = *self;
        let mut writer = writer;

        writer.write_all(format!("NAME : {name}.tour\n").as_bytes())?;
        writer.write_all(b"TYPE : TOUR\n")?;
        writer.write_all(format!("COMMENT : Length {:.3}\n", solution.length).as_bytes())?;
        writer.write_all(format!("DIMENSION : {}\n", solution.tour.len()).as_bytes())?;
        writer.write_all(b"TOUR_SECTION\n")?;

        solution.tour.cities().iter().try_for_each(|city| writer.write_all(format!("{}\n", city + 1).as_bytes()))?;

        writer.write_all(b"-1\nEOF\n")?;
        writer.flush()?;

        Ok(())
    }
}
