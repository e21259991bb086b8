#[cfg(test)]
#[path = "../../tests/unit/solver/telemetry_test.rs"]
mod telemetry_test;

use super::*;
use crate::utils::{CityIdx, InfoLogger, Timer};

/// Tracks the best-known tour of a single run and writes information about it into the log.
///
/// The best-known tour is replaced only by a strictly shorter one, so the first of equally
/// short tours wins.
pub struct Telemetry {
    logger: InfoLogger,
    time: Timer,
    best: Option<(Vec<CityIdx>, Float)>,
    progress: Vec<Progress>,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(logger: InfoLogger) -> Self {
        Self { logger, time: Timer::start(), best: None, progress: vec![] }
    }

    /// Starts telemetry reporting.
    pub fn on_start(&mut self, name: &str, size: usize, details: &str) {
        self.time = Timer::start();
        self.log(format!("[{}s] {name} started for {size} cities: {details}", self.time.elapsed_secs()).as_str());
    }

    /// Accepts a candidate tour found at given iteration. Returns true if it is a new best-known tour.
    pub fn on_candidate(&mut self, iteration: usize, cities: &[CityIdx], length: Float) -> bool {
        let is_improvement = self.best.as_ref().is_none_or(|(_, best_length)| length < *best_length);

        if is_improvement {
            self.best = Some((cities.to_vec(), length));
            self.progress.push(Progress { iteration, length });
            self.log(
                format!("[{}s] iteration {iteration}: new best tour length {length:.3}", self.time.elapsed_secs())
                    .as_str(),
            );
        }

        is_improvement
    }

    /// Returns a length of the best-known tour, if any.
    pub fn best_length(&self) -> Option<Float> {
        self.best.as_ref().map(|(_, length)| *length)
    }

    /// Logs a message with elapsed time prefix.
    pub fn on_message(&self, message: &str) {
        self.log(format!("[{}s] {message}", self.time.elapsed_secs()).as_str());
    }

    /// Finishes the run and returns its result.
    pub fn on_result(self, iterations: usize) -> GenericResult<Solution> {
        let (cities, length) = self.best.ok_or_else(|| "no tour has been constructed".to_string())?;

        (self.logger)(
            format!(
                "[{}s] finished after {iterations} iterations ({}ms), best tour length: {length:.3}",
                self.time.elapsed_secs(),
                self.time.elapsed_millis()
            )
            .as_str(),
        );

        Ok(Solution { tour: Tour::new(cities), length, iterations, progress: self.progress })
    }

    fn log(&self, message: &str) {
        (self.logger)(message)
    }
}
