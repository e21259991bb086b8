#[cfg(test)]
#[path = "../../../tests/unit/algorithms/aco/config_test.rs"]
mod config_test;

use crate::utils::{Float, GenericError, GenericResult};

/// Ant colony algorithm parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct AcoConfig {
    /// Amount of iterations. Default is 700.
    pub iterations: usize,
    /// Amount of ants constructing a tour on each iteration. Default is 50.
    pub ants: usize,
    /// Pheromone influence exponent. Default is 2.
    pub alpha: Float,
    /// Distance heuristic influence exponent. Default is 5.
    pub beta: Float,
    /// Evaporation rate, in `(0, 1)` range. Default is 0.3.
    pub rho: Float,
    /// Pheromone deposit constant. Default is 500.
    pub q: Float,
    /// Initial pheromone level of every edge. Default is 0.1.
    pub initial_pheromone: Float,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self { iterations: 700, ants: 50, alpha: 2., beta: 5., rho: 0.3, q: 500., initial_pheromone: 0.1 }
    }
}

impl AcoConfig {
    /// Checks that all parameters are in their domains.
    pub fn validate(&self) -> GenericResult<()> {
        let is_positive = |value: Float| value.is_finite() && value > 0.;

        if self.iterations == 0 {
            return Err(GenericError::invalid_config("iterations should be positive"));
        }

        if self.ants == 0 {
            return Err(GenericError::invalid_config("ants should be positive"));
        }

        if !is_positive(self.alpha) || !is_positive(self.beta) {
            return Err(GenericError::invalid_config(format!(
                "alpha and beta should be positive, got: alpha={}, beta={}",
                self.alpha, self.beta
            )));
        }

        if !(self.rho > 0. && self.rho < 1.) {
            return Err(GenericError::invalid_config(format!("rho should be in (0, 1) range, got: {}", self.rho)));
        }

        if !is_positive(self.q) {
            return Err(GenericError::invalid_config(format!("q should be positive, got: {}", self.q)));
        }

        if !is_positive(self.initial_pheromone) {
            return Err(GenericError::invalid_config(format!(
                "initial pheromone should be positive, got: {}",
                self.initial_pheromone
            )));
        }

        Ok(())
    }
}
