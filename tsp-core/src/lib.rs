//! Core crate contains population based metaheuristics to approximate solutions of the symmetric
//! ***Traveling Salesman Problem***.
//!
//! The main algorithm is an Ant Colony Optimization: ants construct tours guided by pheromone
//! trails and inverse distances, trails evaporate and get reinforced by constructed tours on every
//! iteration. Additionally, a bee colony and a genetic algorithm are provided: all three share the
//! same distance matrix model, tour evaluation and telemetry.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use tsp_core::prelude::*;
//!
//! let matrix = DistanceMatrix::new(vec![
//!     vec![0., 3., 5.],
//!     vec![3., 0., 4.],
//!     vec![5., 4., 0.],
//! ])?;
//!
//! let environment = Arc::new(Environment { logger: Arc::new(|_| {}), ..Environment::new_repeatable(42) });
//! let config = AcoConfig { iterations: 10, ants: 5, ..AcoConfig::default() };
//!
//! let solution = AntColony::new(config, environment)?.optimize(&matrix)?;
//!
//! assert_eq!(solution.length, 12.);
//! assert!(solution.tour.is_permutation(3));
//! # Ok::<(), GenericError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
