//! Scientific crate contains logic to read benchmark instances of the symmetric Traveling
//! Salesman Problem and to write found tours back in the same family of formats.
//!
//!
//! # Supported formats
//!
//! - **tsplib** subset of TSPLIB95 format: `TSP` instances with `EUC_2D` node coordinates and `TOUR` files

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

pub use tsp_core as core;

pub mod common;
pub mod tsplib;
