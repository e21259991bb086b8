//! Contains population based metaheuristics which search for a short tour.
//!
//! All of them evaluate tours with the same [`tour_length`](crate::models::tour_length) function
//! and report improvements through [`Telemetry`](crate::solver::Telemetry).

pub mod aco;
pub mod bees;
pub mod genetic;
