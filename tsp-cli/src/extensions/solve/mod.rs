//! Contains functionality to configure and run optimizers and to write their results.

pub mod config;
pub mod formats;
