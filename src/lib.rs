pub mod error;
pub mod lattice;
pub mod observables;
pub mod metropolis;
pub mod simulation;
pub mod snapshot;
pub mod results;
pub mod beta_range;
pub mod config;
pub mod scan;
pub mod utils;
