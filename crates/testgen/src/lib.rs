//! Random graph generation for tests, benchmarks and the `dyngraph generate`
//! subcommand.

pub mod generator;
