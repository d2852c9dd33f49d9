//! Test tooling: random reference-catalog generation for benchmarks and
//! the CLI `generate` command.

pub mod catalog_gen;
