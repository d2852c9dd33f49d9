//! The decision logic: pure, deterministic functions over catalog data.
//!
//! Nothing in this module performs I/O, logs, or retries; every error is
//! local to a single scenario computation.

pub mod comparison;
pub mod exposure;
pub mod impact;
pub mod ranking;
pub mod recommendation;
pub mod scenario;
pub mod simulator;
