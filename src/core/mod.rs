//! Foundational reference types: sectors, alternative markets, and the
//! read-only catalog that holds them for the lifetime of the process.

pub mod catalog;
pub mod market;
pub mod sector;
