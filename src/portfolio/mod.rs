//! Session accumulation of scenario results and their flat-row projection
//! for export by the UI collaborator.

pub mod builder;
pub mod export;
