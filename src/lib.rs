//! # tariff-impact-engine
//!
//! Tariff shock impact simulation and export-market diversification ranking.
//!
//! Given a sector's tariff shock, an assumed pass-through rate, and an
//! optional mitigation scenario, this engine computes the dollar impact on
//! exports, compares it against the unmitigated baseline, and ranks
//! alternative destination markets for diversification.
//!
//! ## Architecture
//!
//! - **core** — Foundational reference types: sectors, markets, the catalog
//! - **analysis** — Impact math, scenario comparison, ranking, recommendations
//! - **portfolio** — Session accumulation and flat-row export of results
//! - **simulation** — Random catalog generation for testing and benchmarks

pub mod analysis;
pub mod core;
pub mod portfolio;
pub mod simulation;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::analysis::ranking::{MarketRanker, RankedMarket};
    pub use crate::analysis::scenario::{ReductionRatio, ScenarioInput, ScenarioResult};
    pub use crate::analysis::simulator::{ScenarioSimulator, SimulationError};
    pub use crate::core::catalog::ScenarioCatalog;
    pub use crate::core::market::AlternativeMarket;
    pub use crate::core::sector::{SectorId, SectorRecord};
    pub use crate::portfolio::builder::PortfolioBuilder;
}
