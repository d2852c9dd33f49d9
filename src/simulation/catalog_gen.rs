//! Random reference-catalog generation.
//!
//! Produces synthetic sector and market tables for exercising the
//! simulator at scale. Not part of the analysis core.

use crate::core::catalog::{CatalogError, ScenarioCatalog};
use crate::core::market::AlternativeMarket;
use crate::core::sector::{SectorId, SectorRecord};
use rand::Rng;
use rust_decimal::Decimal;

/// Configuration for generating a random catalog.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Number of sectors to generate.
    pub sector_count: usize,
    /// Number of alternative markets to generate.
    pub market_count: usize,
    /// Maximum shocked tariff rate, in basis points (fraction * 10_000).
    pub max_shock_bps: u32,
    /// Maximum exported value per sector.
    pub max_exported_value: Decimal,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            sector_count: 10,
            market_count: 8,
            max_shock_bps: 3_000,
            max_exported_value: Decimal::from(50_000_000),
        }
    }
}

/// Generate a random but always-valid catalog.
///
/// Rates are drawn in basis points and converted to fractions, so every
/// generated record passes catalog validation; the shocked rate is always
/// at or above the baseline rate.
pub fn generate_random_catalog(config: &CatalogConfig) -> Result<ScenarioCatalog, CatalogError> {
    let mut rng = rand::thread_rng();

    let max_value: u64 = config
        .max_exported_value
        .to_string()
        .parse()
        .unwrap_or(50_000_000);

    let sectors: Vec<SectorRecord> = (0..config.sector_count)
        .map(|i| {
            let baseline_bps = rng.gen_range(0..=1_000u32);
            let shock_bps = rng.gen_range(baseline_bps..=config.max_shock_bps.max(baseline_bps));
            let exported = rng.gen_range(100_000..=max_value.max(100_001));
            SectorRecord::new(
                SectorId::new(format!("SECTOR-{:03}", i)),
                format!("Synthetic sector {}", i),
                Decimal::new(baseline_bps as i64, 4),
                Decimal::new(shock_bps as i64, 4),
                Decimal::from(exported),
            )
        })
        .collect();

    let markets: Vec<AlternativeMarket> = (0..config.market_count)
        .map(|i| {
            let tariff_bps = rng.gen_range(0..=2_000u32);
            let capacity = rng.gen_range(100_000..=max_value.max(100_001));
            AlternativeMarket::new(
                format!("MARKET-{:03}", i),
                Decimal::new(tariff_bps as i64, 4),
                Decimal::from(capacity),
            )
        })
        .collect();

    ScenarioCatalog::from_records(sectors, markets)
}
