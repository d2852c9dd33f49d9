use crate::core::market::AlternativeMarket;
use crate::core::sector::{SectorId, SectorRecord};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors arising from catalog construction and lookup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown sector '{0}'")]
    UnknownSector(SectorId),
    #[error("duplicate sector '{0}' in reference data")]
    DuplicateSector(SectorId),
    #[error("sector '{id}': {field} must be a fraction in [0, 1], got {value}")]
    SectorRateOutOfRange {
        id: SectorId,
        field: &'static str,
        value: Decimal,
    },
    #[error("sector '{id}': exported value must be non-negative, got {value}")]
    NegativeExportedValue { id: SectorId, value: Decimal },
    #[error("market '{name}': average tariff must be a fraction in [0, 1], got {value}")]
    MarketRateOutOfRange { name: String, value: Decimal },
    #[error("market '{name}': absorption capacity must be non-negative, got {value}")]
    NegativeCapacity { name: String, value: Decimal },
}

/// Read-only reference data for scenario simulation.
///
/// Holds the sector records and the alternative-market records. Loaded once
/// at process start, validated at construction, and never mutated afterwards.
/// Any loader producing `SectorRecord` / `AlternativeMarket` values (flat
/// file, embedded constants, remote API) can feed this catalog.
///
/// Sectors are keyed in a `BTreeMap` so iteration order is deterministic.
///
/// # Examples
///
/// ```
/// use tariff_impact_engine::core::catalog::ScenarioCatalog;
/// use tariff_impact_engine::core::market::AlternativeMarket;
/// use tariff_impact_engine::core::sector::{SectorId, SectorRecord};
/// use rust_decimal_macros::dec;
///
/// let catalog = ScenarioCatalog::from_records(
///     vec![SectorRecord::new(
///         SectorId::new("STEEL"),
///         "Flat-rolled steel",
///         dec!(0.05),
///         dec!(0.25),
///         dec!(1_000_000),
///     )],
///     vec![AlternativeMarket::new("Canada", dec!(0.02), dec!(500_000))],
/// ).unwrap();
///
/// assert!(catalog.sector(&SectorId::new("STEEL")).is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioCatalog {
    sectors: BTreeMap<SectorId, SectorRecord>,
    markets: Vec<AlternativeMarket>,
}

fn is_fraction(value: Decimal) -> bool {
    value >= Decimal::ZERO && value <= Decimal::ONE
}

impl ScenarioCatalog {
    /// Build a catalog from loaded records, validating every field.
    ///
    /// Rates must be fractions in [0, 1]; exported values and absorption
    /// capacities must be non-negative; sector ids must be unique.
    pub fn from_records(
        sectors: Vec<SectorRecord>,
        markets: Vec<AlternativeMarket>,
    ) -> Result<Self, CatalogError> {
        let mut by_id = BTreeMap::new();
        for sector in sectors {
            if !is_fraction(sector.baseline_rate()) {
                return Err(CatalogError::SectorRateOutOfRange {
                    id: sector.id().clone(),
                    field: "baseline rate",
                    value: sector.baseline_rate(),
                });
            }
            if !is_fraction(sector.shocked_rate()) {
                return Err(CatalogError::SectorRateOutOfRange {
                    id: sector.id().clone(),
                    field: "shocked rate",
                    value: sector.shocked_rate(),
                });
            }
            if sector.exported_value() < Decimal::ZERO {
                return Err(CatalogError::NegativeExportedValue {
                    id: sector.id().clone(),
                    value: sector.exported_value(),
                });
            }
            if by_id
                .insert(sector.id().clone(), sector.clone())
                .is_some()
            {
                return Err(CatalogError::DuplicateSector(sector.id().clone()));
            }
        }

        for market in &markets {
            if !is_fraction(market.average_tariff()) {
                return Err(CatalogError::MarketRateOutOfRange {
                    name: market.name().to_string(),
                    value: market.average_tariff(),
                });
            }
            if market.absorption_capacity() < Decimal::ZERO {
                return Err(CatalogError::NegativeCapacity {
                    name: market.name().to_string(),
                    value: market.absorption_capacity(),
                });
            }
        }

        Ok(Self {
            sectors: by_id,
            markets,
        })
    }

    /// Look up a sector by id.
    pub fn sector(&self, id: &SectorId) -> Result<&SectorRecord, CatalogError> {
        self.sectors
            .get(id)
            .ok_or_else(|| CatalogError::UnknownSector(id.clone()))
    }

    /// All sectors in deterministic (id-sorted) order.
    pub fn sectors(&self) -> impl Iterator<Item = &SectorRecord> {
        self.sectors.values()
    }

    /// All alternative markets, in load order.
    pub fn markets(&self) -> &[AlternativeMarket] {
        &self.markets
    }

    pub fn sector_count(&self) -> usize {
        self.sectors.len()
    }

    pub fn market_count(&self) -> usize {
        self.markets.len()
    }
}
