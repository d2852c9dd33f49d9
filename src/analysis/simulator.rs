use crate::analysis::comparison::ScenarioComparator;
use crate::analysis::exposure::ShockExposure;
use crate::analysis::impact::InputError;
use crate::analysis::ranking::MarketRanker;
use crate::analysis::recommendation::{RecommendationContext, RecommendationEngine};
use crate::analysis::scenario::{ScenarioInput, ScenarioResult};
use crate::core::catalog::{CatalogError, ScenarioCatalog};
use thiserror::Error;

/// Errors for a single scenario computation.
///
/// Always local to one request: a failed computation never corrupts the
/// catalog or an existing portfolio.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("invalid input: {0}")]
    Input(#[from] InputError),
}

/// Orchestrates one full scenario computation over the catalog.
///
/// # Examples
///
/// ```
/// use tariff_impact_engine::prelude::*;
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
/// let input = ScenarioInput::new(SectorId::new("STEEL"), dec!(0.6))
///     .with_mitigation(dec!(0.5));
/// let result = ScenarioSimulator::run(&catalog, &input).unwrap();
/// assert_eq!(result.baseline_impact(), dec!(-120_000));
/// ```
pub struct ScenarioSimulator;

impl ScenarioSimulator {
    /// Run one scenario: look up the sector, compare baseline against
    /// mitigation, rank the alternative markets, decompose the shock, and
    /// derive the recommendation.
    ///
    /// Pure over the catalog: repeated calls with the same input produce
    /// the same numbers (ids and timestamps aside).
    ///
    /// # Errors
    ///
    /// [`SimulationError::Catalog`] when the sector id is unknown;
    /// [`SimulationError::Input`] when a per-request rate or value is
    /// out of range.
    pub fn run(
        catalog: &ScenarioCatalog,
        input: &ScenarioInput,
    ) -> Result<ScenarioResult, SimulationError> {
        let sector = catalog.sector(&input.sector_id)?;

        let comparison = ScenarioComparator::compare(sector, input)?;
        let ranked_markets = MarketRanker::rank(catalog.markets(), sector);
        let exposure =
            ShockExposure::from_scenario(sector, comparison.exported_value, input.pass_through);

        let recommendation = RecommendationEngine::recommend(&RecommendationContext {
            reduction_ratio: comparison.reduction_ratio,
            top_market: ranked_markets.first(),
        });

        Ok(ScenarioResult::new(
            input.sector_id.clone(),
            comparison.exported_value,
            input.pass_through,
            comparison.baseline_impact,
            comparison.mitigated_impact,
            comparison.effective_rate,
            comparison.reduction_ratio,
            ranked_markets,
            exposure,
            recommendation,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::scenario::ReductionRatio;
    use crate::core::market::AlternativeMarket;
    use crate::core::sector::{SectorId, SectorRecord};
    use rust_decimal_macros::dec;

    fn catalog() -> ScenarioCatalog {
        ScenarioCatalog::from_records(
            vec![SectorRecord::new(
                SectorId::new("STEEL"),
                "Flat-rolled steel",
                dec!(0.05),
                dec!(0.25),
                dec!(1_000_000),
            )],
            vec![
                AlternativeMarket::new("Canada", dec!(0.02), dec!(500_000)),
                AlternativeMarket::new("Japan", dec!(0.04), dec!(300_000)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_full_run() {
        let input = ScenarioInput::new(SectorId::new("STEEL"), dec!(0.6))
            .with_mitigation(dec!(0.5));
        let result = ScenarioSimulator::run(&catalog(), &input).unwrap();

        assert_eq!(result.baseline_impact(), dec!(-120_000));
        assert_eq!(result.mitigated_impact(), dec!(-60_000));
        assert_eq!(result.reduction_ratio(), ReductionRatio::Defined(dec!(0.5)));
        assert_eq!(result.top_market().unwrap().market.name(), "Canada");
        assert!(result.recommendation().starts_with("Mitigation"));
    }

    #[test]
    fn test_unknown_sector_aborts_only_that_request() {
        let input = ScenarioInput::new(SectorId::new("NOPE"), dec!(0.6));
        let err = ScenarioSimulator::run(&catalog(), &input).unwrap_err();
        assert!(matches!(err, SimulationError::Catalog(CatalogError::UnknownSector(_))));

        // The catalog is untouched; a valid request still succeeds.
        let ok = ScenarioInput::new(SectorId::new("STEEL"), dec!(0.6));
        assert!(ScenarioSimulator::run(&catalog(), &ok).is_ok());
    }

    #[test]
    fn test_invalid_pass_through() {
        let input = ScenarioInput::new(SectorId::new("STEEL"), dec!(1.2));
        let err = ScenarioSimulator::run(&catalog(), &input).unwrap_err();
        assert!(matches!(err, SimulationError::Input(_)));
    }

    #[test]
    fn test_recompute_produces_fresh_instance() {
        let input = ScenarioInput::new(SectorId::new("STEEL"), dec!(0.6));
        let first = ScenarioSimulator::run(&catalog(), &input).unwrap();
        let second = ScenarioSimulator::run(&catalog(), &input).unwrap();
        assert_ne!(first.id(), second.id());
        assert_eq!(first.baseline_impact(), second.baseline_impact());
    }
}
