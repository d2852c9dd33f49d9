use crate::analysis::exposure::ShockExposure;
use crate::analysis::ranking::RankedMarket;
use crate::core::sector::SectorId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Parameters for one scenario computation, supplied per user request.
///
/// # Examples
///
/// ```
/// use tariff_impact_engine::analysis::scenario::ScenarioInput;
/// use tariff_impact_engine::core::sector::SectorId;
/// use rust_decimal_macros::dec;
///
/// let input = ScenarioInput::new(SectorId::new("STEEL"), dec!(0.6))
///     .with_mitigation(dec!(0.5));
/// assert!(input.mitigation);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioInput {
    /// Sector to simulate.
    pub sector_id: SectorId,
    /// Exported-value override. When absent, the sector's baseline
    /// exported value is used.
    #[serde(default)]
    pub exported_value: Option<Decimal>,
    /// Assumed pass-through rate, a fraction in [0, 1].
    pub pass_through: Decimal,
    /// Whether a mitigation scenario is applied.
    #[serde(default)]
    pub mitigation: bool,
    /// Mitigation discount rate, a fraction in [0, 1]. Only read when
    /// `mitigation` is set.
    #[serde(default)]
    pub mitigation_discount: Decimal,
}

impl ScenarioInput {
    pub fn new(sector_id: SectorId, pass_through: Decimal) -> Self {
        Self {
            sector_id,
            exported_value: None,
            pass_through,
            mitigation: false,
            mitigation_discount: Decimal::ZERO,
        }
    }

    /// Override the sector's baseline exported value.
    pub fn with_exported_value(mut self, value: Decimal) -> Self {
        self.exported_value = Some(value);
        self
    }

    /// Enable the mitigation scenario with the given discount rate.
    pub fn with_mitigation(mut self, discount: Decimal) -> Self {
        self.mitigation = true;
        self.mitigation_discount = discount;
        self
    }
}

/// The impact-reduction ratio of a mitigation scenario.
///
/// `Undefined` is a reportable state, not an error: when the baseline
/// impact is zero the ratio has no meaning, and downstream consumers must
/// handle that explicitly instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReductionRatio {
    Defined(Decimal),
    Undefined,
}

impl ReductionRatio {
    pub fn is_defined(&self) -> bool {
        matches!(self, ReductionRatio::Defined(_))
    }

    pub fn value(&self) -> Option<Decimal> {
        match self {
            ReductionRatio::Defined(v) => Some(*v),
            ReductionRatio::Undefined => None,
        }
    }
}

impl fmt::Display for ReductionRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReductionRatio::Defined(v) => write!(f, "{}", v),
            ReductionRatio::Undefined => write!(f, "n/a"),
        }
    }
}

/// The immutable outcome of one scenario computation.
///
/// Carries the signed baseline and mitigated impacts (negative denotes an
/// export-value loss), the reduction ratio, the full market ranking, the
/// shock decomposition, and the derived recommendation text.
///
/// Results are never updated in place; recomputing always produces a fresh
/// instance with a new id and timestamp, so a saved portfolio is a faithful
/// history of the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Unique identifier for this computation.
    id: Uuid,
    sector_id: SectorId,
    /// When this result was computed.
    computed_at: DateTime<Utc>,
    /// Exposure actually used (override or sector baseline).
    exported_value: Decimal,
    pass_through: Decimal,
    /// Impact at the full shocked rate. Negative = loss.
    baseline_impact: Decimal,
    /// Impact at the mitigated effective rate. Equals `baseline_impact`
    /// when no mitigation was applied.
    mitigated_impact: Decimal,
    /// The effective tariff rate used for the mitigated impact.
    effective_rate: Decimal,
    reduction_ratio: ReductionRatio,
    /// All candidate markets in rank order.
    ranked_markets: Vec<RankedMarket>,
    exposure: ShockExposure,
    recommendation: String,
}

impl ScenarioResult {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sector_id: SectorId,
        exported_value: Decimal,
        pass_through: Decimal,
        baseline_impact: Decimal,
        mitigated_impact: Decimal,
        effective_rate: Decimal,
        reduction_ratio: ReductionRatio,
        ranked_markets: Vec<RankedMarket>,
        exposure: ShockExposure,
        recommendation: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            sector_id,
            computed_at: Utc::now(),
            exported_value,
            pass_through,
            baseline_impact,
            mitigated_impact,
            effective_rate,
            reduction_ratio,
            ranked_markets,
            exposure,
            recommendation,
        }
    }

    /// Replace the generated id (useful for deterministic tests).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    // --- Accessors ---

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn sector_id(&self) -> &SectorId {
        &self.sector_id
    }

    pub fn computed_at(&self) -> DateTime<Utc> {
        self.computed_at
    }

    pub fn exported_value(&self) -> Decimal {
        self.exported_value
    }

    pub fn pass_through(&self) -> Decimal {
        self.pass_through
    }

    pub fn baseline_impact(&self) -> Decimal {
        self.baseline_impact
    }

    pub fn mitigated_impact(&self) -> Decimal {
        self.mitigated_impact
    }

    pub fn effective_rate(&self) -> Decimal {
        self.effective_rate
    }

    pub fn reduction_ratio(&self) -> ReductionRatio {
        self.reduction_ratio
    }

    pub fn ranked_markets(&self) -> &[RankedMarket] {
        &self.ranked_markets
    }

    /// The best-ranked alternative market, if any markets were supplied.
    pub fn top_market(&self) -> Option<&RankedMarket> {
        self.ranked_markets.first()
    }

    pub fn exposure(&self) -> &ShockExposure {
        &self.exposure
    }

    pub fn recommendation(&self) -> &str {
        &self.recommendation
    }
}

impl fmt::Display for ScenarioResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Scenario Result: {} ===", self.sector_id)?;
        writeln!(f, "Exported value:    {}", self.exported_value)?;
        writeln!(f, "Pass-through:      {}", self.pass_through)?;
        writeln!(f, "Baseline impact:   {}", self.baseline_impact)?;
        writeln!(f, "Mitigated impact:  {}", self.mitigated_impact)?;
        writeln!(f, "Effective rate:    {}", self.effective_rate)?;
        writeln!(f, "Reduction ratio:   {}", self.reduction_ratio)?;
        writeln!(
            f,
            "Pressure index:    {} ({})",
            self.exposure.pressure_index, self.exposure.risk_level
        )?;
        if let Some(top) = self.top_market() {
            writeln!(f, "Top market:        {} (score {})", top.market, top.score)?;
        }
        writeln!(f, "Recommendation:    {}", self.recommendation)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reduction_ratio_display() {
        assert_eq!(format!("{}", ReductionRatio::Defined(dec!(0.5))), "0.5");
        assert_eq!(format!("{}", ReductionRatio::Undefined), "n/a");
    }

    #[test]
    fn test_reduction_ratio_value() {
        assert_eq!(ReductionRatio::Defined(dec!(0.25)).value(), Some(dec!(0.25)));
        assert_eq!(ReductionRatio::Undefined.value(), None);
        assert!(!ReductionRatio::Undefined.is_defined());
    }

    #[test]
    fn test_input_builder() {
        let input = ScenarioInput::new(SectorId::new("STEEL"), dec!(0.6))
            .with_exported_value(dec!(2_000_000))
            .with_mitigation(dec!(0.5));
        assert_eq!(input.exported_value, Some(dec!(2_000_000)));
        assert!(input.mitigation);
        assert_eq!(input.mitigation_discount, dec!(0.5));
    }

    #[test]
    fn test_input_defaults() {
        let input = ScenarioInput::new(SectorId::new("STEEL"), dec!(0.6));
        assert_eq!(input.exported_value, None);
        assert!(!input.mitigation);
        assert_eq!(input.mitigation_discount, Decimal::ZERO);
    }
}
