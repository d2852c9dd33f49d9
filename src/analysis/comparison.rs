use crate::analysis::impact::{check_rate, compute_impact, InputError};
use crate::analysis::scenario::{ReductionRatio, ScenarioInput};
use crate::core::sector::SectorRecord;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The numeric core of a scenario: baseline shock vs mitigation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactComparison {
    /// Exposure actually used (override or sector baseline).
    pub exported_value: Decimal,
    /// Impact at the full shocked rate.
    pub baseline_impact: Decimal,
    /// Impact at the mitigated effective rate.
    pub mitigated_impact: Decimal,
    /// Effective tariff rate behind `mitigated_impact`.
    pub effective_rate: Decimal,
    pub reduction_ratio: ReductionRatio,
}

/// Combines a baseline shock and a mitigation scenario into a relative
/// comparison.
pub struct ScenarioComparator;

impl ScenarioComparator {
    /// Compare the unmitigated shock against the mitigation scenario.
    ///
    /// The baseline impact applies the sector's shocked rate. When the
    /// mitigation flag is set, the effective rate discounts the shock delta:
    ///
    /// ```text
    /// effective_rate = baseline_rate + (shocked_rate - baseline_rate) * (1 - discount)
    /// ```
    ///
    /// clamped at the baseline rate — mitigation cannot turn the shock into
    /// a tariff cut. Without the flag, the mitigated impact equals the
    /// baseline impact.
    ///
    /// The reduction ratio is `1 - mitigated / baseline`; when the baseline
    /// impact is zero it is reported as [`ReductionRatio::Undefined`] rather
    /// than computed.
    ///
    /// # Errors
    ///
    /// `InputError` if the exported value is negative or any rate lies
    /// outside [0, 1].
    pub fn compare(
        sector: &SectorRecord,
        input: &ScenarioInput,
    ) -> Result<ImpactComparison, InputError> {
        let exported_value = input.exported_value.unwrap_or(sector.exported_value());

        let baseline_impact = compute_impact(
            sector,
            exported_value,
            input.pass_through,
            sector.shocked_rate(),
        )?;

        let effective_rate = if input.mitigation {
            check_rate("mitigation discount", input.mitigation_discount)?;
            let discounted = sector.baseline_rate()
                + sector.shock_delta() * (Decimal::ONE - input.mitigation_discount);
            discounted.max(sector.baseline_rate())
        } else {
            sector.shocked_rate()
        };

        let mitigated_impact =
            compute_impact(sector, exported_value, input.pass_through, effective_rate)?;

        let reduction_ratio = if baseline_impact == Decimal::ZERO {
            ReductionRatio::Undefined
        } else {
            ReductionRatio::Defined(Decimal::ONE - mitigated_impact / baseline_impact)
        };

        Ok(ImpactComparison {
            exported_value,
            baseline_impact,
            mitigated_impact,
            effective_rate,
            reduction_ratio,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sector::SectorId;
    use rust_decimal_macros::dec;

    fn steel() -> SectorRecord {
        SectorRecord::new(
            SectorId::new("STEEL"),
            "Flat-rolled steel",
            dec!(0.05),
            dec!(0.25),
            dec!(1_000_000),
        )
    }

    #[test]
    fn test_worked_example_with_mitigation() {
        // discount 0.5: effective = 0.05 + 0.20 * 0.5 = 0.15
        let input = ScenarioInput::new(SectorId::new("STEEL"), dec!(0.6))
            .with_mitigation(dec!(0.5));
        let cmp = ScenarioComparator::compare(&steel(), &input).unwrap();

        assert_eq!(cmp.baseline_impact, dec!(-120_000));
        assert_eq!(cmp.effective_rate, dec!(0.15));
        assert_eq!(cmp.mitigated_impact, dec!(-60_000));
        assert_eq!(cmp.reduction_ratio, ReductionRatio::Defined(dec!(0.5)));
    }

    #[test]
    fn test_no_mitigation_equals_baseline() {
        let input = ScenarioInput::new(SectorId::new("STEEL"), dec!(0.6));
        let cmp = ScenarioComparator::compare(&steel(), &input).unwrap();
        assert_eq!(cmp.mitigated_impact, cmp.baseline_impact);
        assert_eq!(cmp.effective_rate, dec!(0.25));
        assert_eq!(cmp.reduction_ratio, ReductionRatio::Defined(Decimal::ZERO));
    }

    #[test]
    fn test_full_discount_zeroes_mitigated_impact() {
        let input = ScenarioInput::new(SectorId::new("STEEL"), dec!(0.6))
            .with_mitigation(dec!(1));
        let cmp = ScenarioComparator::compare(&steel(), &input).unwrap();
        assert_eq!(cmp.effective_rate, dec!(0.05));
        assert_eq!(cmp.mitigated_impact, Decimal::ZERO);
        assert_eq!(cmp.reduction_ratio, ReductionRatio::Defined(Decimal::ONE));
    }

    #[test]
    fn test_exported_value_override() {
        let input = ScenarioInput::new(SectorId::new("STEEL"), dec!(0.6))
            .with_exported_value(dec!(2_000_000));
        let cmp = ScenarioComparator::compare(&steel(), &input).unwrap();
        assert_eq!(cmp.exported_value, dec!(2_000_000));
        assert_eq!(cmp.baseline_impact, dec!(-240_000));
    }

    #[test]
    fn test_undefined_ratio_when_no_shock() {
        // shocked == baseline: baseline impact is exactly zero
        let flat = SectorRecord::new(
            SectorId::new("FLAT"),
            "Unshocked sector",
            dec!(0.05),
            dec!(0.05),
            dec!(1_000_000),
        );
        let input = ScenarioInput::new(SectorId::new("FLAT"), dec!(0.6))
            .with_mitigation(dec!(0.5));
        let cmp = ScenarioComparator::compare(&flat, &input).unwrap();
        assert_eq!(cmp.baseline_impact, Decimal::ZERO);
        assert_eq!(cmp.reduction_ratio, ReductionRatio::Undefined);
    }

    #[test]
    fn test_invalid_discount_rejected() {
        let input = ScenarioInput::new(SectorId::new("STEEL"), dec!(0.6))
            .with_mitigation(dec!(1.5));
        let err = ScenarioComparator::compare(&steel(), &input).unwrap_err();
        assert!(matches!(err, InputError::RateOutOfRange { .. }));
    }

    #[test]
    fn test_discount_ignored_without_flag() {
        // An out-of-range discount is never read when the flag is unset.
        let mut input = ScenarioInput::new(SectorId::new("STEEL"), dec!(0.6));
        input.mitigation_discount = dec!(9);
        let cmp = ScenarioComparator::compare(&steel(), &input).unwrap();
        assert_eq!(cmp.mitigated_impact, cmp.baseline_impact);
    }
}
