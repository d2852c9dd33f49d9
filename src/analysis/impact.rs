use crate::core::sector::SectorRecord;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors for invalid per-request computation inputs.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("{field} must be a fraction in [0, 1], got {value}")]
    RateOutOfRange { field: &'static str, value: Decimal },
    #[error("{field} must be non-negative, got {value}")]
    NegativeValue { field: &'static str, value: Decimal },
}

/// Validate that a rate is a fraction in [0, 1].
pub(crate) fn check_rate(field: &'static str, value: Decimal) -> Result<(), InputError> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(InputError::RateOutOfRange { field, value });
    }
    Ok(())
}

/// Validate that a currency amount is non-negative.
pub(crate) fn check_amount(field: &'static str, value: Decimal) -> Result<(), InputError> {
    if value < Decimal::ZERO {
        return Err(InputError::NegativeValue { field, value });
    }
    Ok(())
}

/// The core impact formula.
///
/// Computes the signed export-value impact of applying `tariff_rate` to a
/// sector, relative to the sector's baseline rate:
///
/// ```text
/// impact = -exported_value * (tariff_rate - baseline_rate) * pass_through
/// ```
///
/// A tariff increase above baseline yields a negative (loss) impact; a
/// decrease yields a positive (gain) impact. The result is exactly zero when
/// `tariff_rate` equals the baseline rate or when `pass_through` is zero,
/// and is linear in both the tariff delta and the pass-through rate.
///
/// Pure function: no side effects, deterministic, safely retryable.
///
/// # Errors
///
/// `InputError` if `exported_value` is negative or either rate lies
/// outside [0, 1].
///
/// # Examples
///
/// ```
/// use tariff_impact_engine::analysis::impact::compute_impact;
/// use tariff_impact_engine::core::sector::{SectorId, SectorRecord};
/// use rust_decimal_macros::dec;
///
/// let steel = SectorRecord::new(
///     SectorId::new("STEEL"),
///     "Flat-rolled steel",
///     dec!(0.05),
///     dec!(0.25),
///     dec!(1_000_000),
/// );
/// let impact = compute_impact(&steel, dec!(1_000_000), dec!(0.6), dec!(0.25)).unwrap();
/// assert_eq!(impact, dec!(-120_000));
/// ```
pub fn compute_impact(
    sector: &SectorRecord,
    exported_value: Decimal,
    pass_through: Decimal,
    tariff_rate: Decimal,
) -> Result<Decimal, InputError> {
    check_amount("exported value", exported_value)?;
    check_rate("pass-through rate", pass_through)?;
    check_rate("tariff rate", tariff_rate)?;

    let delta = tariff_rate - sector.baseline_rate();
    Ok(-exported_value * delta * pass_through)
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
    fn test_worked_example() {
        // baseline 5%, shock 25%, 1M exported, 60% pass-through
        let impact = compute_impact(&steel(), dec!(1_000_000), dec!(0.6), dec!(0.25)).unwrap();
        assert_eq!(impact, dec!(-120_000));
    }

    #[test]
    fn test_zero_at_baseline_rate() {
        let impact = compute_impact(&steel(), dec!(1_000_000), dec!(0.6), dec!(0.05)).unwrap();
        assert_eq!(impact, Decimal::ZERO);
    }

    #[test]
    fn test_zero_at_zero_pass_through() {
        let impact = compute_impact(&steel(), dec!(1_000_000), dec!(0), dec!(0.25)).unwrap();
        assert_eq!(impact, Decimal::ZERO);
    }

    #[test]
    fn test_tariff_cut_is_a_gain() {
        // Below-baseline rate yields a positive impact.
        let impact = compute_impact(&steel(), dec!(1_000_000), dec!(1), dec!(0.03)).unwrap();
        assert_eq!(impact, dec!(20_000));
    }

    #[test]
    fn test_linear_in_pass_through() {
        let half = compute_impact(&steel(), dec!(1_000_000), dec!(0.3), dec!(0.25)).unwrap();
        let full = compute_impact(&steel(), dec!(1_000_000), dec!(0.6), dec!(0.25)).unwrap();
        assert_eq!(full, half * dec!(2));
    }

    #[test]
    fn test_negative_exported_value_rejected() {
        let err = compute_impact(&steel(), dec!(-1), dec!(0.6), dec!(0.25)).unwrap_err();
        assert!(matches!(err, InputError::NegativeValue { .. }));
    }

    #[test]
    fn test_rate_above_one_rejected() {
        let err = compute_impact(&steel(), dec!(100), dec!(1.5), dec!(0.25)).unwrap_err();
        assert!(matches!(err, InputError::RateOutOfRange { .. }));
        let err = compute_impact(&steel(), dec!(100), dec!(0.5), dec!(1.01)).unwrap_err();
        assert!(matches!(err, InputError::RateOutOfRange { .. }));
    }
}
