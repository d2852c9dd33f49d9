use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A candidate export destination evaluated as a diversification target.
///
/// Immutable reference data: the market's average applied tariff rate
/// (fraction in [0, 1]) and an estimate of how much additional export
/// value it could absorb, in currency units.
///
/// # Examples
///
/// ```
/// use tariff_impact_engine::core::market::AlternativeMarket;
/// use rust_decimal_macros::dec;
///
/// let eu = AlternativeMarket::new("European Union", dec!(0.03), dec!(800_000));
/// assert_eq!(eu.average_tariff(), dec!(0.03));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlternativeMarket {
    /// Market display name, also the tie-break key in ranking.
    name: String,
    /// Average applied tariff rate faced in this market, as a fraction.
    average_tariff: Decimal,
    /// Estimated additional export value this market could absorb.
    absorption_capacity: Decimal,
    /// Optional analyst notes. Display only.
    notes: Option<String>,
}

impl AlternativeMarket {
    pub fn new(
        name: impl Into<String>,
        average_tariff: Decimal,
        absorption_capacity: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            average_tariff,
            absorption_capacity,
            notes: None,
        }
    }

    /// Attach an analyst note.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    // --- Accessors ---

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn average_tariff(&self) -> Decimal {
        self.average_tariff
    }

    pub fn absorption_capacity(&self) -> Decimal {
        self.absorption_capacity
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

impl fmt::Display for AlternativeMarket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
