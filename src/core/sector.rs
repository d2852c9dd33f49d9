use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an export sector.
///
/// Convention: a short slug or HS-chapter style code
/// (e.g., "STEEL", "HS-7208", "AERO-PARTS").
///
/// # Examples
///
/// ```
/// use tariff_impact_engine::core::sector::SectorId;
///
/// let steel = SectorId::new("STEEL");
/// let wine = SectorId::new("WINE");
/// assert_ne!(steel, wine);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectorId(String);

impl SectorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SectorId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Reference data for one export sector under a tariff shock.
///
/// Holds the tariff rate before the shock (`baseline_rate`), the rate
/// after the shock (`shocked_rate`), the safeguard measures recorded
/// against the sector, and the annual exported value used as the default
/// exposure when a scenario does not override it.
///
/// Rates are fractions in [0, 1]; the exported value is in currency units.
/// Records are immutable once created — they are loaded into the catalog
/// at process start and never mutated.
///
/// # Examples
///
/// ```
/// use tariff_impact_engine::core::sector::{SectorId, SectorRecord};
/// use rust_decimal_macros::dec;
///
/// let steel = SectorRecord::new(
///     SectorId::new("STEEL"),
///     "Flat-rolled steel products",
///     dec!(0.05),
///     dec!(0.25),
///     dec!(1_000_000),
/// );
/// assert_eq!(steel.shocked_rate(), dec!(0.25));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorRecord {
    /// Stable identifier used for catalog lookup and export rows.
    id: SectorId,
    /// Human-readable description.
    name: String,
    /// Applied tariff rate before the shock, as a fraction.
    baseline_rate: Decimal,
    /// Applied tariff rate under the shock, as a fraction.
    shocked_rate: Decimal,
    /// Safeguard measures recorded against the sector. Display only;
    /// not used by the numeric model.
    safeguard_measures: Vec<String>,
    /// Annual exported value in currency units. Default exposure when a
    /// scenario does not supply its own.
    exported_value: Decimal,
}

impl SectorRecord {
    pub fn new(
        id: SectorId,
        name: impl Into<String>,
        baseline_rate: Decimal,
        shocked_rate: Decimal,
        exported_value: Decimal,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            baseline_rate,
            shocked_rate,
            safeguard_measures: Vec::new(),
            exported_value,
        }
    }

    /// Attach safeguard-measure labels to the record.
    pub fn with_safeguards<I, S>(mut self, measures: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.safeguard_measures = measures.into_iter().map(Into::into).collect();
        self
    }

    // --- Accessors ---

    pub fn id(&self) -> &SectorId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn baseline_rate(&self) -> Decimal {
        self.baseline_rate
    }

    pub fn shocked_rate(&self) -> Decimal {
        self.shocked_rate
    }

    pub fn safeguard_measures(&self) -> &[String] {
        &self.safeguard_measures
    }

    pub fn exported_value(&self) -> Decimal {
        self.exported_value
    }

    /// The shock delta: shocked rate minus baseline rate.
    /// Positive for a tariff increase.
    pub fn shock_delta(&self) -> Decimal {
        self.shocked_rate - self.baseline_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_sector() -> SectorRecord {
        SectorRecord::new(
            SectorId::new("STEEL"),
            "Flat-rolled steel products",
            dec!(0.05),
            dec!(0.25),
            dec!(1_000_000),
        )
        .with_safeguards(["Section 232", "Exclusion request filed"])
    }

    #[test]
    fn test_sector_id_equality() {
        let a = SectorId::new("STEEL");
        let b = SectorId::new("STEEL");
        let c = SectorId::new("WINE");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_sector_id_display() {
        let id = SectorId::new("AERO-PARTS");
        assert_eq!(format!("{}", id), "AERO-PARTS");
    }

    #[test]
    fn test_sector_record_accessors() {
        let sector = sample_sector();
        assert_eq!(sector.id().as_str(), "STEEL");
        assert_eq!(sector.baseline_rate(), dec!(0.05));
        assert_eq!(sector.shocked_rate(), dec!(0.25));
        assert_eq!(sector.exported_value(), dec!(1_000_000));
        assert_eq!(sector.safeguard_measures().len(), 2);
    }

    #[test]
    fn test_shock_delta() {
        let sector = sample_sector();
        assert_eq!(sector.shock_delta(), dec!(0.20));
    }
}
