use crate::core::sector::SectorRecord;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative banding of the trade-pressure index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Band a pressure index: below 6 is Low, below 15 Moderate, else High.
    pub fn from_pressure(pressure_index: Decimal) -> Self {
        if pressure_index < dec!(6) {
            RiskLevel::Low
        } else if pressure_index < dec!(15) {
            RiskLevel::Moderate
        } else {
            RiskLevel::High
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        };
        write!(f, "{}", label)
    }
}

/// Display-oriented decomposition of the unmitigated shock.
///
/// The gross surcharge is the full tariff surcharge at 100% pass-through;
/// the pass-through rate splits it into the share passed to the client and
/// the share absorbed by the exporter. The pressure index scales the shock
/// delta (in percentage points) by exported value (in millions, per ten),
/// and bands into a risk level.
///
/// These figures feed display and export only; they never alter the impact,
/// ratio, ranking, or recommendation results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShockExposure {
    /// Full surcharge of the shock: `exported_value * shock_delta`.
    pub gross_surcharge: Decimal,
    /// Share of the surcharge absorbed by the exporter: `gross * (1 - pass_through)`.
    pub exporter_absorption: Decimal,
    /// Share of the surcharge passed to the client: `gross * pass_through`.
    pub client_cost: Decimal,
    /// Shock delta in percentage points times exported value in millions,
    /// divided by ten.
    pub pressure_index: Decimal,
    pub risk_level: RiskLevel,
}

impl ShockExposure {
    /// Decompose a sector's shock for a given exposure and pass-through.
    ///
    /// Inputs are assumed already validated (catalog load for the sector,
    /// the impact calculator for the per-request rates).
    pub fn from_scenario(
        sector: &SectorRecord,
        exported_value: Decimal,
        pass_through: Decimal,
    ) -> Self {
        let delta = sector.shock_delta();
        let gross_surcharge = exported_value * delta;
        let client_cost = gross_surcharge * pass_through;
        let exporter_absorption = gross_surcharge - client_cost;

        let delta_points = delta * dec!(100);
        let value_millions = exported_value / dec!(1_000_000);
        let pressure_index = delta_points * value_millions / dec!(10);

        Self {
            gross_surcharge,
            exporter_absorption,
            client_cost,
            pressure_index,
            risk_level: RiskLevel::from_pressure(pressure_index),
        }
    }
}
