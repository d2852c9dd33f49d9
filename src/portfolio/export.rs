use crate::analysis::scenario::ScenarioResult;
use crate::portfolio::builder::PortfolioBuilder;
use serde::{Deserialize, Serialize};

/// Sentinel written when a value has no defined representation
/// (undefined reduction ratio, empty market catalog).
pub const UNDEFINED_SENTINEL: &str = "n/a";

/// One flat export row per computed scenario.
///
/// Decimal fields are rendered as strings so the row survives any
/// serialization target without float drift.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioRow {
    pub sector: String,
    pub baseline_impact: String,
    pub mitigated_impact: String,
    /// Reduction ratio, or [`UNDEFINED_SENTINEL`] when the baseline
    /// impact was zero.
    pub reduction_ratio: String,
    /// Best-ranked alternative market, or [`UNDEFINED_SENTINEL`] when no
    /// markets were cataloged.
    pub top_market: String,
    pub recommendation: String,
    pub risk_level: String,
}

impl PortfolioRow {
    pub fn from_result(result: &ScenarioResult) -> Self {
        Self {
            sector: result.sector_id().to_string(),
            baseline_impact: result.baseline_impact().to_string(),
            mitigated_impact: result.mitigated_impact().to_string(),
            reduction_ratio: result.reduction_ratio().to_string(),
            top_market: result
                .top_market()
                .map(|top| top.market.name().to_string())
                .unwrap_or_else(|| UNDEFINED_SENTINEL.to_string()),
            recommendation: result.recommendation().to_string(),
            risk_level: result.exposure().risk_level.to_string(),
        }
    }

    /// The CSV header matching [`PortfolioRow::to_csv_line`].
    pub fn csv_header() -> &'static str {
        "sector,baseline_impact,mitigated_impact,reduction_ratio,top_market,recommendation,risk_level"
    }

    pub fn to_csv_line(&self) -> String {
        [
            &self.sector,
            &self.baseline_impact,
            &self.mitigated_impact,
            &self.reduction_ratio,
            &self.top_market,
            &self.recommendation,
            &self.risk_level,
        ]
        .iter()
        .map(|field| escape_csv(field))
        .collect::<Vec<_>>()
        .join(",")
    }
}

/// Render the whole portfolio as CSV text, header included, one row per
/// result in insertion order.
pub fn portfolio_to_csv(portfolio: &PortfolioBuilder) -> String {
    let mut out = String::from(PortfolioRow::csv_header());
    out.push('\n');
    for result in portfolio.export() {
        out.push_str(&PortfolioRow::from_result(result).to_csv_line());
        out.push('\n');
    }
    out
}

fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
