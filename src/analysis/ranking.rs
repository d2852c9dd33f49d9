use crate::core::market::AlternativeMarket;
use crate::core::sector::SectorRecord;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An alternative market paired with its diversification suitability score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedMarket {
    pub market: AlternativeMarket,
    /// `sector.shocked_rate - market.average_tariff`. Higher is more
    /// favorable; negative means the market is worse than the shock itself.
    pub score: Decimal,
}

/// Orders alternative markets by suitability as diversification targets.
pub struct MarketRanker;

impl MarketRanker {
    /// Rank markets against a shocked sector.
    ///
    /// Score is the shocked tariff rate minus the market's average tariff;
    /// a market cheaper than the shocked rate scores positive. Ordering is
    /// descending by score, ties broken by descending absorption capacity,
    /// remaining ties by ascending market name. The three-key sort makes
    /// the output fully deterministic for identical inputs.
    ///
    /// Negative-score markets are included, ranked last; filtering them is
    /// the caller's decision.
    pub fn rank(markets: &[AlternativeMarket], sector: &SectorRecord) -> Vec<RankedMarket> {
        let mut ranked: Vec<RankedMarket> = markets
            .iter()
            .map(|market| RankedMarket {
                score: sector.shocked_rate() - market.average_tariff(),
                market: market.clone(),
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| {
                    b.market
                        .absorption_capacity()
                        .cmp(&a.market.absorption_capacity())
                })
                .then_with(|| a.market.name().cmp(b.market.name()))
        });

        ranked
    }
}
