use crate::analysis::ranking::RankedMarket;
use crate::analysis::scenario::ReductionRatio;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// The metrics a recommendation is derived from.
#[derive(Debug, Clone)]
pub struct RecommendationContext<'a> {
    pub reduction_ratio: ReductionRatio,
    /// The best-ranked alternative market, if any were supplied.
    pub top_market: Option<&'a RankedMarket>,
}

type Predicate = fn(&RecommendationContext) -> bool;
type Message = fn(&RecommendationContext) -> String;

/// Ordered rule table, evaluated top to bottom; first match wins.
/// The final rule always matches, so evaluation never falls through.
const RULES: &[(Predicate, Message)] = &[
    (
        |ctx: &RecommendationContext| !ctx.reduction_ratio.is_defined(),
        |_: &RecommendationContext| "No measurable exposure; monitor only.".to_string(),
    ),
    (
        |ctx: &RecommendationContext| {
            matches!(ctx.reduction_ratio.value(), Some(ratio) if ratio >= dec!(0.5))
        },
        |_: &RecommendationContext| {
            "Mitigation meaningfully offsets the shock; pursue the listed safeguards.".to_string()
        },
    ),
    (
        |ctx: &RecommendationContext| {
            matches!(ctx.top_market, Some(top) if top.score > Decimal::ZERO)
        },
        |ctx: &RecommendationContext| {
            let top = ctx.top_market.expect("predicate guarantees a top market");
            format!(
                "Limited mitigation benefit; prioritize diversification toward {}.",
                top.market.name()
            )
        },
    ),
    (
        |_: &RecommendationContext| true,
        |_: &RecommendationContext| {
            "No favorable alternative identified; reassess sector exposure.".to_string()
        },
    ),
];

/// Derives a short textual recommendation from computed scenario metrics.
pub struct RecommendationEngine;

impl RecommendationEngine {
    /// Evaluate the rule table against the scenario metrics.
    ///
    /// Deterministic: the same context always yields the same text.
    pub fn recommend(ctx: &RecommendationContext) -> String {
        for (predicate, message) in RULES {
            if predicate(ctx) {
                return message(ctx);
            }
        }
        unreachable!("rule table ends with a catch-all")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::market::AlternativeMarket;

    fn ranked(name: &str, score: Decimal) -> RankedMarket {
        RankedMarket {
            market: AlternativeMarket::new(name, dec!(0.05), dec!(500_000)),
            score,
        }
    }

    #[test]
    fn test_rule_undefined_ratio_wins() {
        // Rule 1 outranks everything, even a favorable market.
        let top = ranked("Canada", dec!(0.2));
        let ctx = RecommendationContext {
            reduction_ratio: ReductionRatio::Undefined,
            top_market: Some(&top),
        };
        assert_eq!(
            RecommendationEngine::recommend(&ctx),
            "No measurable exposure; monitor only."
        );
    }

    #[test]
    fn test_rule_strong_mitigation() {
        let top = ranked("Canada", dec!(0.2));
        let ctx = RecommendationContext {
            reduction_ratio: ReductionRatio::Defined(dec!(0.5)),
            top_market: Some(&top),
        };
        assert_eq!(
            RecommendationEngine::recommend(&ctx),
            "Mitigation meaningfully offsets the shock; pursue the listed safeguards."
        );
    }

    #[test]
    fn test_rule_diversification() {
        let top = ranked("Canada", dec!(0.2));
        let ctx = RecommendationContext {
            reduction_ratio: ReductionRatio::Defined(dec!(0.1)),
            top_market: Some(&top),
        };
        assert_eq!(
            RecommendationEngine::recommend(&ctx),
            "Limited mitigation benefit; prioritize diversification toward Canada."
        );
    }

    #[test]
    fn test_rule_fallback_on_negative_score() {
        let top = ranked("Everywhere-worse", dec!(-0.1));
        let ctx = RecommendationContext {
            reduction_ratio: ReductionRatio::Defined(dec!(0.1)),
            top_market: Some(&top),
        };
        assert_eq!(
            RecommendationEngine::recommend(&ctx),
            "No favorable alternative identified; reassess sector exposure."
        );
    }

    #[test]
    fn test_rule_fallback_without_markets() {
        let ctx = RecommendationContext {
            reduction_ratio: ReductionRatio::Defined(dec!(0.1)),
            top_market: None,
        };
        assert_eq!(
            RecommendationEngine::recommend(&ctx),
            "No favorable alternative identified; reassess sector exposure."
        );
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // Exactly 0.5 fires rule 2; just below falls through.
        let top = ranked("Canada", dec!(0.2));
        let at = RecommendationContext {
            reduction_ratio: ReductionRatio::Defined(dec!(0.5)),
            top_market: Some(&top),
        };
        let below = RecommendationContext {
            reduction_ratio: ReductionRatio::Defined(dec!(0.4999)),
            top_market: Some(&top),
        };
        assert!(RecommendationEngine::recommend(&at).starts_with("Mitigation"));
        assert!(RecommendationEngine::recommend(&below).starts_with("Limited"));
    }
}
