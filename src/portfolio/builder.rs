use crate::analysis::scenario::ScenarioResult;
use serde::{Deserialize, Serialize};

/// Ordered, append-only collection of scenario results for one session.
///
/// No deduplication: repeated computations for the same sector are all
/// retained, preserving the analysis history. The builder is the only
/// mutable state in the system and is owned exclusively by the session
/// that created it.
///
/// # Examples
///
/// ```
/// use tariff_impact_engine::portfolio::builder::PortfolioBuilder;
///
/// let portfolio = PortfolioBuilder::new();
/// assert!(portfolio.is_empty());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioBuilder {
    results: Vec<ScenarioResult>,
}

impl PortfolioBuilder {
    pub fn new() -> Self {
        Self {
            results: Vec::new(),
        }
    }

    /// Append a result. Insertion order is preserved.
    pub fn add(&mut self, result: ScenarioResult) {
        self.results.push(result);
    }

    /// The full ordered sequence, for serialization by the caller.
    pub fn export(&self) -> &[ScenarioResult] {
        &self.results
    }

    /// Discard all accumulated results.
    pub fn clear(&mut self) {
        self.results.clear();
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl FromIterator<ScenarioResult> for PortfolioBuilder {
    fn from_iter<T: IntoIterator<Item = ScenarioResult>>(iter: T) -> Self {
        Self {
            results: iter.into_iter().collect(),
        }
    }
}
