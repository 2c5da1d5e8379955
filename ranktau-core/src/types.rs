use crate::constants::MIN_ITEMS;
use crate::error::CorrelationError;

/// A judge's ranking: `ranking[i]` is the rank assigned to item `i`.
///
/// Values need not form a permutation. Duplicates and negative values are
/// fine; only relative order is ever compared.
pub type Ranking = Vec<i64>;

/// Checks that two rankings describe the same items and have at least one
/// pair between them. Returns the shared length.
pub(crate) fn check_comparable(a: &[i64], b: &[i64]) -> Result<usize, CorrelationError> {
    if a.len() != b.len() {
        return Err(CorrelationError::LengthMismatch {
            master: a.len(),
            student: b.len(),
        });
    }
    if a.len() < MIN_ITEMS {
        return Err(CorrelationError::UndefinedCorrelation { items: a.len() });
    }
    Ok(a.len())
}

/// How one unordered pair of items compares once student ranks are laid out
/// in master order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PairOutcome {
    /// The later item's student rank is not smaller. Student ties land here.
    Concordant,
    /// The later item's student rank is strictly smaller.
    Discordant,
}

/// Concordant/discordant tallies over every pair of positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairCounts {
    pub concordant: u64,
    pub discordant: u64,
}

impl PairCounts {
    /// Records one classified pair.
    pub fn record(&mut self, outcome: PairOutcome) {
        match outcome {
            PairOutcome::Concordant => self.concordant += 1,
            PairOutcome::Discordant => self.discordant += 1,
        }
    }

    /// Number of pairs counted. Equals C(n, 2) for a sequence of length n,
    /// since every pair lands in exactly one bucket.
    pub fn total(&self) -> u64 {
        self.concordant + self.discordant
    }

    /// (C - D) / (C + D), or `None` when nothing was counted (fewer than two
    /// items), where tau has no value.
    pub fn tau(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let diff = self.concordant as f64 - self.discordant as f64;
        Some(diff / total as f64)
    }
}
