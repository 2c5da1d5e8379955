use thiserror::Error;

/// Why a correlation could not be computed for one pair of rankings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorrelationError {
    /// The two rankings cover different numbers of items, so positions do not
    /// line up.
    #[error("Length mismatch: master has {master} items, student has {student}")]
    LengthMismatch { master: usize, student: usize },

    /// Fewer than two items means no pairs to compare.
    #[error("Correlation undefined for {items} item(s); need at least 2")]
    UndefinedCorrelation { items: usize },

    /// A constant ranking has no spread to correlate against (Pearson only).
    #[error("Correlation undefined: one ranking has zero variance")]
    ZeroVariance,
}
