//! Kendall's tau between a master ranking and a student ranking.
//!
//! Student ranks are laid out in master order (the co-sort), then every pair
//! of positions is classified. Ties in the student ranking count as
//! concordant, so this is tau-a with ties folded toward agreement rather than
//! tie-corrected tau-b. Existing reports depend on that exact behavior.
use crate::error::CorrelationError;
use crate::types::{check_comparable, PairCounts, PairOutcome};

/// Student ranks reordered by ascending master rank.
///
/// Items with equal master rank keep their original relative order (stable
/// sort keyed only on the master value). Lengths are not checked here;
/// callers go through [`kendall_counts`] or [`compute_tau`].
pub fn co_sort(master: &[i64], student: &[i64]) -> Vec<i64> {
    let mut keyed: Vec<(i64, usize, i64)> = master
        .iter()
        .zip(student)
        .enumerate()
        .map(|(idx, (&m, &s))| (m, idx, s))
        .collect();

    // Stable: equal master ranks keep item order.
    keyed.sort_by_key(|&(m, _, _)| m);

    keyed.into_iter().map(|(_, _, s)| s).collect()
}

/// Classifies a pair by the student ranks at an earlier and a later master
/// position.
pub fn classify(earlier: i64, later: i64) -> PairOutcome {
    if later >= earlier {
        PairOutcome::Concordant
    } else {
        PairOutcome::Discordant
    }
}

/// Tallies every pair `(i, j)` with `i < j` in a co-sorted sequence.
///
/// O(n²) over all pairs.
pub fn count_pairs(sorted_student: &[i64]) -> PairCounts {
    let mut counts = PairCounts::default();
    for (i, &earlier) in sorted_student.iter().enumerate() {
        for &later in &sorted_student[i + 1..] {
            counts.record(classify(earlier, later));
        }
    }
    counts
}

/// Validates the two rankings, co-sorts them, and counts pairs.
pub fn kendall_counts(master: &[i64], student: &[i64]) -> Result<PairCounts, CorrelationError> {
    check_comparable(master, student)?;
    Ok(count_pairs(&co_sort(master, student)))
}

/// Kendall's tau for one master/student pair.
///
/// Fails with [`CorrelationError::LengthMismatch`] when the rankings differ in
/// length and [`CorrelationError::UndefinedCorrelation`] for fewer than two
/// items. Never returns NaN.
pub fn compute_tau(master: &[i64], student: &[i64]) -> Result<f64, CorrelationError> {
    let counts = kendall_counts(master, student)?;
    counts.tau().ok_or(CorrelationError::UndefinedCorrelation {
        items: master.len(),
    })
}
