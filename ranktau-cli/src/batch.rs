/// Batch runner: pair master and student ranking files, compute tau for each
/// pair in order, and average.
///
/// Fail-fast: the first pair that cannot be loaded or scored aborts the whole
/// run, so the average never includes a made-up value.
use ranktau_core::{kendall_counts, CorrelationError, PairCounts};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::discovery::find_ranking_files;
use crate::error::BatchError;
use crate::parse::load_ranking;

/// One matched pair of files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePair {
    pub master: PathBuf,
    pub student: PathBuf,
}

/// Tau for one matched pair.
#[derive(Debug, Clone, Serialize)]
pub struct PairReport {
    pub master: PathBuf,
    pub student: PathBuf,
    pub items: usize,
    pub counts: PairCounts,
    pub tau: f64,
}

/// Per-pair results in input order, plus their mean.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub pairs: Vec<PairReport>,
    pub average: f64,
}

/// Zip two sorted file lists into pairs. The lists must be the same length.
pub fn pair_files(masters: Vec<PathBuf>, students: Vec<PathBuf>) -> Result<Vec<FilePair>, BatchError> {
    if masters.len() != students.len() {
        return Err(BatchError::PairCountMismatch {
            masters: masters.len(),
            students: students.len(),
        });
    }
    Ok(masters
        .into_iter()
        .zip(students)
        .map(|(master, student)| FilePair { master, student })
        .collect())
}

/// Discover both sides by prefix and pair them up.
pub fn discover_pairs(master_prefix: &str, student_prefix: &str, infix: &str) -> Result<Vec<FilePair>, BatchError> {
    let masters = find_ranking_files(master_prefix, infix)?;
    let students = find_ranking_files(student_prefix, infix)?;
    let pairs = pair_files(masters, students)?;
    if pairs.is_empty() {
        return Err(BatchError::NoPairs {
            pattern: format!("{master_prefix}{infix}*"),
        });
    }
    Ok(pairs)
}

/// Score one already-loaded pair.
pub fn score_pair(pair: &FilePair, master: &[i64], student: &[i64]) -> Result<PairReport, BatchError> {
    let tag = |source: CorrelationError| BatchError::Correlation {
        master: pair.master.clone(),
        student: pair.student.clone(),
        source,
    };

    let counts = kendall_counts(master, student).map_err(tag)?;
    let tau = counts
        .tau()
        .ok_or(CorrelationError::UndefinedCorrelation { items: master.len() })
        .map_err(tag)?;

    debug!(
        "{} vs {}: {} items, C={} D={} tau={tau}",
        pair.master.display(),
        pair.student.display(),
        master.len(),
        counts.concordant,
        counts.discordant,
    );

    Ok(PairReport {
        master: pair.master.clone(),
        student: pair.student.clone(),
        items: master.len(),
        counts,
        tau,
    })
}

/// Arithmetic mean, summed in input order. `None` for an empty slice.
pub fn average(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sum = 0.0;
    for &v in values {
        sum += v;
    }
    Some(sum / values.len() as f64)
}

/// Load and score every pair in order, stopping at the first failure.
pub fn run_batch(pairs: &[FilePair]) -> Result<BatchReport, BatchError> {
    let mut reports = Vec::with_capacity(pairs.len());
    for pair in pairs {
        let master = load_ranking(&pair.master)?;
        let student = load_ranking(&pair.student)?;
        reports.push(score_pair(pair, &master, &student)?);
    }

    let taus: Vec<f64> = reports.iter().map(|r| r.tau).collect();
    let mean = average(&taus).ok_or_else(|| BatchError::NoPairs {
        pattern: "an empty pair list".to_string(),
    })?;

    info!("Scored {} pair(s), average tau {mean}", reports.len());
    Ok(BatchReport { pairs: reports, average: mean })
}
