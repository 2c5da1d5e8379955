//! ranktau-core: Pure-computation rank correlation.
//!
//! Two judges rank the same items; how much do they agree? Kendall's tau
//! counts concordant vs. discordant pairs after laying the student's ranks
//! out in the master's order. Pearson's r is offered alongside for the
//! same inputs. No IO, no filesystem, just math.
//!
//! Items are identified by position: `master[i]` and `student[i]` are the
//! ranks the two judges gave item `i`.
//!
//! # Quick start
//!
//! ```rust
//! use ranktau_core::{compute_tau, CorrelationError};
//!
//! let master = vec![0, 1, 2];
//! let student = vec![5, 5, 1];
//!
//! let tau = compute_tau(&master, &student).unwrap();
//! assert!((tau + 1.0 / 3.0).abs() < 1e-12);
//!
//! assert_eq!(
//!     compute_tau(&[1], &[1]),
//!     Err(CorrelationError::UndefinedCorrelation { items: 1 }),
//! );
//! ```

pub mod constants;
pub mod error;
pub mod kendall;
pub mod pearson;
pub mod types;

// Re-export primary public API at crate root.
pub use error::CorrelationError;
pub use kendall::{classify, co_sort, compute_tau, count_pairs, kendall_counts};
pub use pearson::pearson;
pub use types::{PairCounts, PairOutcome, Ranking};
