//! Frequent itemset mining with FP-Growth.
//!
//! Transactions are compressed into a prefix tree ordered by item frequency,
//! which is then split into conditional trees until every frequent itemset
//! reachable from a single path has been emitted.
//!
//! ```
//! let transactions = vec![vec!["a", "b"], vec!["a", "b"], vec!["b", "c"]];
//! let itemsets = fpgrowth::fp_growth(&transactions, 2).unwrap();
//! assert!(itemsets
//!     .iter()
//!     .any(|set| set.items.len() == 2 && set.support == 2));
//! ```

pub mod config;
pub mod error;
pub mod fp;

#[cfg(feature = "python")]
mod python;

pub use config::{MinSupport, MiningConfig};
pub use error::{FpError, Result};
pub use fp::{
    fp_growth, fp_growth_matrix, group_by_level, transactions_from_matrix, FpGrowth,
    FrequentItemset, FrequentLevel,
};
