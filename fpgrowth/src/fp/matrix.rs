use super::growth::FpGrowth;
use super::utils::FrequentItemset;
use crate::config::{MinSupport, MiningConfig};
use crate::error::{FpError, Result};
use ndarray::ArrayView2;

/// Converts a binary transaction matrix into item lists.
///
/// Row `i` is transaction `i`; a 1 in column `j` means item `j` is present.
pub fn transactions_from_matrix(matrix: ArrayView2<i32>) -> Result<Vec<Vec<usize>>> {
    matrix
        .outer_iter()
        .enumerate()
        .map(|(row, values)| {
            let mut transaction = Vec::new();
            for (column, &value) in values.iter().enumerate() {
                match value {
                    0 => {}
                    1 => transaction.push(column),
                    _ => return Err(FpError::InvalidMatrixValue { row, column, value }),
                }
            }
            Ok(transaction)
        })
        .collect()
}

/// Mines a binary transaction matrix. Items are column indices.
pub fn fp_growth_matrix(
    matrix: ArrayView2<i32>,
    min_support: MinSupport,
) -> Result<Vec<FrequentItemset<usize>>> {
    min_support.validate()?;

    let transactions = transactions_from_matrix(matrix)?;
    FpGrowth::new(MiningConfig::new(min_support)).mine(&transactions)
}
