//! Input generators shared by the benchmark binaries.
#![allow(dead_code)]

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Shape of a synthetic basket dataset.
#[derive(Debug, Clone, Copy)]
pub struct Baskets {
    pub transactions: usize,
    pub items: usize,
    /// Mean number of draws per basket; each basket draws between half and
    /// one and a half times this many.
    pub avg_size: usize,
    /// Probability that a draw lands in the basket.
    pub keep: f64,
}

impl Baskets {
    pub fn new(transactions: usize, items: usize, avg_size: usize, keep: f64) -> Self {
        Self {
            transactions,
            items,
            avg_size,
            keep,
        }
    }

    /// Item indices of every basket. Repeated draws of an item are merged,
    /// and the same seed always gives the same baskets.
    pub fn indices(&self, seed: u64) -> Vec<Vec<usize>> {
        let mut rng = StdRng::seed_from_u64(seed);
        let low = (self.avg_size / 2).max(1);
        let high = (self.avg_size + self.avg_size / 2).clamp(low, self.items.max(low));

        (0..self.transactions)
            .map(|_| {
                let draws = rng.gen_range(low..=high);
                let mut basket: Vec<usize> = (0..draws)
                    .filter_map(|_| {
                        rng.gen_bool(self.keep)
                            .then(|| rng.gen_range(0..self.items))
                    })
                    .collect();
                basket.sort_unstable();
                basket.dedup();
                basket
            })
            .collect()
    }

    /// The baskets as a `transactions x items` 0/1 matrix.
    pub fn matrix(&self, seed: u64) -> Array2<i32> {
        let mut matrix = Array2::zeros((self.transactions, self.items));
        for (row, basket) in self.indices(seed).into_iter().enumerate() {
            for column in basket {
                matrix[[row, column]] = 1;
            }
        }
        matrix
    }

    /// The baskets with string SKUs in place of indices.
    pub fn skus(&self, seed: u64) -> Vec<Vec<String>> {
        self.indices(seed)
            .into_iter()
            .map(|basket| basket.into_iter().map(|i| format!("sku-{i:04}")).collect())
            .collect()
    }
}

/// Rising prefixes `0..=i` followed by falling suffixes of `0..n`.
///
/// Mined at a support of 2, every item's conditional tree holds one level
/// more than its parent's, down to a chain of `n` items, and the output has
/// `2^n - n - 1` itemsets.
pub fn staircase(n: usize) -> Vec<Vec<usize>> {
    let rising = (0..n).map(|i| (0..=i).collect());
    let falling = (0..n).map(|i| (i..n).rev().collect());
    rising.chain(falling).collect()
}
