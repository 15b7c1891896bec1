use std::collections::HashMap;
use std::hash::Hash;

/// Dense ranking of the items that meet a support threshold.
///
/// Rank 0 is the most frequent item. Items with equal counts keep the order
/// in which they were first encountered, which fixes the shape of every tree
/// built from the index.
#[derive(Debug, Clone)]
pub struct FrequencyIndex<T> {
    ranks: HashMap<T, usize>,
    items: Vec<(T, usize)>,
}

impl<T: Clone + Eq + Hash> FrequencyIndex<T> {
    /// Counts every occurrence of every item (an item repeated inside one
    /// transaction counts once per repetition) and keeps those with a count
    /// of at least `min_sup`. `build_fp_tree` only hands it transactions
    /// with distinct items.
    pub fn from_transactions<R: AsRef<[T]>>(transactions: &[R], min_sup: usize) -> Self {
        let mut positions: HashMap<T, usize> = HashMap::new();
        let mut counts: Vec<(T, usize)> = Vec::new();

        for transaction in transactions {
            for item in transaction.as_ref() {
                match positions.get(item) {
                    Some(&pos) => counts[pos].1 += 1,
                    None => {
                        positions.insert(item.clone(), counts.len());
                        counts.push((item.clone(), 1));
                    }
                }
            }
        }

        counts.retain(|&(_, count)| count >= min_sup);
        // `sort_by` is stable, so ties stay in first-encountered order.
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        let ranks = counts
            .iter()
            .enumerate()
            .map(|(rank, (item, _))| (item.clone(), rank))
            .collect();

        Self {
            ranks,
            items: counts,
        }
    }

    pub fn rank(&self, item: &T) -> Option<usize> {
        self.ranks.get(item).copied()
    }

    pub fn count(&self, item: &T) -> Option<usize> {
        self.rank(item).map(|rank| self.items[rank].1)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.ranks.contains_key(item)
    }

    /// Frequent items with their counts, in rank order.
    pub fn items(&self) -> &[(T, usize)] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
