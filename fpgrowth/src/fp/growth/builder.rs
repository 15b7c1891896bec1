use super::tree::{FpTree, NodeId, ROOT};
use crate::fp::utils::FrequencyIndex;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Builds an [`FpTree`] from transactions with a fixed support threshold.
///
/// A transaction that repeats an item is reduced to the first occurrence of
/// each item before anything is counted, so counts in the index and in the
/// tree agree. Returns an empty tree when no item reaches `min_sup`.
pub fn build_fp_tree<T, R>(transactions: &[R], min_sup: usize) -> FpTree<T>
where
    T: Clone + Eq + Hash,
    R: AsRef<[T]>,
{
    if transactions.iter().any(|t| has_repeats(t.as_ref())) {
        let distinct: Vec<Vec<T>> = transactions
            .iter()
            .map(|t| distinct_items(t.as_ref()))
            .collect();
        return build_from_distinct(&distinct, min_sup);
    }
    build_from_distinct(transactions, min_sup)
}

fn build_from_distinct<T, R>(transactions: &[R], min_sup: usize) -> FpTree<T>
where
    T: Clone + Eq + Hash,
    R: AsRef<[T]>,
{
    let index = FrequencyIndex::from_transactions(transactions, min_sup);
    if index.is_empty() {
        return FpTree::new(min_sup);
    }

    let mut builder = TreeBuilder::new(index, min_sup);
    for transaction in transactions {
        builder.insert_transaction(transaction.as_ref());
    }
    builder.finish()
}

fn has_repeats<T: Eq + Hash>(transaction: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(transaction.len());
    !transaction.iter().all(|item| seen.insert(item))
}

fn distinct_items<T: Clone + Eq + Hash>(transaction: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(transaction.len());
    transaction
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// Inserts transactions into a tree one by one.
///
/// Keeps the tail of every same-item list so appending a new node to its
/// list is O(1). The tails are dropped by [`finish`](Self::finish); the
/// finished tree only keeps the list heads.
pub struct TreeBuilder<T> {
    tree: FpTree<T>,
    index: FrequencyIndex<T>,
    tails: HashMap<T, NodeId>,
}

impl<T: Clone + Eq + Hash> TreeBuilder<T> {
    pub fn new(index: FrequencyIndex<T>, min_sup: usize) -> Self {
        Self {
            tree: FpTree::new(min_sup),
            index,
            tails: HashMap::new(),
        }
    }

    /// Drops infrequent items, orders the rest by rank and merges the result
    /// into the tree. Repeated items only keep their first occurrence.
    pub fn insert_transaction(&mut self, transaction: &[T]) {
        let mut ranked: Vec<(usize, &T)> = transaction
            .iter()
            .filter_map(|item| self.index.rank(item).map(|rank| (rank, item)))
            .collect();

        if ranked.is_empty() {
            return;
        }

        ranked.sort_by_key(|&(rank, _)| rank);
        ranked.dedup_by_key(|&mut (rank, _)| rank);

        let mut current = ROOT;
        for (_, item) in ranked {
            current = match self.tree.child_with_item(current, item) {
                Some(child) => {
                    self.tree.nodes[child].count += 1;
                    child
                }
                None => self.insert_node(current, item),
            };
        }
    }

    fn insert_node(&mut self, parent: NodeId, item: &T) -> NodeId {
        let id = self.tree.push_child(parent, item.clone());

        match self.tails.insert(item.clone(), id) {
            Some(tail) => self.tree.nodes[tail].next = Some(id),
            None => self.tree.push_header(item.clone(), id),
        }
        id
    }

    pub fn finish(self) -> FpTree<T> {
        self.tree
    }
}
