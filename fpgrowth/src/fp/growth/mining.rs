use super::builder::build_fp_tree;
use super::tree::FpTree;
use crate::config::{MinSupport, MiningConfig};
use crate::error::Result;
use crate::fp::combinations::for_each_combination;
use crate::fp::utils::{expand_pattern, FrequentItemset};
use std::hash::Hash;
use tracing::{debug, trace};

/// `(item, weight)` pairs of one path, all sharing the same weight.
pub type WeightedPath<T> = Vec<(T, usize)>;

/// Mines frequent itemsets with a fixed configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FpGrowth {
    config: MiningConfig,
}

impl FpGrowth {
    pub fn new(config: MiningConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MiningConfig {
        &self.config
    }

    /// Builds the tree for `transactions` and mines it.
    ///
    /// The threshold is validated before anything is counted.
    pub fn mine<T, R>(&self, transactions: &[R]) -> Result<Vec<FrequentItemset<T>>>
    where
        T: Clone + Eq + Hash,
        R: AsRef<[T]>,
    {
        let min_sup = self.config.resolve(transactions.len())?;
        debug!(
            transactions = transactions.len(),
            min_sup, "building FP-tree"
        );

        let tree = build_fp_tree(transactions, min_sup);
        debug!(
            frequent_items = tree.header().len(),
            nodes = tree.len(),
            "mining FP-tree"
        );

        let mut itemsets = Vec::new();
        grow(tree, Vec::new(), &mut itemsets);
        debug!(itemsets = itemsets.len(), "mining finished");
        Ok(itemsets)
    }
}

/// Mines `transactions`, keeping itemsets that occur at least `min_sup` times.
pub fn fp_growth<T, R>(transactions: &[R], min_sup: usize) -> Result<Vec<FrequentItemset<T>>>
where
    T: Clone + Eq + Hash,
    R: AsRef<[T]>,
{
    FpGrowth::new(MiningConfig::new(MinSupport::Count(min_sup))).mine(transactions)
}

/// True when no item occurs more than once across the tree.
pub fn is_single_path<T: Clone + Eq + Hash>(tree: &FpTree<T>) -> bool {
    tree.header()
        .iter()
        .all(|entry| tree.node(entry.head).next.is_none())
}

/// Collects, for every node of `item`, the path from that node up to the
/// root as `(item, count of the starting node)` pairs, leaf first.
///
/// Paths made of the item alone carry no prefix and are left out. Paths of
/// different nodes are never merged.
pub fn conditional_pattern_base<T: Clone + Eq + Hash>(
    tree: &FpTree<T>,
    item: &T,
) -> Vec<WeightedPath<T>> {
    tree.node_links(item)
        .filter_map(|id| {
            let count = tree.node(id).count;
            let path: WeightedPath<T> = tree
                .path_to_root(id)
                .map(|item| (item.clone(), count))
                .collect();
            (path.len() > 1).then_some(path)
        })
        .collect()
}

struct Frame<T> {
    tree: FpTree<T>,
    prefix: WeightedPath<T>,
}

/// Mines `tree`, extending `prefix`, and appends every itemset found to
/// `itemsets`.
///
/// Conditional trees are handled through an explicit stack rather than by
/// recursion, so deep inputs cannot exhaust the call stack. Frames are pushed
/// in reverse so the output order is the depth-first order. Each frame owns
/// its tree and drops it once processed.
pub fn grow<T: Clone + Eq + Hash>(
    tree: FpTree<T>,
    prefix: WeightedPath<T>,
    itemsets: &mut Vec<FrequentItemset<T>>,
) {
    let mut stack = vec![Frame { tree, prefix }];

    while let Some(Frame { tree, prefix }) = stack.pop() {
        if is_single_path(&tree) {
            emit_single_path(&tree.single_path(), &prefix, itemsets);
            continue;
        }

        let mut branches = Vec::new();
        for entry in tree.header() {
            let base = conditional_pattern_base(&tree, &entry.item);
            if base.is_empty() {
                continue;
            }

            let (header_support, transactions) = strip_and_expand(base);
            let conditional = build_fp_tree(&transactions, tree.min_sup());
            trace!(
                depth = prefix.len() + 1,
                header_support,
                nodes = conditional.len(),
                "conditional tree"
            );
            if conditional.is_empty() {
                continue;
            }

            let mut extended: WeightedPath<T> = prefix
                .iter()
                .map(|(item, _)| (item.clone(), header_support))
                .collect();
            extended.push((entry.item.clone(), header_support));

            branches.push(Frame {
                tree: conditional,
                prefix: extended,
            });
        }

        stack.extend(branches.into_iter().rev());
    }
}

/// Sums the leading counts into the item's support, drops the leading pair of
/// every path and expands what is left into plain transactions.
fn strip_and_expand<T: Clone>(base: Vec<WeightedPath<T>>) -> (usize, Vec<Vec<T>>) {
    let mut header_support = 0;
    let mut transactions = Vec::new();

    for path in base {
        let Some(((_, count), rest)) = path.split_first() else {
            continue;
        };
        header_support += *count;
        transactions.extend(expand_pattern(rest));
    }

    (header_support, transactions)
}

/// Emits every non-empty selection of `path`, keeping path order, joined to
/// `prefix`. Support is the smallest count among the chosen pairs and the
/// prefix.
fn emit_single_path<T: Clone>(
    path: &[(T, usize)],
    prefix: &[(T, usize)],
    itemsets: &mut Vec<FrequentItemset<T>>,
) {
    let prefix_support = prefix
        .iter()
        .map(|&(_, support)| support)
        .min()
        .unwrap_or(usize::MAX);

    for k in 1..=path.len() {
        for_each_combination(path.len(), k, &mut |chosen: &[usize]| {
            let mut items = Vec::with_capacity(prefix.len() + k);
            items.extend(prefix.iter().map(|(item, _)| item.clone()));
            items.extend(chosen.iter().map(|&idx| path[idx].0.clone()));

            let support = chosen
                .iter()
                .map(|&idx| path[idx].1)
                .fold(prefix_support, usize::min);

            itemsets.push(FrequentItemset::new(items, support));
        });
    }
}
