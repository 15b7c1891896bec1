use super::*;

use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap, HashSet};

fn transactions_strategy() -> impl Strategy<Value = Vec<Vec<u8>>> {
    // Distinct items per transaction, in arbitrary order.
    prop::collection::vec(
        prop::collection::btree_set(0u8..8, 0..6)
            .prop_map(|items| items.into_iter().collect::<Vec<_>>())
            .prop_shuffle(),
        0..12,
    )
}

fn transactions_with_repeats_strategy() -> impl Strategy<Value = Vec<Vec<u8>>> {
    // Items may repeat within a transaction.
    prop::collection::vec(prop::collection::vec(0u8..6, 0..7), 0..12)
}

fn true_support(transactions: &[Vec<u8>], items: &[u8]) -> usize {
    transactions
        .iter()
        .filter(|transaction| items.iter().all(|item| transaction.contains(item)))
        .count()
}

fn validate_tree(tree: &FpTree<u8>, index: &FrequencyIndex<u8>) {
    for id in 1..=tree.len() {
        let node = tree.node(id);
        assert!(node.item.is_some(), "item node without item");
        assert!(node.count >= 1, "node count must be positive");

        let child_sum: usize = node.children.iter().map(|&c| tree.node(c).count).sum();
        assert!(child_sum <= node.count, "children outweigh parent");

        let mut seen = HashSet::new();
        for &child in &node.children {
            assert_eq!(tree.node(child).parent, Some(id), "broken parent link");
            assert!(
                seen.insert(tree.node(child).item),
                "two children share an item"
            );
        }

        // Ranks strictly increase from the root down.
        let ranks: Vec<usize> = tree
            .path_to_root(id)
            .map(|item| index.rank(item).unwrap())
            .collect();
        assert!(ranks.windows(2).all(|w| w[0] > w[1]), "path out of rank order");
    }

    for (item, count) in index.items() {
        let total: usize = tree.node_links(item).map(|id| tree.node(id).count).sum();
        assert_eq!(total, *count, "same-item list must cover every occurrence");
        assert!(tree
            .node_links(item)
            .all(|id| tree.node(id).item.as_ref() == Some(item)));
    }
    assert_eq!(tree.header().len(), index.len());
}

proptest! {
    #[test]
    fn prop_tree_invariants(transactions in transactions_strategy(), min_sup in 1usize..4) {
        let tree = build_fp_tree(&transactions, min_sup);
        let index = FrequencyIndex::from_transactions(&transactions, min_sup);

        validate_tree(&tree, &index);
        prop_assert_eq!(tree.is_empty(), index.is_empty());
    }

    #[test]
    fn prop_repeats_count_once(transactions in transactions_with_repeats_strategy(), min_sup in 1usize..4) {
        let distinct: Vec<Vec<u8>> = transactions
            .iter()
            .map(|transaction| {
                let mut seen = HashSet::new();
                transaction.iter().copied().filter(|item| seen.insert(*item)).collect()
            })
            .collect();

        let tree = build_fp_tree(&transactions, min_sup);
        validate_tree(&tree, &FrequencyIndex::from_transactions(&distinct, min_sup));
        prop_assert_eq!(
            fp_growth(&transactions, min_sup).unwrap(),
            fp_growth(&distinct, min_sup).unwrap()
        );
    }

    #[test]
    fn prop_supports_within_bounds(transactions in transactions_with_repeats_strategy(), min_sup in 1usize..4) {
        let itemsets = fp_growth(&transactions, min_sup).unwrap();

        for itemset in &itemsets {
            prop_assert!(!itemset.is_empty());
            prop_assert!(itemset.support >= min_sup);
            prop_assert!(itemset.support <= transactions.len());
        }
    }

    #[test]
    fn prop_items_are_individually_frequent(transactions in transactions_strategy(), min_sup in 1usize..4) {
        let mut counts: HashMap<u8, usize> = HashMap::new();
        for transaction in &transactions {
            for &item in transaction {
                *counts.entry(item).or_insert(0) += 1;
            }
        }

        for itemset in fp_growth(&transactions, min_sup).unwrap() {
            for item in &itemset.items {
                prop_assert!(counts[item] >= min_sup);
            }
        }
    }

    #[test]
    fn prop_supports_are_exact_and_unique(transactions in transactions_with_repeats_strategy(), min_sup in 1usize..4) {
        let itemsets = fp_growth(&transactions, min_sup).unwrap();

        let mut seen = HashSet::new();
        for itemset in &itemsets {
            let set: BTreeSet<u8> = itemset.items.iter().copied().collect();
            prop_assert_eq!(set.len(), itemset.len(), "itemset repeats an item");
            prop_assert!(seen.insert(set), "itemset emitted twice");
            prop_assert_eq!(itemset.support, true_support(&transactions, &itemset.items));
        }
    }

    #[test]
    fn prop_support_is_anti_monotone(transactions in transactions_with_repeats_strategy(), min_sup in 1usize..4) {
        let itemsets = fp_growth(&transactions, min_sup).unwrap();
        let sets: Vec<(BTreeSet<u8>, usize)> = itemsets
            .iter()
            .map(|itemset| (itemset.items.iter().copied().collect(), itemset.support))
            .collect();

        for (a, support_a) in &sets {
            for (b, support_b) in &sets {
                if a.is_subset(b) {
                    prop_assert!(support_a >= support_b);
                }
            }
        }
    }

    #[test]
    fn prop_mining_is_idempotent(transactions in transactions_strategy(), min_sup in 1usize..4) {
        prop_assert_eq!(
            fp_growth(&transactions, min_sup).unwrap(),
            fp_growth(&transactions, min_sup).unwrap()
        );
    }

    #[test]
    fn prop_conditional_paths_share_weight(transactions in transactions_strategy()) {
        let tree = build_fp_tree(&transactions, 1);

        for entry in tree.header() {
            for path in conditional_pattern_base(&tree, &entry.item) {
                prop_assert!(path.len() > 1);
                prop_assert_eq!(path[0].0, entry.item);
                let weight = path[0].1;
                prop_assert!(path.iter().all(|&(_, w)| w == weight));
                prop_assert_eq!(expand_pattern(&path).len(), weight);
            }
        }
    }
}
