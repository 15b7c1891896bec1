pub mod combinations;
pub mod growth;
pub mod matrix;
pub mod utils;

#[cfg(test)]
mod proptests;

pub use growth::{
    build_fp_tree, conditional_pattern_base, fp_growth, grow, is_single_path, FpGrowth, FpNode,
    FpTree, HeaderEntry, NodeId, TreeBuilder, WeightedPath,
};
pub use matrix::{fp_growth_matrix, transactions_from_matrix};
pub use utils::{
    expand_pattern, group_by_level, FrequencyIndex, FrequentItemset, FrequentLevel,
    ItemsetStorage,
};
