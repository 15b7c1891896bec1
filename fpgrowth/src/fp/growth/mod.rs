pub mod builder;
pub mod mining;
pub mod tree;

pub use builder::{build_fp_tree, TreeBuilder};
pub use mining::{
    conditional_pattern_base, fp_growth, grow, is_single_path, FpGrowth, WeightedPath,
};
pub use tree::{FpNode, FpTree, HeaderEntry, NodeId, ROOT};
