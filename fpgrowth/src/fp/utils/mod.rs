pub mod expand;
pub mod frequency;
pub mod storage;

pub use expand::expand_pattern;
pub use frequency::FrequencyIndex;
pub use storage::{group_by_level, FrequentItemset, FrequentLevel, ItemsetStorage};
