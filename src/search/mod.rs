//! Search: edit distance, BK-tree index, and the result filter.

mod bktree;
mod distance;
mod filter;

pub use bktree::ApproxIndex;
pub use distance::edit_distance;
pub use filter::{FilterEngine, ResultList, DEFAULT_MAX_DISTANCE};
