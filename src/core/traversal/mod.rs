//! Recursive walks over a directory subtree: duplication and name search.

mod copy;
mod search;

pub use copy::{copy_recursive, overlaps, CopyStats};
pub use search::{search, Search, SearchMatch};
