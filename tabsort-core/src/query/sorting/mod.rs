//! Permutation sorting for tabular query results
//!
//! This module provides:
//! - A total comparator over heterogeneous runtime values
//! - Resolution of positional column aliases to literal column names
//! - Lazily populated, reclaimable per-row key projections
//! - The default permutation sorter and its merge-sort kernel

pub mod comparator;
pub mod projection;
pub mod resolver;
pub mod sorter;
pub mod utils;

#[cfg(test)]
mod tests;

pub use comparator::*;
pub use projection::*;
pub use resolver::*;
pub use sorter::*;
