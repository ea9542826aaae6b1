//! Memoization for dynamic programming over a DAG of sub-problems
//!
//! A [`DpProblem`] says which indices an index depends on and how to combine
//! their values; [`DpCache`] evaluates it lazily, computing every index once.
//! Storage is pluggable:
//!
//! - [`VecBackend`]: dense `usize` indices (auto-growing)
//! - [`HashMapBackend`]: any hashable index type
//!
//! # Warning: cycles
//!
//! There is no cycle detection. A cyclic dependency graph recurses until the
//! stack overflows, so callers must only use this on DAGs.
//!
//! # Example: counting paths in a DAG
//!
//! ```rust
//! use aoc_solutions::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
//! use std::collections::HashMap;
//!
//! struct PathsTo<'a> {
//!     edges: HashMap<&'a str, Vec<&'a str>>,
//!     target: &'a str,
//! }
//!
//! impl<'a> DpProblem<&'a str, u64> for PathsTo<'a> {
//!     fn deps(&self, node: &&'a str) -> Vec<&'a str> {
//!         if *node == self.target {
//!             vec![]
//!         } else {
//!             self.edges.get(node).cloned().unwrap_or_default()
//!         }
//!     }
//!
//!     fn compute(&self, node: &&'a str, deps: Vec<u64>) -> u64 {
//!         if *node == self.target { 1 } else { deps.iter().sum() }
//!     }
//! }
//!
//! let edges = HashMap::from([("a", vec!["b", "c"]), ("b", vec!["d"]), ("c", vec!["d"])]);
//! let cache = DpCache::with_problem(HashMapBackend::new(), PathsTo { edges, target: "d" });
//! assert_eq!(cache.get(&"a"), 2);
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend, VecBackend};
pub use cache::{ClosureProblem, DpCache};
pub use problem::DpProblem;

#[cfg(test)]
mod tests;
