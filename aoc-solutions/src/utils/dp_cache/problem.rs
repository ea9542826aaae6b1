//! Trait-based DP problem definition.

/// The recurrence a [`DpCache`](super::DpCache) evaluates.
///
/// # Type Parameters
///
/// - `I`: Index type for the DP cache
/// - `K`: Value type stored in the cache
///
/// # Example
///
/// ```rust
/// use aoc_solutions::utils::dp_cache::{DpCache, DpProblem, VecBackend};
///
/// /// Ways to climb `n` stairs taking one or two steps at a time
/// struct Stairs;
///
/// impl DpProblem<usize, u64> for Stairs {
///     fn deps(&self, n: &usize) -> Vec<usize> {
///         if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
///     }
///
///     fn compute(&self, _n: &usize, deps: Vec<u64>) -> u64 {
///         if deps.is_empty() { 1 } else { deps[0] + deps[1] }
///     }
/// }
///
/// let cache = DpCache::with_problem(VecBackend::new(), Stairs);
/// assert_eq!(cache.get(&10), 89);
/// ```
pub trait DpProblem<I, K> {
    /// Indices whose values `index` needs. Empty for base cases.
    fn deps(&self, index: &I) -> Vec<I>;

    /// Value for `index`, given the values of [`deps`](Self::deps) in the same order.
    fn compute(&self, index: &I, deps: Vec<K>) -> K;
}
