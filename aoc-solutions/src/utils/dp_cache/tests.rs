//! Tests for the DP cache module.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use super::*;

/// No dependencies: every value is computed directly
struct Doubling;

impl DpProblem<usize, i32> for Doubling {
    fn deps(&self, _n: &usize) -> Vec<usize> {
        vec![]
    }

    fn compute(&self, n: &usize, _deps: Vec<i32>) -> i32 {
        (*n as i32) * 2
    }
}

struct Fibonacci;

impl DpProblem<usize, u64> for Fibonacci {
    fn deps(&self, n: &usize) -> Vec<usize> {
        if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
    }

    fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
        if *n <= 1 { *n as u64 } else { deps[0] + deps[1] }
    }
}

#[test]
fn test_values_without_dependencies() {
    let cache = DpCache::with_problem(VecBackend::new(), Doubling);
    assert_eq!(cache.get(&5), 10);
    assert_eq!(cache.get(&0), 0);
    assert_eq!(cache.get(&100), 200);
}

#[test]
fn test_fibonacci_chain() {
    let cache = DpCache::with_problem(VecBackend::with_capacity(91), Fibonacci);
    assert_eq!(cache.get(&10), 55);
    assert_eq!(cache.get(&20), 6765);
    // Deep chain; naive recursion would never finish
    assert_eq!(cache.get(&90), 2_880_067_194_370_816_120);
}

#[test]
fn test_diamond_computes_shared_dependency_once() {
    // 0 depends on 1 and 2, both depend on 3
    struct Diamond {
        count: Rc<Cell<u32>>,
    }

    impl DpProblem<usize, i32> for Diamond {
        fn deps(&self, n: &usize) -> Vec<usize> {
            match *n {
                0 => vec![1, 2],
                1 | 2 => vec![3],
                _ => vec![],
            }
        }

        fn compute(&self, n: &usize, deps: Vec<i32>) -> i32 {
            self.count.set(self.count.get() + 1);
            match *n {
                0 => deps[0] + deps[1],
                1 => deps[0] * 2,
                2 => deps[0] * 3,
                _ => 1,
            }
        }
    }

    let count = Rc::new(Cell::new(0));
    let cache = DpCache::with_problem(
        VecBackend::new(),
        Diamond {
            count: Rc::clone(&count),
        },
    );

    assert_eq!(cache.get(&0), 5);
    assert_eq!(count.get(), 4);

    // Cached: no recomputation
    assert_eq!(cache.get(&0), 5);
    assert_eq!(cache.get(&3), 1);
    assert_eq!(count.get(), 4);
}

#[test]
fn test_hashmap_backend_with_tuple_index() {
    // Lattice paths from (0, 0) to (r, c)
    let cache = DpCache::new(
        HashMapBackend::new(),
        |&(r, c): &(u32, u32)| {
            let mut deps = Vec::new();
            if r > 0 {
                deps.push((r - 1, c));
            }
            if c > 0 {
                deps.push((r, c - 1));
            }
            deps
        },
        |_: &(u32, u32), deps: Vec<u64>| if deps.is_empty() { 1 } else { deps.iter().sum() },
    );

    assert_eq!(cache.get(&(2, 2)), 6);
    assert_eq!(cache.get(&(4, 4)), 70);
    assert_eq!(cache.get(&(0, 7)), 1);
}

#[test]
fn test_string_keys() {
    let edges: HashMap<&str, Vec<&str>> =
        HashMap::from([("a", vec!["b", "c"]), ("b", vec!["c"]), ("c", vec![])]);
    let cache = DpCache::new(
        HashMapBackend::new(),
        |node: &&str| edges.get(node).cloned().unwrap_or_default(),
        |_: &&str, deps: Vec<usize>| 1 + deps.into_iter().max().unwrap_or(0),
    );

    // Longest chain starting at each node
    assert_eq!(cache.get(&"a"), 3);
    assert_eq!(cache.get(&"c"), 1);
}
