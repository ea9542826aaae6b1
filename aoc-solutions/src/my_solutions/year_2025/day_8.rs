use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use tracing::debug;

/// Inputs this small are the published example, which uses fewer connections
const SAMPLE_MAX_BOXES: usize = 20;
const SAMPLE_CONNECTIONS: usize = 10;
const FULL_CONNECTIONS: usize = 1000;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 8, tags = ["graph", "union-find"])]
pub struct Solver;

#[derive(Debug)]
pub struct Playground {
    boxes: Vec<[i64; 3]>,
    /// Every pair `(i, j)` with `i < j`, closest first
    pairs: Vec<(usize, usize)>,
}

impl AocParser for Solver {
    type SharedData<'a> = Playground;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let boxes = input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(line_idx, line)| -> anyhow::Result<[i64; 3]> {
                let coords: Vec<i64> = line
                    .split(',')
                    .map(|v| v.trim().parse::<i64>())
                    .collect::<Result<_, _>>()
                    .map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))?;
                coords
                    .try_into()
                    .map_err(|_| anyhow!("(line {}) expected `x,y,z`", line_idx + 1))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        if boxes.len() < 2 {
            return Err(ParseError::MissingData("need at least two junction boxes".to_string()));
        }

        let mut pairs: Vec<(usize, usize)> = (0..boxes.len()).tuple_combinations().collect();
        // Stable sort keeps input order among equal distances
        pairs.sort_by_cached_key(|&(i, j)| distance_squared(&boxes[i], &boxes[j]));

        Ok(Playground { boxes, pairs })
    }
}

fn distance_squared(a: &[i64; 3], b: &[i64; 3]) -> i64 {
    a.iter().zip(b).map(|(p, q)| (p - q) * (p - q)).sum()
}

/// Disjoint-set forest with union by size
struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            components: n,
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Returns `false` when `a` and `b` were already joined
    fn union(&mut self, a: usize, b: usize) -> bool {
        let (mut a, mut b) = (self.find(a), self.find(b));
        if a == b {
            return false;
        }
        if self.size[a] < self.size[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        self.size[a] += self.size[b];
        self.components -= 1;
        true
    }

    fn component_sizes(&mut self) -> Vec<usize> {
        let mut sizes = Vec::with_capacity(self.components);
        for x in 0..self.parent.len() {
            if self.find(x) == x {
                sizes.push(self.size[x]);
            }
        }
        sizes
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let connections = if shared.boxes.len() <= SAMPLE_MAX_BOXES {
            SAMPLE_CONNECTIONS
        } else {
            FULL_CONNECTIONS
        };
        debug!(connections, boxes = shared.boxes.len(), "connecting closest pairs");

        let mut circuits = UnionFind::new(shared.boxes.len());
        for &(i, j) in shared.pairs.iter().take(connections) {
            circuits.union(i, j);
        }
        let product: usize = circuits
            .component_sizes()
            .into_iter()
            .sorted_unstable_by(|a, b| b.cmp(a))
            .take(3)
            .product();
        Ok(product.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut circuits = UnionFind::new(shared.boxes.len());
        for &(i, j) in &shared.pairs {
            if circuits.union(i, j) && circuits.components == 1 {
                return Ok((shared.boxes[i][0] * shared.boxes[j][0]).to_string());
            }
        }
        Err(SolveError::failed("boxes never formed a single circuit"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SAMPLE: &str = "\
162,817,812
57,618,57
906,360,560
592,479,940
352,342,300
466,668,158
542,29,236
431,825,988
739,650,466
52,470,668
216,146,977
819,987,18
117,168,530
805,96,715
346,949,466
970,615,88
941,993,340
862,61,35
984,92,344
425,690,689
";

    #[test]
    fn test_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "40");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "25272");
    }

    #[test]
    fn test_closest_pair_first() {
        let shared = Solver::parse(SAMPLE).unwrap();
        // 162,817,812 and 425,690,689
        assert_eq!(shared.pairs[0], (0, 19));
    }

    #[test]
    fn test_union_find_tracks_components() {
        let mut uf = UnionFind::new(4);
        assert!(uf.union(0, 1));
        assert!(!uf.union(1, 0));
        assert!(uf.union(2, 3));
        assert_eq!(uf.components, 2);
        assert_eq!(uf.component_sizes(), vec![2, 2]);
    }

    #[test]
    fn test_parse_errors() {
        assert!(Solver::parse("1,2\n3,4,5").is_err());
        assert!(matches!(Solver::parse("1,2,3"), Err(ParseError::MissingData(_))));
    }
}
