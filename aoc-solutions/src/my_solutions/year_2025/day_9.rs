use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use tracing::trace;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 9, tags = ["geometry"])]
pub struct Solver;

/// Coordinates stay strictly inside `±2^62` so doubled sums fit in an `i64`
const COORD_LIMIT: i64 = 1 << 62;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Point {
    x: i64,
    y: i64,
}

/// Axis-aligned bounds, inclusive on both ends
#[derive(Debug, Clone, Copy)]
struct Rect {
    min: Point,
    max: Point,
}

impl Rect {
    fn spanning(a: Point, b: Point) -> Self {
        Self {
            min: Point { x: a.x.min(b.x), y: a.y.min(b.y) },
            max: Point { x: a.x.max(b.x), y: a.y.max(b.y) },
        }
    }

    fn area(&self) -> u128 {
        let side = |lo: i64, hi: i64| u128::from(hi.abs_diff(lo)) + 1;
        side(self.min.x, self.max.x) * side(self.min.y, self.max.y)
    }

    /// Whether part of `segment` with positive length lies strictly inside
    fn cut_by(&self, segment: &Rect) -> bool {
        let crosses_x = self.min.x < segment.max.x && segment.min.x < self.max.x;
        let crosses_y = self.min.y < segment.max.y && segment.min.y < self.max.y;
        let inside_x = self.min.x < segment.min.x && segment.min.x < self.max.x;
        let inside_y = self.min.y < segment.min.y && segment.min.y < self.max.y;
        if segment.min.x == segment.max.x {
            inside_x && crosses_y
        } else {
            inside_y && crosses_x
        }
    }
}

#[derive(Debug)]
pub struct Floor {
    red: Vec<Point>,
    /// Loop segments as degenerate rectangles
    edges: Vec<Rect>,
}

impl Floor {
    /// Whether the doubled-coordinate point `(x2, y2)` lies inside or on the loop
    fn contains_doubled(&self, x2: i64, y2: i64) -> bool {
        let mut inside = false;
        for edge in &self.edges {
            let (lx, hx, ly, hy) = (2 * edge.min.x, 2 * edge.max.x, 2 * edge.min.y, 2 * edge.max.y);
            if (lx..=hx).contains(&x2) && (ly..=hy).contains(&y2) {
                return true;
            }
            // Ray to +x, counting vertical edges over a half-open y span
            if lx == hx && lx > x2 && ly <= y2 && y2 < hy {
                inside = !inside;
            }
        }
        inside
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Floor;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let red = input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(line_idx, line)| -> anyhow::Result<Point> {
                let (x, y) = line
                    .split_once(',')
                    .ok_or_else(|| anyhow!("(line {}) expected `x,y`", line_idx + 1))?;
                Ok(Point {
                    x: parse_coordinate(x).map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))?,
                    y: parse_coordinate(y).map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))?,
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        if red.len() < 2 {
            return Err(ParseError::MissingData("need at least two red tiles".to_string()));
        }

        let mut edges = Vec::with_capacity(red.len());
        for (idx, (&a, &b)) in red.iter().circular_tuple_windows().enumerate() {
            if a.x != b.x && a.y != b.y {
                return Err(ParseError::InvalidFormat(format!(
                    "(line {}) tiles {a:?} and {b:?} are not in a shared row or column",
                    idx + 1
                )));
            }
            edges.push(Rect::spanning(a, b));
        }

        Ok(Floor { red, edges })
    }
}

fn parse_coordinate(text: &str) -> anyhow::Result<i64> {
    let value = text.trim().parse::<i64>()?;
    if value <= -COORD_LIMIT || value >= COORD_LIMIT {
        return Err(anyhow!("coordinate {value} out of range"));
    }
    Ok(value)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let best = shared
            .red
            .iter()
            .tuple_combinations()
            .map(|(&a, &b)| Rect::spanning(a, b).area())
            .max()
            .unwrap_or(0);
        Ok(best.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let candidates = shared
            .red
            .iter()
            .tuple_combinations()
            .map(|(&a, &b)| Rect::spanning(a, b))
            .sorted_unstable_by_key(|rect| std::cmp::Reverse(rect.area()));

        for (checked, rect) in candidates.enumerate() {
            if shared.edges.iter().any(|edge| rect.cut_by(edge)) {
                continue;
            }
            // Nothing crosses the interior, so it is all inside or all outside
            if shared.contains_doubled(rect.min.x + rect.max.x, rect.min.y + rect.max.y) {
                trace!(checked, ?rect, "largest enclosed rectangle");
                return Ok(rect.area().to_string());
            }
        }
        Err(SolveError::failed("no rectangle fits inside the loop"))
    }
}
