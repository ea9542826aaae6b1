use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::trace;

use crate::utils::grid::Grid;

/// A roll is reachable by forklift with fewer than this many rolls around it
const CROWDED: usize = 4;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 4, tags = ["grid"])]
pub struct Solver;

impl AocParser for Solver {
    /// `true` where a paper roll sits
    type SharedData<'a> = Grid<bool>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse(input, |c| match c {
            '@' => Ok(true),
            '.' => Ok(false),
            _ => Err(ParseError::InvalidFormat(format!("unexpected cell {c:?}"))),
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(accessible_rolls(shared).len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Work on a copy so part 1 still sees the unmodified layout
        let mut grid = shared.clone();
        let mut removed = 0;
        loop {
            let batch = accessible_rolls(&grid);
            if batch.is_empty() {
                break;
            }
            trace!(count = batch.len(), "removing rolls");
            removed += batch.len();
            for (row, col) in batch {
                if let Some(cell) = grid.get_mut(row, col) {
                    *cell = false;
                }
            }
        }
        Ok(removed.to_string())
    }
}

fn accessible_rolls(grid: &Grid<bool>) -> Vec<(usize, usize)> {
    grid.positions()
        .filter(|&(row, col)| grid.get(row, col) == Some(&true))
        .filter(|&(row, col)| {
            grid.neighbors8(row, col)
                .filter(|&(r, c)| grid.get(r, c) == Some(&true))
                .count()
                < CROWDED
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SAMPLE: &str = "\
..@@.@@@@.
@@@.@.@.@@
@@@@@.@.@@
@.@@@@..@.
@@.@@@@.@@
.@@@@@@@.@
.@.@.@.@@@
@.@@@.@@@@
.@@@@@@@@.
@.@.@@@.@.
";

    #[test]
    fn test_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "13");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "43");
        // Part 2 leaves the parsed grid intact
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "13");
    }

    #[test]
    fn test_solid_block_peels_from_corners() {
        let mut shared = Solver::parse("@@@\n@@@\n@@@").unwrap();
        // Only the corners have three neighbours
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "4");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "9");
    }

    #[test]
    fn test_rejects_unknown_cells() {
        assert!(Solver::parse("@.#").is_err());
    }
}
