use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::debug;

use crate::utils::grid::Grid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 7, tags = ["grid", "simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Empty,
    Start,
    Splitter,
}

#[derive(Debug)]
pub struct Manifold {
    grid: Grid<Cell>,
    start: (usize, usize),
    beams: Option<BeamResult>,
}

#[derive(Debug, Clone, Copy)]
struct BeamResult {
    splits: u64,
    timelines: u64,
}

impl AocParser for Solver {
    type SharedData<'a> = Manifold;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input, |c| match c {
            '.' => Ok(Cell::Empty),
            'S' => Ok(Cell::Start),
            '^' => Ok(Cell::Splitter),
            _ => Err(ParseError::InvalidFormat(format!("unexpected cell {c:?}"))),
        })?;

        let mut starts = grid
            .positions()
            .filter(|&(row, col)| grid.get(row, col) == Some(&Cell::Start));
        let start = starts
            .next()
            .ok_or_else(|| ParseError::MissingData("no `S` in the manifold".to_string()))?;
        if starts.next().is_some() {
            return Err(ParseError::InvalidFormat("more than one `S`".to_string()));
        }

        Ok(Manifold {
            grid,
            start,
            beams: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(trace_beams(shared).splits.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(trace_beams(shared).timelines.to_string())
    }
}

/// Sweeps the beam front row by row, tracking how many timelines share
/// each column. Beams in the same column merge for split counting.
fn trace_beams(manifold: &mut Manifold) -> BeamResult {
    let grid = &manifold.grid;
    let (start_row, start_col) = manifold.start;
    *manifold.beams.get_or_insert_with(|| {
        let width = grid.width();
        let mut timelines = vec![0u64; width];
        timelines[start_col] = 1;
        let mut splits = 0;

        for row in start_row + 1..grid.height() {
            let mut next = vec![0u64; width];
            for (col, &count) in timelines.iter().enumerate().filter(|&(_, &n)| n > 0) {
                if grid.get(row, col) == Some(&Cell::Splitter) {
                    splits += 1;
                    if col > 0 {
                        next[col - 1] += count;
                    }
                    if col + 1 < width {
                        next[col + 1] += count;
                    }
                } else {
                    next[col] += count;
                }
            }
            timelines = next;
        }

        let result = BeamResult {
            splits,
            timelines: timelines.iter().sum(),
        };
        debug!(?result, "beams reached the bottom");
        result
    })
}
