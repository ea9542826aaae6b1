use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 5, tags = ["intervals"])]
pub struct Solver;

#[derive(Debug)]
pub struct Inventory {
    /// Fresh ranges, sorted and merged so they are disjoint and non-adjacent
    fresh: Vec<(u64, u64)>,
    available: Vec<u64>,
}

impl AocParser for Solver {
    type SharedData<'a> = Inventory;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let input = input.replace("\r\n", "\n");
        let (ranges, ids) = input
            .trim()
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("blank line between ranges and IDs".to_string()))?;

        let ranges = ranges
            .lines()
            .enumerate()
            .map(|(line_idx, line)| -> anyhow::Result<(u64, u64)> {
                let (start, end) = line
                    .trim()
                    .split_once('-')
                    .ok_or_else(|| anyhow!("(range line {}) expected `start-end`", line_idx + 1))?;
                let start: u64 = start.parse()?;
                let end: u64 = end.parse()?;
                if start > end {
                    return Err(anyhow!("(range line {}) start after end", line_idx + 1));
                }
                Ok((start, end))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        let available = ids
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.parse::<u64>().map_err(|e| anyhow!("bad ID {line:?}: {e}")))
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        Ok(Inventory {
            fresh: merge_ranges(ranges),
            available,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let fresh = &shared.fresh;
        let count = shared
            .available
            .iter()
            .filter(|&&id| {
                // Last range starting at or before `id`
                let idx = fresh.partition_point(|&(start, _)| start <= id);
                idx > 0 && id <= fresh[idx - 1].1
            })
            .count();
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Disjoint ranges cover at most 2^64 IDs
        let total: u128 = shared
            .fresh
            .iter()
            .map(|&(start, end)| u128::from(end - start) + 1)
            .sum();
        Ok(total.to_string())
    }
}

fn merge_ranges(mut ranges: Vec<(u64, u64)>) -> Vec<(u64, u64)> {
    ranges.sort_unstable();
    let mut merged: Vec<(u64, u64)> = Vec::with_capacity(ranges.len());
    for (start, end) in ranges {
        match merged.last_mut() {
            Some(last) if start <= last.1.saturating_add(1) => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }
    merged
}
