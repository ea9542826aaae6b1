use std::collections::HashMap;

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::debug;

use crate::utils::dp_cache::{DpCache, VecBackend};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 11, tags = ["graph", "dp"])]
pub struct Solver;

/// Device graph with names interned to dense ids
#[derive(Debug)]
pub struct Reactor<'a> {
    ids: HashMap<&'a str, usize>,
    outputs: Vec<Vec<usize>>,
}

impl<'a> Reactor<'a> {
    fn intern(&mut self, name: &'a str) -> usize {
        let next = self.ids.len();
        let id = *self.ids.entry(name).or_insert(next);
        if id == next {
            self.outputs.push(Vec::new());
        }
        id
    }

    fn id(&self, name: &str) -> Option<usize> {
        self.ids.get(name).copied()
    }

    /// Number of distinct paths from `from` to `to`
    fn count_paths(&self, from: usize, to: usize) -> u64 {
        let cache = DpCache::new(
            VecBackend::with_capacity(self.outputs.len()),
            |&node: &usize| {
                if node == to {
                    Vec::new()
                } else {
                    self.outputs[node].clone()
                }
            },
            |&node: &usize, paths: Vec<u64>| if node == to { 1 } else { paths.iter().sum() },
        );
        cache.get(&from)
    }

    /// Paths between two named devices; a missing target has no paths
    fn named_paths(&self, from: &str, to: &str) -> Result<u64, SolveError> {
        let start = self
            .id(from)
            .ok_or_else(|| SolveError::failed(format!("no device named {from:?}")))?;
        Ok(self.id(to).map_or(0, |end| self.count_paths(start, end)))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Reactor<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut reactor = Reactor {
            ids: HashMap::new(),
            outputs: Vec::new(),
        };
        for (line_idx, line) in input.lines().map(str::trim).enumerate() {
            if line.is_empty() {
                continue;
            }
            let (device, outputs) = line
                .split_once(':')
                .ok_or_else(|| anyhow!("(line {}) expected `name: outputs...`", line_idx + 1))
                .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
            let device = reactor.intern(device.trim());
            for output in outputs.split_whitespace() {
                let output = reactor.intern(output);
                reactor.outputs[device].push(output);
            }
        }
        if reactor.ids.is_empty() {
            return Err(ParseError::MissingData("no devices".to_string()));
        }
        Ok(reactor)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.named_paths("you", "out").map(|n| n.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // The graph is acyclic, so at most one of the two orders has paths
        let dac_first = shared.named_paths("svr", "dac")?
            * shared.named_paths("dac", "fft").unwrap_or(0)
            * shared.named_paths("fft", "out").unwrap_or(0);
        let fft_first = shared.named_paths("svr", "fft")?
            * shared.named_paths("fft", "dac").unwrap_or(0)
            * shared.named_paths("dac", "out").unwrap_or(0);
        debug!(dac_first, fft_first, "paths through both checkpoints");
        Ok((dac_first + fft_first).to_string())
    }
}
