//! Sequential executor for running solvers

use crate::config::Config;
use crate::error::ExecutorError;
use crate::inputs::{InputKind, InputStore};
use aoc_solver::{SolverError, SolverRegistry};
use chrono::TimeDelta;
use itertools::Itertools;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info_span};

/// Result from a single part
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, ExecutorError>,
    /// Parse time of the input this part ran on, when parsing succeeded
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

impl SolverResult {
    fn failed(year: u16, day: u8, part: u8, error: ExecutorError) -> Self {
        Self {
            year,
            day,
            part,
            answer: Err(error),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Runs work items one after another in (year, day, part) order
pub struct Executor {
    registry: SolverRegistry,
    inputs: InputStore,
    input_kind: InputKind,
    year: u16,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            inputs: InputStore::new(config.inputs_dir.clone()),
            input_kind: config.input_kind,
            year: config.year,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    pub fn inputs(&self) -> &InputStore {
        &self.inputs
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .storage()
            .iter_info()
            .filter(|info| info.year == self.year)
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: filter_parts(self.part_filter, info.parts),
            })
            .collect()
    }

    /// Input files the work items need that are not on disk
    pub fn missing_inputs(&self, work_items: &[WorkItem]) -> Vec<PathBuf> {
        work_items
            .iter()
            .flat_map(|w| {
                w.parts
                    .clone()
                    .map(move |part| self.inputs.path(w.year, w.day, part, self.input_kind))
            })
            .unique()
            .filter(|path| !path.is_file())
            .collect()
    }

    /// Execute all work items, handing each result to `on_result` as soon as
    /// it is ready
    pub fn execute<F>(&self, work_items: &[WorkItem], mut on_result: F)
    where
        F: FnMut(SolverResult),
    {
        for work in work_items {
            let _span = info_span!("day", year = work.year, day = work.day).entered();
            // Parts sharing an input file share one parsed instance
            let by_input = work
                .parts
                .clone()
                .map(|part| (self.inputs.path(work.year, work.day, part, self.input_kind), part))
                .chunk_by(|(path, _)| path.clone());

            for (path, group) in &by_input {
                let parts: Vec<u8> = group.map(|(_, part)| part).collect();
                self.run_parts(work, &path, &parts, &mut on_result);
            }
        }
    }

    fn run_parts<F>(&self, work: &WorkItem, path: &Path, parts: &[u8], on_result: &mut F)
    where
        F: FnMut(SolverResult),
    {
        let (year, day) = (work.year, work.day);
        debug!(path = %path.display(), ?parts, "loading input");

        let fail_all = |error: ExecutorError, on_result: &mut F| {
            for &part in parts {
                on_result(SolverResult::failed(year, day, part, error.clone()));
            }
        };

        let input = match self.inputs.read(path) {
            Ok(input) => input,
            Err(source) => {
                let source = Arc::new(source);
                return fail_all(ExecutorError::Input { year, day, source }, on_result);
            }
        };

        let mut solver = match self.registry.create_solver(year, day, &input) {
            Ok(solver) => solver,
            Err(error) => return fail_all(error.into(), on_result),
        };

        let parse_duration = solver.parse_duration();
        for &part in parts {
            let (answer, solve_duration): (Result<String, ExecutorError>, _) = match solver.solve(part) {
                Ok(result) => {
                    let duration = result.duration();
                    (Ok(result.answer), duration)
                }
                Err(e) => (Err(SolverError::from(e).into()), TimeDelta::zero()),
            };
            on_result(SolverResult {
                year,
                day,
                part,
                answer,
                parse_duration: Some(parse_duration),
                solve_duration,
            });
        }
    }
}

/// Parts to run for a solver with `max_parts` parts
///
/// A requested part beyond `max_parts` is kept so the solver reports it as
/// out of range.
fn filter_parts(part_filter: Option<u8>, max_parts: u8) -> RangeInclusive<u8> {
    match part_filter {
        Some(p) => p..=p,
        None => 1..=max_parts,
    }
}
