use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use tracing::trace;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 10, tags = ["linear-algebra", "search"])]
pub struct Solver;

#[derive(Debug)]
pub struct Machine {
    /// Bit `i` set when light `i` must end up on
    lights: u64,
    /// Counter indices each button touches
    buttons: Vec<Vec<usize>>,
    joltage: Vec<i64>,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Machine>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(line_idx, line)| {
                parse_machine(line).with_context(|| format!("(line {})", line_idx + 1))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

fn parse_machine(line: &str) -> anyhow::Result<Machine> {
    let mut lights = None;
    let mut buttons = Vec::new();
    let mut joltage = None;

    for token in line.split_whitespace() {
        let bytes = token.as_bytes();
        // Delimiters are ASCII, so the body slice stays on char boundaries
        let (Some(&open), Some(&close), Some(body)) = (
            bytes.first(),
            bytes.last(),
            token.get(1..token.len().saturating_sub(1)),
        ) else {
            return Err(anyhow!("bad token {token:?}"));
        };
        match (open, close) {
            (b'[', b']') => {
                if body.len() > 64 {
                    return Err(anyhow!("too many lights: {}", body.len()));
                }
                let mut mask = 0u64;
                for (i, c) in body.chars().enumerate() {
                    match c {
                        '#' => mask |= 1 << i,
                        '.' => {}
                        _ => return Err(anyhow!("bad light {c:?}")),
                    }
                }
                lights = Some((mask, body.len()));
            }
            (b'(', b')') => buttons.push(parse_list::<usize>(body)?),
            (b'{', b'}') => joltage = Some(parse_list::<i64>(body)?),
            _ => return Err(anyhow!("bad token {token:?}")),
        }
    }

    let (lights, light_count) = lights.ok_or_else(|| anyhow!("missing light diagram"))?;
    let joltage = joltage.ok_or_else(|| anyhow!("missing joltage requirements"))?;
    if joltage.len() != light_count {
        return Err(anyhow!(
            "{} lights but {} joltage counters",
            light_count,
            joltage.len()
        ));
    }
    if let Some(bad) = buttons.iter().flatten().find(|&&i| i >= light_count) {
        return Err(anyhow!("button wired to missing counter {bad}"));
    }
    if joltage.iter().any(|&j| j < 0) {
        return Err(anyhow!("joltage must be non negative"));
    }

    Ok(Machine {
        lights,
        buttons,
        joltage,
    })
}

fn parse_list<T: std::str::FromStr>(body: &str) -> anyhow::Result<Vec<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    body.split(',')
        .map(|v| v.trim().parse::<T>().with_context(|| format!("bad number {v:?}")))
        .collect()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut total = 0;
        for (idx, machine) in shared.iter().enumerate() {
            total += fewest_toggles(machine).ok_or_else(|| {
                SolveError::failed(format!("machine {} cannot reach its light pattern", idx + 1))
            })?;
        }
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut total = 0;
        for (idx, machine) in shared.iter().enumerate() {
            let presses = fewest_joltage_presses(machine).ok_or_else(|| {
                SolveError::failed(format!("machine {} cannot reach its joltage", idx + 1))
            })?;
            trace!(machine = idx + 1, presses, "joltage configured");
            total += presses;
        }
        Ok(total.to_string())
    }
}

/// Pressing a button twice cancels out, so the answer is the smallest subset
/// of buttons whose toggles XOR to the pattern.
fn fewest_toggles(machine: &Machine) -> Option<usize> {
    let masks: Vec<u64> = machine
        .buttons
        .iter()
        .map(|wires| wires.iter().fold(0u64, |m, &i| m | 1 << i))
        .collect();
    (0..=masks.len()).find(|&k| {
        masks
            .iter()
            .combinations(k)
            .any(|combo| combo.into_iter().fold(0, |acc, m| acc ^ m) == machine.lights)
    })
}

/// Augmented `counters x (buttons + 1)` system after fraction-free
/// Gauss-Jordan elimination.
struct ReducedSystem {
    rows: Vec<Vec<i64>>,
    /// Pivot column of row `i`, for the first `pivots.len()` rows
    pivots: Vec<usize>,
    free: Vec<usize>,
}

impl ReducedSystem {
    fn new(machine: &Machine) -> Option<Self> {
        let n = machine.buttons.len();
        let mut rows: Vec<Vec<i64>> = machine
            .joltage
            .iter()
            .enumerate()
            .map(|(counter, &target)| {
                let mut row: Vec<i64> = machine
                    .buttons
                    .iter()
                    .map(|wires| i64::from(wires.contains(&counter)))
                    .collect();
                row.push(target);
                row
            })
            .collect();

        let mut pivots = Vec::new();
        for col in 0..n {
            let r = pivots.len();
            let Some(p) = (r..rows.len()).find(|&i| rows[i][col] != 0) else {
                continue;
            };
            rows.swap(r, p);
            let pivot_row = rows[r].clone();
            for (i, row) in rows.iter_mut().enumerate() {
                if i == r || row[col] == 0 {
                    continue;
                }
                let factor = row[col];
                for (v, &pv) in row.iter_mut().zip(&pivot_row) {
                    *v = *v * pivot_row[col] - pv * factor;
                }
                normalize(row);
            }
            pivots.push(col);
        }

        // Leftover rows are all-zero; a nonzero right-hand side means no solution
        if rows[pivots.len()..].iter().any(|row| row[n] != 0) {
            return None;
        }
        let free = (0..n).filter(|c| !pivots.contains(c)).collect();
        Some(Self { rows, pivots, free })
    }

    /// Total presses with the given free-variable values, if every pivot
    /// variable comes out a non-negative integer.
    fn total_presses(&self, free_values: &[i64]) -> Option<i64> {
        let rhs = self.rows.first().map_or(0, |row| row.len() - 1);
        let mut total: i64 = free_values.iter().sum();
        for (row, &col) in self.rows.iter().zip(&self.pivots) {
            let rest: i64 = self.free.iter().zip(free_values).map(|(&f, &v)| row[f] * v).sum();
            let value = row[rhs] - rest;
            if value % row[col] != 0 {
                return None;
            }
            let presses = value / row[col];
            if presses < 0 {
                return None;
            }
            total += presses;
        }
        Some(total)
    }
}

fn normalize(row: &mut [i64]) {
    let g = row.iter().fold(0, |g, &v| gcd(g, v.abs()));
    if g > 1 {
        row.iter_mut().for_each(|v| *v /= g);
    }
}

fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

fn fewest_joltage_presses(machine: &Machine) -> Option<i64> {
    let system = ReducedSystem::new(machine)?;
    // A button can't be pressed more often than any counter it feeds allows
    let bounds: Vec<i64> = system
        .free
        .iter()
        .map(|&b| {
            machine.buttons[b]
                .iter()
                .map(|&c| machine.joltage[c])
                .min()
                .unwrap_or(0)
        })
        .collect();

    let mut best = None;
    let mut values = vec![0; bounds.len()];
    search_free(&system, &bounds, &mut values, 0, 0, &mut best);
    best
}

/// Depth-first over free-variable values, pruned once the free presses
/// alone reach the best total.
fn search_free(
    system: &ReducedSystem,
    bounds: &[i64],
    values: &mut [i64],
    depth: usize,
    partial: i64,
    best: &mut Option<i64>,
) {
    if best.is_some_and(|b| partial >= b) {
        return;
    }
    if depth == bounds.len() {
        if let Some(total) = system.total_presses(values) {
            *best = Some(best.map_or(total, |b| b.min(total)));
        }
        return;
    }
    for v in 0..=bounds[depth] {
        values[depth] = v;
        search_free(system, bounds, values, depth + 1, partial + v, best);
    }
    values[depth] = 0;
}
