use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 6, tags = ["parsing", "math"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Mul,
}

impl Op {
    /// `None` when the result does not fit in a `u64`
    fn apply(self, numbers: &[u64]) -> Option<u64> {
        match self {
            Op::Add => numbers.iter().try_fold(0u64, |acc, &n| acc.checked_add(n)),
            Op::Mul => numbers.iter().try_fold(1u64, |acc, &n| acc.checked_mul(n)),
        }
    }
}

/// One problem: the block of digit rows between two blank columns
#[derive(Debug)]
pub struct Problem {
    op: Op,
    /// Numbers written left to right on each row
    row_numbers: Vec<u64>,
    /// Numbers written top to bottom in each column
    column_numbers: Vec<u64>,
}

fn digits_to_number(bytes: impl Iterator<Item = u8>) -> anyhow::Result<Option<u64>> {
    bytes.filter(u8::is_ascii_digit).try_fold(None, |acc: Option<u64>, b| {
        acc.unwrap_or(0)
            .checked_mul(10)
            .and_then(|n| n.checked_add(u64::from(b - b'0')))
            .map(Some)
            .ok_or_else(|| anyhow!("number does not fit in 64 bits"))
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Problem>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let lines: Vec<&str> = input.lines().filter(|line| !line.trim().is_empty()).collect();
        let Some((op_line, number_lines)) = lines.split_last() else {
            return Err(ParseError::MissingData("empty worksheet".to_string()));
        };
        if number_lines.is_empty() {
            return Err(ParseError::MissingData("no number rows above the operators".to_string()));
        }

        let width = lines.iter().map(|line| line.len()).max().unwrap_or(0);
        let pad = |line: &str| {
            let mut row = line.as_bytes().to_vec();
            row.resize(width, b' ');
            row
        };
        let ops = pad(op_line);
        let rows: Vec<Vec<u8>> = number_lines.iter().map(|line| pad(line)).collect();

        for (row_idx, row) in rows.iter().enumerate() {
            if let Some(bad) = row.iter().find(|b| !b.is_ascii_digit() && **b != b' ') {
                return Err(ParseError::InvalidFormat(format!(
                    "(line {}) unexpected character {:?}",
                    row_idx + 1,
                    *bad as char
                )));
            }
        }

        let blank_column = |col: usize| ops[col] == b' ' && rows.iter().all(|row| row[col] == b' ');
        let mut problems = Vec::new();
        let mut col = 0;
        while col < width {
            if blank_column(col) {
                col += 1;
                continue;
            }
            let start = col;
            while col < width && !blank_column(col) {
                col += 1;
            }
            problems.push(build_problem(&ops, &rows, start, col).map_err(|e| ParseError::InvalidFormat(e.to_string()))?);
        }
        Ok(problems)
    }
}

fn build_problem(ops: &[u8], rows: &[Vec<u8>], start: usize, end: usize) -> anyhow::Result<Problem> {
    let symbols: Vec<u8> = ops[start..end].iter().copied().filter(|b| *b != b' ').collect();
    let op = match symbols.as_slice() {
        [b'+'] => Op::Add,
        [b'*'] => Op::Mul,
        [] => return Err(anyhow!("(column {}) problem has no operator", start + 1)),
        _ => return Err(anyhow!("(column {}) expected a single `+` or `*`", start + 1)),
    };
    let block: Vec<&[u8]> = rows.iter().map(|row| &row[start..end]).collect();
    let numbers = |digits: Vec<anyhow::Result<Option<u64>>>| {
        digits
            .into_iter()
            .filter_map(Result::transpose)
            .collect::<anyhow::Result<Vec<u64>>>()
            .map_err(|e| anyhow!("(column {}) {}", start + 1, e))
    };
    let row_numbers = numbers(block.iter().map(|row| digits_to_number(row.iter().copied())).collect())?;
    let column_numbers =
        numbers((0..end - start).map(|col| digits_to_number(block.iter().map(|row| row[col]))).collect())?;
    Ok(Problem {
        op,
        row_numbers,
        column_numbers,
    })
}

fn grand_total(problems: &[Problem], numbers: impl Fn(&Problem) -> &[u64]) -> Result<u64, SolveError> {
    problems.iter().enumerate().try_fold(0u64, |total, (idx, problem)| {
        problem
            .op
            .apply(numbers(problem))
            .and_then(|value| total.checked_add(value))
            .ok_or_else(|| SolveError::failed(format!("total overflows u64 at problem {}", idx + 1)))
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(grand_total(shared, |p| p.row_numbers.as_slice())?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(grand_total(shared, |p| p.column_numbers.as_slice())?.to_string())
    }
}
