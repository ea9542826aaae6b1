use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 3, tags = ["greedy"])]
pub struct Solver;

impl AocParser for Solver {
    /// One bank of battery joltages per line
    type SharedData<'a> = Vec<Vec<u8>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(line_idx, line)| {
                line.bytes()
                    .map(|b| match b {
                        b'0'..=b'9' => Ok(b - b'0'),
                        _ => Err(anyhow!("(line {}) not a digit: {:?}", line_idx + 1, b as char)),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        total_joltage(shared, 2).map(|v| v.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        total_joltage(shared, 12).map(|v| v.to_string())
    }
}

fn total_joltage(banks: &[Vec<u8>], count: usize) -> Result<u64, SolveError> {
    banks.iter().map(|bank| max_joltage(bank, count)).sum()
}

/// Largest number formed by `count` digits of `bank`, kept in order.
///
/// Each pick is the leftmost maximum among the digits that still leave
/// enough room for the remaining picks.
fn max_joltage(bank: &[u8], count: usize) -> Result<u64, SolveError> {
    if bank.len() < count {
        return Err(SolveError::failed(format!(
            "bank of {} batteries cannot supply {count}",
            bank.len()
        )));
    }

    let mut value = 0u64;
    let mut start = 0;
    for remaining in (0..count).rev() {
        let window = &bank[start..bank.len() - remaining];
        // max_by_key keeps the last maximum, so search from the right
        let (offset, &digit) = window
            .iter()
            .enumerate()
            .rev()
            .max_by_key(|&(_, d)| *d)
            .ok_or_else(|| SolveError::failed("empty selection window"))?;
        value = value * 10 + digit as u64;
        start += offset + 1;
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SAMPLE: &str = "987654321111111\n811111111111119\n234234234234278\n818181911112111\n";

    #[test]
    fn test_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "357");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "3121910778619");
    }

    #[test]
    fn test_per_bank_values() {
        let banks = Solver::parse(SAMPLE).unwrap();
        let pairs: Vec<u64> = banks.iter().map(|b| max_joltage(b, 2).unwrap()).collect();
        assert_eq!(pairs, vec![98, 89, 78, 92]);
        assert_eq!(max_joltage(&banks[0], 12).unwrap(), 987654321111);
    }

    #[test]
    fn test_short_bank_fails() {
        let mut shared = Solver::parse("12345").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "45");
        assert!(matches!(
            Solver::solve_part(&mut shared, 2),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_rejects_non_digits() {
        assert!(Solver::parse("12a4").is_err());
    }
}
