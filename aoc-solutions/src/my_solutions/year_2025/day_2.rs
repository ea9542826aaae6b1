use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

/// Enough digits for any `u64` ID
const MAX_DIGITS: u32 = 19;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 2, tags = ["math", "digits"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<RangeInclusive<u64>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .split(',')
            .map(str::trim)
            .filter(|range| !range.is_empty())
            .enumerate()
            .map(|(idx, range)| {
                parse_range(range).map_err(|e| anyhow!("(range {}) {}", idx + 1, e))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn parse_range(range: &str) -> anyhow::Result<RangeInclusive<u64>> {
    let (start, end) = range
        .split_once('-')
        .ok_or_else(|| anyhow!("expected `start-end`, got {range:?}"))?;
    let start: u64 = start.parse()?;
    let end: u64 = end.parse()?;
    if start > end {
        return Err(anyhow!("start {start} is after end {end}"));
    }
    Ok(start..=end)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_invalid_ids(shared, |_| 2..=2).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_invalid_ids(shared, |digits| 2..=digits).to_string())
    }
}

/// Sum of IDs in every range that are a block of digits repeated `k` times,
/// for each `k` in `repeats(digit_count)`. An ID matching several `k` is
/// counted once per range.
fn sum_invalid_ids<R>(ranges: &[RangeInclusive<u64>], repeats: R) -> u64
where
    R: Fn(u32) -> RangeInclusive<u32>,
{
    ranges
        .iter()
        .map(|range| {
            let mut found = BTreeSet::new();
            for digits in 2..=MAX_DIGITS {
                for k in repeats(digits) {
                    found.extend(repeated_in_range(range, digits, k));
                }
            }
            found.into_iter().sum::<u64>()
        })
        .sum()
}

/// `digits`-digit numbers in `range` made of one block repeated `k` times.
///
/// Such a number is `block * (10^digits - 1) / (10^(digits/k) - 1)`, so the
/// blocks to try are a contiguous range.
fn repeated_in_range(range: &RangeInclusive<u64>, digits: u32, k: u32) -> Vec<u64> {
    if k < 2 || digits % k != 0 {
        return Vec::new();
    }
    let block_digits = digits / k;
    let (Some(full), Some(block_pow)) = (10u64.checked_pow(digits), 10u64.checked_pow(block_digits))
    else {
        return Vec::new();
    };
    let multiplier = (full - 1) / (block_pow - 1);

    let lo = (block_pow / 10).max(range.start().div_ceil(multiplier));
    let hi = (block_pow - 1).min(range.end() / multiplier);
    (lo..=hi).map(|block| block * multiplier).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;
    use proptest::prelude::*;

    const SAMPLE: &str = "11-22,95-115,998-1012,1188511880-1188511890,222220-222224,\
1698522-1698528,446443-446449,38593856-38593862,565653-565659,\
824824821-824824827,2121212118-2121212124";

    fn is_repeated(id: u64, twice_only: bool) -> bool {
        let s = id.to_string();
        let n = s.len();
        (1..n)
            .filter(|&block| n % block == 0 && (!twice_only || n / block == 2))
            .any(|block| s.as_bytes().chunks(block).all(|c| c == &s.as_bytes()[..block]))
    }

    #[test]
    fn test_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "1227775554");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "4174379265");
    }

    #[test]
    fn test_multiple_repeat_counts_counted_once() {
        // 222222 is 2x"222", 3x"22" and 6x"2"
        let mut shared = Solver::parse("222222-222222").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "222222");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "222222");
    }

    #[test]
    fn test_parse_errors() {
        assert!(Solver::parse("5-3").is_err());
        assert!(Solver::parse("12").is_err());
        assert!(Solver::parse("1-x").is_err());
    }

    proptest! {
        #[test]
        fn generator_matches_brute_force(start in 1u64..200_000, len in 0u64..3_000) {
            let range = start..=start + len;
            let expected_twice: u64 = range.clone().filter(|&id| is_repeated(id, true)).sum();
            let expected_any: u64 = range.clone().filter(|&id| is_repeated(id, false)).sum();
            let ranges = vec![range];
            prop_assert_eq!(sum_invalid_ids(&ranges, |_| 2..=2), expected_twice);
            prop_assert_eq!(sum_invalid_ids(&ranges, |d| 2..=d), expected_any);
        }
    }
}
