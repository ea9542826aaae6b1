use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use tracing::debug;

const DIAL_SIZE: i64 = 100;
const DIAL_START: i64 = 50;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 1, tags = ["dial", "simulation"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    rotations: Vec<i64>,
    common_result: Option<CommonResult>,
}

#[derive(Debug, Clone, Copy)]
pub struct CommonResult {
    rests_at_zero: u64,
    clicks_at_zero: u64,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(line_idx, line)| {
                parse_rotation(line).map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|rotations| SharedData {
                rotations,
                common_result: None,
            })
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn parse_rotation(line: &str) -> anyhow::Result<i64> {
    let (direction, distance) = line.split_at_checked(1).ok_or_else(|| anyhow!("empty rotation"))?;
    let distance: i64 = distance
        .parse()
        .map_err(|e| anyhow!("bad distance {distance:?}: {e}"))?;
    if distance < 0 {
        return Err(anyhow!("distance must be non negative"));
    }
    match direction {
        "L" => Ok(-distance),
        "R" => Ok(distance),
        _ => Err(anyhow!("first character need to be 'L' or 'R'")),
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(solve_once_for_both(shared)?.rests_at_zero.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(solve_once_for_both(shared)?.clicks_at_zero.to_string())
    }
}

/// Clicks landing on 0 while turning `rotation` from `position`, end included
/// and start excluded.
fn zero_clicks(position: i64, rotation: i64) -> u64 {
    let distance = rotation.abs();
    // Distance until the first click that lands on 0
    let first = match position {
        0 => DIAL_SIZE,
        p if rotation >= 0 => DIAL_SIZE - p,
        p => p,
    };
    if distance < first {
        0
    } else {
        ((distance - first) / DIAL_SIZE + 1) as u64
    }
}

fn solve_once_for_both(shared: &mut SharedData) -> Result<CommonResult, SolveError> {
    if let Some(result) = shared.common_result {
        return Ok(result);
    }
    let mut position = DIAL_START;
    let mut result = CommonResult {
        rests_at_zero: 0,
        clicks_at_zero: 0,
    };
    for &rotation in &shared.rotations {
        result.clicks_at_zero = result
            .clicks_at_zero
            .checked_add(zero_clicks(position, rotation))
            .ok_or_else(|| SolveError::failed("zero click count overflows u64"))?;
        position = (position + rotation.rem_euclid(DIAL_SIZE)) % DIAL_SIZE;
        if position == 0 {
            result.rests_at_zero += 1;
        }
    }
    debug!(final_position = position, ?result, "dial settled");
    shared.common_result = Some(result);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;
    use proptest::prelude::*;

    const SAMPLE: &str = "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82\n";

    #[test]
    fn test_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "3");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "6");
    }

    #[test]
    fn test_large_rotation_passes_zero_repeatedly() {
        let mut shared = Solver::parse("R1000").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "0");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "10");
    }

    #[test]
    fn test_leaving_zero_does_not_count() {
        // 50 -> 0 (one click), then 0 -> 95 without touching 0 again
        let mut shared = Solver::parse("L50\nL5").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "1");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "1");
    }

    #[test]
    fn test_extreme_rotation() {
        let max = format!("R{}", i64::MAX);
        let mut shared = Solver::parse(&max).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "0");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "92233720368547758");

        let many = vec![max; 201].join("\n");
        let mut shared = Solver::parse(&many).unwrap();
        assert!(matches!(Solver::solve_part(&mut shared, 2), Err(SolveError::SolveFailed(_))));
    }

    #[test]
    fn test_parse_errors_name_the_line() {
        let err = Solver::parse("L1\nX5").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(msg) if msg.contains("line 2")));
        assert!(Solver::parse("R-3").is_err());
        assert!(Solver::parse("Rabc").is_err());
    }

    proptest! {
        #[test]
        fn zero_clicks_matches_click_by_click(position in 0i64..100, rotation in -450i64..450) {
            let step = rotation.signum();
            let mut p = position;
            let mut expected = 0u64;
            for _ in 0..rotation.abs() {
                p = (p + step).rem_euclid(DIAL_SIZE);
                if p == 0 {
                    expected += 1;
                }
            }
            prop_assert_eq!(zero_clicks(position, rotation), expected);
        }
    }
}
