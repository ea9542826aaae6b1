use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver, SolverExt};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Ranges;

impl AocParser for Ranges {
    type SharedData<'a> = Vec<(u64, u64)>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .split(',')
            .map(|range| {
                let (lo, hi) = range
                    .trim()
                    .split_once('-')
                    .ok_or_else(|| ParseError::InvalidFormat(range.to_string()))?;
                let lo = lo.parse().map_err(|_| ParseError::InvalidFormat(lo.to_string()))?;
                let hi = hi.parse().map_err(|_| ParseError::InvalidFormat(hi.to_string()))?;
                Ok((lo, hi))
            })
            .collect()
    }
}

impl PartSolver<1> for Ranges {
    fn solve(ranges: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(ranges.len().to_string())
    }
}

impl PartSolver<2> for Ranges {
    fn solve(ranges: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if ranges.iter().any(|(lo, hi)| lo > hi) {
            return Err(SolveError::SolveFailed("reversed range".into()));
        }
        Ok(ranges.iter().map(|(lo, hi)| hi - lo + 1).sum::<u64>().to_string())
    }
}

#[test]
fn test_parts_constant_matches_attribute() {
    assert_eq!(<Ranges as Solver>::PARTS, 2);
}

#[test]
fn test_dispatches_to_each_part() {
    let mut ranges = Ranges::parse("3-5, 10-14").unwrap();
    assert_eq!(Ranges::solve_part(&mut ranges, 1).unwrap(), "2");
    assert_eq!(Ranges::solve_part(&mut ranges, 2).unwrap(), "8");
}

#[test]
fn test_part_errors_propagate() {
    let mut ranges = Ranges::parse("5-3").unwrap();
    assert!(matches!(
        Ranges::solve_part(&mut ranges, 2),
        Err(SolveError::SolveFailed(_))
    ));
}

#[test]
fn test_unknown_part_is_not_implemented() {
    let mut ranges = Ranges::parse("1-1").unwrap();
    assert!(matches!(
        Ranges::solve_part(&mut ranges, 3),
        Err(SolveError::PartNotImplemented(3))
    ));
    assert!(matches!(
        Ranges::solve_part_checked_range(&mut ranges, 3),
        Err(SolveError::PartOutOfRange(3))
    ));
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 1)]
struct LineCount;

impl AocParser for LineCount {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input)
    }
}

impl PartSolver<1> for LineCount {
    fn solve(text: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(text.lines().count().to_string())
    }
}

#[test]
fn test_borrowed_shared_data_single_part() {
    let input = String::from("a\nb\nc\n");
    let mut text = LineCount::parse(&input).unwrap();
    assert_eq!(LineCount::solve_part(&mut text, 1).unwrap(), "3");
    assert!(matches!(
        LineCount::solve_part_checked_range(&mut text, 2),
        Err(SolveError::PartOutOfRange(2))
    ));
}
