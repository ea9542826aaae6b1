use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};

#[derive(Debug)]
struct Walk {
    steps: Vec<i32>,
    summary: Option<Summary>,
    summary_runs: usize,
}

#[derive(Debug, Clone, Copy)]
struct Summary {
    end: i32,
    furthest: i32,
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct WalkSolver;

impl AocParser for WalkSolver {
    type SharedData<'a> = Walk;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let steps = input
            .lines()
            .map(|line| {
                line.parse::<i32>()
                    .map_err(|_| ParseError::InvalidFormat(line.to_string()))
            })
            .collect::<Result<_, _>>()?;
        Ok(Walk {
            steps,
            summary: None,
            summary_runs: 0,
        })
    }
}

fn summarize(walk: &mut Walk) -> Summary {
    let steps = &walk.steps;
    let runs = &mut walk.summary_runs;
    *walk.summary.get_or_insert_with(|| {
        *runs += 1;
        let (end, furthest) = steps.iter().fold((0, 0), |(pos, far), step| {
            let pos = pos + step;
            (pos, far.max(pos.abs()))
        });
        Summary { end, furthest }
    })
}

impl PartSolver<1> for WalkSolver {
    fn solve(walk: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(summarize(walk).end.to_string())
    }
}

impl PartSolver<2> for WalkSolver {
    fn solve(walk: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(summarize(walk).furthest.to_string())
    }
}

#[test]
fn test_parts_share_one_computation() {
    let mut walk = WalkSolver::parse("3\n-5\n-4\n2").unwrap();
    assert_eq!(WalkSolver::solve_part(&mut walk, 1).unwrap(), "-4");
    assert_eq!(WalkSolver::solve_part(&mut walk, 2).unwrap(), "6");
    assert_eq!(walk.summary_runs, 1);
}

#[test]
fn test_part_two_alone_computes_summary() {
    let mut walk = WalkSolver::parse("1\n1").unwrap();
    assert_eq!(WalkSolver::solve_part(&mut walk, 2).unwrap(), "2");
    assert_eq!(walk.summary_runs, 1);
}

#[test]
fn test_parse_error_names_line() {
    let err = WalkSolver::parse("1\nx").unwrap_err();
    assert!(matches!(err, ParseError::InvalidFormat(ref s) if s == "x"));
}
