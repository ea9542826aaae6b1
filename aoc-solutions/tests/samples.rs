//! Every 2025 solver, looked up through the plugin registry and run against
//! the published samples under `inputs/`.

use aoc_solver::{SolverError, SolverRegistry, SolverRegistryBuilder};
use aoc_solutions as _;

/// (day, part, sample text, expected answer)
const CASES: &[(u8, u8, &str, &str)] = &[
    (1, 1, include_str!("../../inputs/2025/day01/sample.txt"), "3"),
    (1, 2, include_str!("../../inputs/2025/day01/sample.txt"), "6"),
    (2, 1, include_str!("../../inputs/2025/day02/sample.txt"), "1227775554"),
    (2, 2, include_str!("../../inputs/2025/day02/sample.txt"), "4174379265"),
    (3, 1, include_str!("../../inputs/2025/day03/sample.txt"), "357"),
    (3, 2, include_str!("../../inputs/2025/day03/sample.txt"), "3121910778619"),
    (4, 1, include_str!("../../inputs/2025/day04/sample.txt"), "13"),
    (4, 2, include_str!("../../inputs/2025/day04/sample.txt"), "43"),
    (5, 1, include_str!("../../inputs/2025/day05/sample.txt"), "3"),
    (5, 2, include_str!("../../inputs/2025/day05/sample.txt"), "14"),
    (6, 1, include_str!("../../inputs/2025/day06/sample.txt"), "4277556"),
    (6, 2, include_str!("../../inputs/2025/day06/sample.txt"), "3263827"),
    (7, 1, include_str!("../../inputs/2025/day07/sample.txt"), "21"),
    (7, 2, include_str!("../../inputs/2025/day07/sample.txt"), "40"),
    (8, 1, include_str!("../../inputs/2025/day08/sample.txt"), "40"),
    (8, 2, include_str!("../../inputs/2025/day08/sample.txt"), "25272"),
    (9, 1, include_str!("../../inputs/2025/day09/sample.txt"), "50"),
    (9, 2, include_str!("../../inputs/2025/day09/sample.txt"), "24"),
    (10, 1, include_str!("../../inputs/2025/day10/sample.txt"), "7"),
    (10, 2, include_str!("../../inputs/2025/day10/sample.txt"), "33"),
    (11, 1, include_str!("../../inputs/2025/day11/sample.txt"), "5"),
    (11, 2, include_str!("../../inputs/2025/day11/sample_part2.txt"), "2"),
    (12, 1, include_str!("../../inputs/2025/day12/sample.txt"), "2"),
];

fn registry_2025() -> SolverRegistry {
    SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.year == 2025)
        .unwrap()
        .build()
}

#[test]
fn test_all_days_registered() {
    let registry = registry_2025();
    let days: Vec<(u8, u8)> = registry
        .storage()
        .iter_info()
        .map(|info| (info.day, info.parts))
        .collect();
    let mut expected: Vec<(u8, u8)> = (1..=11).map(|day| (day, 2)).collect();
    expected.push((12, 1));
    assert_eq!(days, expected);
}

#[test]
fn test_samples_through_registry() {
    let registry = registry_2025();
    for &(day, part, input, expected) in CASES {
        let mut solver = registry
            .create_solver(2025, day, input)
            .unwrap_or_else(|e| panic!("day {day} failed to parse: {e}"));
        let result = solver
            .solve(part)
            .unwrap_or_else(|e| panic!("day {day} part {part} failed: {e}"));
        assert_eq!(result.answer, expected, "day {day} part {part}");
        assert!(result.solve_end >= result.solve_start);
    }
}

#[test]
fn test_day_12_has_no_second_part() {
    let registry = registry_2025();
    let input = include_str!("../../inputs/2025/day12/sample.txt");
    let mut solver = registry.create_solver(2025, 12, input).unwrap();
    assert!(solver.solve(2).is_err());
}

#[test]
fn test_tag_filter() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.year == 2025 && plugin.tags.contains(&"grid"))
        .unwrap()
        .build();
    let days: Vec<u8> = registry.storage().iter_info().map(|info| info.day).collect();
    assert_eq!(days, vec![4, 7]);
}

#[test]
fn test_malformed_input_is_a_parse_error() {
    let registry = registry_2025();
    for day in 1..=12 {
        let result = registry.create_solver(2025, day, "not a puzzle input ~~~");
        assert!(
            matches!(result, Err(SolverError::ParseError(_))),
            "day {day} accepted garbage"
        );
    }
}
