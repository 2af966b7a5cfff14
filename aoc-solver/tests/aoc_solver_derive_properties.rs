//! Property-based tests for the AocSolver derive macro

use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};
use proptest::prelude::*;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct MinMax;

impl AocParser for MinMax {
    type SharedData<'a> = Vec<i32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .split(',')
            .filter(|s| !s.is_empty())
            .map(|s| s.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
            .collect()
    }
}

impl PartSolver<1> for MinMax {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .min()
            .map(i32::to_string)
            .ok_or_else(|| SolveError::SolveFailed("empty input".into()))
    }
}

impl PartSolver<2> for MinMax {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .max()
            .map(i32::to_string)
            .ok_or_else(|| SolveError::SolveFailed("empty input".into()))
    }
}

fn to_input(numbers: &[i32]) -> String {
    numbers.iter().map(i32::to_string).collect::<Vec<_>>().join(",")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// `solve_part(k)` answers exactly what `PartSolver<k>::solve` answers.
    #[test]
    fn solve_part_dispatches_to_part_solver(
        numbers in prop::collection::vec(-50i32..50, 1..8),
        part in 1u8..=2,
    ) {
        let input = to_input(&numbers);
        let mut via_dispatch = MinMax::parse(&input).unwrap();
        let mut direct = MinMax::parse(&input).unwrap();

        let dispatched = MinMax::solve_part(&mut via_dispatch, part).unwrap();
        let expected = match part {
            1 => <MinMax as PartSolver<1>>::solve(&mut direct),
            _ => <MinMax as PartSolver<2>>::solve(&mut direct),
        }
        .unwrap();

        prop_assert_eq!(dispatched, expected);
    }

    /// Parts beyond `max_parts` are reported as not implemented.
    #[test]
    fn invalid_part_returns_not_implemented(invalid_part in prop_oneof![Just(0u8), 3u8..=255]) {
        let mut shared = MinMax::parse("1,2,3").unwrap();

        match MinMax::solve_part(&mut shared, invalid_part) {
            Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, invalid_part),
            other => prop_assert!(false, "Expected PartNotImplemented, got {:?}", other),
        }
    }
}

#[test]
fn test_solve_failure_propagates() {
    let mut shared = MinMax::parse("").unwrap();
    assert!(matches!(
        MinMax::solve_part(&mut shared, 1),
        Err(SolveError::SolveFailed(_))
    ));
}
