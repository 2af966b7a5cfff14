use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};

#[derive(Debug)]
struct Levels {
    values: Vec<i64>,
    sum: Option<i64>,
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 3)]
struct LevelSolver;

impl AocParser for LevelSolver {
    type SharedData<'a> = Levels;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let values = input
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<i64>()
                    .map_err(|_| ParseError::InvalidFormat(format!("not a number: {token}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Levels { values, sum: None })
    }
}

impl PartSolver<1> for LevelSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum = shared.values.iter().sum::<i64>();
        shared.sum = Some(sum);
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for LevelSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .sum
            .map(|sum| (sum * 2).to_string())
            .ok_or_else(|| SolveError::SolveFailed("part 1 has not run".into()))
    }
}

impl PartSolver<3> for LevelSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.values.len().to_string())
    }
}

#[test]
fn test_parts_constant_matches_attribute() {
    assert_eq!(<LevelSolver as Solver>::PARTS, 3);
}

#[test]
fn test_dispatch_reaches_each_part() {
    let mut shared = LevelSolver::parse("4 5 6").unwrap();
    assert_eq!(LevelSolver::solve_part(&mut shared, 1).unwrap(), "15");
    assert_eq!(LevelSolver::solve_part(&mut shared, 2).unwrap(), "30");
    assert_eq!(LevelSolver::solve_part(&mut shared, 3).unwrap(), "3");
}

#[test]
fn test_later_part_sees_earlier_mutation() {
    let mut shared = LevelSolver::parse("1 2").unwrap();
    assert!(LevelSolver::solve_part(&mut shared, 2).is_err());
    LevelSolver::solve_part(&mut shared, 1).unwrap();
    assert_eq!(shared.sum, Some(3));
    assert_eq!(LevelSolver::solve_part(&mut shared, 2).unwrap(), "6");
}

#[test]
fn test_unknown_part_is_not_implemented() {
    let mut shared = LevelSolver::parse("1").unwrap();
    assert!(matches!(
        LevelSolver::solve_part(&mut shared, 0),
        Err(SolveError::PartNotImplemented(0))
    ));
    assert!(matches!(
        LevelSolver::solve_part(&mut shared, 4),
        Err(SolveError::PartNotImplemented(4))
    ));
}
