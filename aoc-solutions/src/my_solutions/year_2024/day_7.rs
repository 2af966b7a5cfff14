use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 7, tags = ["2024", "search"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    target: u64,
    operands: Vec<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Add,
    Mul,
    Concat,
}

/// What the operand list before the last operator must evaluate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unwound {
    Exactly(u64),
    /// `x * 0 == 0` for every `x`
    Anything,
}

impl Operator {
    /// The left operand `x` such that `x op right == result`, if any.
    fn undo(self, result: u64, right: u64) -> Option<Unwound> {
        match self {
            Operator::Add => result.checked_sub(right).map(Unwound::Exactly),
            Operator::Mul if right == 0 => (result == 0).then_some(Unwound::Anything),
            Operator::Mul => (result % right == 0).then(|| Unwound::Exactly(result / right)),
            Operator::Concat => {
                let shift = 10u64.checked_pow(right.checked_ilog10().unwrap_or(0) + 1)?;
                (result % shift == right).then(|| Unwound::Exactly(result / shift))
            }
        }
    }
}

impl Equation {
    /// Operators apply left to right, so unwinding from the last operand
    /// prunes most branches early.
    fn is_solvable(&self, operators: &[Operator]) -> bool {
        fn unwind(target: u64, operands: &[u64], operators: &[Operator]) -> bool {
            match operands {
                [] => false,
                [first] => *first == target,
                [rest @ .., last] => operators.iter().any(|op| match op.undo(target, *last) {
                    Some(Unwound::Exactly(left)) => unwind(left, rest, operators),
                    Some(Unwound::Anything) => true,
                    None => false,
                }),
            }
        }

        unwind(self.target, &self.operands, operators)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Equation>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                parse_equation(line).with_context(|| format!("line {}", line_idx + 1))
            })
            .collect::<anyhow::Result<_>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

fn parse_equation(line: &str) -> anyhow::Result<Equation> {
    let (target, operands) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("expected `target: operands`, got {line:?}"))?;
    let operands = operands
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<Vec<u64>, _>>()?;
    if operands.is_empty() {
        return Err(anyhow!("equation has no operands"));
    }

    Ok(Equation {
        target: target.trim().parse()?,
        operands,
    })
}

fn calibration(equations: &[Equation], operators: &[Operator]) -> u64 {
    equations
        .iter()
        .filter(|equation| equation.is_solvable(operators))
        .map(|equation| equation.target)
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(calibration(shared, &[Operator::Add, Operator::Mul]).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let operators = [Operator::Add, Operator::Mul, Operator::Concat];
        Ok(calibration(shared, &operators).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        190: 10 19
        3267: 81 40 27
        83: 17 5
        156: 15 6
        7290: 6 8 6 15
        161011: 16 10 13
        192: 17 8 14
        21037: 9 7 18 13
        292: 11 6 16 20
    "};

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "3749");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "11387");
    }

    #[test]
    fn test_undo_concat() {
        assert_eq!(Operator::Concat.undo(156, 6), Some(Unwound::Exactly(15)));
        assert_eq!(Operator::Concat.undo(1510, 10), Some(Unwound::Exactly(15)));
        assert_eq!(Operator::Concat.undo(156, 7), None);
    }

    #[test]
    fn test_undo_multiply_by_zero() {
        assert_eq!(Operator::Mul.undo(7, 0), None);
        assert_eq!(Operator::Mul.undo(0, 0), Some(Unwound::Anything));
    }

    #[test]
    fn test_zero_operand() {
        let mut shared = Solver::parse("10: 5 0 10\n0: 3 4 0\n9: 0 9").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "19");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "19");
    }
}
