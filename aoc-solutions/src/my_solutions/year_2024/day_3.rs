use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 3, tags = ["2024", "regex"])]
pub struct Solver;

const INSTRUCTION: &str = r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)";

pub struct SharedData<'a> {
    memory: &'a str,
    instruction: Regex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Instruction {
    Mul(u64, u64),
    Enable,
    Disable,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let instruction = Regex::new(INSTRUCTION)
            .map_err(|e| ParseError::InvalidFormat(format!("instruction pattern: {e}")))?;
        Ok(SharedData {
            memory: input,
            instruction,
        })
    }
}

impl SharedData<'_> {
    /// Well-formed instructions in memory order; everything else is noise.
    fn instructions(&self) -> impl Iterator<Item = Instruction> + '_ {
        self.instruction.captures_iter(self.memory).filter_map(|caps| {
            match caps.get(0)?.as_str() {
                "do()" => Some(Instruction::Enable),
                "don't()" => Some(Instruction::Disable),
                _ => Some(Instruction::Mul(caps[1].parse().ok()?, caps[2].parse().ok()?)),
            }
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u64 = shared
            .instructions()
            .map(|instruction| match instruction {
                Instruction::Mul(a, b) => a * b,
                _ => 0,
            })
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (_, sum) = shared
            .instructions()
            .fold((true, 0u64), |(enabled, sum), instruction| match instruction {
                Instruction::Mul(a, b) if enabled => (enabled, sum + a * b),
                Instruction::Mul(..) => (enabled, sum),
                Instruction::Enable => (true, sum),
                Instruction::Disable => (false, sum),
            });
        Ok(sum.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_example_part1() {
        let input = "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";
        let mut shared = Solver::parse(input).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "161");
    }

    #[test]
    fn test_example_part2() {
        let input = "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";
        let mut shared = Solver::parse(input).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "48");
    }

    #[test]
    fn test_rejects_long_operands() {
        let mut shared = Solver::parse("mul(1234,2)mul(2,3)").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "6");
    }
}
