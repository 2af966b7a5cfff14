use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 2, tags = ["2024", "sequences"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<i32>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                line.split_whitespace()
                    .map(str::parse)
                    .collect::<Result<Vec<i32>, _>>()
                    .with_context(|| format!("line {}", line_idx + 1))
            })
            .collect::<anyhow::Result<_>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

/// Levels strictly increase or strictly decrease, by 1 to 3 at each step.
fn is_safe(levels: impl Iterator<Item = i32>) -> bool {
    let steps: Vec<i32> = levels.tuple_windows().map(|(a, b)| b - a).collect();
    steps.iter().all(|step| (1..=3).contains(step)) || steps.iter().all(|step| (-3..=-1).contains(step))
}

/// Safe once at most one level is dropped.
fn is_safe_dampened(report: &[i32]) -> bool {
    is_safe(report.iter().copied())
        || (0..report.len()).any(|skip| {
            is_safe(
                report
                    .iter()
                    .enumerate()
                    .filter(|&(idx, _)| idx != skip)
                    .map(|(_, level)| *level),
            )
        })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let safe = shared
            .iter()
            .filter(|report| is_safe(report.iter().copied()))
            .count();
        Ok(safe.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let safe = shared
            .iter()
            .filter(|report| is_safe_dampened(report))
            .count();
        Ok(safe.to_string())
    }
}
