use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 1, tags = ["2024", "sorting"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    left: Vec<u32>,
    right: Vec<u32>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                parse_pair(line).with_context(|| format!("line {}", line_idx + 1))
            })
            .process_results(|pairs| pairs.unzip())
            .map(|(left, right)| SharedData { left, right })
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

fn parse_pair(line: &str) -> anyhow::Result<(u32, u32)> {
    let (left, right) = line
        .split_whitespace()
        .collect_tuple()
        .ok_or_else(|| anyhow!("expected two location ids, got {line:?}"))?;
    Ok((left.parse()?, right.parse()?))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.left.sort_unstable();
        shared.right.sort_unstable();

        let distance: u64 = shared
            .left
            .iter()
            .zip(&shared.right)
            .map(|(l, r)| u64::from(l.abs_diff(*r)))
            .sum();
        Ok(distance.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let occurrences = shared.right.iter().counts();
        let similarity: u64 = shared
            .left
            .iter()
            .map(|id| u64::from(*id) * occurrences.get(id).copied().unwrap_or(0) as u64)
            .sum();
        Ok(similarity.to_string())
    }
}
