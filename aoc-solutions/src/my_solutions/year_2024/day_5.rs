use std::cmp::Ordering;
use std::collections::HashSet;

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 5, tags = ["2024", "ordering"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    /// `(before, after)` page pairs
    rules: HashSet<(u32, u32)>,
    updates: Vec<Vec<u32>>,
}

impl SharedData {
    fn compare(&self, a: u32, b: u32) -> Ordering {
        if self.rules.contains(&(a, b)) {
            Ordering::Less
        } else if self.rules.contains(&(b, a)) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    fn is_ordered(&self, update: &[u32]) -> bool {
        update.is_sorted_by(|a, b| self.compare(*a, *b) != Ordering::Greater)
    }
}

fn middle(update: &[u32]) -> u32 {
    update.get(update.len() / 2).copied().unwrap_or(0)
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_manual(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

fn parse_manual(input: &str) -> anyhow::Result<SharedData> {
    let input = input.trim().replace("\r\n", "\n");
    let (rules, updates) = input
        .split_once("\n\n")
        .ok_or_else(|| anyhow!("expected rules and updates separated by a blank line"))?;

    let rules = rules
        .lines()
        .enumerate()
        .map(|(line_idx, line)| parse_rule(line).with_context(|| format!("rule {}", line_idx + 1)))
        .collect::<anyhow::Result<_>>()?;

    let updates = updates
        .lines()
        .enumerate()
        .map(|(line_idx, line)| {
            line.split(',')
                .map(str::parse)
                .collect::<Result<Vec<u32>, _>>()
                .with_context(|| format!("update {}", line_idx + 1))
        })
        .collect::<anyhow::Result<_>>()?;

    Ok(SharedData { rules, updates })
}

fn parse_rule(line: &str) -> anyhow::Result<(u32, u32)> {
    let (before, after) = line
        .split_once('|')
        .ok_or_else(|| anyhow!("expected `a|b`, got {line:?}"))?;
    Ok((before.parse()?, after.parse()?))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let data: &SharedData = shared;
        let sum: u32 = data
            .updates
            .iter()
            .filter(|update| data.is_ordered(update))
            .map(|update| middle(update))
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let data: &SharedData = shared;
        let sum: u32 = data
            .updates
            .iter()
            .filter(|update| !data.is_ordered(update))
            .map(|update| {
                let mut fixed = update.clone();
                fixed.sort_by(|a, b| data.compare(*a, *b));
                middle(&fixed)
            })
            .sum();
        Ok(sum.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        47|53
        97|13
        97|61
        97|47
        75|29
        61|13
        75|53
        29|13
        97|29
        53|29
        61|53
        97|53
        61|29
        47|13
        75|47
        97|75
        47|61
        75|61
        47|29
        75|13
        53|13

        75,47,61,53,29
        97,61,53,29,13
        75,29,13
        75,97,47,61,53
        61,13,29
        97,13,75,29,47
    "};

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "143");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "123");
    }

    #[test]
    fn test_missing_section() {
        assert!(matches!(Solver::parse("1|2\n3|4"), Err(ParseError::InvalidFormat(_))));
    }
}
