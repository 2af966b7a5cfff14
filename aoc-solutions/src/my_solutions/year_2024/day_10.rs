use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{CountMode, Directions, Grid, Position, ReachRules};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 10, tags = ["2024", "grid", "dp"])]
pub struct Solver;

/// Height marker for impassable cells (`.` in hand-drawn maps).
const IMPASSABLE: u8 = u8::MAX;

const HIKING: ReachRules<u8> = ReachRules {
    directions: Directions::Orthogonal,
    can_step: gentle_climb,
    is_target: is_summit,
};

fn gentle_climb(from: &u8, to: &u8) -> bool {
    *from != IMPASSABLE && *to == from + 1
}

fn is_summit(height: &u8) -> bool {
    *height == 9
}

#[derive(Debug)]
pub struct SharedData {
    map: Grid<u8>,
    trailheads: Vec<Position>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let map = Grid::parse(input, |c| match c {
            '.' => Some(IMPASSABLE),
            _ => c.to_digit(10).map(|d| d as u8),
        })
        .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        let trailheads = map
            .cells()
            .filter(|cell| *cell.value == 0)
            .map(|cell| cell.position)
            .collect();
        Ok(SharedData { map, trailheads })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let score: u64 = shared
            .trailheads
            .iter()
            .map(|&head| {
                shared
                    .map
                    .count_reachable(head, &HIKING, CountMode::DistinctEndpoints)
            })
            .sum();
        Ok(score.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let trails = shared.map.path_counter(HIKING);
        let rating: u64 = shared
            .trailheads
            .iter()
            .map(|&head| trails.count_from(head))
            .sum();
        Ok(rating.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        89010123
        78121874
        87430965
        96549874
        45678903
        32019012
        01329801
        10456732
    "};

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "36");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "81");
    }

    #[test]
    fn test_impassable_cells() {
        let input = indoc! {"
            ...0...
            ...1...
            ...2...
            6543456
            7.....7
            8.....8
            9.....9
        "};
        let mut shared = Solver::parse(input).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "2");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "2");
    }
}
