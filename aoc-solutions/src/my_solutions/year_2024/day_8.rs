use std::collections::HashSet;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::grid::{Grid, Position};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 8, tags = ["2024", "grid"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    map: Grid<char>,
    /// Antenna positions grouped by frequency
    antennas: Vec<Vec<Position>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let map = Grid::parse(input, |c| {
            (c == '.' || c == '#' || c.is_ascii_alphanumeric()).then_some(c)
        })
        .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        let antennas = map
            .cells()
            .filter(|cell| cell.value.is_ascii_alphanumeric())
            .map(|cell| (*cell.value, cell.position))
            .into_group_map()
            .into_values()
            .collect();

        Ok(SharedData { map, antennas })
    }
}

impl SharedData {
    /// Count antinodes over every ordered antenna pair of one frequency.
    ///
    /// `line` yields the antinodes produced beyond `to`, looking from `from`.
    fn antinodes<F, I>(&self, line: F) -> usize
    where
        F: Fn(Position, Position) -> I,
        I: Iterator<Item = Position>,
    {
        self.antennas
            .iter()
            .flat_map(|group| group.iter().permutations(2))
            .flat_map(|pair| line(*pair[0], *pair[1]))
            .collect::<HashSet<_>>()
            .len()
    }

    /// Signed step from `from` to `to`.
    fn delta(from: Position, to: Position) -> (isize, isize) {
        (
            to.x as isize - from.x as isize,
            to.y as isize - from.y as isize,
        )
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let map = &shared.map;
        let count = shared.antinodes(|from, to| {
            let (dx, dy) = SharedData::delta(from, to);
            map.offset(to, dx, dy).into_iter()
        });
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let map = &shared.map;
        let count = shared.antinodes(|from, to| {
            let (dx, dy) = SharedData::delta(from, to);
            std::iter::successors(Some(to), move |&p| map.offset(p, dx, dy))
        });
        Ok(count.to_string())
    }
}
