use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use rayon::prelude::*;

use crate::utils::grid::{Direction, Grid, Position};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 6, tags = ["2024", "grid", "simulation"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    lab: Grid<char>,
    guard: Position,
    facing: Direction,
    /// Cells on the unobstructed patrol route, shared by both parts
    route: Option<Vec<Position>>,
}

fn is_crate(c: &char) -> bool {
    *c == '#'
}

impl SharedData {
    fn route(&mut self) -> &[Position] {
        self.route.get_or_insert_with(|| {
            let mut cells: Vec<Position> = self
                .lab
                .simulate_walk(self.guard, self.facing, is_crate, None)
                .distinct_positions()
                .into_iter()
                .collect();
            cells.sort_unstable_by_key(|p| (p.y, p.x));
            cells
        })
    }
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let lab = Grid::parse_chars(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        let (guard, facing) = find_guard(&lab)?;
        Ok(SharedData {
            lab,
            guard,
            facing,
            route: None,
        })
    }
}

/// The single guard marker and the way it faces.
fn find_guard(lab: &Grid<char>) -> Result<(Position, Direction), ParseError> {
    let mut guards = lab
        .cells()
        .filter_map(|cell| Direction::from_arrow(*cell.value).map(|facing| (cell.position, facing)));
    let guard = guards
        .next()
        .ok_or_else(|| ParseError::MissingData("no guard marker in the lab".into()))?;
    if guards.next().is_some() {
        return Err(ParseError::InvalidFormat("more than one guard marker".into()));
    }
    Ok(guard)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.route().len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Only a crate dropped on the original route can change the walk
        let candidates = shared.route().to_vec();
        let SharedData {
            lab, guard, facing, ..
        } = &*shared;

        let loops = candidates
            .par_iter()
            .filter(|&&candidate| candidate != *guard)
            .filter(|&&candidate| {
                lab.simulate_walk(*guard, *facing, is_crate, Some(candidate))
                    .is_cycle()
            })
            .count();
        Ok(loops.to_string())
    }
}
