use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Direction, Grid, Position};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 4, tags = ["2024", "grid"])]
pub struct Solver;

const WORD: &str = "XMAS";

impl AocParser for Solver {
    type SharedData<'a> = Grid<char>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse_chars(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn spells_word(grid: &Grid<char>, start: Position, direction: Direction) -> bool {
    grid.ray(start, direction)
        .map(|cell| *cell.value)
        .take(WORD.len())
        .eq(WORD.chars())
}

/// An `A` whose two diagonals both read `MAS` in either direction.
fn is_x_mas(grid: &Grid<char>, center: Position) -> bool {
    let corner = |direction: Direction| grid.neighbor(center, direction).map(|cell| *cell.value);
    let diagonal = |a: Direction, b: Direction| {
        matches!(
            (corner(a), corner(b)),
            (Some('M'), Some('S')) | (Some('S'), Some('M'))
        )
    };

    diagonal(Direction::UpLeft, Direction::DownRight) && diagonal(Direction::UpRight, Direction::DownLeft)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid: &Grid<char> = shared;
        let count: usize = grid
            .cells()
            .filter(|cell| *cell.value == 'X')
            .map(|cell| {
                Direction::ALL
                    .into_iter()
                    .filter(|&direction| spells_word(grid, cell.position, direction))
                    .count()
            })
            .sum();
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid: &Grid<char> = shared;
        let count = grid
            .cells()
            .filter(|cell| *cell.value == 'A' && is_x_mas(grid, cell.position))
            .count();
        Ok(count.to_string())
    }
}
