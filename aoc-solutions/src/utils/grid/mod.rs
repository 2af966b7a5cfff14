//! A rectangular grid that doubles as a graph
//!
//! Storage is a flat row-major `Vec`; adjacency is derived on demand from
//! coordinates and a [`Directions`] set. On top of that sit two read-only
//! traversals:
//!
//! - [`Grid::count_reachable`]: trails from a start cell to target cells,
//!   counted by distinct endpoint or by distinct path
//! - [`Grid::simulate_walk`]: a walker that turns right at obstacles, run
//!   until it leaves the grid or repeats a (cell, direction) state
//!
//! # Example
//!
//! ```
//! use aoc_solutions::utils::grid::{CountMode, Directions, Grid, Position, ReachRules};
//!
//! let grid = Grid::parse("0123\n1234\n8765\n9876", |c| c.to_digit(10)).unwrap();
//! let rules = ReachRules {
//!     directions: Directions::Orthogonal,
//!     can_step: |from: &u32, to: &u32| *to == from + 1,
//!     is_target: |value: &u32| *value == 9,
//! };
//!
//! let start = Position::new(0, 0);
//! assert_eq!(grid.count_reachable(start, &rules, CountMode::DistinctEndpoints), 1);
//! assert_eq!(grid.count_reachable(start, &rules, CountMode::Paths), 16);
//! ```

mod adjacency;
mod direction;
mod reach;
mod storage;
mod walk;

pub use direction::{Direction, Directions};
pub use reach::{CountMode, PathCounter, ReachRules};
pub use storage::{Cell, CellId, Grid, GridError, Position};
pub use walk::{Walk, WalkEnd, WalkState};

#[cfg(test)]
mod tests;
