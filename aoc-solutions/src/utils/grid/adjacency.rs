//! Adjacency computed on demand from coordinates and a direction set
//!
//! No edge list is ever materialised: a neighbor is simply the cell one
//! step away in some direction, if that step stays on the grid.

use super::direction::{Direction, Directions};
use super::storage::{Cell, Grid, Position};

impl<T> Grid<T> {
    /// Position displaced by `(dx, dy)`, or `None` when it falls off the grid.
    pub fn offset(&self, position: Position, dx: isize, dy: isize) -> Option<Position> {
        let x = position.x.checked_add_signed(dx)?;
        let y = position.y.checked_add_signed(dy)?;
        let moved = Position::new(x, y);
        self.contains(moved).then_some(moved)
    }

    /// Position one step away in `direction`.
    pub fn step(&self, position: Position, direction: Direction) -> Option<Position> {
        let (dx, dy) = direction.offset();
        self.offset(position, dx, dy)
    }

    pub fn neighbor(&self, position: Position, direction: Direction) -> Option<Cell<'_, T>> {
        self.step(position, direction)
            .and_then(|next| self.cell(next))
    }

    /// In-bounds neighbors of `position` in the requested direction set.
    ///
    /// Directions leading off the grid are skipped. A position outside the
    /// grid has no neighbors.
    pub fn neighbors(
        &self,
        position: Position,
        directions: Directions,
    ) -> impl Iterator<Item = Cell<'_, T>> {
        let origin = self.contains(position).then_some(position);
        directions
            .as_slice()
            .iter()
            .filter_map(move |&direction| self.neighbor(origin?, direction))
    }

    /// Cells from `position` (inclusive) straight on in `direction` to the edge.
    pub fn ray(&self, position: Position, direction: Direction) -> impl Iterator<Item = Cell<'_, T>> {
        std::iter::successors(self.cell(position), move |cell| {
            self.neighbor(cell.position, direction)
        })
    }
}
