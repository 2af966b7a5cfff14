//! Coordinate-indexed cell storage

use thiserror::Error;

/// Column/row coordinates; `(0, 0)` is the top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Identifier of a cell, derived from its coordinates (row-major index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub(super) usize);

impl CellId {
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A borrowed view of one grid cell.
#[derive(Debug, PartialEq, Eq)]
pub struct Cell<'g, T> {
    pub id: CellId,
    pub position: Position,
    pub value: &'g T,
}

impl<T> Clone for Cell<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cell<'_, T> {}

/// Errors raised while building a grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// No rows, or a first row without cells
    #[error("grid has no cells")]
    Empty,
    /// A row whose length differs from the first row
    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// A character the cell mapper rejected
    #[error("unexpected cell {value:?} at ({x}, {y})")]
    InvalidCell { x: usize, y: usize, value: char },
}

/// Fixed-size, row-major 2D grid.
///
/// Width and height are set at construction and never change. Traversals
/// (`neighbors`, `count_reachable`, `simulate_walk`) only read the grid, so
/// one instance can serve any number of queries, from any number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    pub(super) width: usize,
    pub(super) height: usize,
    pub(super) cells: Vec<T>,
}

impl<T> Default for Grid<T> {
    /// The zero-cell grid. Every query on it yields an empty result.
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
        }
    }
}

impl<T> Grid<T> {
    /// Build a grid from rows of values. Every row must have the length of the first.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, GridError>
    where
        R: IntoIterator<Item = T>,
    {
        Self::try_from_rows(rows.into_iter().map(|row| row.into_iter().map(Ok)))
    }

    /// Parse a rectangular block of text, mapping each character through `mapper`.
    ///
    /// Trailing blank lines are ignored; any other blank line is a ragged row.
    pub fn parse<F>(input: &str, mut mapper: F) -> Result<Self, GridError>
    where
        F: FnMut(char) -> Option<T>,
    {
        let mut lines: Vec<&str> = input.lines().collect();
        while lines.last().is_some_and(|line| line.trim().is_empty()) {
            lines.pop();
        }

        Self::try_from_rows(lines.iter().enumerate().map(|(y, line)| {
            line.chars()
                .enumerate()
                .map(|(x, value)| mapper(value).ok_or(GridError::InvalidCell { x, y, value }))
                .collect::<Vec<_>>()
        }))
    }

    /// Shape checks shared by every constructor; the first failing cell or row wins.
    fn try_from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, GridError>
    where
        R: IntoIterator<Item = Result<T, GridError>>,
    {
        let mut cells = Vec::new();
        let mut width = 0;
        let mut height = 0;

        for (row, values) in rows.into_iter().enumerate() {
            let before = cells.len();
            for value in values {
                cells.push(value?);
            }
            let actual = cells.len() - before;

            if row == 0 {
                if actual == 0 {
                    return Err(GridError::Empty);
                }
                width = actual;
            } else if actual != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    actual,
                });
            }
            height += 1;
        }

        if height == 0 {
            return Err(GridError::Empty);
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }

    pub fn id_of(&self, position: Position) -> Option<CellId> {
        self.contains(position)
            .then(|| CellId(position.y * self.width + position.x))
    }

    pub fn position_of(&self, id: CellId) -> Option<Position> {
        (id.0 < self.cells.len()).then(|| Position::new(id.0 % self.width, id.0 / self.width))
    }

    pub fn get(&self, position: Position) -> Option<&T> {
        self.id_of(position).map(|id| &self.cells[id.0])
    }

    pub fn cell(&self, position: Position) -> Option<Cell<'_, T>> {
        self.id_of(position).map(|id| Cell {
            id,
            position,
            value: &self.cells[id.0],
        })
    }

    pub fn cell_by_id(&self, id: CellId) -> Option<Cell<'_, T>> {
        self.position_of(id).map(|position| Cell {
            id,
            position,
            value: &self.cells[id.0],
        })
    }

    /// All cells in reading order (row by row, left to right).
    pub fn cells(&self) -> impl Iterator<Item = Cell<'_, T>> {
        self.cells.iter().enumerate().map(|(index, value)| Cell {
            id: CellId(index),
            position: Position::new(index % self.width, index / self.width),
            value,
        })
    }

    /// First cell, in reading order, whose value matches.
    pub fn find<P>(&self, mut predicate: P) -> Option<Cell<'_, T>>
    where
        P: FnMut(&T) -> bool,
    {
        self.cells().find(|cell| predicate(cell.value))
    }

    /// Row-major index of an in-bounds position.
    pub(super) fn index(&self, position: Position) -> usize {
        debug_assert!(self.contains(position));
        position.y * self.width + position.x
    }
}

impl Grid<char> {
    /// Parse text into a grid of its characters.
    pub fn parse_chars(input: &str) -> Result<Self, GridError> {
        Self::parse(input, Some)
    }
}
