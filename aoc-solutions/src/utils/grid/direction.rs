//! Compass directions and the neighbor sets built from them

/// One of the eight compass directions on a grid where `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
}

impl Direction {
    /// The four orthogonal directions, clockwise from `Up`.
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// The four diagonal directions, clockwise from `UpRight`.
    pub const DIAGONAL: [Direction; 4] = [
        Direction::UpRight,
        Direction::DownRight,
        Direction::DownLeft,
        Direction::UpLeft,
    ];

    /// All eight directions, clockwise from `Up`.
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::UpRight,
        Direction::Right,
        Direction::DownRight,
        Direction::Down,
        Direction::DownLeft,
        Direction::Left,
        Direction::UpLeft,
    ];

    /// `(dx, dy)` of a single step.
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::UpRight => (1, -1),
            Direction::Right => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::Down => (0, 1),
            Direction::DownLeft => (-1, 1),
            Direction::Left => (-1, 0),
            Direction::UpLeft => (-1, -1),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::UpRight => Direction::DownLeft,
            Direction::Right => Direction::Left,
            Direction::DownRight => Direction::UpLeft,
            Direction::Down => Direction::Up,
            Direction::DownLeft => Direction::UpRight,
            Direction::Left => Direction::Right,
            Direction::UpLeft => Direction::DownRight,
        }
    }

    /// Rotates 90 degrees clockwise. Orthogonal directions stay orthogonal
    /// and diagonals stay diagonal.
    pub const fn turn_right(self) -> Direction {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
            Direction::UpRight => Direction::DownRight,
            Direction::DownRight => Direction::DownLeft,
            Direction::DownLeft => Direction::UpLeft,
            Direction::UpLeft => Direction::UpRight,
        }
    }

    /// Bit used to record this direction in a per-cell `u8` mask.
    pub(crate) const fn bit(self) -> u8 {
        1 << self as u8
    }

    /// Direction a guard marker such as `^` or `>` is facing.
    pub fn from_arrow(c: char) -> Option<Direction> {
        match c {
            '^' => Some(Direction::Up),
            '>' => Some(Direction::Right),
            'v' | 'V' => Some(Direction::Down),
            '<' => Some(Direction::Left),
            _ => None,
        }
    }
}

/// Which neighbors of a cell count as adjacent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Directions {
    /// Up, right, down, left
    #[default]
    Orthogonal,
    /// Orthogonal plus diagonals
    All,
}

impl Directions {
    pub const fn as_slice(self) -> &'static [Direction] {
        match self {
            Directions::Orthogonal => &Direction::ORTHOGONAL,
            Directions::All => &Direction::ALL,
        }
    }
}
