//! Walk simulation with repeated-state cycle detection

use std::collections::HashSet;

use super::direction::Direction;
use super::storage::{Grid, Position};

/// Where the walker stands and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WalkState {
    pub position: Position,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkEnd {
    /// The next step would have left the grid
    Exited,
    /// The last recorded state had already been visited
    Cycle,
}

/// States visited by one simulation, in order.
///
/// On a cycle, the final state is the repeated one, so it appears twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walk {
    states: Vec<WalkState>,
    end: WalkEnd,
}

impl Walk {
    pub fn states(&self) -> &[WalkState] {
        &self.states
    }

    pub fn end(&self) -> WalkEnd {
        self.end
    }

    pub fn is_cycle(&self) -> bool {
        self.end == WalkEnd::Cycle
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Cells visited, ignoring direction.
    pub fn distinct_positions(&self) -> HashSet<Position> {
        self.states.iter().map(|state| state.position).collect()
    }

    pub fn distinct_position_count(&self) -> usize {
        self.distinct_positions().len()
    }
}

impl<T> Grid<T> {
    /// Walk forward from `start`, turning right in front of obstacles.
    ///
    /// `obstruction` is treated as one extra obstacle for this run only.
    /// The walk stops when the next step leaves the grid or a
    /// (cell, direction) state repeats. A start off the grid yields an
    /// empty walk that counts as having exited.
    pub fn simulate_walk(
        &self,
        start: Position,
        direction: Direction,
        is_obstacle: fn(&T) -> bool,
        obstruction: Option<Position>,
    ) -> Walk {
        if !self.contains(start) {
            return Walk {
                states: Vec::new(),
                end: WalkEnd::Exited,
            };
        }

        // One bit per direction for every cell
        let mut seen = vec![0u8; self.len()];
        let mut states = Vec::new();
        let mut state = WalkState {
            position: start,
            direction,
        };

        loop {
            let index = self.index(state.position);
            let bit = state.direction.bit();
            states.push(state);
            if seen[index] & bit != 0 {
                return Walk {
                    states,
                    end: WalkEnd::Cycle,
                };
            }
            seen[index] |= bit;

            let Some(next) = self.step(state.position, state.direction) else {
                return Walk {
                    states,
                    end: WalkEnd::Exited,
                };
            };

            let blocked = obstruction == Some(next) || is_obstacle(&self.cells[self.index(next)]);
            state = if blocked {
                WalkState {
                    position: state.position,
                    direction: state.direction.turn_right(),
                }
            } else {
                WalkState {
                    position: next,
                    direction: state.direction,
                }
            };
        }
    }
}
