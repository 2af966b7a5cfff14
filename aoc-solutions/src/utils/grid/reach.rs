//! Counting trails from a start cell to target cells
//!
//! A trail moves between adjacent cells, only along steps the caller's
//! `can_step` rule admits, and ends at the first cell satisfying
//! `is_target`. Both counting modes assume the admitted steps form a DAG;
//! on a cyclic step graph path counting does not terminate.

use super::direction::Directions;
use super::storage::{CellId, Grid, Position};
use crate::utils::dp_cache::{DpCache, DpProblem, VecBackend};

/// Caller-supplied rules for a reachability query.
///
/// Plain function pointers: the rules carry no captured state.
pub struct ReachRules<T> {
    pub directions: Directions,
    /// Whether a trail may move from a cell holding the first value to an
    /// adjacent cell holding the second.
    pub can_step: fn(&T, &T) -> bool,
    /// Whether a cell ends a trail.
    pub is_target: fn(&T) -> bool,
}

impl<T> Clone for ReachRules<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ReachRules<T> {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountMode {
    /// Number of distinct target cells reachable from the start
    DistinctEndpoints,
    /// Number of distinct trails; two trails to the same target count twice
    Paths,
}

impl<T> Grid<T> {
    /// Count the trails (or their distinct endpoints) starting at `start`.
    ///
    /// A start outside the grid, or on an empty grid, counts zero. A start
    /// that is itself a target counts as one zero-length trail.
    pub fn count_reachable(&self, start: Position, rules: &ReachRules<T>, mode: CountMode) -> u64 {
        match mode {
            CountMode::DistinctEndpoints => self.count_endpoints(start, rules),
            CountMode::Paths => self.path_counter(*rules).count_from(start),
        }
    }

    /// A memoising trail counter reusable across many starts on this grid.
    pub fn path_counter(&self, rules: ReachRules<T>) -> PathCounter<'_, T> {
        PathCounter {
            cache: DpCache::with_problem(
                VecBackend::with_capacity(self.len()),
                TrailProblem { grid: self, rules },
            ),
        }
    }

    fn count_endpoints(&self, start: Position, rules: &ReachRules<T>) -> u64 {
        let Some(start) = self.id_of(start) else {
            return 0;
        };

        let mut visited = vec![false; self.len()];
        let mut stack = vec![start.index()];
        visited[start.index()] = true;
        let mut endpoints = 0;

        while let Some(index) = stack.pop() {
            let current = &self.cells[index];
            if (rules.is_target)(current) {
                endpoints += 1;
                continue;
            }

            let position = Position::new(index % self.width, index / self.width);
            for next in self.neighbors(position, rules.directions) {
                let next_index = next.id.index();
                if !visited[next_index] && (rules.can_step)(current, next.value) {
                    visited[next_index] = true;
                    stack.push(next_index);
                }
            }
        }

        endpoints
    }
}

/// Trail counts per cell, computed once and shared by every start.
pub struct PathCounter<'g, T> {
    cache: DpCache<usize, u64, VecBackend<u64>, TrailProblem<'g, T>>,
}

impl<T> PathCounter<'_, T> {
    pub fn count_from(&self, start: Position) -> u64 {
        self.cache
            .problem()
            .grid
            .id_of(start)
            .map_or(0, |id| self.cache.get(&id.index()))
    }
}

struct TrailProblem<'g, T> {
    grid: &'g Grid<T>,
    rules: ReachRules<T>,
}

impl<T> DpProblem<usize, u64> for TrailProblem<'_, T> {
    fn deps(&self, index: &usize) -> Vec<usize> {
        let Some(cell) = self.grid.cell_by_id(CellId(*index)) else {
            return Vec::new();
        };
        if (self.rules.is_target)(cell.value) {
            return Vec::new();
        }

        self.grid
            .neighbors(cell.position, self.rules.directions)
            .filter(|next| (self.rules.can_step)(cell.value, next.value))
            .map(|next| next.id.index())
            .collect()
    }

    fn compute(&self, index: &usize, deps: Vec<u64>) -> u64 {
        match self.grid.cells.get(*index) {
            Some(value) if (self.rules.is_target)(value) => 1,
            Some(_) => deps.iter().sum(),
            None => 0,
        }
    }
}
