//! A parsed puzzle behind dynamic dispatch

use crate::error::{ParseError, SolverError};
use crate::solver::Solver;
use chrono::{TimeDelta, Utc};

/// An answer and the wall-clock time spent computing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    pub answer: String,
    pub duration: TimeDelta,
}

fn timed<R>(f: impl FnOnce() -> R) -> (R, TimeDelta) {
    let start = Utc::now();
    let value = f();
    (value, Utc::now() - start)
}

/// Shared data of one parsed input plus how long parsing took.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_duration: TimeDelta,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let (shared, parse_duration) = timed(|| S::parse(input));
        Ok(Self {
            year,
            day,
            shared: shared?,
            parse_duration,
        })
    }
}

/// Object-safe view of a [`SolverInstance`], as the registry hands it out.
///
/// Parts run against the same instance in whatever order they are asked for,
/// so a part relying on an earlier one must compute that result itself when
/// it is missing.
pub trait DynSolver {
    fn year(&self) -> u16;

    fn day(&self) -> u8;

    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta;

    /// Solve `part`, timing only the solve itself.
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolverError>;
}

impl<S: Solver> DynSolver for SolverInstance<'_, S> {
    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }

    fn parse_duration(&self) -> TimeDelta {
        self.parse_duration
    }

    fn solve(&mut self, part: u8) -> Result<SolveResult, SolverError> {
        let (answer, duration) = timed(|| S::solve_checked(&mut self.shared, part));
        let answer = answer.map_err(|source| SolverError::Solve { part, source })?;
        Ok(SolveResult { answer, duration })
    }
}
