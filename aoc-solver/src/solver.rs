//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Turns a puzzle input into the data every part works on.
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Lists;
///
/// impl AocParser for Lists {
///     type SharedData<'a> = Vec<(u32, u32)>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|line| {
///                 let (left, right) = line
///                     .split_once("   ")
///                     .ok_or_else(|| ParseError::InvalidFormat(line.to_string()))?;
///                 let number = |s: &str| {
///                     s.parse().map_err(|_| ParseError::InvalidFormat(s.to_string()))
///                 };
///                 Ok((number(left)?, number(right)?))
///             })
///             .collect()
///     }
/// }
///
/// assert_eq!(Lists::parse("3   4\n4   3").unwrap(), vec![(3, 4), (4, 3)]);
/// ```
pub trait AocParser {
    /// Owned data is the common case; borrowing from the input (`&'a str`)
    /// works when a part only needs to scan it.
    type SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Part `N` of a puzzle. `#[derive(AocSolver)]` turns the implemented parts
/// into a [`Solver`].
pub trait PartSolver<const N: u8>: AocParser {
    /// May leave results in `shared` for a later part.
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A puzzle with `PARTS` parts, dispatched by part number.
pub trait Solver: AocParser {
    const PARTS: u8;

    /// Unchecked dispatch; unknown parts are `PartNotImplemented`.
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;

    /// Dispatch that rejects parts outside `1..=PARTS` before reaching the solver.
    fn solve_checked(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange {
                part,
                parts: Self::PARTS,
            })
        }
    }
}
