//! Failures between reading an input and producing an answer

use thiserror::Error;

/// A puzzle input that does not have the expected shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Well-formed input lacking something the puzzle requires
    #[error("Missing data: {0}")]
    MissingData(String),
}

/// Failure of a single part on already parsed data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// Inside `1..=PARTS` but without a `PartSolver` behind it
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    #[error("Part {part} is outside 1..={parts}")]
    PartOutOfRange { part: u8, parts: u8 },
    #[error("{0}")]
    SolveFailed(String),
}

/// What the runner reports for a (year, day, part) that produced no answer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Also returned for a year or day the registry cannot address
    #[error("No solver registered for {year} day {day}")]
    NotFound { year: u16, day: u8 },
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("Part {part} failed: {source}")]
    Solve {
        part: u8,
        #[source]
        source: SolveError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    #[error("Cannot register solver for year {0} day {1}: out of range")]
    InvalidYearDay(u16, u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_error_names_the_part() {
        let error = SolverError::Solve {
            part: 2,
            source: SolveError::PartOutOfRange { part: 2, parts: 1 },
        };
        assert_eq!(error.to_string(), "Part 2 failed: Part 2 is outside 1..=1");
    }

    #[test]
    fn test_parse_error_converts() {
        let error: SolverError = ParseError::MissingData("guard".into()).into();
        assert_eq!(error, SolverError::Parse(ParseError::MissingData("guard".into())));
    }
}
