//! Error types for the CLI

use std::path::PathBuf;

use thiserror::Error;
use thiserror_ext::Arc as ArcDerive;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Executor error (wraps Arc for cheap cloning)
    #[error("{0}")]
    Executor(#[from] ArcExecutorError),
}

/// Errors reading puzzle inputs
#[derive(Error, Debug)]
pub enum InputError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Executor-specific errors
#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcExecutorError))]
pub enum ExecutorError {
    /// No input file for this puzzle
    #[error("Missing input for {year}/{day:02}: expected {}", .path.display())]
    MissingInput { year: u16, day: u8, path: PathBuf },

    /// Input file exists but could not be read
    #[error("Input unavailable for {year}/{day:02}: {source}")]
    InputRead {
        year: u16,
        day: u8,
        #[source]
        source: InputError,
    },

    /// Solver creation or execution failed
    #[error("{0}")]
    Solver(#[from] aoc_solver::SolverError),

    /// Channel send error
    #[error("Channel send error")]
    ChannelSend,

    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),

    /// Multiple errors collected during parallel execution
    #[error("Multiple errors occurred ({} total)", .0.len())]
    Multiple(Vec<ArcExecutorError>),
}

impl ArcExecutorError {
    /// Combine two Arc-wrapped errors into one
    /// 1. If first is singular and second is Multiple: prepend first to second's vec
    /// 2. If second is singular and first is Multiple: append second to first's vec
    /// 3. If both are Multiple: concat them
    /// 4. If both are singular: create new Multiple with both
    pub fn combine(first: ArcExecutorError, second: ArcExecutorError) -> ArcExecutorError {
        let errors = match (first.inner(), second.inner()) {
            (ExecutorError::Multiple(v1), ExecutorError::Multiple(v2)) => {
                let mut combined = v1.clone();
                combined.extend(v2.iter().cloned());
                combined
            }
            (_, ExecutorError::Multiple(v)) => {
                let mut combined = vec![first.clone()];
                combined.extend(v.iter().cloned());
                combined
            }
            (ExecutorError::Multiple(v), _) => {
                let mut combined = v.clone();
                combined.push(second.clone());
                combined
            }
            _ => vec![first.clone(), second.clone()],
        };
        ExecutorError::Multiple(errors).into()
    }

    /// Number of individual errors this one stands for
    pub fn count(&self) -> usize {
        match self.inner() {
            ExecutorError::Multiple(errors) => errors.iter().map(Self::count).sum(),
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single() -> ArcExecutorError {
        ExecutorError::ChannelSend.into()
    }

    #[test]
    fn test_combine_singles() {
        let combined = ArcExecutorError::combine(single(), single());
        assert!(matches!(combined.inner(), ExecutorError::Multiple(v) if v.len() == 2));
        assert_eq!(combined.count(), 2);
    }

    #[test]
    fn test_combine_flattens_multiple() {
        let pair = ArcExecutorError::combine(single(), single());
        let left = ArcExecutorError::combine(single(), pair.clone());
        let right = ArcExecutorError::combine(pair.clone(), single());
        let both = ArcExecutorError::combine(pair.clone(), pair);

        for (combined, expected) in [(left, 3), (right, 3), (both, 4)] {
            assert!(matches!(combined.inner(), ExecutorError::Multiple(v) if v.len() == expected));
        }
    }

    #[test]
    fn test_missing_input_message() {
        let err: ArcExecutorError = ExecutorError::MissingInput {
            year: 2024,
            day: 6,
            path: PathBuf::from("inputs/2024_day06.txt"),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Missing input for 2024/06: expected inputs/2024_day06.txt"
        );
    }
}
