//! Advent of Code Solver Library
//!
//! A small, type-safe framework the 2024 solutions plug into. Each puzzle is
//! a solver with its own input parsing and one or more parts.
//!
//! # Overview
//!
//! - [`AocParser`] parses the input into shared data
//! - [`PartSolver<N>`] solves part `N`; `#[derive(AocSolver)]` generates the [`Solver`] dispatch
//! - [`SolverInstance`] / [`DynSolver`] wrap a parsed puzzle behind dynamic dispatch with timing
//! - [`SolverRegistryBuilder`] collects solvers, by hand or from `#[derive(AutoRegisterSolver)]` plugins
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Sums;
//!
//! impl AocParser for Sums {
//!     type SharedData<'a> = Vec<i32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Sums {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i32>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Sums {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().product::<i32>().to_string())
//!     }
//! }
//!
//! let mut builder = SolverRegistryBuilder::new();
//! aoc_solver::register_solver!(builder, Sums, 2024, 1);
//! let registry = builder.build();
//!
//! let mut solver = registry.create_solver(2024, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! assert_eq!(solver.solve(2).unwrap().answer, "6");
//! ```
//!
//! # Part Dependencies
//!
//! Parts receive `&mut SharedData`, so an earlier part can cache work for a
//! later one (store an `Option<T>` in the shared data and fill it lazily).

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, SolverFactory, SolverFactoryStorage, SolverPlugin,
    SolverRegistry, SolverRegistryBuilder, instantiate,
};
pub use solver::{AocParser, PartSolver, Solver};

// Re-export inventory for use by the derive macro
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
