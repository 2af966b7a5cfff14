//! Advent of Code puzzle solutions with automatic registration
//!
//! This crate contains actual puzzle solutions organized by year, plus the
//! shared [`utils`] they are built on. Each solution uses the
//! `AutoRegisterSolver` derive macro for automatic plugin registration with
//! the solver framework.

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
