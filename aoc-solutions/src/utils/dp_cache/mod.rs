//! Memoised evaluation of values laid out as a DAG
//!
//! A [`DpProblem`] describes, for every index, which other indices it
//! depends on and how to combine their values. [`DpCache`] resolves those
//! dependencies lazily and computes each index exactly once, storing values
//! in a pluggable [`Backend`].
//!
//! # Warning: Cycle Behavior
//!
//! **There is no cycle detection.** A dependency cycle makes `get` loop
//! forever. Callers must guarantee the dependencies form a DAG.
//!
//! # Example
//!
//! ```rust
//! use aoc_solutions::utils::dp_cache::{DpCache, DpProblem, VecBackend};
//!
//! struct GridPaths {
//!     width: usize,
//! }
//!
//! // Monotone lattice paths from (0, 0) to each cell, cells indexed row-major.
//! impl DpProblem<usize, u64> for GridPaths {
//!     fn deps(&self, index: &usize) -> Vec<usize> {
//!         let (x, y) = (index % self.width, index / self.width);
//!         let mut deps = Vec::new();
//!         if x > 0 { deps.push(index - 1); }
//!         if y > 0 { deps.push(index - self.width); }
//!         deps
//!     }
//!     fn compute(&self, _index: &usize, deps: Vec<u64>) -> u64 {
//!         if deps.is_empty() { 1 } else { deps.iter().sum() }
//!     }
//! }
//!
//! let cache = DpCache::with_problem(VecBackend::new(), GridPaths { width: 5 });
//! assert_eq!(cache.get(&24), 70); // C(8, 4)
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, VecBackend};
pub use cache::DpCache;
pub use problem::DpProblem;
