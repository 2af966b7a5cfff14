//! Trait-based DP problem definition.

/// Dependency structure and combination rule of a DP problem.
///
/// - `I`: index type
/// - `K`: value type stored per index
pub trait DpProblem<I, K> {
    /// Returns the indices that this index depends on.
    ///
    /// For base cases, return an empty vector.
    fn deps(&self, index: &I) -> Vec<I>;

    /// Computes the value for `index` from its resolved dependency values,
    /// given in the order `deps()` returned them.
    fn compute(&self, index: &I, deps: Vec<K>) -> K;
}
