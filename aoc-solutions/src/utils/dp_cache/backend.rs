//! Storage backends for the DP cache.

/// A storage backend for the DP cache.
///
/// Implementations only need to remember values; the cache decides when
/// to compute them.
pub trait Backend<I, K> {
    /// Returns the cached value for `index`, if computed.
    fn get(&self, index: &I) -> Option<&K>;

    /// Returns the cached value for `index`, storing `compute()` first if absent.
    fn get_or_insert<F>(&mut self, index: I, compute: F) -> &K
    where
        F: FnOnce() -> K;
}

/// A Vec-based backend for dense `usize` indices.
///
/// Grows on demand to fit the largest index inserted.
#[derive(Debug)]
pub struct VecBackend<K> {
    data: Vec<Option<K>>,
}

impl<K> VecBackend<K> {
    /// Creates a new empty VecBackend.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates a VecBackend with room for indices `0..capacity` up front.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut data = Vec::with_capacity(capacity);
        data.resize_with(capacity, || None);
        Self { data }
    }
}

impl<K> Default for VecBackend<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Backend<usize, K> for VecBackend<K> {
    fn get(&self, index: &usize) -> Option<&K> {
        self.data.get(*index).and_then(Option::as_ref)
    }

    fn get_or_insert<F>(&mut self, index: usize, compute: F) -> &K
    where
        F: FnOnce() -> K,
    {
        if index >= self.data.len() {
            self.data.resize_with(index + 1, || None);
        }
        self.data[index].get_or_insert_with(compute)
    }
}
