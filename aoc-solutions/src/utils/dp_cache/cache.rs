//! Single-threaded DP cache implementation.

use std::cell::RefCell;
use std::marker::PhantomData;

use super::backend::Backend;
use super::problem::DpProblem;

/// A dynamic programming cache with lazy evaluation and dependency resolution.
///
/// Values are computed on first request, after resolving the indices they
/// depend on; every index is computed at most once. Resolution walks the
/// dependency graph with an explicit work stack, so chain depth is bounded by
/// memory rather than by the thread's call stack.
///
/// # Warning: No Cycle Detection
///
/// If the dependency graph has a cycle, `get` never returns. **Dependencies
/// must form a DAG.**
pub struct DpCache<I, K, B, P>
where
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    backend: RefCell<B>,
    problem: P,
    _phantom: PhantomData<(I, K)>,
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    /// Creates a new DpCache with the given backend and problem definition.
    pub fn with_problem(backend: B, problem: P) -> Self {
        Self {
            backend: RefCell::new(backend),
            problem,
            _phantom: PhantomData,
        }
    }

    /// The problem this cache evaluates
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Retrieves the value for the given index, computing it if necessary.
    pub fn get(&self, index: &I) -> K {
        if let Some(value) = self.cached(index) {
            return value;
        }

        // Post-order walk: a frame is computed once all its deps are cached
        let mut root = self.frame(index.clone());
        let mut stack: Vec<Frame<I>> = Vec::new();
        loop {
            let frame = stack.last_mut().unwrap_or(&mut root);
            if let Some(dep) = self.next_uncached(frame) {
                stack.push(self.frame(dep));
                continue;
            }

            match stack.pop() {
                Some(done) => {
                    self.settle(done);
                }
                None => return self.settle(root),
            }
        }
    }

    fn frame(&self, index: I) -> Frame<I> {
        Frame {
            deps: self.problem.deps(&index),
            index,
            next: 0,
        }
    }

    fn cached(&self, index: &I) -> Option<K> {
        self.backend.borrow().get(index).cloned()
    }

    fn next_uncached(&self, frame: &mut Frame<I>) -> Option<I> {
        while let Some(dep) = frame.deps.get(frame.next) {
            frame.next += 1;
            if self.backend.borrow().get(dep).is_none() {
                return Some(dep.clone());
            }
        }
        None
    }

    fn settle(&self, frame: Frame<I>) -> K {
        let Frame { index, deps, .. } = frame;
        let values: Vec<K> = deps.iter().filter_map(|dep| self.cached(dep)).collect();
        self.backend
            .borrow_mut()
            .get_or_insert(index.clone(), || self.problem.compute(&index, values))
            .clone()
    }
}

/// An index waiting for its dependencies, `next` being the first unchecked one
struct Frame<I> {
    index: I,
    deps: Vec<I>,
    next: usize,
}
