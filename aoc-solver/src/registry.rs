//! Solver registry for managing and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;

// ============================================================================
// Storage Constants and Index Calculation
// ============================================================================

/// Base year for AoC (first year of Advent of Code)
pub const BASE_YEAR: u16 = 2015;
/// Maximum number of years supported (2015-2034)
pub const MAX_YEARS: usize = 20;
/// Days per year in AoC (1-25)
pub const DAYS_PER_YEAR: usize = 25;
/// Total capacity of the flat storage
pub const CAPACITY: usize = MAX_YEARS * DAYS_PER_YEAR;

/// Calculate flat index from year/day, returning None if out of bounds
#[inline]
fn calc_index(year: u16, day: u8) -> Option<usize> {
    if year < BASE_YEAR || year >= BASE_YEAR + MAX_YEARS as u16 {
        return None;
    }
    if day == 0 || day > DAYS_PER_YEAR as u8 {
        return None;
    }
    let y = (year - BASE_YEAR) as usize;
    let d = (day - 1) as usize;
    Some(y * DAYS_PER_YEAR + d)
}

/// Reconstruct year/day from flat index
#[inline]
fn from_index(index: usize) -> (u16, u8) {
    let year = BASE_YEAR + (index / DAYS_PER_YEAR) as u16;
    let day = (index % DAYS_PER_YEAR) as u8 + 1;
    (year, day)
}

// ============================================================================
// Factory Types
// ============================================================================

/// Thread-safe factory that parses an input into a ready-to-solve instance
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver factory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// Number of parts this solver supports
    pub parts: u8,
}

struct SolverFactoryEntry {
    factory: SolverFactory,
    parts: u8,
}

/// Parse `input` with solver `S` and erase the concrete type.
pub fn instantiate<'a, S>(
    year: u16,
    day: u8,
    input: &'a str,
) -> Result<Box<dyn DynSolver + 'a>, ParseError>
where
    S: Solver + 'static,
{
    Ok(Box::new(SolverInstance::<S>::new(year, day, input)?))
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for an immutable [`SolverRegistry`]
///
/// Storage is a flat slot per (year, day), so lookups are O(1) and
/// iteration comes out ordered by year then day.
///
/// ```no_run
/// # use aoc_solver::SolverRegistryBuilder;
/// let registry = SolverRegistryBuilder::new()
///     .register_all_plugins()
///     .unwrap()
///     .build();
/// ```
pub struct SolverRegistryBuilder {
    entries: Vec<Option<SolverFactoryEntry>>,
}

impl SolverRegistryBuilder {
    /// Create a new empty registry builder with pre-allocated storage
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Register a solver factory with explicit parts count
    ///
    /// Returns error if year/day is out of bounds or already registered.
    pub fn register_factory<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let index = calc_index(year, day).ok_or(RegistrationError::InvalidYearDay(year, day))?;

        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }

        self.entries[index] = Some(SolverFactoryEntry {
            factory: Box::new(factory),
            parts,
        });
        Ok(self)
    }

    /// Register all collected solver plugins
    ///
    /// Iterates through all plugins submitted via `inventory::submit!`.
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register solver plugins that match the given filter predicate
    ///
    /// ```no_run
    /// # use aoc_solver::SolverRegistryBuilder;
    /// let registry = SolverRegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.tags.contains(&"grid"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.year, plugin.day)?;
            }
        }
        Ok(self)
    }

    /// Build the immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            storage: SolverFactoryStorage {
                entries: self.entries,
            },
        }
    }
}

impl Default for SolverRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Storage and Registry
// ============================================================================

/// Read-only view over the registered factories
pub struct SolverFactoryStorage {
    entries: Vec<Option<SolverFactoryEntry>>,
}

impl SolverFactoryStorage {
    /// Iterate over metadata for all registered factories, ordered by year then day
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, entry)| {
            entry.as_ref().map(|e| {
                let (year, day) = from_index(i);
                FactoryInfo {
                    year,
                    day,
                    parts: e.parts,
                }
            })
        })
    }

    /// Get metadata for a specific factory
    pub fn get_info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        calc_index(year, day)
            .and_then(|i| self.entries.get(i)?.as_ref())
            .map(|e| FactoryInfo {
                year,
                day,
                parts: e.parts,
            })
    }

    /// Check if a factory exists for year/day
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.get_info(year, day).is_some()
    }

    /// Get the number of registered factories
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Check if storage is empty
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }
}

/// Immutable registry for looking up and creating solvers
pub struct SolverRegistry {
    storage: SolverFactoryStorage,
}

impl SolverRegistry {
    /// Get readonly access to the factory storage for iteration/lookup
    pub fn storage(&self) -> &SolverFactoryStorage {
        &self.storage
    }

    /// Create a solver instance by invoking the factory for a specific year/day
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let entry = calc_index(year, day)
            .and_then(|index| self.storage.entries.get(index))
            .and_then(|e| e.as_ref())
            .ok_or(SolverError::NotFound { year, day })?;

        Ok((entry.factory)(input)?)
    }
}

// ============================================================================
// Plugins
// ============================================================================

/// Object-safe registration hook for solver plugins
///
/// `Solver` has associated types and cannot be stored as a trait object;
/// this trait can. Every `Solver + Sync + 'static` implements it.
pub trait RegisterableSolver: Sync {
    /// Register this solver type with the builder for a specific year and day
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<SolverRegistryBuilder, RegistrationError>;

    /// Number of parts the solver supports
    fn parts(&self) -> u8;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<SolverRegistryBuilder, RegistrationError> {
        builder.register_factory(year, day, S::PARTS, move |input: &str| {
            instantiate::<S>(year, day, input)
        })
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// Plugin information for automatic solver registration
///
/// Usually submitted by `#[derive(AutoRegisterSolver)]`; can be submitted by
/// hand with `inventory::submit!`.
pub struct SolverPlugin {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Tags for filtering (e.g. "2024", "grid")
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

/// Register a solver type on a builder variable
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolverRegistryBuilder, SolveError, Solver};
///
/// struct Echo;
///
/// impl AocParser for Echo {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl Solver for Echo {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
///         Ok(shared.to_string())
///     }
/// }
///
/// let mut builder = SolverRegistryBuilder::new();
/// aoc_solver::register_solver!(builder, Echo, 2024, 1);
/// let registry = builder.build();
/// let mut solver = registry.create_solver(2024, 1, "hi").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "hi");
/// ```
#[macro_export]
macro_rules! register_solver {
    ($builder:expr, $solver:ty, $year:expr, $day:expr) => {
        $builder = $builder
            .register_factory(
                $year,
                $day,
                <$solver as $crate::Solver>::PARTS,
                |input: &str| $crate::instantiate::<$solver>($year, $day, input),
            )
            .expect("Failed to register solver");
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_bounds() {
        assert_eq!(calc_index(2015, 1), Some(0));
        assert_eq!(calc_index(2034, 25), Some(CAPACITY - 1));
        assert_eq!(from_index(CAPACITY - 1), (2034, 25));
        assert_eq!(calc_index(2024, 10).map(from_index), Some((2024, 10)));
    }

    #[test]
    fn test_index_rejects_out_of_range() {
        assert_eq!(calc_index(2014, 1), None);
        assert_eq!(calc_index(2035, 1), None);
        assert_eq!(calc_index(2024, 0), None);
        assert_eq!(calc_index(2024, 26), None);
    }
}
