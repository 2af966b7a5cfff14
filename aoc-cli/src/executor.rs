//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::inputs::InputStore;
use aoc_solver::{DynSolver, SolverRegistry};
use chrono::TimeDelta;
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;
use tracing::{debug, warn};

/// Result from a single solver execution
#[derive(Debug, Clone)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, ArcExecutorError>,
    /// Parse time of the instance that solved this part, if parsing succeeded
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

impl SolverResult {
    fn failed(year: u16, day: u8, part: u8, error: ArcExecutorError) -> Self {
        Self {
            year,
            day,
            part,
            answer: Err(error),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }
}

/// Work item representing a solver to execute
#[derive(Debug, Clone)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    sync_executor_config: SyncExecutorConfig,
    thread_pool: rayon::ThreadPool,
}

/// Everything a worker thread needs, shared by reference across the pool
pub struct SyncExecutorConfig {
    registry: SolverRegistry,
    inputs: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            sync_executor_config: SyncExecutorConfig {
                registry,
                inputs: InputStore::new(config.input_dir.clone()),
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cfg = &self.sync_executor_config;
        cfg.registry
            .storage()
            .iter_info()
            .filter(|info| cfg.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| cfg.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on config.part_filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.sync_executor_config.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Work items whose input file is absent
    pub fn missing_inputs(&self, work_items: &[WorkItem]) -> Vec<(u16, u8)> {
        let inputs = &self.sync_executor_config.inputs;
        work_items
            .iter()
            .filter(|w| !inputs.contains(w.year, w.day))
            .map(|w| (w.year, w.day))
            .collect()
    }

    /// Execute all work items and send results to channel
    ///
    /// Puzzle failures (missing input, parse or solve errors) travel inside
    /// the results; only failures of the executor itself are returned.
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();
        debug!(
            items = work_items.len(),
            mode = ?self.sync_executor_config.parallelize_by,
            threads = self.thread_pool.current_num_threads(),
            "starting execution"
        );

        match self.sync_executor_config.parallelize_by {
            ParallelizeBy::Sequential => work_items
                .iter()
                .filter_map(|work| run_work_item(work, &tx, &self.sync_executor_config).err())
                .reduce(ArcExecutorError::combine)
                .map_or(Ok(()), Err),
            ParallelizeBy::Year => {
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();

                self.execute_parallel_grouped(by_year, &tx)
            }
            // Part differs from Day inside run_work_item
            ParallelizeBy::Day | ParallelizeBy::Part => {
                let singles = work_items.into_iter().map(|w| vec![w]).collect();
                self.execute_parallel_grouped(singles, &tx)
            }
        }
    }

    /// Run groups in parallel; items within a group run in order
    fn execute_parallel_grouped(
        &self,
        groups: Vec<Vec<WorkItem>>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let sync_executor_config = &self.sync_executor_config;

        self.thread_pool.install(|| {
            groups
                .into_par_iter()
                .flat_map_iter(|items| {
                    items
                        .into_iter()
                        .filter_map(|work| run_work_item(&work, tx, sync_executor_config).err())
                        .collect::<Vec<_>>()
                })
                .reduce_with(ArcExecutorError::combine)
                .map_or(Ok(()), Err)
        })
    }
}

/// Load the input and solve every requested part of one work item
fn run_work_item(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    sync_executor_config: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    debug!(year = work.year, day = work.day, parts = ?work.parts, "running solver");

    let input = match load_input(work, &sync_executor_config.inputs) {
        Ok(input) => input,
        Err(e) => {
            warn!(year = work.year, day = work.day, error = %e, "skipping solver");
            for part in work.parts.clone() {
                send(tx, SolverResult::failed(work.year, work.day, part, e.clone()))?;
            }
            return Ok(());
        }
    };

    if matches!(sync_executor_config.parallelize_by, ParallelizeBy::Part) {
        run_parts_parallel(work, &input, tx, &sync_executor_config.registry)
    } else {
        run_parts_sequential(work, &input, tx, &sync_executor_config.registry)
    }
}

fn load_input(work: &WorkItem, inputs: &InputStore) -> Result<String, ArcExecutorError> {
    let (year, day) = (work.year, work.day);
    match inputs.get(year, day) {
        Ok(Some(input)) => Ok(input),
        Ok(None) => Err(ExecutorError::MissingInput {
            year,
            day,
            path: inputs.input_path(year, day),
        }
        .into()),
        Err(source) => Err(ExecutorError::InputRead { year, day, source }.into()),
    }
}

/// Parse once, then solve the parts in order on the same instance
fn run_parts_sequential(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    registry: &SolverRegistry,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);
    match registry.create_solver(year, day, input) {
        Ok(mut solver) => {
            for part in work.parts.clone() {
                send(tx, solve_part(year, day, part, &mut *solver))?;
            }
        }
        Err(e) => {
            let error = solver_error(e);
            for part in work.parts.clone() {
                send(tx, SolverResult::failed(year, day, part, error.clone()))?;
            }
        }
    }
    Ok(())
}

/// Each part parses its own instance so parts can run on separate threads
fn run_parts_parallel(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    registry: &SolverRegistry,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);

    let results: Vec<SolverResult> = work
        .parts
        .clone()
        .into_par_iter()
        .map(|part| match registry.create_solver(year, day, input) {
            Ok(mut solver) => solve_part(year, day, part, &mut *solver),
            Err(e) => SolverResult::failed(year, day, part, solver_error(e)),
        })
        .collect();

    results.into_iter().try_for_each(|result| send(tx, result))
}

fn solve_part(year: u16, day: u8, part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    let parse_duration = Some(solver.parse_duration());
    match solver.solve(part) {
        Ok(solved) => SolverResult {
            year,
            day,
            part,
            solve_duration: solved.duration,
            answer: Ok(solved.answer),
            parse_duration,
        },
        Err(e) => SolverResult {
            parse_duration,
            ..SolverResult::failed(year, day, part, solver_error(e))
        },
    }
}

fn solver_error(e: impl Into<aoc_solver::SolverError>) -> ArcExecutorError {
    ExecutorError::Solver(e.into()).into()
}

fn send(tx: &Sender<SolverResult>, result: SolverResult) -> Result<(), ArcExecutorError> {
    tx.send(result)
        .map_err(|_| ExecutorError::ChannelSend.into())
}
