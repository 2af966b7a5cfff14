//! Configuration resolution from CLI args

use crate::cli::{Args, ParallelizeBy};
use crate::error::CliError;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Input directory path
    pub input_dir: PathBuf,
    /// Number of threads for parallel execution
    pub thread_count: usize,
    /// Parallelization level
    pub parallelize_by: ParallelizeBy,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let thread_count = match args.threads {
            Some(0) => return Err(CliError::Config("--threads must be at least 1".to_string())),
            Some(n) => n,
            None => num_cpus(),
        };

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_dir: expand_tilde(&args.input_dir),
            thread_count,
            parallelize_by: args.parallelize_by,
            quiet: args.quiet,
        })
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(rest) = path_str.strip_prefix('~')
        && (rest.is_empty() || rest.starts_with('/'))
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest.trim_start_matches('/'));
    }
    path.to_path_buf()
}

/// Get number of CPUs
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_expand_tilde() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expand_tilde(Path::new("~")), home);
        assert_eq!(expand_tilde(Path::new("~/aoc/inputs")), home.join("aoc/inputs"));
        assert_eq!(expand_tilde(Path::new("inputs")), PathBuf::from("inputs"));
        assert_eq!(expand_tilde(Path::new("~other")), PathBuf::from("~other"));
    }

    #[test]
    fn test_thread_count() {
        let config = Config::from_args(Args::parse_from(["aoc", "--threads", "3"])).unwrap();
        assert_eq!(config.thread_count, 3);

        let config = Config::from_args(Args::parse_from(["aoc"])).unwrap();
        assert!(config.thread_count >= 1);

        assert!(matches!(
            Config::from_args(Args::parse_from(["aoc", "--threads", "0"])),
            Err(CliError::Config(_))
        ));
    }
}
