//! Local puzzle input store

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

/// Directory of puzzle inputs
///
/// Directory structure: `{dir}/{year}_day{day:02}.txt`
#[derive(Debug, Clone)]
pub struct InputStore {
    dir: PathBuf,
}

impl InputStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the input file for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.dir.join(format!("{}_day{:02}.txt", year, day))
    }

    /// Check if the input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_file()
    }

    /// Read the input, or `None` if there is no file for it
    pub fn get(&self, year: u16, day: u8) -> Result<Option<String>, InputError> {
        let path = self.input_path(year, day);
        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!(year, day, path = %path.display(), bytes = content.len(), "loaded input");
                Ok(Some(content))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(InputError::Read { path, source }),
        }
    }
}
