//! Local puzzle input files
//!
//! Layout: `{root}/{year}/day{DD}/sample.txt`, optionally
//! `sample_part{P}.txt` when a part has its own example, and `input.txt`
//! for the full puzzle input.

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Which input file to run against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// The published example (default)
    Sample,
    /// The full personal input
    Full,
}

/// File-based store of puzzle inputs
pub struct InputStore {
    root: PathBuf,
}

impl InputStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding one day's files
    pub fn day_dir(&self, year: u16, day: u8) -> PathBuf {
        self.root.join(year.to_string()).join(format!("day{:02}", day))
    }

    /// Path of the file a part reads; a part-specific sample wins over the
    /// shared one when it exists.
    pub fn path(&self, year: u16, day: u8, part: u8, kind: InputKind) -> PathBuf {
        let dir = self.day_dir(year, day);
        match kind {
            InputKind::Full => dir.join("input.txt"),
            InputKind::Sample => {
                let specific = dir.join(format!("sample_part{}.txt", part));
                if specific.is_file() {
                    specific
                } else {
                    dir.join("sample.txt")
                }
            }
        }
    }

    /// Check if the input for a part exists
    pub fn contains(&self, year: u16, day: u8, part: u8, kind: InputKind) -> bool {
        self.path(year, day, part, kind).is_file()
    }

    /// Read the input at `path`
    pub fn read(&self, path: &Path) -> Result<String, InputError> {
        fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => InputError::Missing {
                path: path.to_path_buf(),
            },
            _ => InputError::Read {
                path: path.to_path_buf(),
                source,
            },
        })
    }
}
