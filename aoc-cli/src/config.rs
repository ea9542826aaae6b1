//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use crate::inputs::InputKind;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    pub year: u16,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Root of the input tree, `~` expanded
    pub inputs_dir: PathBuf,
    pub input_kind: InputKind,
    pub quiet: bool,
    pub verbose: bool,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let inputs_dir = expand_tilde(&args.inputs_dir);
        if !inputs_dir.is_dir() {
            return Err(CliError::Config(format!(
                "inputs directory {} does not exist (set --inputs-dir or AOC_INPUTS_DIR)",
                inputs_dir.display()
            )));
        }

        Ok(Config {
            year: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            inputs_dir,
            input_kind: if args.input {
                InputKind::Full
            } else {
                InputKind::Sample
            },
            quiet: args.quiet,
            verbose: args.verbose,
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

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_expand_tilde() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~")), home);
            assert_eq!(expand_tilde(Path::new("~/aoc/inputs")), home.join("aoc/inputs"));
        }
        assert_eq!(expand_tilde(Path::new("inputs")), PathBuf::from("inputs"));
        assert_eq!(expand_tilde(Path::new("~other/x")), PathBuf::from("~other/x"));
    }

    #[test]
    fn test_from_args_resolves_input_kind() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().to_str().unwrap();

        let config = Config::from_args(Args::parse_from(["aoc", "3", "--inputs-dir", dir])).unwrap();
        assert_eq!(config.input_kind, InputKind::Sample);
        assert_eq!(config.day_filter, Some(3));
        assert_eq!(config.part_filter, None);

        let config = Config::from_args(Args::parse_from(["aoc", "--input", "--inputs-dir", dir])).unwrap();
        assert_eq!(config.input_kind, InputKind::Full);
    }

    #[test]
    fn test_missing_inputs_dir_rejected() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");
        let args = Args::parse_from(["aoc", "--inputs-dir", missing.to_str().unwrap()]);
        assert!(matches!(Config::from_args(args), Err(CliError::Config(_))));
    }
}
