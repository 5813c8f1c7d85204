//! Resolution of command-line inputs to concrete sources

use anyhow::Context;
use glob::glob;
use std::fmt;
use std::path::PathBuf;

use crate::error::{CliError, CliResult};

/// Name that selects standard input
pub const STDIN_NAME: &str = "-";

/// Where a stream of lines comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolve arguments to sources, in argument order
///
/// `-` selects standard input, arguments with glob metacharacters are
/// expanded, anything else must name an existing file. An input named twice
/// is processed twice.
pub fn resolve_sources(args: &[String]) -> CliResult<Vec<InputSource>> {
    let mut sources = Vec::new();

    for arg in args {
        if arg == STDIN_NAME {
            sources.push(InputSource::Stdin);
        } else if is_pattern(arg) {
            sources.extend(expand(arg)?.into_iter().map(InputSource::File));
        } else {
            let path = PathBuf::from(arg);
            if !path.exists() {
                return Err(CliError::FileNotFound(arg.clone()).into());
            }
            sources.push(InputSource::File(path));
        }
    }

    if sources.is_empty() {
        sources.push(InputSource::Stdin);
    }

    Ok(sources)
}

fn is_pattern(arg: &str) -> bool {
    arg.contains(['*', '?', '['])
}

fn expand(pattern: &str) -> CliResult<Vec<PathBuf>> {
    let paths = glob(pattern).map_err(|e| CliError::InvalidPattern(format!("{pattern} ({e})")))?;

    let mut files = Vec::new();
    for path_result in paths {
        let path = path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;
        if path.is_file() {
            files.push(path);
        }
    }

    if files.is_empty() {
        return Err(CliError::InvalidPattern(format!("{pattern} (no files found)")).into());
    }

    Ok(files)
}
