//! Opening input sources for line reading

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use super::InputSource;
use crate::error::{CliError, CliResult};

/// Opens sources as buffered readers
pub struct FileReader;

impl FileReader {
    /// Open a source for reading
    pub fn open(source: &InputSource) -> CliResult<Box<dyn BufRead>> {
        match source {
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
            InputSource::File(path) => {
                if !path.exists() {
                    return Err(CliError::FileNotFound(path.display().to_string()).into());
                }
                let file = File::open(path).map_err(|e| {
                    log::debug!("open {} failed: {e}", path.display());
                    CliError::Unreadable(path.display().to_string())
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}
