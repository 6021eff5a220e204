//! Batch Loader - process descriptor files
//!
//! One process per line, comma separated: `P<id>,<burst>[,<io>,<burst>]*`.
//! Fields after the name alternate CPU burst and I/O duration and must end
//! on a burst, so every process carries exactly one I/O value fewer than
//! it has bursts. Blank lines are skipped.
//!
//! The loader enforces the engine input contract before any engine is
//! constructed: at least one process, at least one strictly positive burst
//! each, unique ids. Malformed input surfaces as a typed `LoadError` with
//! line context; the engines never see it.

use crate::scheduler::process::{Process, ProcessId};
use log::debug;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Batch file rejection reasons
#[derive(Debug)]
pub enum LoadError {
    /// Underlying file access failure
    Io(io::Error),

    /// The file contained no process lines
    EmptyBatch,

    /// Process name is not of the form `P<digits>`
    InvalidName { line: usize, name: String },

    /// A burst or I/O field failed to parse as a non-negative integer
    InvalidField { line: usize, field: String },

    /// A process line carried no burst fields at all
    MissingBursts { line: usize },

    /// The field list ended on an I/O duration instead of a burst
    TrailingIo { line: usize },

    /// CPU bursts must be strictly positive
    ZeroBurst { line: usize },

    /// The same process id appeared twice
    DuplicateId { line: usize, id: ProcessId },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "batch file unreadable: {}", err),
            Self::EmptyBatch => write!(f, "batch file contains no processes"),
            Self::InvalidName { line, name } => {
                write!(f, "line {}: process name '{}' is not P<digits>", line, name)
            }
            Self::InvalidField { line, field } => {
                write!(f, "line {}: field '{}' is not a non-negative integer", line, field)
            }
            Self::MissingBursts { line } => {
                write!(f, "line {}: process has no CPU bursts", line)
            }
            Self::TrailingIo { line } => {
                write!(f, "line {}: field list ends on an I/O duration, expected a burst", line)
            }
            Self::ZeroBurst { line } => {
                write!(f, "line {}: CPU bursts must be strictly positive", line)
            }
            Self::DuplicateId { line, id } => {
                write!(f, "line {}: duplicate process id P{}", line, id)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Read and parse a batch file
pub fn load_batch(path: &Path) -> Result<Vec<Process>, LoadError> {
    let text = fs::read_to_string(path)?;
    parse_batch(&text)
}

/// Parse batch text into validated process records
pub fn parse_batch(text: &str) -> Result<Vec<Process>, LoadError> {
    let mut seen: HashSet<ProcessId> = HashSet::new();
    let mut batch = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }

        let mut fields = trimmed.split(',').map(str::trim);
        // split always yields at least one element
        let name = fields.next().unwrap_or_default();
        let id = parse_name(name, line)?;

        let mut bursts = Vec::new();
        let mut io_times = Vec::new();
        for (i, field) in fields.enumerate() {
            let value: u32 = field.parse().map_err(|_| LoadError::InvalidField {
                line,
                field: field.to_string(),
            })?;
            if i % 2 == 0 {
                bursts.push(value);
            } else {
                io_times.push(value);
            }
        }

        if bursts.is_empty() {
            return Err(LoadError::MissingBursts { line });
        }
        if io_times.len() == bursts.len() {
            return Err(LoadError::TrailingIo { line });
        }
        if bursts.contains(&0) {
            return Err(LoadError::ZeroBurst { line });
        }
        if !seen.insert(id) {
            return Err(LoadError::DuplicateId { line, id });
        }

        batch.push(Process::new(id, bursts, io_times));
    }

    if batch.is_empty() {
        return Err(LoadError::EmptyBatch);
    }
    debug!("[LOAD] parsed {} processes", batch.len());
    Ok(batch)
}

fn parse_name(name: &str, line: usize) -> Result<ProcessId, LoadError> {
    name.strip_prefix('P')
        .and_then(|digits| digits.parse().ok())
        .ok_or_else(|| LoadError::InvalidName {
            line,
            name: name.to_string(),
        })
}
