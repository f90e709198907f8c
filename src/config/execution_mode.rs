use std::{fmt, str::FromStr};

use crate::error::InvalidArgument;

/// Whether the consuming job runs bounded, unbounded, or decides from its
/// sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExecutionMode {
    Batch,
    #[default]
    Streaming,
    Automatic,
}

impl ExecutionMode {
    pub const ALL: [ExecutionMode; 3] = [
        ExecutionMode::Batch,
        ExecutionMode::Streaming,
        ExecutionMode::Automatic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ExecutionMode::Batch => "BATCH",
            ExecutionMode::Streaming => "STREAMING",
            ExecutionMode::Automatic => "AUTOMATIC",
        }
    }
}

impl FromStr for ExecutionMode {
    type Err = InvalidArgument;

    /// Case-insensitive on the variant name. Surrounding whitespace is not
    /// ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| InvalidArgument::UnknownExecutionMode(s.to_owned()))
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
