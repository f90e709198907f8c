mod execution_mode;
use std::{
    collections::BTreeMap,
    fmt,
    hash::{Hash, Hasher},
    path::{Path, PathBuf},
    time::Duration,
};

use log::info;

pub use execution_mode::ExecutionMode;

use crate::{error::InvalidArgument, params::MultiParams, utils::duration::parse_duration};

pub const INPUT_KEY: &str = "input";
pub const OUTPUT_KEY: &str = "output";
pub const DISCOVERY_INTERVAL_KEY: &str = "discovery-interval";
pub const EXECUTION_MODE_KEY: &str = "execution-mode";

/// What a job execution system needs from its global parameters: a flat,
/// string-keyed view.
pub trait GlobalJobParameters {
    fn to_map(&self) -> BTreeMap<String, String>;
}

/// The validated invocation parameters of a data-processing job.
///
/// Built once from the argument vector and never mutated. Equality and
/// hashing only consider `inputs`, `output` and `discovery_interval`; the
/// execution mode and the raw table are ignored.
#[derive(Debug, Clone)]
pub struct ArgConfig {
    inputs: Option<Vec<PathBuf>>,
    output: Option<PathBuf>,
    discovery_interval: Option<Duration>,
    execution_mode: ExecutionMode,
    params: MultiParams,
}

impl ArgConfig {
    /// Parse `--key value` arguments, without the program name.
    ///
    /// Absent keys fall back to defaults. Malformed values for recognized
    /// keys are errors.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self, InvalidArgument> {
        let params = MultiParams::from_args(args)?;

        let inputs = match params.get_multi(INPUT_KEY)? {
            Some(inputs) => Some(inputs.into_iter().map(PathBuf::from).collect()),
            None => {
                info!("Executing example with default input data.");
                info!("Use --input to specify file input.");
                None
            }
        };

        let output = params.get(OUTPUT_KEY)?.map(PathBuf::from);
        if output.is_none() {
            info!("Printing result to stdout. Use --output to specify output path.");
        }

        let discovery_interval = params
            .get(DISCOVERY_INTERVAL_KEY)?
            .map(|text| {
                parse_duration(text).map_err(|source| InvalidArgument::MalformedDuration {
                    key: DISCOVERY_INTERVAL_KEY.to_owned(),
                    value: text.to_owned(),
                    source,
                })
            })
            .transpose()?;

        let execution_mode = params
            .get(EXECUTION_MODE_KEY)?
            .map(str::parse::<ExecutionMode>)
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            inputs,
            output,
            discovery_interval,
            execution_mode,
            params,
        })
    }

    /// `None` means the job should use its built-in inputs.
    pub fn inputs(&self) -> Option<&[PathBuf]> {
        self.inputs.as_deref()
    }

    /// `None` means results are printed instead of written.
    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    /// `None` means input discovery runs once.
    pub fn discovery_interval(&self) -> Option<Duration> {
        self.discovery_interval
    }

    pub fn execution_mode(&self) -> ExecutionMode {
        self.execution_mode
    }

    /// Read an arbitrary key from the raw table as an integer.
    pub fn get_int(&self, key: &str) -> Result<Option<i32>, InvalidArgument> {
        self.params
            .get(key)?
            .map(|value| {
                value
                    .parse::<i32>()
                    .map_err(|source| InvalidArgument::MalformedInteger {
                        key: key.to_owned(),
                        value: value.to_owned(),
                        source,
                    })
            })
            .transpose()
    }

    pub fn params(&self) -> &MultiParams {
        &self.params
    }
}

impl GlobalJobParameters for ArgConfig {
    fn to_map(&self) -> BTreeMap<String, String> {
        self.params.to_map()
    }
}

impl PartialEq for ArgConfig {
    fn eq(&self, other: &Self) -> bool {
        self.inputs == other.inputs
            && self.output == other.output
            && self.discovery_interval == other.discovery_interval
    }
}

impl Eq for ArgConfig {}

impl Hash for ArgConfig {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inputs.hash(state);
        self.output.hash(state);
        self.discovery_interval.hash(state);
    }
}

impl fmt::Display for ArgConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inputs {
            Some(inputs) => {
                let inputs: Vec<_> = inputs.iter().map(|p| p.display().to_string()).collect();
                writeln!(f, "inputs: {}", inputs.join(", "))?;
            }
            None => writeln!(f, "inputs: <default>")?,
        }
        match &self.output {
            Some(output) => writeln!(f, "output: {}", output.display())?,
            None => writeln!(f, "output: <stdout>")?,
        }
        match self.discovery_interval {
            Some(interval) => writeln!(
                f,
                "discovery interval: {}",
                humantime::format_duration(interval)
            )?,
            None => writeln!(f, "discovery interval: <once>")?,
        }
        write!(f, "execution mode: {}", self.execution_mode)
    }
}
