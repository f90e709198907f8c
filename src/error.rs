use std::num::ParseIntError;

use humantime::DurationError;
use thiserror::Error;

/// A supplied argument does not match the format its key expects.
///
/// Absent keys are never reported through this type; they surface as `None`.
#[derive(Debug, Error, PartialEq)]
pub enum InvalidArgument {
    #[error("error parsing arguments on '{token}', please prefix keys with -- or -")]
    UnprefixedKey { token: String },

    #[error("the arguments contain an empty key")]
    EmptyKey,

    #[error("key '{key}' requires a value")]
    MissingValue { key: String },

    #[error("key '{key}' should have only one value, got {count}")]
    MultipleValues { key: String, count: usize },

    #[error("unknown execution mode '{0}', expected one of: batch, streaming, automatic")]
    UnknownExecutionMode(String),

    #[error("could not parse '{value}' for key '{key}' as a duration")]
    MalformedDuration {
        key: String,
        value: String,
        #[source]
        source: DurationError,
    },

    #[error("could not parse '{value}' for key '{key}' as an integer")]
    MalformedInteger {
        key: String,
        value: String,
        #[source]
        source: ParseIntError,
    },
}
