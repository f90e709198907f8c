//! Typed, immutable invocation parameters for a data-processing job.
//!
//! ```
//! use jobargs::{ArgConfig, ExecutionMode};
//!
//! let config = ArgConfig::parse(&["--input", "a.csv", "--execution-mode", "batch"]).unwrap();
//! assert_eq!(ExecutionMode::Batch, config.execution_mode());
//! assert_eq!(None, config.output());
//! ```
pub mod config;
pub mod error;
pub mod lexer;
pub mod params;
mod utils;

pub use config::{ArgConfig, ExecutionMode, GlobalJobParameters};
pub use error::InvalidArgument;
pub use lexer::{Param, Tokenizer};
pub use params::MultiParams;
