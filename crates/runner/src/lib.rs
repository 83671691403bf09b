//! Stalk Runner - command-line front end
//!
//! - **cli**: argument parsing and watch-line parsing
//! - **config**: JSON runner configuration with defaults
//! - **session**: engine + optional sampler, one report per recompute
//! - **report**: table / JSON rendering
//! - **watch**: debounced recompute loop over stdin
//!
//! ```text
//!  stdin lines ──► reader task ──► mpsc ──► debounce ──► Session ──► Report
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod session;
pub mod watch;

// Re-export main types
pub use cli::{Command, USAGE, parse_args, parse_watch_line};
pub use config::{OutputFormat, RunnerConfig};
pub use error::{Result, RunnerError};
pub use report::Report;
pub use session::Session;
pub use watch::{debounce, watch};
