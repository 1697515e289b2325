//! # Command-Line Interface
//!
//! Argument parsing and output formatting for the `shapesum` binary.
//!
//! ## Flags
//!
//! | Flag | Purpose | Default |
//! |------|---------|---------|
//! | `--file`, `-f` | Input JSON file (required) | - |
//! | `--output` | Artifact file for the total-area line | `area.txt` |
//! | `--format` | Output format (`text` or `json`) | `text` |
//! | `--verbose`, `-v` | Debug output on stderr | off |
//!
//! ## Exit Codes
//!
//! - `0` - run completed, even if individual records were skipped
//! - `1` - input file unreadable, or not a JSON array of records
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute.

mod app;
mod output;

pub use app::{run, Cli};
pub use output::{Output, OutputFormat};
