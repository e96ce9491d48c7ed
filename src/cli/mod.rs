//! Command Line Interface (CLI) layer for picstitch.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that wires user-provided
//! options to the underlying library functionality.
//!
//! If you are embedding picstitch into another application, prefer using
//! the high-level `picstitch::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
