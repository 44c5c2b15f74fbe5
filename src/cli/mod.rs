//! Command Line Interface (CLI) layer for imgscale.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for single-file and batch
//! scaling flows. It wires user-provided options to the underlying
//! library functionality exposed via `imgscale::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
