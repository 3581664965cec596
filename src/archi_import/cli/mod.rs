//! # CLI Layer
//!
//! This is **one possible client** of the archi-import library, and the only
//! place that knows about terminal output.
//!
//! - `setup.rs`: clap argument definitions and version string
//! - `commands.rs`: turns parsed arguments into `ImportOptions` and runs the import
//! - `print.rs`: the console reporter used for `--verbose`

mod commands;
mod print;
mod setup;

pub use commands::run;
