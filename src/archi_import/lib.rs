//! # archi-import Architecture
//!
//! archi-import turns a plain-text list of names into the `elements.csv` file
//! Archi's "Import CSV" wizard reads. The conversion is a **library** with a
//! thin CLI on top, so every stage can be called and tested on its own.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints progress, handles exit codes    │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over the stages, owns the Reporter           │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - output: resolve the path to an `elements.csv` file       │
//! │  - read: load names, one per line                           │
//! │  - convert: encode names as quoted CSV                      │
//! │  - write: replace the output file with the CSV              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Pipeline
//!
//! `resolve output → read names → convert → write`. Each stage hands a plain
//! value to the next and any failure ends the run. The output path is checked
//! first so a bad `--output` never costs a read.
//!
//! ## Progress Reporting
//!
//! Stages never print. They send [`commands::CmdMessage`]s to a
//! [`commands::Reporter`]; the CLI passes a console reporter when `--verbose`
//! is set and [`commands::Silent`] otherwise. Messages never influence what a
//! stage returns.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: The pipeline stages and the reporting types
//! - [`model`]: `ElementRecord`, `ImportOptions`, `ImportOutcome`
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
