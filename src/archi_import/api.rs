//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for import operations, whichever UI drives them.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the stage functions in `commands/*.rs`
//! - **Owns the reporter** every stage reports progress to
//! - **Returns structured types** (`Result<ImportOutcome>`, `Result<String>`, ...)
//!
//! It does no printing and holds no state besides the reporter, so each
//! stage can also be called on its own.
//!
//! ## Generic Over Reporter
//!
//! `ImportApi<R: Reporter>` is generic over where progress goes:
//! - CLI, verbose: a console reporter living in the binary
//! - CLI, quiet: [`Silent`](crate::commands::Silent)
//! - Testing: [`MessageLog`](crate::commands::MessageLog)

use crate::commands;
use crate::error::Result;
use crate::model::{ImportOptions, ImportOutcome};
use std::path::{Path, PathBuf};

pub use crate::commands::{CmdMessage, MessageLevel, MessageLog, Reporter, Silent};

pub struct ImportApi<R: Reporter> {
    reporter: R,
}

impl<R: Reporter> ImportApi<R> {
    pub fn new(reporter: R) -> Self {
        Self { reporter }
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    pub fn resolve_output(&mut self, requested: &Path) -> Result<PathBuf> {
        commands::output::run(requested, &mut self.reporter)
    }

    pub fn read_names(&mut self, input: &Path) -> Result<Vec<String>> {
        commands::read::run(input, &mut self.reporter)
    }

    pub fn convert(
        &mut self,
        names: &[String],
        element_type: &str,
        specialization: &str,
    ) -> Result<String> {
        commands::convert::run(names, element_type, specialization, &mut self.reporter)
    }

    pub fn write(&mut self, csv: &str, output: &Path) -> Result<usize> {
        commands::write::run(csv, output, &mut self.reporter)
    }

    /// Runs the whole pipeline: resolve output, read, convert, write.
    ///
    /// The output path is checked before the input is opened, and nothing
    /// is written unless every earlier stage succeeded.
    pub fn import(&mut self, options: &ImportOptions) -> Result<ImportOutcome> {
        self.reporter.report(CmdMessage::info("Starting..."));

        let output = self.resolve_output(&options.output)?;
        let mut names = self.read_names(&options.input)?;
        if options.trim {
            names = commands::read::trim_line_endings(names);
        }
        let csv = self.convert(&names, &options.element_type, &options.specialization)?;
        let bytes_written = self.write(&csv, &output)?;

        self.reporter.report(CmdMessage::success("Finished!"));
        Ok(ImportOutcome {
            output,
            records: names.len(),
            bytes_written,
        })
    }
}
