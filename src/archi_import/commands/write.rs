use crate::commands::{CmdMessage, Reporter};
use crate::error::{ArchiError, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Writes `csv` to `path` and returns the number of bytes written.
///
/// An existing file is truncated in place: symlinks are followed and the
/// file keeps its mode and owner. A read-only file is an error.
pub fn run(csv: &str, path: &Path, reporter: &mut dyn Reporter) -> Result<usize> {
    reporter.report(CmdMessage::info(format!(
        "Writing csv to {}...",
        path.display()
    )));

    let write_error = |source: io::Error| ArchiError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(write_error)?;
    file.write_all(csv.as_bytes()).map_err(write_error)?;
    file.flush().map_err(write_error)?;

    let bytes_written = csv.len();
    reporter.report(CmdMessage::success(format!(
        "Wrote {} bytes to {}!",
        bytes_written,
        path.display()
    )));
    Ok(bytes_written)
}
