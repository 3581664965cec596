use crate::commands::{CmdMessage, Reporter};
use crate::error::{ArchiError, Result};
use crate::model::ELEMENTS_FILE_NAME;
use std::path::{is_separator, Path, PathBuf};

/// Resolves the requested output into a path whose file name is `elements.csv`.
///
/// An existing directory gets `elements.csv` appended. Anything else must
/// already name an `elements.csv` file, otherwise the run is rejected before
/// any file is touched.
pub fn run(requested: &Path, reporter: &mut dyn Reporter) -> Result<PathBuf> {
    if requested.is_dir() {
        let resolved = requested.join(ELEMENTS_FILE_NAME);
        reporter.report(CmdMessage::info(format!(
            "{} is a directory, writing to {}",
            requested.display(),
            resolved.display()
        )));
        return Ok(resolved);
    }

    if names_elements_file(requested) {
        return Ok(requested.to_path_buf());
    }

    Err(ArchiError::InvalidOutput(requested.to_path_buf()))
}

fn names_elements_file(path: &Path) -> bool {
    // `Path::file_name` ignores a trailing separator, "elements.csv/" is a directory name.
    let ends_with_separator = path
        .to_string_lossy()
        .chars()
        .last()
        .is_some_and(is_separator);

    !ends_with_separator
        && path
            .file_name()
            .is_some_and(|name| name == ELEMENTS_FILE_NAME)
}
