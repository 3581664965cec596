use crate::commands::{CmdMessage, Reporter};
use crate::error::{ArchiError, Result};
use std::fs;
use std::path::Path;

/// Reads the names file, one name per line, keeping every line as stored.
///
/// Line terminators stay attached and blank lines are kept. An empty file
/// yields no names.
pub fn run(path: &Path, reporter: &mut dyn Reporter) -> Result<Vec<String>> {
    reporter.report(CmdMessage::info(format!(
        "Reading names from {}...",
        path.display()
    )));

    let content = fs::read_to_string(path).map_err(|source| ArchiError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let names = split_lines(&content);

    if names.is_empty() {
        reporter.report(CmdMessage::warning("Found no names."));
    } else {
        reporter.report(CmdMessage::success(format!(
            "Read {} names successfully!",
            names.len()
        )));
    }
    Ok(names)
}

fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(String::from).collect()
}

/// Drops one trailing `\n` or `\r\n` from each name.
pub fn trim_line_endings(names: Vec<String>) -> Vec<String> {
    names
        .into_iter()
        .map(|mut name| {
            if name.ends_with('\n') {
                name.pop();
                if name.ends_with('\r') {
                    name.pop();
                }
            }
            name
        })
        .collect()
}
