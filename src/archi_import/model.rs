use serde::Serialize;
use std::path::PathBuf;

/// The only file name Archi's CSV importer picks up for elements.
pub const ELEMENTS_FILE_NAME: &str = "elements.csv";

/// One row of an Archi `elements.csv` file.
///
/// `id` and `documentation` are always left empty so Archi assigns fresh
/// identifiers on import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementRecord<'a> {
    #[serde(rename = "ID")]
    pub id: &'a str,
    #[serde(rename = "Type")]
    pub element_type: &'a str,
    #[serde(rename = "Name")]
    pub name: &'a str,
    #[serde(rename = "Documentation")]
    pub documentation: &'a str,
    #[serde(rename = "Specialization")]
    pub specialization: &'a str,
}

impl<'a> ElementRecord<'a> {
    pub const HEADERS: [&'static str; 5] =
        ["ID", "Type", "Name", "Documentation", "Specialization"];

    pub fn new(element_type: &'a str, name: &'a str, specialization: &'a str) -> Self {
        Self {
            id: "",
            element_type,
            name,
            documentation: "",
            specialization,
        }
    }
}

/// Everything one import run needs, independent of how it was collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOptions {
    /// ArchiMate element type written into every record, e.g. "Application Component"
    pub element_type: String,
    /// Text file with one element name per line
    pub input: PathBuf,
    /// Requested output; an existing directory or a path ending in `elements.csv`
    pub output: PathBuf,
    pub specialization: String,
    /// Strip the line terminator from each name before conversion
    pub trim: bool,
}

impl ImportOptions {
    pub fn new(element_type: impl Into<String>, input: impl Into<PathBuf>) -> Self {
        Self {
            element_type: element_type.into(),
            input: input.into(),
            output: PathBuf::from(ELEMENTS_FILE_NAME),
            specialization: String::new(),
            trim: false,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_specialization(mut self, specialization: impl Into<String>) -> Self {
        self.specialization = specialization.into();
        self
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}

/// What a finished import produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOutcome {
    pub output: PathBuf,
    pub records: usize,
    pub bytes_written: usize,
}
