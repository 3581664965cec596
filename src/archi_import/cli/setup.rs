use archi_import::model::ELEMENTS_FILE_NAME;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "archi-import", bin_name = "archi-import", version = env!("ARCHI_IMPORT_VERSION"))]
#[command(
    about = "Import a list as archi elements",
    long_about = "Creates an elements.csv file to be used by archi to populate elements.",
    after_help = "The output must be an existing directory or a path ending in 'elements.csv'."
)]
pub struct Cli {
    /// The type of the specified elements (e.g. "Application Component")
    #[arg(value_name = "TYPE")]
    pub element_type: String,

    /// The input file containing a list of element names, one per line
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file or existing directory
    #[arg(short, long, value_name = "PATH", default_value = ELEMENTS_FILE_NAME)]
    pub output: PathBuf,

    /// Specialization applied to every element
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    pub specialization: String,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Strip the line ending from each name
    #[arg(short, long)]
    pub trim: bool,
}
