//! # archi-import CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, this file only
//! calls `cli::run()` and turns an error into a message and exit status.
//!
//! Usage errors (missing positionals, unknown flags) are reported by clap
//! itself, which exits with its usage status before any file is touched.
//! Every other failure prints `Error: <message>` to stderr and exits with 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
