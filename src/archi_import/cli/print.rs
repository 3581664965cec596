use archi_import::api::{CmdMessage, MessageLevel, Reporter};
use colored::Colorize;

/// Prints every message to stdout as soon as it arrives.
pub(super) struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&mut self, message: CmdMessage) {
        print_message(&message);
    }
}

fn print_message(message: &CmdMessage) {
    match message.level {
        MessageLevel::Info => println!("{}", message.content.dimmed()),
        MessageLevel::Success => println!("{}", message.content.green()),
        MessageLevel::Warning => println!("{}", message.content.yellow()),
    }
}
