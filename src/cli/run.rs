use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{extract::extract, init::init, lookup::lookup},
    exit_status::ExitStatus,
};

/// Dispatches to the appropriate command handler based on the parsed arguments.
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Init) => init(),
        Some(Command::Lookup(cmd)) => lookup(cmd),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
